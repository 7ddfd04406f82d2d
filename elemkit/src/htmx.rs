//! [htmx](https://htmx.org/reference/) attribute names.

#![allow(missing_docs)]

// Requests
pub const HX_GET: &str = "hx-get";
pub const HX_POST: &str = "hx-post";
pub const HX_PUT: &str = "hx-put";
pub const HX_DELETE: &str = "hx-delete";
pub const HX_PATCH: &str = "hx-patch";

// Request data and control
pub const HX_HEADERS: &str = "hx-headers";
pub const HX_INCLUDE: &str = "hx-include";
pub const HX_PARAMS: &str = "hx-params";
pub const HX_REQUEST: &str = "hx-request";
pub const HX_SYNC: &str = "hx-sync";
pub const HX_VALIDATE: &str = "hx-validate";
pub const HX_VALS: &str = "hx-vals";
pub const HX_ENCODING: &str = "hx-encoding";

// Response handling
pub const HX_SWAP: &str = "hx-swap";
pub const HX_SWAP_OOB: &str = "hx-swap-oob";
pub const HX_TARGET: &str = "hx-target";
pub const HX_SELECT: &str = "hx-select";
pub const HX_SELECT_OOB: &str = "hx-select-oob";
pub const HX_PRESERVE: &str = "hx-preserve";

// Events and interaction
pub const HX_TRIGGER: &str = "hx-trigger";
pub const HX_CONFIRM: &str = "hx-confirm";
pub const HX_PROMPT: &str = "hx-prompt";
pub const HX_INDICATOR: &str = "hx-indicator";
pub const HX_DISABLED_ELT: &str = "hx-disabled-elt";

// History
pub const HX_BOOST: &str = "hx-boost";
pub const HX_PUSH_URL: &str = "hx-push-url";
pub const HX_REPLACE_URL: &str = "hx-replace-url";
pub const HX_HISTORY: &str = "hx-history";
pub const HX_HISTORY_ELT: &str = "hx-history-elt";

// Configuration
pub const HX_DISABLE: &str = "hx-disable";
pub const HX_DISINHERIT: &str = "hx-disinherit";
pub const HX_INHERIT: &str = "hx-inherit";
pub const HX_EXT: &str = "hx-ext";

/// Prefix of `hx-on` event handler attributes.
pub const HX_ON_PREFIX: &str = "hx-on--";

// Common htmx events
pub const HX_ON_AFTER_REQUEST: &str = "hx-on--after-request";
pub const HX_ON_AFTER_SETTLE: &str = "hx-on--after-settle";
pub const HX_ON_AFTER_SWAP: &str = "hx-on--after-swap";
pub const HX_ON_BEFORE_REQUEST: &str = "hx-on--before-request";
pub const HX_ON_BEFORE_SWAP: &str = "hx-on--before-swap";
pub const HX_ON_CONFIG_REQUEST: &str = "hx-on--config-request";
pub const HX_ON_LOAD: &str = "hx-on--load";
pub const HX_ON_RESPONSE_ERROR: &str = "hx-on--response-error";
pub const HX_ON_SEND_ERROR: &str = "hx-on--send-error";
pub const HX_ON_TIMEOUT: &str = "hx-on--timeout";

/// The `hx-on` attribute for an htmx event given in kebab case, e.g.
/// `hx_on("before-request")` is `hx-on--before-request`.
pub fn hx_on(event: &str) -> String {
    format!("{HX_ON_PREFIX}{event}")
}

/// The `hx-on:` attribute for a DOM event, e.g. `hx_on_dom("click")` is `hx-on:click`.
pub fn hx_on_dom(event: &str) -> String {
    format!("hx-on:{event}")
}
