//! HTML attribute names.
//!
//! ```
//! use elemkit::{attrs, bumpalo::Bump, builder::Builder};
//!
//! let bump = Bump::new();
//! let b = Builder::new(&bump);
//! let field = b.input([
//!     b.attr((attrs::TYPE, "checkbox")),
//!     b.attr((attrs::CHECKED, true)),
//!     b.attr((attrs::data_attr("id").as_str(), "7")),
//! ]);
//! assert_eq!(field.render(), r#"<input checked data-id="7" type="checkbox">"#);
//! ```

#![allow(missing_docs)]

// Universal
pub const ACCESSKEY: &str = "accesskey";
pub const CLASS: &str = "class";
pub const CONTENTEDITABLE: &str = "contenteditable";
pub const DIR: &str = "dir";
pub const HIDDEN: &str = "hidden";
pub const ID: &str = "id";
pub const LANG: &str = "lang";
pub const LOADING: &str = "loading";
pub const ROLE: &str = "role";
pub const SPELLCHECK: &str = "spellcheck";
pub const STYLE: &str = "style";
pub const TABINDEX: &str = "tabindex";
pub const TITLE: &str = "title";
pub const DRAGGABLE: &str = "draggable";
pub const INERT: &str = "inert";

// Links and scripts
pub const ASYNC: &str = "async";
pub const CROSSORIGIN: &str = "crossorigin";
pub const DEFER: &str = "defer";
pub const DOWNLOAD: &str = "download";
pub const HREF: &str = "href";
pub const INTEGRITY: &str = "integrity";
pub const NOMODULE: &str = "nomodule";
pub const REFERRERPOLICY: &str = "referrerpolicy";
pub const REL: &str = "rel";
pub const SRC: &str = "src";
pub const TARGET: &str = "target";

// Meta
pub const CHARSET: &str = "charset";
pub const CONTENT: &str = "content";
pub const HTTP_EQUIV: &str = "http-equiv";
pub const NAME: &str = "name";

// Images and embeds
pub const ALT: &str = "alt";
pub const HEIGHT: &str = "height";
pub const ISMAP: &str = "ismap";
pub const MEDIA: &str = "media";
pub const SIZES: &str = "sizes";
pub const SRCSET: &str = "srcset";
pub const USEMAP: &str = "usemap";
pub const WIDTH: &str = "width";

// Semantic text
pub const CITE: &str = "cite";
pub const DATETIME: &str = "datetime";

// Forms
pub const ACCEPT: &str = "accept";
pub const ACTION: &str = "action";
pub const AUTOCAPITALIZE: &str = "autocapitalize";
pub const AUTOCOMPLETE: &str = "autocomplete";
pub const AUTOFOCUS: &str = "autofocus";
pub const CHECKED: &str = "checked";
pub const COLS: &str = "cols";
pub const DISABLED: &str = "disabled";
pub const ENCTYPE: &str = "enctype";
pub const FOR: &str = "for";
pub const FORM: &str = "form";
pub const FORMNOVALIDATE: &str = "formnovalidate";
pub const HIGH: &str = "high";
pub const LIST: &str = "list";
pub const LOW: &str = "low";
pub const MAX: &str = "max";
pub const MAXLENGTH: &str = "maxlength";
pub const METHOD: &str = "method";
pub const MIN: &str = "min";
pub const MINLENGTH: &str = "minlength";
pub const MULTIPLE: &str = "multiple";
pub const NOVALIDATE: &str = "novalidate";
pub const OPTIMUM: &str = "optimum";
pub const PATTERN: &str = "pattern";
pub const PLACEHOLDER: &str = "placeholder";
pub const READONLY: &str = "readonly";
pub const REQUIRED: &str = "required";
pub const ROWS: &str = "rows";
pub const SELECTED: &str = "selected";
pub const STEP: &str = "step";
pub const TYPE: &str = "type";
pub const VALUE: &str = "value";

// Interactive
pub const OPEN: &str = "open";

// Tables
pub const COLSPAN: &str = "colspan";
pub const HEADERS: &str = "headers";
pub const ROWSPAN: &str = "rowspan";
pub const SCOPE: &str = "scope";

// Iframes
pub const ALLOW: &str = "allow";
pub const ALLOWFULLSCREEN: &str = "allowfullscreen";
pub const CSP: &str = "csp";
pub const SANDBOX: &str = "sandbox";
pub const SRCDOC: &str = "srcdoc";

// Audio and video
pub const AUTOPLAY: &str = "autoplay";
pub const CONTROLS: &str = "controls";
pub const LOOP: &str = "loop";
pub const MUTED: &str = "muted";
pub const PLAYSINLINE: &str = "playsinline";
pub const POSTER: &str = "poster";
pub const PRELOAD: &str = "preload";

/// Prefix of custom data attributes.
pub const DATA_PREFIX: &str = "data-";

/// The name of the custom data attribute `data-<name>`.
pub fn data_attr(name: &str) -> String {
    format!("{DATA_PREFIX}{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_attr_adds_prefix() {
        assert_eq!(data_attr("user-id"), "data-user-id");
    }
}
