//! CSS property names, for use as [crate::Style] keys.

#![allow(missing_docs)]

// Box model
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const MIN_WIDTH: &str = "min-width";
pub const MIN_HEIGHT: &str = "min-height";
pub const MAX_WIDTH: &str = "max-width";
pub const MAX_HEIGHT: &str = "max-height";
pub const MARGIN: &str = "margin";
pub const MARGIN_TOP: &str = "margin-top";
pub const MARGIN_RIGHT: &str = "margin-right";
pub const MARGIN_BOTTOM: &str = "margin-bottom";
pub const MARGIN_LEFT: &str = "margin-left";
pub const PADDING: &str = "padding";
pub const PADDING_TOP: &str = "padding-top";
pub const PADDING_RIGHT: &str = "padding-right";
pub const PADDING_BOTTOM: &str = "padding-bottom";
pub const PADDING_LEFT: &str = "padding-left";
pub const BORDER: &str = "border";
pub const BORDER_RADIUS: &str = "border-radius";
pub const BORDER_COLOR: &str = "border-color";
pub const BORDER_WIDTH: &str = "border-width";
pub const BORDER_STYLE: &str = "border-style";
pub const BOX_SIZING: &str = "box-sizing";
pub const BOX_SHADOW: &str = "box-shadow";
pub const OUTLINE: &str = "outline";

// Colours and backgrounds
pub const COLOR: &str = "color";
pub const BACKGROUND: &str = "background";
pub const BACKGROUND_COLOR: &str = "background-color";
pub const BACKGROUND_IMAGE: &str = "background-image";
pub const BACKGROUND_SIZE: &str = "background-size";
pub const BACKGROUND_POSITION: &str = "background-position";
pub const BACKGROUND_REPEAT: &str = "background-repeat";
pub const OPACITY: &str = "opacity";

// Typography
pub const FONT_FAMILY: &str = "font-family";
pub const FONT_SIZE: &str = "font-size";
pub const FONT_WEIGHT: &str = "font-weight";
pub const FONT_STYLE: &str = "font-style";
pub const LINE_HEIGHT: &str = "line-height";
pub const LETTER_SPACING: &str = "letter-spacing";
pub const TEXT_ALIGN: &str = "text-align";
pub const TEXT_DECORATION: &str = "text-decoration";
pub const TEXT_TRANSFORM: &str = "text-transform";
pub const WHITE_SPACE: &str = "white-space";

// Lists
pub const LIST_STYLE: &str = "list-style";
pub const LIST_STYLE_TYPE: &str = "list-style-type";

// Layout
pub const DISPLAY: &str = "display";
pub const POSITION: &str = "position";
pub const TOP: &str = "top";
pub const RIGHT: &str = "right";
pub const BOTTOM: &str = "bottom";
pub const LEFT: &str = "left";
pub const Z_INDEX: &str = "z-index";
pub const OVERFLOW: &str = "overflow";
pub const FLOAT: &str = "float";
pub const VISIBILITY: &str = "visibility";

// Flexbox and grid
pub const FLEX: &str = "flex";
pub const FLEX_DIRECTION: &str = "flex-direction";
pub const FLEX_WRAP: &str = "flex-wrap";
pub const JUSTIFY_CONTENT: &str = "justify-content";
pub const ALIGN_ITEMS: &str = "align-items";
pub const ALIGN_SELF: &str = "align-self";
pub const GAP: &str = "gap";
pub const GRID_TEMPLATE_COLUMNS: &str = "grid-template-columns";
pub const GRID_TEMPLATE_ROWS: &str = "grid-template-rows";

// Interaction
pub const CURSOR: &str = "cursor";
pub const POINTER_EVENTS: &str = "pointer-events";
pub const USER_SELECT: &str = "user-select";

// Transforms, transitions and animation
pub const TRANSFORM: &str = "transform";
pub const TRANSITION: &str = "transition";
pub const ANIMATION: &str = "animation";
pub const ANIMATION_NAME: &str = "animation-name";
pub const ANIMATION_DURATION: &str = "animation-duration";
pub const ANIMATION_TIMING_FUNCTION: &str = "animation-timing-function";
pub const ANIMATION_DELAY: &str = "animation-delay";
pub const ANIMATION_ITERATION_COUNT: &str = "animation-iteration-count";
pub const ANIMATION_DIRECTION: &str = "animation-direction";
pub const ANIMATION_FILL_MODE: &str = "animation-fill-mode";

// Generated content
pub const CONTENT: &str = "content";
