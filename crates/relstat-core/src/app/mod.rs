//! Application logic: stylesheet injection and the annotate orchestrator.

pub mod annotator;
pub mod style;

pub use self::annotator::{Annotator, MEDIA_OVERVIEW_ROUTE, RELATIONS_SELECTOR};
pub use self::style::{STYLE, STYLE_MARKER, inject_style};
