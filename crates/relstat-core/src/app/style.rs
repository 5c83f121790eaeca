//! Stylesheet injection for the status indicators.

use tracing::debug;

use crate::ports::dom::DomSurface;

/// Marker attribute identifying our stylesheet node. Its presence is the
/// injection guard.
pub const STYLE_MARKER: &str = "data-relation-style";

/// Indicator styling. Status colors mirror the host's palette variables;
/// the host scopes its own rules into components, so they cannot be reused
/// directly.
pub const STYLE: &str = "
    .list-status {
      display: inline-block;
      height: 12px;
      width: 12px;
    }

    .image-text .list-status {
      height: 6px;
      width: 6px;
      margin-right: 4px;
      margin-bottom: 2px;
    }

    .list-status[status=\"CURRENT\"],
    .list-status[status=\"REPEATING\"] {
      background-color: rgb(var(--color-blue));
    }

    .list-status[status=\"COMPLETED\"] {
      background-color: rgb(var(--color-green));
    }

    .list-status[status=\"PLANNING\"] {
      background-color: rgb(var(--color-orange));
    }

    .list-status[status=\"PAUSED\"] {
      background-color: rgb(var(--color-peach));
    }

    .list-status[status=\"DROPPED\"] {
      background-color: rgb(var(--color-red));
    }
";

/// Append the stylesheet to the document head, at most once per page
/// lifetime. Idempotent: a node carrying [`STYLE_MARKER`] short-circuits.
pub fn inject_style(dom: &dyn DomSurface) {
    if dom.query(&format!("style[{STYLE_MARKER}]")).is_some() {
        return;
    }

    let style = dom.create_element("style");
    dom.set_attribute(style, STYLE_MARKER, "true");
    dom.set_text(style, STYLE);
    dom.append_to_head(style);
    debug!("stylesheet attached to head");
}
