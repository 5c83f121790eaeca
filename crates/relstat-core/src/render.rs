//! Status renderer: builds indicator nodes and inserts them into entity
//! title nodes.

use crate::domain::{EntityHandle, ListStatus};
use crate::ports::dom::{DomSurface, NodeId};
use crate::resolve::StatusResolver;

/// Classes carried by every indicator node.
pub const INDICATOR_CLASSES: [&str; 2] = ["list-status", "circle"];

/// Structural selectors locating an entity's title/label nodes. The host
/// renders relations in two layouts; both are searched every pass.
pub const TITLE_SELECTORS: [&str; 2] = [".image-text > div", ".title"];

/// Build a detached indicator node for `status`.
///
/// Pure with respect to the page: the node is created but attached nowhere.
pub fn build_indicator(dom: &dyn DomSurface, status: ListStatus) -> NodeId {
    let node = dom.create_element("div");
    for class in INDICATOR_CLASSES {
        dom.add_class(node, class);
    }
    dom.set_attribute(node, "status", status.as_str());
    node
}

/// Resolve `entity`'s status and, if it has one, prepend a fresh indicator
/// to every matched title node under it.
///
/// A `None` status mutates nothing. Insertions are additive only: nothing
/// previously inserted is ever removed, so a second pass over a
/// still-mounted entity duplicates its indicators.
pub async fn annotate_entity(
    dom: &dyn DomSurface,
    resolver: &StatusResolver,
    entity: &EntityHandle,
) {
    let Some(status) = resolver.status_for(entity.media_id).await else {
        return;
    };

    for selector in TITLE_SELECTORS {
        for title in dom.query_all(entity.node, selector) {
            let indicator = build_indicator(dom, status);
            dom.prepend(title, indicator);
        }
    }
}
