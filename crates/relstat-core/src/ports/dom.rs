//! DomSurface port - abstraction over the host page's DOM.
//!
//! The host owns the document and mutates it whenever its framework
//! re-renders. We get no callbacks for that; the only signal is the
//! mutation-generation channel, the analogue of a subtree mutation
//! observer. Everything else is plain query/mutate.

use tokio::sync::watch;

/// Opaque handle to one node in the host document.
///
/// Handles stay valid for the page lifetime even if the host detaches the
/// node; querying under a detached node just yields nothing.
pub type NodeId = u64;

/// Narrow view of the host DOM.
///
/// Queries use the small selector grammar this system actually needs:
/// `tag` / `#id` / `.class` / `[attr]` / `[attr=value]` compounds, plus a
/// single `>` child combinator. Mutating methods on unknown handles are
/// no-ops.
pub trait DomSurface: Send + Sync {
    /// First match in document order, searching the whole document.
    fn query(&self, selector: &str) -> Option<NodeId>;

    /// All matches in document order among the descendants of `root`
    /// (`root` itself is never returned).
    fn query_all(&self, root: NodeId, selector: &str) -> Vec<NodeId>;

    /// Create a detached element.
    fn create_element(&self, tag: &str) -> NodeId;

    fn set_attribute(&self, node: NodeId, name: &str, value: &str);

    fn add_class(&self, node: NodeId, class: &str);

    fn set_text(&self, node: NodeId, text: &str);

    /// Insert `child` as the first child of `parent`.
    fn prepend(&self, parent: NodeId, child: NodeId);

    /// Append `node` to the document head.
    fn append_to_head(&self, node: NodeId);

    /// Mutation-generation subscription. The value increments on every
    /// mutation batch; receivers re-query after each change. This is the
    /// MutationObserver of this port: presence of an element is detectable,
    /// framework-internal state attached to it is not (see the host port).
    fn mutations(&self) -> watch::Receiver<u64>;
}
