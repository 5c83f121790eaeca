//! Host bindings port - the reach-into-framework adapter.
//!
//! The host framework attaches a component instance to certain DOM nodes at
//! an unpredictable point after mount, with no event for it. These traits
//! are the only place that knows about that private-by-convention surface;
//! if the host changes it, only the adapter implementation moves.

use std::sync::Arc;

use crate::domain::EntityHandle;
use crate::ports::dom::NodeId;

/// Lookup of the framework instance mounted on a node.
pub trait HostBindings: Send + Sync {
    /// `None` until the framework has attached its instance (possibly
    /// forever). Callers poll; there is no DOM-level signal for this.
    fn instance(&self, node: NodeId) -> Option<Arc<dyn ComponentInstance>>;
}

/// The slice of a framework component instance we depend on.
pub trait ComponentInstance: Send + Sync {
    /// The client-side router, present on the application root instance.
    fn router(&self) -> Option<Arc<dyn HostRouter>>;

    /// Child entities of a relations container instance. Empty for
    /// instances that have no such children.
    fn children(&self) -> Vec<EntityHandle>;
}

/// A completed client-side route transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteChange {
    pub name: String,
}

impl RouteChange {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Callback invoked after every completed navigation.
pub type RouteCallback = Arc<dyn Fn(&RouteChange) + Send + Sync>;

/// The host router's hook surface.
pub trait HostRouter: Send + Sync {
    /// Register `callback` to run after every completed navigation.
    /// Registrations live for the page lifetime; there is no unregister.
    fn after_each(&self, callback: RouteCallback);
}
