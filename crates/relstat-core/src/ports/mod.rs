//! Ports - abstraction layer over host-owned surfaces.
//!
//! Each trait hides one external system the injected core cannot own: the
//! page DOM, the framework's component instances and router, the remote
//! query endpoint, and the key-value store. The rest of the crate depends
//! only on these narrow contracts, so tests run against in-memory fakes
//! and a host-API change touches a single adapter.

pub mod dom;
pub mod host;
pub mod status_api;
pub mod store;

pub use self::dom::{DomSurface, NodeId};
pub use self::host::{ComponentInstance, HostBindings, HostRouter, RouteCallback, RouteChange};
pub use self::status_api::StatusApi;
pub use self::store::KeyValueStore;
