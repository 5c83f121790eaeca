//! relstat-core
//!
//! Core of a relation-status annotator: it runs inside a page owned by
//! someone else's reactive framework, waits for that page's state to
//! become observable, fetches the viewer's per-entity list status, and
//! mutates the page to render indicators.
//!
//! # Module layout
//! - **domain**: model types (ids, statuses, session identity, entity
//!   handles, errors)
//! - **ports**: adapter traits over host-owned surfaces (DOM, framework
//!   instances/router, status query endpoint, key-value store)
//! - **waiter**: readiness futures over externally-mutated state
//!   (mutation-driven and polling)
//! - **resolve**: memoized status lookup with silent degradation
//! - **render**: indicator construction and per-entity DOM insertion
//! - **nav**: router after-navigation hook registration
//! - **app**: stylesheet injection and the annotate orchestrator
//! - **impls**: port implementations (in-memory fakes, HTTP client)

pub mod app;
pub mod domain;
pub mod impls;
pub mod nav;
pub mod ports;
pub mod render;
pub mod resolve;
pub mod waiter;

pub use self::app::{Annotator, MEDIA_OVERVIEW_ROUTE, RELATIONS_SELECTOR};
pub use self::domain::{
    AUTH_KEY, ApiError, EntityHandle, ListStatus, MediaId, SessionIdentity, ViewerId,
};
pub use self::resolve::StatusResolver;
pub use self::waiter::{POLL_INTERVAL, element_ready, property_ready};
