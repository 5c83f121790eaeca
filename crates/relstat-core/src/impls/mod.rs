//! Impls - port implementations.
//!
//! Development and test implementations live here alongside the one
//! production adapter:
//! - **FakeDom**: in-memory document with a minimal selector engine
//! - **FakeBindings / FakeInstance / FakeRouter**: simulated host framework
//! - **MemoryStore**: HashMap key-value store
//! - **StaticStatusApi**: fixture-table status source
//! - **GraphQlStatusApi**: reqwest client for the real query endpoint

pub mod fake_dom;
pub mod fake_host;
pub mod http_api;
pub mod memory_store;
pub mod static_api;

pub use self::fake_dom::FakeDom;
pub use self::fake_host::{FakeBindings, FakeInstance, FakeRouter};
pub use self::http_api::GraphQlStatusApi;
pub use self::memory_store::MemoryStore;
pub use self::static_api::StaticStatusApi;
