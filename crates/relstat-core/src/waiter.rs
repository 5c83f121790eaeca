//! Readiness waiters.
//!
//! Two futures over externally-mutated state, with two detection
//! strategies:
//! - [`element_ready`]: DOM presence is an observable mutation event, so it
//!   re-queries on every mutation-generation change.
//! - [`property_ready`]: framework-internal state attached to a node emits
//!   no signal at all, so it can only be sampled on an interval.
//!
//! Both resolve with the value once the condition holds. Neither errors and
//! neither times out: if the condition never becomes true the future simply
//! never resolves, and the caller must not assume an upper bound.

use std::time::Duration;

use tracing::debug;

use crate::ports::dom::{DomSurface, NodeId};

/// Sampling interval for [`property_ready`].
pub const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Resolve with the first node matching `selector`.
///
/// If a match already exists it resolves without suspending. Otherwise it
/// subscribes to the mutation channel and re-queries after every batch,
/// dropping the subscription on resolution.
pub async fn element_ready(dom: &dyn DomSurface, selector: &str) -> NodeId {
    // Subscribe before the first query so a mutation landing in between
    // still wakes the loop.
    let mut mutations = dom.mutations();
    loop {
        if let Some(node) = dom.query(selector) {
            debug!(selector, node, "element ready");
            return node;
        }
        if mutations.changed().await.is_err() {
            // Mutation source dropped: the page is being torn down around
            // us. The contract forbids resolving without a match or
            // erroring, so park until this task is dropped too.
            std::future::pending::<()>().await;
        }
    }
}

/// Resolve with the first `Some` returned by `probe`, sampling every
/// [`POLL_INTERVAL`].
///
/// `label` names the awaited property in the per-attempt diagnostics. The
/// interval timer is dropped as soon as the probe succeeds, so no recurring
/// timer outlives the wait.
pub async fn property_ready<T, F>(label: &str, probe: F) -> T
where
    F: Fn() -> Option<T>,
{
    let mut ticker = tokio::time::interval(POLL_INTERVAL);
    loop {
        // The first tick completes immediately, so an already-set property
        // resolves on the first probe.
        ticker.tick().await;
        match probe() {
            Some(value) => {
                debug!(label, "property found");
                return value;
            }
            None => debug!(label, "property not found"),
        }
    }
}
