//! Navigation hook: run a callback after every completed client-side route
//! transition.

use std::sync::Arc;

use tracing::debug;

use crate::ports::dom::DomSurface;
use crate::ports::host::{HostBindings, RouteCallback};
use crate::waiter::{element_ready, property_ready};

/// Selector of the host application's root container.
pub const APP_SELECTOR: &str = "#app";

/// Register `callback` on the host router's after-navigation hook list.
///
/// The router is only reachable through the framework instance on the
/// application root, which itself appears asynchronously: first wait for
/// the root element, then poll for its instance, then register. This is a
/// one-time registration for the page lifetime; nothing ever unregisters
/// it (the page reload is the teardown).
pub async fn after_route_change(
    dom: &dyn DomSurface,
    host: &Arc<dyn HostBindings>,
    callback: RouteCallback,
) {
    let app = element_ready(dom, APP_SELECTOR).await;
    let instance = property_ready(APP_SELECTOR, || host.instance(app)).await;

    match instance.router() {
        Some(router) => router.after_each(callback),
        // An instance without a router leaves nothing to hook; degrade
        // silently like every other missing host surface.
        None => debug!(
            selector = APP_SELECTOR,
            "instance exposes no router, hook not registered"
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::impls::fake_dom::FakeDom;
    use crate::impls::fake_host::{FakeBindings, FakeInstance, FakeRouter};
    use crate::ports::host::RouteChange;

    #[tokio::test(start_paused = true)]
    async fn registers_once_app_and_instance_appear() {
        let dom = Arc::new(FakeDom::new());
        let bindings = Arc::new(FakeBindings::new());
        let router = Arc::new(FakeRouter::new());

        let fired = Arc::new(AtomicU32::new(0));
        let callback: RouteCallback = Arc::new({
            let fired = Arc::clone(&fired);
            move |_route| {
                fired.fetch_add(1, Ordering::Relaxed);
            }
        });

        let hook = tokio::spawn({
            let dom = Arc::clone(&dom);
            let host: Arc<dyn HostBindings> = bindings.clone();
            async move { after_route_change(dom.as_ref(), &host, callback).await }
        });

        // Host mounts the app root, and only later attaches its instance.
        tokio::time::sleep(Duration::from_millis(50)).await;
        let app = dom.create_element("div");
        dom.set_attribute(app, "id", "app");
        dom.append_to_body(app);

        tokio::time::sleep(Duration::from_millis(500)).await;
        bindings.bind(app, Arc::new(FakeInstance::with_router(router.clone())));

        tokio::time::timeout(Duration::from_secs(5), hook)
            .await
            .expect("hook registration should complete")
            .unwrap();

        router.fire(&RouteChange::new("MediaOverview"));
        assert_eq!(fired.load(Ordering::Relaxed), 1);
    }
}
