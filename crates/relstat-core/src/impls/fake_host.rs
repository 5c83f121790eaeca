//! Fake host framework: bindable component instances and a manually-fired
//! router.
//!
//! The real host attaches instances to mounted nodes at its own pace; the
//! fake reproduces that by letting the driver `bind` instances whenever it
//! likes, which is exactly what the polling waiter has to cope with.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::EntityHandle;
use crate::ports::dom::NodeId;
use crate::ports::host::{
    ComponentInstance, HostBindings, HostRouter, RouteCallback, RouteChange,
};

/// Node-to-instance map, populated by the simulated host.
#[derive(Default)]
pub struct FakeBindings {
    instances: Mutex<HashMap<NodeId, Arc<dyn ComponentInstance>>>,
}

impl FakeBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an instance to a node, as the framework would after mount.
    pub fn bind(&self, node: NodeId, instance: Arc<dyn ComponentInstance>) {
        self.instances
            .lock()
            .expect("bindings lock poisoned")
            .insert(node, instance);
    }
}

impl HostBindings for FakeBindings {
    fn instance(&self, node: NodeId) -> Option<Arc<dyn ComponentInstance>> {
        self.instances
            .lock()
            .expect("bindings lock poisoned")
            .get(&node)
            .cloned()
    }
}

/// Instance with an optional router and a fixed child list.
#[derive(Default)]
pub struct FakeInstance {
    router: Option<Arc<FakeRouter>>,
    children: Vec<EntityHandle>,
}

impl FakeInstance {
    pub fn with_router(router: Arc<FakeRouter>) -> Self {
        Self {
            router: Some(router),
            children: Vec::new(),
        }
    }

    pub fn with_children(children: Vec<EntityHandle>) -> Self {
        Self {
            router: None,
            children,
        }
    }
}

impl ComponentInstance for FakeInstance {
    fn router(&self) -> Option<Arc<dyn HostRouter>> {
        self.router
            .as_ref()
            .map(|r| Arc::clone(r) as Arc<dyn HostRouter>)
    }

    fn children(&self) -> Vec<EntityHandle> {
        self.children.clone()
    }
}

/// Router whose navigations are fired by the test/demo driver.
#[derive(Default)]
pub struct FakeRouter {
    hooks: Mutex<Vec<RouteCallback>>,
}

impl FakeRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a completed navigation: invoke every registered hook.
    pub fn fire(&self, route: &RouteChange) {
        let hooks = self.hooks.lock().expect("router lock poisoned").clone();
        for hook in hooks {
            hook(route);
        }
    }

    pub fn hook_count(&self) -> usize {
        self.hooks.lock().expect("router lock poisoned").len()
    }
}

impl HostRouter for FakeRouter {
    fn after_each(&self, callback: RouteCallback) {
        self.hooks
            .lock()
            .expect("router lock poisoned")
            .push(callback);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn fire_invokes_every_hook_with_the_route() {
        let router = FakeRouter::new();
        let seen = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let seen = Arc::clone(&seen);
            router.after_each(Arc::new(move |route| {
                assert_eq!(route.name, "MediaOverview");
                seen.fetch_add(1, Ordering::Relaxed);
            }));
        }

        router.fire(&RouteChange::new("MediaOverview"));
        assert_eq!(seen.load(Ordering::Relaxed), 2);
        assert_eq!(router.hook_count(), 2);
    }

    #[test]
    fn bindings_return_nothing_until_bound() {
        let bindings = FakeBindings::new();
        assert!(bindings.instance(7).is_none());

        bindings.bind(7, Arc::new(FakeInstance::default()));
        assert!(bindings.instance(7).is_some());
    }
}
