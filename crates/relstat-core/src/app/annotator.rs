//! The orchestrator: wires waiters, resolver, and renderer together.

use std::sync::Arc;

use tracing::debug;

use crate::app::style::inject_style;
use crate::domain::{AUTH_KEY, SessionIdentity};
use crate::nav::after_route_change;
use crate::ports::dom::DomSurface;
use crate::ports::host::{HostBindings, RouteCallback};
use crate::ports::{KeyValueStore, StatusApi};
use crate::render::annotate_entity;
use crate::resolve::StatusResolver;
use crate::waiter::{element_ready, property_ready};

/// Selector of the relations container on a media detail page.
pub const RELATIONS_SELECTOR: &str = ".relations";

/// Route name of the media overview view; the only route that triggers an
/// annotate pass.
pub const MEDIA_OVERVIEW_ROUTE: &str = "MediaOverview";

/// Drives annotate passes over the host page.
///
/// Owns the only shared mutable state of the system (the resolver's cache
/// and session) and reaches everything else through the injected ports.
pub struct Annotator {
    dom: Arc<dyn DomSurface>,
    host: Arc<dyn HostBindings>,
    store: Arc<dyn KeyValueStore>,
    resolver: Arc<StatusResolver>,
}

impl Annotator {
    pub fn new(
        dom: Arc<dyn DomSurface>,
        host: Arc<dyn HostBindings>,
        store: Arc<dyn KeyValueStore>,
        api: Arc<dyn StatusApi>,
    ) -> Arc<Self> {
        Arc::new(Self {
            dom,
            host,
            store,
            resolver: Arc::new(StatusResolver::new(api)),
        })
    }

    /// Initialize-once step: inject the stylesheet (idempotent) and
    /// refresh the session identity from storage.
    ///
    /// Runs again on every qualifying navigation; the style guard makes
    /// that harmless and the identity read picks up a sign-in/out that
    /// happened since the last pass.
    pub fn init(&self) {
        inject_style(self.dom.as_ref());
        let session = SessionIdentity::from_stored(self.store.get(AUTH_KEY).as_deref());
        debug!(viewer = ?session.viewer, "session identity loaded");
        self.resolver.set_session(session);
    }

    /// One annotate pass: wait for the relations container and its
    /// framework instance, then annotate every child entity.
    ///
    /// Per-entity work is spawned in child-list order and never joined:
    /// completion order is fetch-latency order, and a later pass may start
    /// while these tasks are still resolving.
    pub async fn annotate(&self) {
        let container = element_ready(self.dom.as_ref(), RELATIONS_SELECTOR).await;
        let instance = property_ready(RELATIONS_SELECTOR, {
            let host = Arc::clone(&self.host);
            move || host.instance(container)
        })
        .await;

        for entity in instance.children() {
            let dom = Arc::clone(&self.dom);
            let resolver = Arc::clone(&self.resolver);
            tokio::spawn(async move {
                annotate_entity(dom.as_ref(), &resolver, &entity).await;
            });
        }
    }

    async fn pass(self: Arc<Self>) {
        self.init();
        self.annotate().await;
    }

    /// Top-level wiring: run one pass for the already-loading page, and
    /// re-run a pass after every completed navigation to the media
    /// overview. Other routes do nothing.
    ///
    /// Resolves once the route hook is registered; the passes themselves
    /// are fire-and-forget.
    pub async fn run(self: Arc<Self>) {
        tokio::spawn(Arc::clone(&self).pass());

        let hooked = Arc::clone(&self);
        let callback: RouteCallback = Arc::new(move |route| {
            if route.name == MEDIA_OVERVIEW_ROUTE {
                tokio::spawn(Arc::clone(&hooked).pass());
            } else {
                debug!(route = %route.name, "route ignored");
            }
        });
        after_route_change(self.dom.as_ref(), &self.host, callback).await;
    }
}
