//! Demo wiring: a simulated host page driven against the annotator.
//!
//! The "host application" task mounts the app root, then the relations
//! container, each after a delay and each with its framework instance
//! attached even later — the asynchronous appearance the waiters exist
//! for. One media entry answers through a flaky status source that fails
//! its first requests, demonstrating silent degradation.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use tokio::time::{Duration, sleep};

use relstat_core::app::Annotator;
use relstat_core::domain::{
    ApiError, AUTH_KEY, EntityHandle, ListStatus, MediaId, ViewerId,
};
use relstat_core::impls::{
    FakeBindings, FakeDom, FakeInstance, FakeRouter, MemoryStore, StaticStatusApi,
};
use relstat_core::ports::host::RouteChange;
use relstat_core::ports::{DomSurface, HostBindings, NodeId, StatusApi};

/// Status source that fails its first `n` requests before delegating.
struct FlakyApi {
    remaining_failures: AtomicU32,
    inner: StaticStatusApi,
}

impl FlakyApi {
    fn new(n: u32, inner: StaticStatusApi) -> Self {
        Self {
            remaining_failures: AtomicU32::new(n),
            inner,
        }
    }
}

#[async_trait]
impl StatusApi for FlakyApi {
    async fn media_list_status(
        &self,
        media: MediaId,
        viewer: Option<ViewerId>,
    ) -> Result<Option<ListStatus>, ApiError> {
        let left = self.remaining_failures.load(Ordering::Relaxed);
        if left > 0 {
            self.remaining_failures.fetch_sub(1, Ordering::Relaxed);
            return Err(ApiError::Malformed(format!(
                "intentional failure (left={left})"
            )));
        }
        self.inner.media_list_status(media, viewer).await
    }
}

/// Mount one relation card under `relations` and return its entity handle.
fn mount_card(dom: &FakeDom, relations: NodeId, media: MediaId, name: &str) -> EntityHandle {
    let card = dom.create_element("div");
    dom.append(relations, card);

    let title = dom.create_element("div");
    dom.add_class(title, "title");
    dom.set_text(title, name);
    dom.append(card, title);

    EntityHandle::new(media, card)
}

fn print_page(dom: &FakeDom, relations: NodeId) {
    for title in dom.query_all(relations, ".title") {
        let statuses: Vec<String> = dom
            .query_all(title, ".list-status")
            .into_iter()
            .filter_map(|n| dom.attribute(n, "status"))
            .collect();
        println!(
            "  {:<24} {}",
            dom.text(title).unwrap_or_default(),
            if statuses.is_empty() {
                "(no indicator)".to_string()
            } else {
                statuses.join(", ")
            }
        );
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // (A) Host-owned surfaces.
    let dom = Arc::new(FakeDom::new());
    let bindings = Arc::new(FakeBindings::new());
    let router = Arc::new(FakeRouter::new());

    let store = MemoryStore::new();
    store.put(AUTH_KEY, r#"{"id": 600}"#);

    // (B) Status source: three known entries, first request fails once.
    let table = StaticStatusApi::default();
    table.set(MediaId::new(30), ListStatus::Completed);
    table.set(MediaId::new(31), ListStatus::Current);
    table.set(MediaId::new(33), ListStatus::Planning);
    let api = Arc::new(FlakyApi::new(1, table));

    // (C) The simulated host application: mounts pieces late, attaches
    // instances even later.
    let host = tokio::spawn({
        let dom = Arc::clone(&dom);
        let bindings = Arc::clone(&bindings);
        let router = Arc::clone(&router);
        async move {
            sleep(Duration::from_millis(80)).await;
            let app = dom.create_element("div");
            dom.set_attribute(app, "id", "app");
            dom.append_to_body(app);

            sleep(Duration::from_millis(150)).await;
            bindings.bind(app, Arc::new(FakeInstance::with_router(Arc::clone(&router))));

            sleep(Duration::from_millis(100)).await;
            let relations = dom.create_element("div");
            dom.add_class(relations, "relations");
            dom.append(app, relations);

            let children = vec![
                mount_card(&dom, relations, MediaId::new(30), "Season 1"),
                mount_card(&dom, relations, MediaId::new(31), "Season 2"),
                mount_card(&dom, relations, MediaId::new(32), "Spin-off"),
                mount_card(&dom, relations, MediaId::new(33), "Movie"),
            ];

            sleep(Duration::from_millis(250)).await;
            bindings.bind(relations, Arc::new(FakeInstance::with_children(children)));
            relations
        }
    });

    // (D) The annotator, exactly as it would be injected into the page.
    let annotator = Annotator::new(
        Arc::clone(&dom) as Arc<dyn DomSurface>,
        Arc::clone(&bindings) as Arc<dyn HostBindings>,
        Arc::new(store),
        api,
    );
    annotator.run().await;

    let relations = host.await.expect("host simulation panicked");

    // (E) Per-entity tasks carry no join handle; poll the page like the
    // viewer would watch it render.
    sleep(Duration::from_millis(400)).await;
    println!("\nafter initial load:");
    print_page(&dom, relations);

    // (F) Navigations: one ignored, one re-annotating.
    router.fire(&RouteChange::new("Home"));
    router.fire(&RouteChange::new("MediaOverview"));
    sleep(Duration::from_millis(400)).await;

    println!("\nafter navigating back to the media overview:");
    print_page(&dom, relations);
    println!("\n(note: Season 1 lost its first fetch to the flaky API and stays cached as unknown;");
    println!(" indicators are additive, so re-annotated entries now carry two)");
}
