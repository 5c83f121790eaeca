//! FakeDom - in-memory DOM implementation of the [`DomSurface`] port.
//!
//! Backs the tests and the demo wiring. It models just enough of a
//! document to stand in for the host page: a node arena under a fixed
//! `html`/`head`/`body` skeleton, a selector engine covering exactly the
//! grammar the port promises, and a mutation-generation channel bumped on
//! every child-list change (the observer configuration it stands in for
//! watches child lists only, so attribute edits do not bump it).

use std::collections::HashMap;
use std::sync::Mutex;

use tokio::sync::watch;

use crate::ports::dom::{DomSurface, NodeId};

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    attrs: HashMap<String, String>,
    classes: Vec<String>,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

struct Inner {
    nodes: HashMap<NodeId, NodeData>,
    next_id: NodeId,
    root: NodeId,
    head: NodeId,
    body: NodeId,
}

impl Inner {
    fn alloc(&mut self, tag: &str) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(
            id,
            NodeData {
                tag: tag.to_string(),
                ..NodeData::default()
            },
        );
        id
    }

    fn attach(&mut self, parent: NodeId, child: NodeId, front: bool) {
        if !self.nodes.contains_key(&parent) || !self.nodes.contains_key(&child) {
            return;
        }
        // Re-attaching moves the node, as in a real document.
        if let Some(old_parent) = self.nodes[&child].parent
            && let Some(data) = self.nodes.get_mut(&old_parent)
        {
            data.children.retain(|c| *c != child);
        }
        let data = self.nodes.get_mut(&parent).expect("checked above");
        if front {
            data.children.insert(0, child);
        } else {
            data.children.push(child);
        }
        self.nodes.get_mut(&child).expect("checked above").parent = Some(parent);
    }

    fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        let Some(data) = self.nodes.get(&node) else {
            return false;
        };
        if !selector.target.matches(data) {
            return false;
        }
        match &selector.parent {
            None => true,
            Some(parent_sel) => data
                .parent
                .and_then(|p| self.nodes.get(&p))
                .is_some_and(|p| parent_sel.matches(p)),
        }
    }

    /// Document-order DFS under `root` (excluding `root`).
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self
            .nodes
            .get(&root)
            .map(|d| d.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(node) = stack.pop() {
            out.push(node);
            if let Some(data) = self.nodes.get(&node) {
                stack.extend(data.children.iter().rev().copied());
            }
        }
        out
    }
}

pub struct FakeDom {
    inner: Mutex<Inner>,
    mutated: watch::Sender<u64>,
}

impl FakeDom {
    pub fn new() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(0, NodeData {
            tag: "html".to_string(),
            children: vec![1, 2],
            ..NodeData::default()
        });
        nodes.insert(1, NodeData {
            tag: "head".to_string(),
            parent: Some(0),
            ..NodeData::default()
        });
        nodes.insert(2, NodeData {
            tag: "body".to_string(),
            parent: Some(0),
            ..NodeData::default()
        });
        let (mutated, _) = watch::channel(0);
        Self {
            inner: Mutex::new(Inner {
                nodes,
                next_id: 3,
                root: 0,
                head: 1,
                body: 2,
            }),
            mutated,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("dom lock poisoned")
    }

    fn bump(&self) {
        self.mutated.send_modify(|generation| *generation += 1);
    }

    pub fn root(&self) -> NodeId {
        self.lock().root
    }

    pub fn head(&self) -> NodeId {
        self.lock().head
    }

    pub fn body(&self) -> NodeId {
        self.lock().body
    }

    /// Host-side helper: append `child` to an arbitrary parent.
    pub fn append(&self, parent: NodeId, child: NodeId) {
        self.lock().attach(parent, child, false);
        self.bump();
    }

    pub fn append_to_body(&self, node: NodeId) {
        let body = self.body();
        self.append(body, node);
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.lock().nodes.get(&node)?.attrs.get(name).cloned()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.lock()
            .nodes
            .get(&node)
            .is_some_and(|d| d.classes.iter().any(|c| c == class))
    }

    pub fn text(&self, node: NodeId) -> Option<String> {
        self.lock().nodes.get(&node)?.text.clone()
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.lock()
            .nodes
            .get(&node)
            .map(|d| d.children.clone())
            .unwrap_or_default()
    }

    pub fn tag(&self, node: NodeId) -> Option<String> {
        self.lock().nodes.get(&node).map(|d| d.tag.clone())
    }
}

impl Default for FakeDom {
    fn default() -> Self {
        Self::new()
    }
}

impl DomSurface for FakeDom {
    fn query(&self, selector: &str) -> Option<NodeId> {
        let sel = Selector::parse(selector)?;
        let inner = self.lock();
        let root = inner.root;
        inner
            .descendants(root)
            .into_iter()
            .find(|node| inner.matches(*node, &sel))
    }

    fn query_all(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        let inner = self.lock();
        inner
            .descendants(root)
            .into_iter()
            .filter(|node| inner.matches(*node, &sel))
            .collect()
    }

    fn create_element(&self, tag: &str) -> NodeId {
        // Detached creation is not a document mutation.
        self.lock().alloc(tag)
    }

    fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        if let Some(data) = self.lock().nodes.get_mut(&node) {
            data.attrs.insert(name.to_string(), value.to_string());
        }
    }

    fn add_class(&self, node: NodeId, class: &str) {
        if let Some(data) = self.lock().nodes.get_mut(&node)
            && !data.classes.iter().any(|c| c == class)
        {
            data.classes.push(class.to_string());
        }
    }

    fn set_text(&self, node: NodeId, text: &str) {
        if let Some(data) = self.lock().nodes.get_mut(&node) {
            data.text = Some(text.to_string());
        }
    }

    fn prepend(&self, parent: NodeId, child: NodeId) {
        self.lock().attach(parent, child, true);
        self.bump();
    }

    fn append_to_head(&self, node: NodeId) {
        let mut inner = self.lock();
        let head = inner.head;
        inner.attach(head, node, false);
        drop(inner);
        self.bump();
    }

    fn mutations(&self) -> watch::Receiver<u64> {
        self.mutated.subscribe()
    }
}

/// One compound selector, optionally qualified by a `>` parent clause.
#[derive(Debug, PartialEq, Eq)]
struct Selector {
    parent: Option<SimpleSelector>,
    target: SimpleSelector,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct SimpleSelector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
}

impl Selector {
    /// Parse `"A > B"` or `"B"`. Returns `None` for anything outside the
    /// supported grammar; an unparseable selector simply never matches.
    fn parse(input: &str) -> Option<Self> {
        let mut parts = input.split('>').map(str::trim);
        let first = SimpleSelector::parse(parts.next()?)?;
        match parts.next() {
            None => Some(Self {
                parent: None,
                target: first,
            }),
            Some(second) => {
                let target = SimpleSelector::parse(second)?;
                // At most one combinator.
                if parts.next().is_some() {
                    return None;
                }
                Some(Self {
                    parent: Some(first),
                    target,
                })
            }
        }
    }
}

impl SimpleSelector {
    fn parse(input: &str) -> Option<Self> {
        if input.is_empty() {
            return None;
        }
        let mut sel = SimpleSelector::default();
        let mut rest = input;

        let tag_len = rest
            .find(|c| matches!(c, '#' | '.' | '['))
            .unwrap_or(rest.len());
        if tag_len > 0 {
            sel.tag = Some(rest[..tag_len].to_string());
        }
        rest = &rest[tag_len..];

        while !rest.is_empty() {
            let (marker, tail) = rest.split_at(1);
            match marker {
                "#" | "." => {
                    let len = tail
                        .find(|c| matches!(c, '#' | '.' | '['))
                        .unwrap_or(tail.len());
                    if len == 0 {
                        return None;
                    }
                    let name = tail[..len].to_string();
                    if marker == "#" {
                        sel.id = Some(name);
                    } else {
                        sel.classes.push(name);
                    }
                    rest = &tail[len..];
                }
                "[" => {
                    let end = tail.find(']')?;
                    let body = &tail[..end];
                    match body.split_once('=') {
                        Some((name, value)) => sel
                            .attrs
                            .push((name.to_string(), Some(value.trim_matches('"').to_string()))),
                        None => sel.attrs.push((body.to_string(), None)),
                    }
                    rest = &tail[end + 1..];
                }
                _ => return None,
            }
        }

        Some(sel)
    }

    fn matches(&self, data: &NodeData) -> bool {
        if let Some(tag) = &self.tag
            && data.tag != *tag
        {
            return false;
        }
        if let Some(id) = &self.id
            && data.attrs.get("id") != Some(id)
        {
            return false;
        }
        if !self.classes.iter().all(|c| data.classes.contains(c)) {
            return false;
        }
        self.attrs.iter().all(|(name, value)| match value {
            None => data.attrs.contains_key(name),
            Some(value) => data.attrs.get(name) == Some(value),
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn page() -> (FakeDom, NodeId, NodeId, NodeId) {
        let dom = FakeDom::new();
        let app = dom.create_element("div");
        dom.set_attribute(app, "id", "app");
        dom.append_to_body(app);

        let image_text = dom.create_element("div");
        dom.add_class(image_text, "image-text");
        dom.append(app, image_text);

        let label = dom.create_element("div");
        dom.add_class(label, "name");
        dom.append(image_text, label);

        (dom, app, image_text, label)
    }

    #[test]
    fn query_finds_by_id_class_tag_and_attr() {
        let (dom, app, image_text, _) = page();

        assert_eq!(dom.query("#app"), Some(app));
        assert_eq!(dom.query(".image-text"), Some(image_text));
        assert_eq!(dom.query("div"), Some(app));

        let style = dom.create_element("style");
        dom.set_attribute(style, "data-relation-style", "true");
        dom.append_to_head(style);
        assert_eq!(dom.query("style[data-relation-style]"), Some(style));
        assert_eq!(dom.query("style[data-relation-style=\"true\"]"), Some(style));
    }

    #[test]
    fn child_combinator_requires_direct_parent() {
        let (dom, app, _, label) = page();

        assert_eq!(dom.query(".image-text > div"), Some(label));
        // label is a grandchild of #app, not a child.
        assert_eq!(dom.query_all(dom.root(), "#app > .name"), Vec::<NodeId>::new());
        assert_eq!(dom.query_all(app, ".image-text > div"), vec![label]);
    }

    #[rstest]
    #[case("")]
    #[case(".a > .b > .c")]
    #[case(".")]
    #[case("[unclosed")]
    fn unsupported_selectors_never_match(#[case] selector: &str) {
        let (dom, _, _, _) = page();
        assert_eq!(dom.query(selector), None);
    }

    #[test]
    fn query_all_is_scoped_and_in_document_order() {
        let dom = FakeDom::new();
        let container = dom.create_element("div");
        dom.append_to_body(container);

        let a = dom.create_element("div");
        dom.add_class(a, "title");
        dom.append(container, a);
        let b = dom.create_element("div");
        dom.add_class(b, "title");
        dom.append(container, b);

        let outside = dom.create_element("div");
        dom.add_class(outside, "title");
        dom.append_to_body(outside);

        assert_eq!(dom.query_all(container, ".title"), vec![a, b]);
    }

    #[test]
    fn prepend_inserts_at_the_front() {
        let dom = FakeDom::new();
        let parent = dom.create_element("div");
        dom.append_to_body(parent);
        let first = dom.create_element("span");
        dom.append(parent, first);
        let newcomer = dom.create_element("span");
        dom.prepend(parent, newcomer);

        assert_eq!(dom.children(parent), vec![newcomer, first]);
    }

    #[tokio::test]
    async fn structural_changes_bump_the_mutation_generation() {
        let dom = FakeDom::new();
        let mut rx = dom.mutations();
        let before = *rx.borrow_and_update();

        let node = dom.create_element("div");
        assert!(!rx.has_changed().unwrap(), "creation alone is not a mutation");

        dom.append_to_body(node);
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();
        assert!(*dom.mutations().borrow() > before);
    }
}
