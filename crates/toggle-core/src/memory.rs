//! In-memory element tree implementing [`ToggleHost`].
//!
//! Nodes live in an arena addressed by [`NodeId`]. Only what the widget
//! needs is modelled: tag names, class lists, parent/child links and click
//! listeners. Selectors are limited to `tag`, `.class` and `tag.class.class`.

use crate::error::{HostError, HostResult};
use crate::host::{ClickHandler, ToggleHost};
use std::cell::RefCell;
use std::rc::Rc;

const DOCUMENT_TAG: &str = "#document";
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Arena position; matches the index into [`MemoryDom::class_snapshot`].
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Node {
    tag: String,
    classes: Vec<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

type SharedHandler = Rc<RefCell<ClickHandler>>;

#[derive(Debug)]
pub struct MemoryListener {
    slot: usize,
}

pub struct MemoryDom {
    nodes: RefCell<Vec<Node>>,
    listeners: RefCell<Vec<Option<(NodeId, SharedHandler)>>>,
    free_slots: RefCell<Vec<usize>>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    pub fn new() -> Self {
        Self {
            nodes: RefCell::new(vec![Node {
                tag: DOCUMENT_TAG.to_string(),
                classes: Vec::new(),
                parent: None,
                children: Vec::new(),
            }]),
            listeners: RefCell::new(Vec::new()),
            free_slots: RefCell::new(Vec::new()),
        }
    }

    /// Build a tree from a markup snippet. Attributes other than `class`
    /// are ignored, as are text, comments and doctypes.
    pub fn parse(markup: &str) -> HostResult<Self> {
        let dom = Self::new();
        let mut stack = vec![dom.root()];
        let mut rest = markup;
        while let Some(start) = rest.find('<') {
            let end = rest[start..]
                .find('>')
                .map(|i| i + start)
                .ok_or_else(|| HostError::Markup(format!("unterminated tag near {:?}", &rest[start..])))?;
            let tag_src = rest[start + 1..end].trim();
            rest = &rest[end + 1..];

            if tag_src.starts_with('!') {
                continue;
            }
            if let Some(name) = tag_src.strip_prefix('/') {
                let name = name.trim();
                let open = stack
                    .iter()
                    .rposition(|id| dom.tag(*id).as_deref() == Some(name));
                match open {
                    Some(pos) if pos > 0 => stack.truncate(pos),
                    _ => return Err(HostError::Markup(format!("unmatched </{name}>"))),
                }
                continue;
            }

            let self_closing = tag_src.ends_with('/');
            let body = tag_src.trim_end_matches('/').trim();
            let (name, attrs) = match body.find(char::is_whitespace) {
                Some(i) => (&body[..i], &body[i..]),
                None => (body, ""),
            };
            if name.is_empty() {
                return Err(HostError::Markup("empty tag name".to_string()));
            }
            let classes = class_attr(attrs);
            let class_refs: Vec<&str> = classes.iter().map(String::as_str).collect();
            let parent = stack[stack.len() - 1];
            let id = dom.element(parent, name, &class_refs)?;
            if !self_closing && !VOID_TAGS.contains(&name) {
                stack.push(id);
            }
        }
        if stack.len() > 1 {
            return Err(HostError::Markup("unclosed element".to_string()));
        }
        Ok(dom)
    }

    /// The document node. It has no classes and never matches a selector.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// A detached element; attach it with [`MemoryDom::append`].
    pub fn create_element(&self, tag: &str, classes: &[&str]) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node {
            tag: tag.to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            parent: None,
            children: Vec::new(),
        });
        NodeId(nodes.len() - 1)
    }

    pub fn append(&self, parent: NodeId, child: NodeId) -> HostResult<()> {
        let mut nodes = self.nodes.borrow_mut();
        if parent.0 >= nodes.len() || child.0 >= nodes.len() || child == parent {
            return Err(HostError::UnknownElement);
        }
        if let Some(old) = nodes[child.0].parent.take() {
            nodes[old.0].children.retain(|c| *c != child);
        }
        nodes[child.0].parent = Some(parent);
        nodes[parent.0].children.push(child);
        Ok(())
    }

    /// Create an element and append it to `parent` in one step.
    pub fn element(&self, parent: NodeId, tag: &str, classes: &[&str]) -> HostResult<NodeId> {
        let id = self.create_element(tag, classes);
        self.append(parent, id)?;
        Ok(id)
    }

    pub fn tag(&self, id: NodeId) -> Option<String> {
        self.nodes.borrow().get(id.0).map(|n| n.tag.clone())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.borrow().get(id.0).and_then(|n| n.parent)
    }

    pub fn classes(&self, id: NodeId) -> Vec<String> {
        self.nodes
            .borrow()
            .get(id.0)
            .map(|n| n.classes.clone())
            .unwrap_or_default()
    }

    /// Class lists of every node, indexed by arena position.
    pub fn class_snapshot(&self) -> Vec<Vec<String>> {
        self.nodes.borrow().iter().map(|n| n.classes.clone()).collect()
    }

    /// Number of click listeners currently bound anywhere in the tree.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().iter().flatten().count()
    }

    /// Listener slots allocated so far, bound or free. Unbinding frees a
    /// slot for the next binding instead of growing the table.
    pub fn listener_slots(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Dispatch a click on `target` and let it bubble to the root.
    /// Returns the number of handlers that ran.
    pub fn click(&self, target: NodeId) -> usize {
        let mut path = Vec::new();
        let mut cursor = Some(target);
        while let Some(id) = cursor {
            path.push(id);
            cursor = self.parent(id);
        }
        let mut ran = 0;
        for node in path {
            let handlers: Vec<SharedHandler> = self
                .listeners
                .borrow()
                .iter()
                .flatten()
                .filter(|(bound, _)| *bound == node)
                .map(|(_, handler)| handler.clone())
                .collect();
            for handler in handlers {
                if let Ok(mut guard) = handler.try_borrow_mut() {
                    let f: &mut dyn FnMut() = &mut **guard;
                    f();
                    ran += 1;
                }
            }
        }
        ran
    }

    fn check(&self, id: NodeId) -> HostResult<()> {
        if id.0 < self.nodes.borrow().len() {
            Ok(())
        } else {
            Err(HostError::UnknownElement)
        }
    }

    fn matches(&self, id: NodeId, selector: &SimpleSelector) -> bool {
        let nodes = self.nodes.borrow();
        let node = &nodes[id.0];
        if node.tag == DOCUMENT_TAG {
            return false;
        }
        if let Some(tag) = &selector.tag {
            if !node.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        selector.classes.iter().all(|c| node.classes.contains(c))
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = nodes[root.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(nodes[id.0].children.iter().rev().copied());
        }
        out
    }
}

impl ToggleHost for MemoryDom {
    type Element = NodeId;
    type Listener = MemoryListener;

    fn query_all(&self, root: &NodeId, selector: &str) -> HostResult<Vec<NodeId>> {
        let selector = SimpleSelector::parse(selector)?;
        self.check(*root)?;
        Ok(self
            .descendants(*root)
            .into_iter()
            .filter(|id| self.matches(*id, &selector))
            .collect())
    }

    fn query_first(&self, root: &NodeId, selector: &str) -> HostResult<Option<NodeId>> {
        let selector = SimpleSelector::parse(selector)?;
        self.check(*root)?;
        Ok(self
            .descendants(*root)
            .into_iter()
            .find(|id| self.matches(*id, &selector)))
    }

    fn closest(&self, element: &NodeId, selector: &str) -> HostResult<Option<NodeId>> {
        let selector = SimpleSelector::parse(selector)?;
        self.check(*element)?;
        let mut cursor = Some(*element);
        while let Some(id) = cursor {
            if self.matches(id, &selector) {
                return Ok(Some(id));
            }
            cursor = self.parent(id);
        }
        Ok(None)
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.nodes
            .borrow()
            .get(element.0)
            .map_or(false, |n| n.classes.iter().any(|c| c == class))
    }

    fn toggle_class(&self, element: &NodeId, class: &str) -> HostResult<bool> {
        let mut nodes = self.nodes.borrow_mut();
        let node = nodes.get_mut(element.0).ok_or(HostError::UnknownElement)?;
        if let Some(pos) = node.classes.iter().position(|c| c == class) {
            node.classes.remove(pos);
            Ok(false)
        } else {
            node.classes.push(class.to_string());
            Ok(true)
        }
    }

    fn listen_click(&self, element: &NodeId, handler: ClickHandler) -> HostResult<MemoryListener> {
        self.check(*element)?;
        let entry = Some((*element, Rc::new(RefCell::new(handler))));
        let mut listeners = self.listeners.borrow_mut();
        let slot = match self.free_slots.borrow_mut().pop() {
            Some(slot) => {
                listeners[slot] = entry;
                slot
            }
            None => {
                listeners.push(entry);
                listeners.len() - 1
            }
        };
        Ok(MemoryListener { slot })
    }

    fn unlisten_click(&self, listener: MemoryListener) {
        if let Some(slot) = self.listeners.borrow_mut().get_mut(listener.slot) {
            if slot.take().is_some() {
                self.free_slots.borrow_mut().push(listener.slot);
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct SimpleSelector {
    tag: Option<String>,
    classes: Vec<String>,
}

impl SimpleSelector {
    fn parse(src: &str) -> HostResult<Self> {
        let unsupported = || HostError::UnsupportedSelector(src.to_string());
        let src_trim = src.trim();
        if src_trim.is_empty()
            || src_trim
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '#' | '[' | '>' | '+' | '~' | ',' | ':' | '*'))
        {
            return Err(unsupported());
        }
        let mut parts = src_trim.split('.');
        let tag = parts.next().filter(|t| !t.is_empty()).map(str::to_string);
        let classes: Vec<String> = parts.map(str::to_string).collect();
        if classes.iter().any(String::is_empty) {
            return Err(unsupported());
        }
        Ok(Self { tag, classes })
    }
}

/// Pull the whitespace-separated values out of a `class="..."` attribute.
fn class_attr(attrs: &str) -> Vec<String> {
    let mut rest = attrs.trim_start();
    while !rest.is_empty() {
        let name_end = rest
            .find(|c: char| c == '=' || c.is_whitespace())
            .unwrap_or(rest.len());
        let name = &rest[..name_end];
        rest = rest[name_end..].trim_start();
        let mut value = "";
        if let Some(after_eq) = rest.strip_prefix('=') {
            let after_eq = after_eq.trim_start();
            match after_eq.chars().next() {
                Some(q @ ('"' | '\'')) => {
                    let inner = &after_eq[1..];
                    let close = inner.find(q).unwrap_or(inner.len());
                    value = &inner[..close];
                    rest = inner.get(close + 1..).unwrap_or("");
                }
                _ => {
                    let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
                    value = &after_eq[..end];
                    rest = &after_eq[end..];
                }
            }
        }
        if name.eq_ignore_ascii_case("class") {
            return value.split_whitespace().map(str::to_string).collect();
        }
        rest = rest.trim_start();
    }
    Vec::new()
}
