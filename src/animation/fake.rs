//! In-memory [`Stage`] for host-side tests.
//!
//! Nodes are flat: a selector part matches on its last simple selector only
//! (`.navbar a` matches every node carrying the `a` token).

use std::cell::RefCell;
use std::rc::Rc;

use super::stage::{Bounds, Stage, Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

struct FakeNode {
    tokens: Vec<String>,
    style: Option<Vec<(String, String)>>,
    top: f64,
    height: f64,
}

#[derive(Default)]
struct FakeDom {
    nodes: Vec<FakeNode>,
    viewport: Viewport,
    reduced_motion: bool,
    scroll_y: f64,
}

/// A listener slot. `Running` marks a callback taken out for dispatch, so a
/// subscription dropped from inside its own callback stays removed.
enum Slot {
    Vacant,
    Idle(Box<dyn FnMut()>),
    Running,
}

type Listeners = Rc<RefCell<Vec<Slot>>>;

#[derive(Clone, Default)]
pub struct FakeStage {
    dom: Rc<RefCell<FakeDom>>,
    listeners: Listeners,
}

pub struct FakeSubscription {
    listeners: Listeners,
    slot: usize,
}

impl Drop for FakeSubscription {
    fn drop(&mut self) {
        self.listeners.borrow_mut()[self.slot] = Slot::Vacant;
    }
}

impl FakeStage {
    pub fn new(width: f64, height: f64) -> Self {
        let stage = FakeStage::default();
        stage.dom.borrow_mut().viewport = Viewport { width, height };
        stage
    }

    pub fn set_reduced_motion(&self, reduced: bool) {
        self.dom.borrow_mut().reduced_motion = reduced;
    }

    /// `tokens` is the tag name plus classes, e.g. `"article feature-card"`.
    /// `top` is the document offset.
    pub fn add(&self, tokens: &str, top: f64, height: f64) -> NodeId {
        let mut dom = self.dom.borrow_mut();
        dom.nodes.push(FakeNode {
            tokens: tokens.split_whitespace().map(str::to_string).collect(),
            style: None,
            top,
            height,
        });
        NodeId(dom.nodes.len() - 1)
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        let dom = self.dom.borrow();
        dom.nodes[node.0]
            .style
            .as_ref()?
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.clone())
    }

    pub fn style_attribute_of(&self, node: NodeId) -> Option<String> {
        let dom = self.dom.borrow();
        dom.nodes[node.0].style.as_ref().map(|declarations| {
            declarations
                .iter()
                .map(|(name, value)| format!("{}: {};", name, value))
                .collect::<Vec<_>>()
                .join(" ")
        })
    }

    pub fn snapshot(&self) -> Vec<Option<String>> {
        let count = self.dom.borrow().nodes.len();
        (0..count).map(|i| self.style_attribute_of(NodeId(i))).collect()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|slot| !matches!(slot, Slot::Vacant))
            .count()
    }

    /// Moves the page and dispatches a scroll event.
    pub fn scroll_to(&self, y: f64) {
        self.dom.borrow_mut().scroll_y = y;
        let slots = self.listeners.borrow().len();
        for slot in 0..slots {
            let taken = std::mem::replace(&mut self.listeners.borrow_mut()[slot], Slot::Running);
            let mut callback = match taken {
                Slot::Idle(callback) => callback,
                other => {
                    self.listeners.borrow_mut()[slot] = other;
                    continue;
                }
            };
            callback();
            let mut listeners = self.listeners.borrow_mut();
            if matches!(listeners[slot], Slot::Running) {
                listeners[slot] = Slot::Idle(callback);
            }
        }
    }
}

fn matches(tokens: &[String], selector: &str) -> bool {
    selector.split(',').any(|part| {
        part.split_whitespace()
            .last()
            .map(|simple| {
                let wanted = simple.trim_start_matches('.');
                tokens.iter().any(|token| token == wanted)
            })
            .unwrap_or(false)
    })
}

fn parse_declarations(value: &str) -> Vec<(String, String)> {
    value
        .split(';')
        .filter_map(|declaration| {
            let (name, value) = declaration.split_once(':')?;
            Some((name.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

impl Stage for FakeStage {
    type Node = NodeId;
    type Subscription = FakeSubscription;

    fn select(&self, selector: &str) -> Vec<NodeId> {
        let dom = self.dom.borrow();
        dom.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| matches(&node.tokens, selector))
            .map(|(index, _)| NodeId(index))
            .collect()
    }

    fn style_attribute(&self, node: &NodeId) -> Option<String> {
        self.style_attribute_of(*node)
    }

    fn restore_style_attribute(&self, node: &NodeId, value: Option<&str>) {
        self.dom.borrow_mut().nodes[node.0].style = value.map(parse_declarations);
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        let mut dom = self.dom.borrow_mut();
        let declarations = dom.nodes[node.0].style.get_or_insert_with(Vec::new);
        match declarations.iter_mut().find(|(name, _)| name == property) {
            Some(existing) => existing.1 = value.to_string(),
            None => declarations.push((property.to_string(), value.to_string())),
        }
    }

    fn reflow(&self, _node: &NodeId) {}

    fn bounds(&self, node: &NodeId) -> Bounds {
        let dom = self.dom.borrow();
        let node = &dom.nodes[node.0];
        Bounds {
            top: node.top - dom.scroll_y,
            height: node.height,
        }
    }

    fn viewport(&self) -> Viewport {
        self.dom.borrow().viewport
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.dom.borrow().reduced_motion
    }

    fn subscribe_scroll(&self, on_scroll: Box<dyn FnMut()>) -> Option<FakeSubscription> {
        let mut listeners = self.listeners.borrow_mut();
        listeners.push(Slot::Idle(on_scroll));
        Some(FakeSubscription {
            listeners: self.listeners.clone(),
            slot: listeners.len() - 1,
        })
    }
}
