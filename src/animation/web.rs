use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::stage::{Bounds, Stage, Viewport};
use crate::dom::{self, EventSubscription};

/// The live DOM under one root element.
#[derive(Clone)]
pub struct WebStage {
    root: Element,
}

impl WebStage {
    pub fn new(root: Element) -> Self {
        Self { root }
    }
}

impl Stage for WebStage {
    type Node = HtmlElement;
    type Subscription = EventSubscription;

    fn select(&self, selector: &str) -> Vec<HtmlElement> {
        let list = match self.root.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                debug!("Bad selector {}: {:?}", selector, err);
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn style_attribute(&self, node: &HtmlElement) -> Option<String> {
        node.get_attribute("style")
    }

    fn restore_style_attribute(&self, node: &HtmlElement, value: Option<&str>) {
        let result = match value {
            Some(value) => node.set_attribute("style", value),
            None => node.remove_attribute("style"),
        };
        if let Err(err) = result {
            warn!("Failed to restore inline style: {:?}", err);
        }
    }

    fn set_style(&self, node: &HtmlElement, property: &str, value: &str) {
        if let Err(err) = node.style().set_property(property, value) {
            warn!("Failed to set {}: {:?}", property, err);
        }
    }

    fn reflow(&self, node: &HtmlElement) {
        let _ = node.offset_height();
    }

    fn bounds(&self, node: &HtmlElement) -> Bounds {
        let rect = node.get_bounding_client_rect();
        Bounds {
            top: rect.top(),
            height: rect.height(),
        }
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            width: dom::viewport_width().unwrap_or(0.0),
            height: dom::viewport_height().unwrap_or(0.0),
        }
    }

    fn prefers_reduced_motion(&self) -> bool {
        dom::prefers_reduced_motion()
    }

    fn subscribe_scroll(&self, on_scroll: Box<dyn FnMut()>) -> Option<EventSubscription> {
        EventSubscription::on_window("scroll", on_scroll)
    }
}
