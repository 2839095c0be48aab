use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlElement};

/// A registered DOM event listener. Dropping it removes the listener, so the
/// owner's lifetime is the subscription's lifetime.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl EventSubscription {
    pub fn on_window(event: &'static str, callback: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        Self::listen(window.into(), event, callback)
    }

    pub fn listen(
        target: EventTarget,
        event: &'static str,
        callback: impl FnMut() + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self { target, event, callback }),
            Err(err) => {
                warn!("Failed to listen for {}: {:?}", event, err);
                None
            }
        }
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove {} listener: {:?}", self.event, err);
        }
    }
}

/// Window events and width, behind a trait so the listeners that hang off
/// them can be driven from host tests.
pub trait WindowEvents: Clone + 'static {
    type Subscription: 'static;

    fn listen(&self, event: &'static str, callback: Box<dyn FnMut()>) -> Option<Self::Subscription>;
    fn width(&self) -> Option<f64>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserWindow;

impl WindowEvents for BrowserWindow {
    type Subscription = EventSubscription;

    fn listen(&self, event: &'static str, callback: Box<dyn FnMut()>) -> Option<EventSubscription> {
        EventSubscription::on_window(event, callback)
    }

    fn width(&self) -> Option<f64> {
        viewport_width()
    }
}

pub fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

pub fn prefers_dark_scheme() -> bool {
    media_matches("(prefers-color-scheme: dark)")
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

/// The `<html>` element.
pub fn document_root() -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .document_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

pub fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}
