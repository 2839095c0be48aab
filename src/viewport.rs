use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlElement;

use crate::config::{NAV_HEIGHT_VAR, SCROLL_PADDING_PROPERTY};
use crate::dom::{self, BrowserWindow, EventSubscription, WindowEvents};

/// Rendered navbar height, rounded to whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavHeight(u32);

impl NavHeight {
    pub fn from_rendered(height: f64) -> Self {
        if height.is_finite() && height > 0.0 {
            NavHeight(height.round() as u32)
        } else {
            NavHeight(0)
        }
    }

    pub fn px(self) -> u32 {
        self.0
    }

    pub fn publish(self, sink: &impl LayoutSink) {
        let value = format!("{}px", self.0);
        sink.set_property(NAV_HEIGHT_VAR, &value);
        sink.set_property(SCROLL_PADDING_PROPERTY, &value);
    }
}

pub trait LayoutSink {
    fn set_property(&self, name: &str, value: &str);
}

/// Everything the watcher touches: the navbar's rendered height, the root
/// style it publishes to, window events and the web-font load signal.
pub trait LayoutHost: WindowEvents + LayoutSink {
    fn nav_height(&self) -> f64;
    /// Runs `callback` once, after web fonts finish loading.
    fn when_fonts_ready(&self, callback: Box<dyn FnOnce()>);
}

/// The navbar element plus the `<html>` inline style.
#[derive(Clone)]
pub struct BrowserLayout {
    nav: HtmlElement,
    root: HtmlElement,
}

impl BrowserLayout {
    pub fn new(nav: HtmlElement) -> Option<Self> {
        Some(Self {
            nav,
            root: dom::document_root()?,
        })
    }
}

impl WindowEvents for BrowserLayout {
    type Subscription = EventSubscription;

    fn listen(&self, event: &'static str, callback: Box<dyn FnMut()>) -> Option<EventSubscription> {
        BrowserWindow.listen(event, callback)
    }

    fn width(&self) -> Option<f64> {
        BrowserWindow.width()
    }
}

impl LayoutSink for BrowserLayout {
    fn set_property(&self, name: &str, value: &str) {
        if let Err(err) = self.root.style().set_property(name, value) {
            warn!("Failed to publish {}: {:?}", name, err);
        }
    }
}

impl LayoutHost for BrowserLayout {
    fn nav_height(&self) -> f64 {
        self.nav.get_bounding_client_rect().height()
    }

    fn when_fonts_ready(&self, callback: Box<dyn FnOnce()>) {
        let fonts = web_sys::window()
            .and_then(|window| window.document())
            .map(|document| document.fonts());
        let Some(fonts) = fonts else {
            return;
        };
        match fonts.ready() {
            Ok(promise) => spawn_local(async move {
                if JsFuture::from(promise).await.is_ok() {
                    callback();
                }
            }),
            Err(err) => debug!("document.fonts.ready unavailable: {:?}", err),
        }
    }
}

/// Keeps the published navbar height in sync with the rendered one for as
/// long as it is alive.
pub struct ViewportWatcher<H: LayoutHost = BrowserLayout> {
    alive: Rc<Cell<bool>>,
    _resize: Option<H::Subscription>,
    _orientation: Option<H::Subscription>,
}

impl<H: LayoutHost> ViewportWatcher<H> {
    pub fn attach(host: H) -> Self {
        let measure: Rc<dyn Fn()> = {
            let host = host.clone();
            Rc::new(move || {
                let height = NavHeight::from_rendered(host.nav_height());
                debug!("Navbar measured at {}px", height.px());
                height.publish(&host);
            })
        };
        measure();

        let alive = Rc::new(Cell::new(true));
        let resize = {
            let measure = measure.clone();
            host.listen("resize", Box::new(move || measure()))
        };
        let orientation = {
            let measure = measure.clone();
            host.listen("orientationchange", Box::new(move || measure()))
        };

        // Web fonts can change text metrics after first paint.
        {
            let alive = alive.clone();
            host.when_fonts_ready(Box::new(move || {
                if alive.get() {
                    measure();
                }
            }));
        }

        Self {
            alive,
            _resize: resize,
            _orientation: orientation,
        }
    }
}

impl<H: LayoutHost> Drop for ViewportWatcher<H> {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

/// In-memory [`LayoutHost`] for host-side tests.
#[cfg(test)]
pub mod fake {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::{LayoutHost, LayoutSink};
    use crate::dom::WindowEvents;

    #[derive(Default)]
    struct Page {
        width: Cell<f64>,
        nav_height: Cell<f64>,
        published: RefCell<Vec<(String, String)>>,
        listeners: RefCell<Vec<Option<(&'static str, Box<dyn FnMut()>)>>>,
        fonts: RefCell<Vec<Box<dyn FnOnce()>>>,
    }

    #[derive(Clone, Default)]
    pub struct FakeLayout {
        page: Rc<Page>,
    }

    pub struct FakeSubscription {
        page: Rc<Page>,
        slot: usize,
    }

    impl Drop for FakeSubscription {
        fn drop(&mut self) {
            self.page.listeners.borrow_mut()[self.slot] = None;
        }
    }

    impl FakeLayout {
        pub fn new(width: f64, nav_height: f64) -> Self {
            let layout = FakeLayout::default();
            layout.page.width.set(width);
            layout.page.nav_height.set(nav_height);
            layout
        }

        pub fn set_nav_height(&self, height: f64) {
            self.page.nav_height.set(height);
        }

        pub fn resize_to(&self, width: f64) {
            self.page.width.set(width);
            self.dispatch("resize");
        }

        pub fn dispatch(&self, event: &str) {
            let slots = self.page.listeners.borrow().len();
            for slot in 0..slots {
                let taken = self.page.listeners.borrow_mut()[slot].take();
                match taken {
                    Some((name, mut callback)) if name == event => {
                        callback();
                        self.page.listeners.borrow_mut()[slot] = Some((name, callback));
                    }
                    other => self.page.listeners.borrow_mut()[slot] = other,
                }
            }
        }

        pub fn resolve_fonts(&self) {
            let pending = std::mem::take(&mut *self.page.fonts.borrow_mut());
            for callback in pending {
                callback();
            }
        }

        pub fn published(&self) -> Vec<(String, String)> {
            self.page.published.borrow().clone()
        }

        pub fn listener_count(&self) -> usize {
            self.page.listeners.borrow().iter().filter(|slot| slot.is_some()).count()
        }
    }

    impl WindowEvents for FakeLayout {
        type Subscription = FakeSubscription;

        fn listen(&self, event: &'static str, callback: Box<dyn FnMut()>) -> Option<FakeSubscription> {
            let mut listeners = self.page.listeners.borrow_mut();
            listeners.push(Some((event, callback)));
            Some(FakeSubscription {
                page: self.page.clone(),
                slot: listeners.len() - 1,
            })
        }

        fn width(&self) -> Option<f64> {
            Some(self.page.width.get())
        }
    }

    impl LayoutSink for FakeLayout {
        fn set_property(&self, name: &str, value: &str) {
            self.page
                .published
                .borrow_mut()
                .push((name.to_string(), value.to_string()));
        }
    }

    impl LayoutHost for FakeLayout {
        fn nav_height(&self) -> f64 {
            self.page.nav_height.get()
        }

        fn when_fonts_ready(&self, callback: Box<dyn FnOnce()>) {
            self.page.fonts.borrow_mut().push(callback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeLayout;
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorded(RefCell<Vec<(String, String)>>);

    impl LayoutSink for Recorded {
        fn set_property(&self, name: &str, value: &str) {
            self.0.borrow_mut().push((name.to_string(), value.to_string()));
        }
    }

    fn nav_heights(layout: &FakeLayout) -> Vec<String> {
        layout
            .published()
            .into_iter()
            .filter(|(name, _)| name == NAV_HEIGHT_VAR)
            .map(|(_, value)| value)
            .collect()
    }

    #[test]
    fn rounds_to_nearest_pixel() {
        assert_eq!(NavHeight::from_rendered(63.4).px(), 63);
        assert_eq!(NavHeight::from_rendered(63.5).px(), 64);
        assert_eq!(NavHeight::from_rendered(72.0).px(), 72);
    }

    #[test]
    fn bogus_measurements_clamp_to_zero() {
        assert_eq!(NavHeight::from_rendered(-4.0).px(), 0);
        assert_eq!(NavHeight::from_rendered(f64::NAN).px(), 0);
        assert_eq!(NavHeight::from_rendered(f64::INFINITY).px(), 0);
    }

    #[test]
    fn publishes_variable_and_scroll_padding() {
        let sink = Recorded::default();
        NavHeight::from_rendered(80.2).publish(&sink);
        assert_eq!(
            *sink.0.borrow(),
            vec![
                ("--nav-height-dynamic".to_string(), "80px".to_string()),
                ("scroll-padding-top".to_string(), "80px".to_string()),
            ]
        );
    }

    #[test]
    fn attach_publishes_the_current_height() {
        let layout = FakeLayout::new(1200.0, 64.2);
        let _watcher = ViewportWatcher::attach(layout.clone());

        assert_eq!(layout.published().len(), 2);
        assert_eq!(nav_heights(&layout), ["64px"]);
        assert_eq!(layout.listener_count(), 2);
    }

    #[test]
    fn each_resize_republishes_once() {
        let layout = FakeLayout::new(1200.0, 64.0);
        let _watcher = ViewportWatcher::attach(layout.clone());

        layout.set_nav_height(96.6);
        layout.resize_to(600.0);
        assert_eq!(nav_heights(&layout), ["64px", "97px"]);

        layout.set_nav_height(72.0);
        layout.dispatch("orientationchange");
        assert_eq!(nav_heights(&layout), ["64px", "97px", "72px"]);

        layout.dispatch("scroll");
        assert_eq!(nav_heights(&layout).len(), 3);
    }

    #[test]
    fn fonts_loading_remeasures_while_attached() {
        let layout = FakeLayout::new(1200.0, 64.0);
        let _watcher = ViewportWatcher::attach(layout.clone());

        layout.set_nav_height(70.0);
        layout.resolve_fonts();
        assert_eq!(nav_heights(&layout), ["64px", "70px"]);
    }

    #[test]
    fn dropped_watcher_stops_listening() {
        let layout = FakeLayout::new(1200.0, 64.0);
        let watcher = ViewportWatcher::attach(layout.clone());
        drop(watcher);

        assert_eq!(layout.listener_count(), 0);
        layout.set_nav_height(90.0);
        layout.resize_to(700.0);
        layout.dispatch("orientationchange");
        assert_eq!(nav_heights(&layout), ["64px"]);
    }

    #[test]
    fn fonts_ready_after_drop_publishes_nothing() {
        let layout = FakeLayout::new(1200.0, 64.0);
        drop(ViewportWatcher::attach(layout.clone()));

        layout.set_nav_height(90.0);
        layout.resolve_fonts();
        assert_eq!(nav_heights(&layout), ["64px"]);
    }
}
