/// Element box relative to the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// The surface animations are played on. Queries are scoped to whatever
/// root the stage was built for; a selector that matches nothing yields an
/// empty vec, never an error.
pub trait Stage: Clone + 'static {
    type Node: Clone + PartialEq + 'static;
    /// Dropping it detaches the scroll callback.
    type Subscription: 'static;

    fn select(&self, selector: &str) -> Vec<Self::Node>;
    fn style_attribute(&self, node: &Self::Node) -> Option<String>;
    fn restore_style_attribute(&self, node: &Self::Node, value: Option<&str>);
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);
    /// Forces layout so a following style write transitions instead of
    /// snapping.
    fn reflow(&self, node: &Self::Node);
    fn bounds(&self, node: &Self::Node) -> Bounds;
    fn viewport(&self) -> Viewport;
    fn prefers_reduced_motion(&self) -> bool;
    fn subscribe_scroll(&self, on_scroll: Box<dyn FnMut()>) -> Option<Self::Subscription>;
}
