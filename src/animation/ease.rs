/// Easing curves, named after the power family used throughout the site's
/// motion design and rendered as CSS timing functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Power2Out,
    Power3Out,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Ease::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Ease::Power3Out => "cubic-bezier(0.165, 0.84, 0.44, 1)",
        }
    }
}
