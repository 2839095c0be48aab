use super::ease::Ease;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    Px(f64),
    /// Percent of the element's own height.
    Percent(f64),
}

/// Everything an entrance tween is allowed to touch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub y: Offset,
    pub scale: f64,
}

impl Pose {
    pub const NEUTRAL: Pose = Pose {
        opacity: 1.0,
        y: Offset::Px(0.0),
        scale: 1.0,
    };

    /// Transparent and shifted down by `y` pixels (up when negative).
    pub const fn hidden(y: f64) -> Pose {
        Pose {
            opacity: 0.0,
            y: Offset::Px(y),
            scale: 1.0,
        }
    }

    pub const fn scaled(self, scale: f64) -> Pose {
        Pose { scale, ..self }
    }

    pub const fn shifted_percent(percent: f64) -> Pose {
        Pose {
            opacity: 1.0,
            y: Offset::Percent(percent),
            scale: 1.0,
        }
    }

    pub fn opacity_css(&self) -> String {
        format!("{}", round3(self.opacity))
    }

    pub fn transform_css(&self) -> String {
        let mut parts = Vec::new();
        match self.y {
            Offset::Px(y) if y != 0.0 => parts.push(format!("translateY({}px)", round3(y))),
            Offset::Percent(y) if y != 0.0 => parts.push(format!("translateY({}%)", round3(y))),
            _ => {}
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", round3(self.scale)));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// CSS transition covering both animated properties.
pub fn transition_css(duration: f64, ease: Ease, delay: f64) -> String {
    let duration = round3(duration);
    let delay = round3(delay);
    let ease = ease.css();
    format!(
        "opacity {duration}s {ease} {delay}s, transform {duration}s {ease} {delay}s"
    )
}

fn round3(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
