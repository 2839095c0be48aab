use super::ease::Ease;
use super::pose::Pose;

/// Where a step starts relative to what is already on the timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// When the timeline currently ends.
    Append,
    /// This many seconds before the timeline currently ends.
    Overlap(f64),
    /// Absolute time in seconds.
    At(f64),
}

/// A "from" tween: every element matched by `selector` starts at `from` and
/// settles at [`Pose::NEUTRAL`].
#[derive(Clone, Debug, PartialEq)]
pub struct TweenSpec {
    pub selector: &'static str,
    pub from: Pose,
    pub duration: f64,
    pub stagger: f64,
    pub ease: Option<Ease>,
}

impl TweenSpec {
    pub fn new(selector: &'static str, from: Pose, duration: f64) -> Self {
        Self {
            selector,
            from,
            duration,
            stagger: 0.0,
            ease: None,
        }
    }

    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    /// Time from the first element starting to the last one settling.
    pub fn span(&self, count: usize) -> f64 {
        match count {
            0 => 0.0,
            n => self.duration + self.stagger * (n - 1) as f64,
        }
    }
}

/// One element's slot in a resolved timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scheduled {
    pub step: usize,
    pub index: usize,
    pub delay: f64,
    pub duration: f64,
    pub ease: Ease,
}

pub struct Timeline {
    default_ease: Ease,
    steps: Vec<(TweenSpec, Position)>,
}

impl Timeline {
    pub fn new(default_ease: Ease) -> Self {
        Self {
            default_ease,
            steps: Vec::new(),
        }
    }

    pub fn add(mut self, spec: TweenSpec, position: Position) -> Self {
        self.steps.push((spec, position));
        self
    }

    pub fn steps(&self) -> impl Iterator<Item = &TweenSpec> {
        self.steps.iter().map(|(spec, _)| spec)
    }

    pub fn step(&self, index: usize) -> &TweenSpec {
        &self.steps[index].0
    }

    /// Resolves every step to absolute delays given how many elements each
    /// step matched. Steps that matched nothing are skipped and take no time.
    pub fn schedule(&self, count: impl Fn(usize) -> usize) -> Vec<Scheduled> {
        let mut scheduled = Vec::new();
        let mut end: f64 = 0.0;
        for (step, (spec, position)) in self.steps.iter().enumerate() {
            let matched = count(step);
            if matched == 0 {
                continue;
            }
            let start = match *position {
                Position::Append => end,
                Position::Overlap(seconds) => (end - seconds).max(0.0),
                Position::At(seconds) => seconds,
            };
            let ease = spec.ease.unwrap_or(self.default_ease);
            for index in 0..matched {
                scheduled.push(Scheduled {
                    step,
                    index,
                    delay: start + spec.stagger * index as f64,
                    duration: spec.duration,
                    ease,
                });
            }
            end = end.max(start + spec.span(matched));
        }
        scheduled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Timeline {
        Timeline::new(Ease::Power3Out)
            .add(TweenSpec::new(".title", Pose::hidden(14.0), 0.6), Position::Append)
            .add(TweenSpec::new(".sub", Pose::hidden(10.0), 0.55), Position::Overlap(0.35))
            .add(
                TweenSpec::new(".cta", Pose::hidden(6.0), 0.45).stagger(0.09),
                Position::Overlap(0.28),
            )
    }

    fn delays(schedule: &[Scheduled]) -> Vec<f64> {
        schedule
            .iter()
            .map(|s| (s.delay * 1000.0).round() / 1000.0)
            .collect()
    }

    #[test]
    fn overlapping_steps_chain_off_the_timeline_end() {
        let counts = [1, 1, 2];
        let schedule = hero().schedule(|step| counts[step]);
        assert_eq!(delays(&schedule), vec![0.0, 0.25, 0.52, 0.61]);
        assert!(schedule.iter().all(|s| s.ease == Ease::Power3Out));
    }

    #[test]
    fn empty_steps_take_no_time() {
        let counts = [1, 0, 1];
        let schedule = hero().schedule(|step| counts[step]);
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule[1].step, 2);
        assert_eq!(delays(&schedule), vec![0.0, 0.32]);
    }

    #[test]
    fn absolute_positions_and_own_ease_win() {
        let timeline = Timeline::new(Ease::Power3Out)
            .add(TweenSpec::new(".bar", Pose::hidden(-60.0), 0.6), Position::At(0.0))
            .add(
                TweenSpec::new(".item", Pose::hidden(-8.0), 0.45)
                    .stagger(0.08)
                    .ease(Ease::Power2Out),
                Position::At(0.25),
            );
        let schedule = timeline.schedule(|step| [1, 3][step]);
        assert_eq!(delays(&schedule), vec![0.0, 0.25, 0.33, 0.41]);
        assert_eq!(schedule[3].ease, Ease::Power2Out);
    }

    #[test]
    fn nothing_matched_means_nothing_scheduled() {
        assert!(hero().schedule(|_| 0).is_empty());
    }
}
