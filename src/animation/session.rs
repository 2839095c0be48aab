use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use super::ease::Ease;
use super::pose::{transition_css, Pose};
use super::stage::{Bounds, Stage};
use super::timeline::{Position, Timeline, TweenSpec};
use crate::config::{
    DESKTOP_BREAKPOINT_PX, PARALLAX_TRAVEL_PERCENT, REVEAL_FOOTER_START, REVEAL_SECTION_START,
};

const NAVBAR_ITEMS: &str = ".navbar a, .navbar .dark-toggle, .navbar .login-btn";

/// Everything that is ever animated. Under reduced motion these are pinned
/// to their settled pose instead.
const ANIMATABLE: &[&str] = &[
    ".navbar",
    NAVBAR_ITEMS,
    ".hero-title",
    ".hero-sub",
    ".hero-cta",
    ".mock-card",
    ".feature-card",
    ".testimonial",
    ".footer",
];

const HERO_SECTION: &str = ".hero-section";
const HERO_BACKGROUND: &str = ".hero-bg";

/// A group that eases in the first time `trigger`'s top edge passes
/// `start` (fraction of viewport height, from the top).
struct Reveal {
    trigger: &'static str,
    targets: &'static str,
    from: Pose,
    duration: f64,
    stagger: f64,
    ease: Ease,
    start: f64,
}

static REVEALS: [Reveal; 3] = [
    Reveal {
        trigger: ".features-section",
        targets: ".feature-card",
        from: Pose::hidden(40.0),
        duration: 0.8,
        stagger: 0.15,
        ease: Ease::Power3Out,
        start: REVEAL_SECTION_START,
    },
    Reveal {
        trigger: ".testimonials-section",
        targets: ".testimonial",
        from: Pose::hidden(10.0),
        duration: 0.5,
        stagger: 0.12,
        ease: Ease::Power3Out,
        start: REVEAL_SECTION_START,
    },
    Reveal {
        trigger: ".footer",
        targets: ".footer",
        from: Pose::hidden(10.0),
        duration: 0.45,
        stagger: 0.0,
        ease: Ease::Power2Out,
        start: REVEAL_FOOTER_START,
    },
];

fn navbar_entrance() -> Timeline {
    Timeline::new(Ease::Power3Out)
        .add(TweenSpec::new(".navbar", Pose::hidden(-60.0), 0.6), Position::At(0.0))
        .add(
            TweenSpec::new(NAVBAR_ITEMS, Pose::hidden(-8.0), 0.45)
                .stagger(0.08)
                .ease(Ease::Power2Out),
            Position::At(0.25),
        )
}

fn hero_entrance() -> Timeline {
    Timeline::new(Ease::Power3Out)
        .add(TweenSpec::new(".hero-title", Pose::hidden(14.0), 0.6), Position::Append)
        .add(TweenSpec::new(".hero-sub", Pose::hidden(10.0), 0.55), Position::Overlap(0.35))
        .add(
            TweenSpec::new(".hero-cta", Pose::hidden(6.0).scaled(0.995), 0.45).stagger(0.09),
            Position::Overlap(0.28),
        )
}

/// Scroll progress through the hero: 0 while its top is at or below the
/// viewport top, 1 once its bottom has passed the viewport top.
pub fn parallax_progress(section: Bounds) -> f64 {
    if section.height <= 0.0 {
        return 0.0;
    }
    (-section.top / section.height).clamp(0.0, 1.0)
}

pub fn reveal_due(trigger_top: f64, viewport_height: f64, start: f64) -> bool {
    trigger_top <= viewport_height * start
}

fn apply<S: Stage>(stage: &S, node: &S::Node, pose: Pose, transition: &str) {
    stage.set_style(node, "transition", transition);
    stage.set_style(node, "opacity", &pose.opacity_css());
    stage.set_style(node, "transform", &pose.transform_css());
}

struct ArmedReveal<S: Stage> {
    trigger: S::Node,
    targets: Vec<S::Node>,
    reveal: &'static Reveal,
    fired: bool,
}

impl<S: Stage> ArmedReveal<S> {
    fn fire(&mut self, stage: &S) {
        debug!("Revealing {}", self.reveal.targets);
        for (index, node) in self.targets.iter().enumerate() {
            stage.reflow(node);
            let delay = self.reveal.stagger * index as f64;
            let transition = transition_css(self.reveal.duration, self.reveal.ease, delay);
            apply(stage, node, Pose::NEUTRAL, &transition);
        }
        self.fired = true;
    }
}

struct Parallax<S: Stage> {
    section: S::Node,
    layer: S::Node,
}

/// What the scroll subscription drives.
struct ScrollWork<S: Stage> {
    stage: S,
    reveals: Vec<ArmedReveal<S>>,
    parallax: Option<Parallax<S>>,
}

impl<S: Stage> ScrollWork<S> {
    fn update(&mut self) {
        let viewport = self.stage.viewport();
        for armed in self.reveals.iter_mut().filter(|armed| !armed.fired) {
            let top = self.stage.bounds(&armed.trigger).top;
            if reveal_due(top, viewport.height, armed.reveal.start) {
                armed.fire(&self.stage);
            }
        }
        if let Some(parallax) = &self.parallax {
            let progress = parallax_progress(self.stage.bounds(&parallax.section));
            let pose = Pose::shifted_percent(PARALLAX_TRAVEL_PERCENT * progress);
            self.stage.set_style(&parallax.layer, "transform", &pose.transform_css());
        }
    }

    fn is_idle(&self) -> bool {
        self.parallax.is_none() && self.reveals.iter().all(|armed| armed.fired)
    }
}

/// Entrance and scroll animations for one mount of the landing page.
///
/// Every element the session writes to has its original inline style
/// journaled first; [`AnimationSession::revert`] (also run on drop) detaches
/// the scroll subscription and restores the journal, so the next session
/// starts from the untouched markup.
///
/// The scroll subscription is shared with its own callback, which releases
/// it once every reveal has fired and there is no parallax to drive.
pub struct AnimationSession<S: Stage> {
    stage: S,
    journal: Vec<(S::Node, Option<String>)>,
    scroll: Rc<RefCell<Option<S::Subscription>>>,
}

impl<S: Stage> AnimationSession<S> {
    pub fn start(stage: S) -> Self {
        let mut session = Self {
            stage,
            journal: Vec::new(),
            scroll: Rc::new(RefCell::new(None)),
        };

        if session.stage.prefers_reduced_motion() {
            debug!("Reduced motion requested, skipping animations");
            session.settle_everything();
            return session;
        }

        session.play(&navbar_entrance());
        session.play(&hero_entrance());

        let parallax = session.arm_parallax();
        let reveals = session.arm_reveals();
        let mut work = ScrollWork {
            stage: session.stage.clone(),
            reveals,
            parallax,
        };
        work.update();
        if !work.is_idle() {
            let slot = Rc::downgrade(&session.scroll);
            let subscription = session.stage.subscribe_scroll(Box::new(move || {
                work.update();
                if !work.is_idle() {
                    return;
                }
                // wasm-bindgen defers freeing a closure dropped mid-call
                if let Some(slot) = slot.upgrade() {
                    let released = slot.borrow_mut().take();
                    if released.is_some() {
                        debug!("All reveals fired, releasing the scroll listener");
                    }
                }
            }));
            *session.scroll.borrow_mut() = subscription;
        }
        session
    }

    pub fn is_listening(&self) -> bool {
        self.scroll.borrow().is_some()
    }

    pub fn revert(&mut self) {
        let released = self.scroll.borrow_mut().take();
        drop(released);
        while let Some((node, original)) = self.journal.pop() {
            self.stage.restore_style_attribute(&node, original.as_deref());
        }
    }

    fn touch(&mut self, node: &S::Node) {
        if self.journal.iter().any(|(seen, _)| seen == node) {
            return;
        }
        let original = self.stage.style_attribute(node);
        self.journal.push((node.clone(), original));
    }

    fn settle_everything(&mut self) {
        for selector in ANIMATABLE {
            for node in self.stage.select(selector) {
                self.touch(&node);
                apply(&self.stage, &node, Pose::NEUTRAL, "none");
            }
        }
    }

    fn play(&mut self, timeline: &Timeline) {
        let matched: Vec<Vec<S::Node>> = timeline
            .steps()
            .map(|spec| self.stage.select(spec.selector))
            .collect();
        for slot in timeline.schedule(|step| matched[step].len()) {
            let node = &matched[slot.step][slot.index];
            let spec = timeline.step(slot.step);
            self.touch(node);
            apply(&self.stage, node, spec.from, "none");
            self.stage.reflow(node);
            let transition = transition_css(slot.duration, slot.ease, slot.delay);
            apply(&self.stage, node, Pose::NEUTRAL, &transition);
        }
    }

    fn arm_parallax(&mut self) -> Option<Parallax<S>> {
        if self.stage.viewport().width < DESKTOP_BREAKPOINT_PX {
            return None;
        }
        let layer = self.stage.select(HERO_BACKGROUND).into_iter().next()?;
        let section = self.stage.select(HERO_SECTION).into_iter().next()?;
        self.touch(&layer);
        self.stage.set_style(&layer, "will-change", "transform");
        Some(Parallax { section, layer })
    }

    fn arm_reveals(&mut self) -> Vec<ArmedReveal<S>> {
        let mut armed = Vec::new();
        for reveal in REVEALS.iter() {
            let Some(trigger) = self.stage.select(reveal.trigger).into_iter().next() else {
                debug!("No {} on the page, skipping its reveal", reveal.trigger);
                continue;
            };
            let targets = self.stage.select(reveal.targets);
            if targets.is_empty() {
                continue;
            }
            for node in &targets {
                self.touch(node);
                apply(&self.stage, node, reveal.from, "none");
            }
            armed.push(ArmedReveal {
                trigger,
                targets,
                reveal,
                fired: false,
            });
        }
        armed
    }
}

impl<S: Stage> Drop for AnimationSession<S> {
    fn drop(&mut self) {
        self.revert();
    }
}
