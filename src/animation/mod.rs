//! Entrance and scroll-linked animations for the landing page.
//!
//! Motion is expressed as CSS transitions written to inline styles: a tween
//! snaps an element to its "from" pose, forces layout, then writes the
//! neutral pose together with a transition carrying the duration, easing and
//! delay. Scheduling lives in [`timeline`], the DOM behind the
//! [`stage::Stage`] trait, and the lifecycle in [`AnimationSession`].

pub mod ease;
pub mod pose;
pub mod session;
pub mod stage;
pub mod timeline;
pub mod web;

#[cfg(test)]
pub mod fake;

pub use session::AnimationSession;
pub use web::WebStage;
