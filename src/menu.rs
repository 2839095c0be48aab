use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::config::{DESKTOP_BREAKPOINT_PX, MENU_FADE_IN_SECS, MENU_FADE_OUT_SECS};
use crate::dom::WindowEvents;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuEvent {
    Toggle,
    LinkActivated,
    Resized(f64),
}

impl MenuState {
    pub fn next(self, event: MenuEvent) -> MenuState {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, MenuEvent::Toggle) => MenuState::Closed,
            (MenuState::Open, MenuEvent::LinkActivated) => MenuState::Closed,
            (MenuState::Open, MenuEvent::Resized(width)) if width > DESKTOP_BREAKPOINT_PX => {
                MenuState::Closed
            }
            (state, _) => state,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Inline style for the drawer. The closed drawer stays in the layout
    /// but never intercepts pointer input.
    pub fn drawer_style(self) -> String {
        match self {
            MenuState::Open => format!(
                "opacity: 1; transition: opacity {}s ease-out;",
                MENU_FADE_IN_SECS
            ),
            MenuState::Closed => format!(
                "opacity: 0; pointer-events: none; transition: opacity {}s ease-in;",
                MENU_FADE_OUT_SECS
            ),
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuEvent;

    fn reduce(self: Rc<Self>, action: MenuEvent) -> Rc<Self> {
        let next = (*self).next(action);
        if next == *self {
            self
        } else {
            debug!("Menu {:?} -> {:?} on {:?}", *self, next, action);
            Rc::new(next)
        }
    }
}

/// Feeds every window resize to the menu as [`MenuEvent::Resized`], so an
/// open drawer closes once the window grows past the breakpoint.
pub fn follow_resizes<W: WindowEvents>(
    window: &W,
    dispatch: impl Fn(MenuEvent) + 'static,
) -> Option<W::Subscription> {
    let source = window.clone();
    window.listen(
        "resize",
        Box::new(move || {
            if let Some(width) = source.width() {
                dispatch(MenuEvent::Resized(width));
            }
        }),
    )
}
