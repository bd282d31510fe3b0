use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::dom;

/// Open/closed state of the slide-out menu. Page scroll is locked exactly
/// while the menu is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    is_open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn scroll_locked(&self) -> bool {
        self.is_open
    }

    pub fn toggled(self) -> Self {
        Self { is_open: !self.is_open }
    }

    pub fn closed(self) -> Self {
        Self { is_open: false }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    Close,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            MenuAction::Toggle => Rc::new(self.toggled()),
            // Closing a closed menu keeps the same state so nothing re-renders
            MenuAction::Close if !self.is_open => self,
            MenuAction::Close => Rc::new(self.closed()),
        }
    }
}

/// Widening to the desktop layout closes the menu; the breakpoint is inclusive.
pub fn closes_on_resize(width: f64) -> bool {
    width >= config::MOBILE_BREAKPOINT
}

/// A window click closes an open menu unless it landed on the trigger or
/// inside the menu itself.
pub fn click_action(is_open: bool, in_trigger: bool, in_menu: bool) -> Option<MenuAction> {
    (is_open && !in_trigger && !in_menu).then_some(MenuAction::Close)
}

fn contains(node: &NodeRef, target: &Node) -> bool {
    node.get().map_or(false, |n| n.contains(Some(target)))
}

/// Drives the mobile menu. The menu force-closes on a click outside both
/// `trigger` and `menu` and when the viewport widens to the desktop layout.
#[hook]
pub fn use_mobile_menu(trigger: NodeRef, menu: NodeRef) -> UseReducerHandle<MenuState> {
    let state = use_reducer(MenuState::default);

    {
        let locked = state.scroll_locked();
        use_effect_with_deps(
            move |locked| {
                let locked = *locked;
                dom::set_scroll_locked(locked);
                move || {
                    if locked {
                        dom::set_scroll_locked(false);
                    }
                }
            },
            locked,
        );
    }

    {
        let state = state.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            if !state.is_open() {
                return;
            }
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            let action = click_action(
                state.is_open(),
                contains(&trigger, &target),
                contains(&menu, &target),
            );
            if let Some(action) = action {
                debug!("click outside mobile menu, closing");
                state.dispatch(action);
            }
        });
    }

    {
        let state = state.clone();
        use_event_with_window("resize", move |_: Event| {
            if dom::inner_width().map_or(false, closes_on_resize) {
                state.dispatch(MenuAction::Close);
            }
        });
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: MenuState, action: MenuAction) -> MenuState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn starts_closed_and_unlocked() {
        let state = MenuState::default();
        assert!(!state.is_open());
        assert!(!state.scroll_locked());
    }

    #[test]
    fn toggle_is_self_inverse() {
        let start = MenuState::default();
        let once = reduce(start, MenuAction::Toggle);
        assert!(once.is_open());
        assert!(once.scroll_locked());

        let twice = reduce(once, MenuAction::Toggle);
        assert_eq!(twice, start);
        assert_eq!(twice.is_open(), twice.scroll_locked());
    }

    #[test]
    fn close_is_idempotent() {
        let closed = Rc::new(MenuState::default());
        let again = closed.clone().reduce(MenuAction::Close);
        assert!(Rc::ptr_eq(&closed, &again));

        let open = reduce(MenuState::default(), MenuAction::Toggle);
        let shut = reduce(open, MenuAction::Close);
        assert!(!shut.is_open());
        assert!(!shut.scroll_locked());
    }

    #[test]
    fn resize_closes_from_the_breakpoint_up() {
        assert!(!closes_on_resize(767.9));
        assert!(closes_on_resize(768.0));
        assert!(closes_on_resize(1024.0));
    }

    #[test]
    fn only_clicks_outside_trigger_and_menu_close() {
        // trigger click is left to the toggle handler
        assert_eq!(click_action(true, true, false), None);
        assert_eq!(click_action(true, false, true), None);
        assert_eq!(click_action(true, false, false), Some(MenuAction::Close));
        assert_eq!(click_action(false, false, false), None);
    }
}
