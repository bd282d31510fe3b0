use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

pub fn reveal_classes(revealed: bool) -> &'static str {
    if revealed {
        "opacity-100 translate-y-0 transition-all duration-700"
    } else {
        "opacity-0 translate-y-8 transition-all duration-700"
    }
}

/// Once revealed, an element stays revealed whatever later entries say.
pub fn next_revealed(revealed: bool, intersecting: bool) -> bool {
    revealed || intersecting
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub revealed: bool,
}

impl Reducible for RevealState {
    /// Whether the latest observer batch had an intersecting entry.
    type Action = bool;

    fn reduce(self: Rc<Self>, intersecting: bool) -> Rc<Self> {
        let revealed = next_revealed(self.revealed, intersecting);
        if revealed == self.revealed {
            return self;
        }
        Rc::new(Self { revealed })
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe(element: &Element, state: UseReducerHandle<RevealState>) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = ObserverCallback::new(move |entries: Array, _observer: IntersectionObserver| {
        let visible = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        state.dispatch(visible);
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
    observer.observe(element);
    Some((observer, callback))
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and slides its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reducer(RevealState::default);

    {
        let node = node.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| observe(&element, state));
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!(props.class.clone(), reveal_classes(state.revealed))}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revealed_elements_settle_in_place() {
        assert!(reveal_classes(false).contains("opacity-0 translate-y-8"));
        assert!(reveal_classes(true).contains("opacity-100 translate-y-0"));
    }

    #[test]
    fn leaving_the_viewport_does_not_hide_again() {
        let hidden = Rc::new(RevealState::default());
        let still_hidden = hidden.clone().reduce(false);
        assert!(Rc::ptr_eq(&hidden, &still_hidden));

        let shown = still_hidden.reduce(true);
        assert!(shown.revealed);

        let after_exit = shown.clone().reduce(false);
        assert!(after_exit.revealed);
        assert!(Rc::ptr_eq(&shown, &after_exit));

        assert!(next_revealed(true, false));
        assert!(!next_revealed(false, false));
    }
}
