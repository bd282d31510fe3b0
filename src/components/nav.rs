use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::mobile_menu::{use_mobile_menu, MenuAction};
use crate::config;
use crate::dom;

/// Vertical extent of one page section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Picks the section the navbar should highlight for a given scroll offset.
///
/// Near the top of the page the home section always wins. Otherwise the marker
/// point sits just under the navbar and the last section (in document order)
/// whose range contains it is current.
pub fn current_section(page_y: f64, sections: &[SectionBounds]) -> Option<String> {
    if page_y < config::HOME_THRESHOLD {
        return Some(config::HOME_SECTION.to_string());
    }
    let marker = page_y + config::NAV_SCROLL_OFFSET;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(marker))
        .map(|section| section.id.clone())
}

pub fn is_scrolled(page_y: f64) -> bool {
    page_y > config::SHADOW_THRESHOLD
}

pub fn shadow_class(scrolled: bool) -> &'static str {
    if scrolled {
        "shadow-lg"
    } else {
        "shadow-md"
    }
}

/// Only what the navbar renders, so scrolling within a section does not
/// produce a new state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub section: Option<String>,
    pub scrolled: bool,
}

impl ScrollState {
    pub fn measure(page_y: f64, sections: &[SectionBounds]) -> Self {
        Self {
            section: current_section(page_y, sections),
            scrolled: is_scrolled(page_y),
        }
    }

    /// Optimistic highlight before a smooth scroll settles.
    pub fn highlighted(&self, section: &str) -> Self {
        Self {
            section: Some(section.to_string()),
            scrolled: self.scrolled,
        }
    }

    pub fn is_active(&self, section: &str) -> bool {
        self.section.as_deref() == Some(section)
    }
}

fn refresh(state: &UseStateHandle<ScrollState>) {
    state.set(ScrollState::measure(dom::page_y_offset(), &dom::section_bounds()));
}

/// Tracks the current section and scroll offset, re-measured on every window
/// scroll and once after mount.
#[hook]
pub fn use_scroll_tracker() -> UseStateHandle<ScrollState> {
    let state = use_state_eq(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let state = state.clone();
                        move || refresh(&state)
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        warn!("failed to register scroll listener: {:?}", e);
                    }
                    // Initial highlight on load
                    refresh(&state);
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    state
}

/// Page-wide scroll navigation, shared with every in-page anchor.
#[derive(Clone, PartialEq)]
pub struct ScrollNavigator {
    pub state: UseStateHandle<ScrollState>,
}

impl ScrollNavigator {
    /// Smooth-scrolls to `section` and re-measures once the scroll has had
    /// time to land. Unknown targets are ignored.
    pub fn scroll_to(&self, section: &str) {
        if !dom::scroll_to_section(section) {
            return;
        }
        let state = self.state.clone();
        Timeout::new(config::REHIGHLIGHT_MS, move || refresh(&state)).forget();
    }

    pub fn highlight(&self, section: &str) {
        self.state.set(self.state.highlighted(section));
    }
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub to: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// An in-page `#section` link that scrolls smoothly instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let navigator = use_context::<ScrollNavigator>();

    let onclick = {
        let to = props.to.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            match &navigator {
                Some(navigator) => navigator.scroll_to(&to),
                None => debug!("no scroll navigator for #{}", to),
            }
        })
    };

    html! {
        <a href={format!("#{}", props.to)} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub section: AttrValue,
    pub label: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: AttrValue,
    pub items: Vec<NavItem>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { brand, items } = props;
    let navigator = use_context::<ScrollNavigator>();
    let hamburger = use_node_ref();
    let mobile_menu = use_node_ref();
    let menu = use_mobile_menu(hamburger.clone(), mobile_menu.clone());

    let scroll = navigator
        .as_ref()
        .map(|navigator| (*navigator.state).clone())
        .unwrap_or_default();

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    // Highlight at once, then scroll. Any nav click also closes the mobile menu.
    let link_click = |section: AttrValue| {
        let navigator = navigator.clone();
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Close);
            if let Some(navigator) = &navigator {
                navigator.highlight(&section);
                navigator.scroll_to(&section);
            }
        })
    };

    let link_class = |base: &'static str, section: &AttrValue| {
        classes!(
            base,
            scroll.is_active(section).then_some("active")
        )
    };

    html! {
        <nav class={classes!("fixed", "top-0", "inset-x-0", "z-40", "bg-white", shadow_class(scroll.scrolled))}>
            <div class="container mx-auto px-4 flex items-center justify-between h-16">
                <a href="#home" class="text-2xl font-bold text-primary"
                    onclick={link_click(AttrValue::from(config::HOME_SECTION))}>
                    {brand}
                </a>

                <div class="hidden md:flex items-center space-x-8">
                    { for items.iter().map(|item| html! {
                        <a href={format!("#{}", item.section)}
                            class={link_class("nav-link", &item.section)}
                            data-section={item.section.clone()}
                            onclick={link_click(item.section.clone())}>
                            {&item.label}
                        </a>
                    }) }
                </div>

                <button id="hamburger" ref={hamburger}
                    class={classes!("hamburger", "md:hidden", menu.is_open().then_some("active"))}
                    aria-label="Toggle menu"
                    onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div id="mobileMenu" ref={mobile_menu}
                class={classes!("md:hidden", "bg-white", "border-t", (!menu.is_open()).then_some("hidden"))}>
                <div class="flex flex-col px-4 py-2">
                    { for items.iter().map(|item| html! {
                        <a href={format!("#{}", item.section)}
                            class={link_class("nav-link-mobile", &item.section)}
                            data-section={item.section.clone()}
                            onclick={link_click(item.section.clone())}>
                            {&item.label}
                        </a>
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn page() -> Vec<SectionBounds> {
        [("home", 0.0, 700.0), ("about", 700.0, 600.0), ("camping", 1300.0, 900.0), ("contact", 2200.0, 500.0)]
            .into_iter()
            .map(|(id, top, height)| SectionBounds { id: id.to_string(), top, height })
            .collect()
    }

    #[test]
    fn near_the_top_is_always_home() {
        assert_eq!(current_section(0.0, &[]), Some("home".to_string()));
        assert_eq!(current_section(199.9, &page()), Some("home".to_string()));
    }

    #[test]
    fn marker_sits_under_the_navbar() {
        // 650 + 100 lands in about, even though 650 itself is still in home
        assert_eq!(current_section(650.0, &page()), Some("about".to_string()));
        assert_eq!(current_section(1199.0, &page()), Some("about".to_string()));
        assert_eq!(current_section(1200.0, &page()), Some("camping".to_string()));
    }

    #[test]
    fn range_end_is_exclusive() {
        assert_eq!(current_section(600.0, &page()), Some("about".to_string()));
        assert_eq!(current_section(599.0, &page()), Some("home".to_string()));
    }

    #[test]
    fn overlapping_sections_resolve_to_the_later_one() {
        let sections = vec![
            SectionBounds { id: "outer".into(), top: 0.0, height: 5000.0 },
            SectionBounds { id: "inner".into(), top: 1000.0, height: 500.0 },
        ];
        assert_eq!(current_section(1000.0, &sections), Some("inner".to_string()));
        assert_eq!(current_section(2000.0, &sections), Some("outer".to_string()));
    }

    #[test]
    fn past_the_last_section_nothing_is_current() {
        assert_eq!(current_section(5000.0, &page()), None);
    }

    #[test]
    fn shadow_deepens_after_scrolling() {
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(100.5));
        assert_eq!(shadow_class(false), "shadow-md");
        assert_eq!(shadow_class(true), "shadow-lg");
    }

    #[test]
    fn optimistic_highlight_keeps_offset() {
        let state = ScrollState::measure(900.0, &page());
        assert!(state.is_active("about"));
        let clicked = state.highlighted("contact");
        assert!(clicked.is_active("contact"));
        assert!(!clicked.is_active("about"));
        assert!(clicked.scrolled);
    }

    #[test]
    fn scrolling_within_a_section_keeps_the_same_state() {
        assert_eq!(ScrollState::measure(720.0, &page()), ScrollState::measure(1050.0, &page()));
        assert_ne!(ScrollState::measure(50.0, &page()), ScrollState::measure(150.0, &page()));
    }

    proptest! {
        #[test]
        fn at_most_one_section_is_current(page_y in 200.0f64..4000.0) {
            let sections = page();
            let marker = page_y + config::NAV_SCROLL_OFFSET;
            let containing = sections.iter().filter(|s| s.contains(marker)).count();
            match current_section(page_y, &sections) {
                Some(id) => {
                    prop_assert_eq!(containing, 1);
                    prop_assert!(sections.iter().any(|s| s.id == id && s.contains(marker)));
                }
                None => prop_assert_eq!(containing, 0),
            }
        }

        #[test]
        fn home_wins_below_threshold(page_y in 0.0f64..200.0, top in 0.0f64..400.0) {
            let sections = vec![SectionBounds { id: "about".into(), top, height: 1000.0 }];
            prop_assert_eq!(current_section(page_y, &sections), Some("home".to_string()));
        }
    }
}
