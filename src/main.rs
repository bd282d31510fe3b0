use log::info;
use yew::prelude::*;

mod config;
mod content;
mod dom;
mod components {
    pub mod accordion;
    pub mod contact;
    pub mod fade_image;
    pub mod gallery;
    pub mod mobile_menu;
    pub mod nav;
    pub mod reveal;
    pub mod tabs;
}
mod pages {
    pub mod home;
}

use components::gallery::{GalleryHost, GalleryOpener, GallerySlot};
use components::nav::{use_scroll_tracker, Nav, NavItem, ScrollNavigator};
use pages::home::Home;

fn nav_items() -> Vec<NavItem> {
    [
        ("home", "Home"),
        ("about", "About"),
        ("camping", "Campsites"),
        ("gallery", "Gallery"),
        ("faq", "FAQ"),
        ("contact", "Contact"),
    ]
    .into_iter()
    .map(|(section, label)| NavItem {
        section: section.into(),
        label: label.into(),
    })
    .collect()
}

#[function_component]
fn App() -> Html {
    let content = use_memo(|_| content::load(), ());
    let scroll = use_scroll_tracker();
    let gallery = use_reducer(GallerySlot::default);

    let navigator = ScrollNavigator { state: scroll };
    let opener = GalleryOpener(gallery);

    html! {
        <ContextProvider<ScrollNavigator> context={navigator}>
            <ContextProvider<GalleryOpener> context={opener}>
                <Nav brand={content.brand.clone()} items={nav_items()} />
                <Home content={content.clone()} />
                <GalleryHost />
            </ContextProvider<GalleryOpener>>
        </ContextProvider<ScrollNavigator>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
