use yew::prelude::*;

use crate::config;

const ACTIVE_BUTTON: &str = "bg-secondary text-white";
const IDLE_BUTTON: &str = "text-gray-700 hover:bg-gray-100";

pub fn panel_id(name: &str) -> String {
    format!("content-{}", name)
}

pub fn button_id(name: &str) -> String {
    format!("tab-{}", name)
}

/// Which tab is showing. Names are not validated: selecting one with no
/// panel leaves every panel hidden and no button highlighted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabSelection {
    selected: String,
}

impl TabSelection {
    pub fn new(name: &str) -> Self {
        Self {
            selected: name.to_string(),
        }
    }

    pub fn show(&mut self, name: &str) {
        self.selected = name.to_string();
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.selected == name
    }

    pub fn panel_classes(&self, name: &str) -> Classes {
        classes!("tab-content", (!self.is_active(name)).then_some("hidden"))
    }

    pub fn button_classes(&self, name: &str) -> Classes {
        let state = if self.is_active(name) {
            ACTIVE_BUTTON
        } else {
            IDLE_BUTTON
        };
        classes!("tab-button", "px-6", "py-3", "rounded-lg", "font-semibold", "transition-all", state)
    }
}

#[derive(Clone, PartialEq)]
pub struct Tab {
    pub name: AttrValue,
    pub label: AttrValue,
    pub body: Html,
}

#[derive(Properties, PartialEq)]
pub struct TabsProps {
    pub tabs: Vec<Tab>,
    #[prop_or(AttrValue::from(config::DEFAULT_TAB))]
    pub default: AttrValue,
}

#[function_component(Tabs)]
pub fn tabs(props: &TabsProps) -> Html {
    let selection = use_state({
        let default = props.default.clone();
        move || TabSelection::new(&default)
    });

    let show_tab = |name: AttrValue| {
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*selection).clone();
            next.show(&name);
            selection.set(next);
        })
    };

    html! {
        <div>
            <div class="flex flex-wrap justify-center gap-2 mb-8">
                { for props.tabs.iter().map(|tab| html! {
                    <button id={button_id(&tab.name)}
                        class={selection.button_classes(&tab.name)}
                        onclick={show_tab(tab.name.clone())}>
                        {&tab.label}
                    </button>
                }) }
            </div>
            { for props.tabs.iter().map(|tab| html! {
                <div id={panel_id(&tab.name)} class={selection.panel_classes(&tab.name)}>
                    { tab.body.clone() }
                </div>
            }) }
        </div>
    }
}
