use yew::prelude::*;

pub fn content_id(id: &str) -> String {
    format!("{}-content", id)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: bool,
}

impl AccordionState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn glyph(&self) -> &'static str {
        if self.open {
            "−"
        } else {
            "+"
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionItemProps {
    pub id: AttrValue,
    pub question: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AccordionItem)]
pub fn accordion_item(props: &AccordionItemProps) -> Html {
    let state = use_state(AccordionState::default);

    let toggle = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = *state;
            next.toggle();
            state.set(next);
        })
    };

    html! {
        <div class="bg-white rounded-xl shadow-md overflow-hidden">
            <button class="w-full flex justify-between items-center px-6 py-4 text-left font-semibold text-gray-800"
                aria-expanded={state.is_open().to_string()}
                onclick={toggle}>
                <span>{&props.question}</span>
                <span class="accordion-icon text-2xl text-secondary">{state.glyph()}</span>
            </button>
            <div id={content_id(&props.id)}
                class={classes!("px-6", "pb-4", "text-gray-600", (!state.is_open()).then_some("hidden"))}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_restores_collapsed_state() {
        let mut faq1 = AccordionState::default();
        assert_eq!(faq1.glyph(), "+");

        faq1.toggle();
        assert!(faq1.is_open());
        assert_eq!(faq1.glyph(), "\u{2212}");

        faq1.toggle();
        assert!(!faq1.is_open());
        assert_eq!(faq1.glyph(), "+");
        assert_eq!(content_id("faq1"), "faq1-content");
    }
}
