use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::dom;

const GREETING: &str = "Hello! I'm interested in booking a camping experience.";

/// The contact form's fields, taken verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// The chat text. The email line only appears when one was given.
    pub fn compose(&self) -> String {
        let mut text = format!("{}\n\nName: {}\nPhone: {}", GREETING, self.name, self.phone);
        if !self.email.is_empty() {
            text.push_str(&format!("\nEmail: {}", self.email));
        }
        text.push_str(&format!("\nMessage: {}", self.message));
        text
    }

    pub fn deep_link(&self, base: &str) -> String {
        format!("{}?text={}", base, urlencoding::encode(&self.compose()))
    }

    /// Builds the outbound link and clears the draft.
    pub fn submit(&mut self, base: &str) -> String {
        std::mem::take(self).deep_link(base)
    }
}

#[derive(Clone, Copy)]
enum Field {
    Name,
    Phone,
    Email,
    Message,
}

impl Field {
    fn slot(self, draft: &mut ContactMessage) -> &mut String {
        match self {
            Field::Name => &mut draft.name,
            Field::Phone => &mut draft.phone,
            Field::Email => &mut draft.email,
            Field::Message => &mut draft.message,
        }
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(ContactMessage::default);
    let banner_visible = use_state_eq(|| false);
    let banner_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let on_input = |field: Field| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            *field.slot(&mut next) = input.value();
            draft.set(next);
        })
    };

    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            *Field::Message.slot(&mut next) = input.value();
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let banner_visible = banner_visible.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut submitted = (*draft).clone();
            let link = submitted.submit(&config::messaging_url());
            info!("handing contact form over to chat");
            dom::open_in_new_context(&link);

            draft.set(submitted);
            banner_visible.set(true);
            let banner_visible = banner_visible.clone();
            *banner_timer.borrow_mut() = Some(Timeout::new(config::BANNER_HIDE_MS, move || {
                banner_visible.set(false)
            }));
        })
    };

    let input_class = "w-full px-4 py-3 rounded-lg bg-white bg-opacity-20 border border-white border-opacity-30 text-white placeholder-white placeholder-opacity-70 focus:outline-none focus:ring-2 focus:ring-white";

    html! {
        <form id="contactForm" class="space-y-4" {onsubmit}>
            <input id="name" type="text" required=true placeholder="Your Name"
                class={input_class}
                value={draft.name.clone()}
                oninput={on_input(Field::Name)} />
            <input id="phone" type="tel" required=true placeholder="Phone Number"
                class={input_class}
                value={draft.phone.clone()}
                oninput={on_input(Field::Phone)} />
            <input id="email" type="email" placeholder="Email (optional)"
                class={input_class}
                value={draft.email.clone()}
                oninput={on_input(Field::Email)} />
            <textarea id="message" rows="4" placeholder="Tell us about your plans"
                class={input_class}
                value={draft.message.clone()}
                oninput={on_message} />
            <button type="submit"
                class="w-full bg-white text-primary font-bold py-3 rounded-lg hover:bg-opacity-90 transition-all">
                {"Send via WhatsApp"}
            </button>
            <div id="formMessage"
                class={classes!("mt-4", "p-4", "rounded-lg", "bg-green-500", "bg-opacity-20", "border", "border-green-300", "border-opacity-50", (!*banner_visible).then_some("hidden"))}>
                <p class="text-white font-semibold">{"✓ Message sent! We will contact you soon."}</p>
            </div>
        </form>
    }
}
