use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;

use crate::components::accordion::AccordionItem;
use crate::components::contact::ContactForm;
use crate::components::fade_image::FadeImage;
use crate::components::gallery::{GalleryGrid, GalleryOpener, GallerySource};
use crate::components::nav::AnchorLink;
use crate::components::reveal::Reveal;
use crate::components::tabs::{Tab, Tabs};
use crate::content::{CampSite, SiteContent};

/// What clicking a campsite's cover opens: its photo set, or just the cover.
pub fn site_gallery(site: &CampSite) -> GallerySource {
    if site.gallery.is_empty() {
        GallerySource::Single(site.image.clone())
    } else {
        GallerySource::Sequence(site.gallery.clone(), 0)
    }
}

fn open_on_click(opener: &Option<GalleryOpener>, source: GallerySource) -> Callback<MouseEvent> {
    let opener = opener.clone();
    Callback::from(move |_: MouseEvent| {
        if let Some(opener) = &opener {
            opener.open(source.clone());
        }
    })
}

fn site_card(site: &CampSite, opener: &Option<GalleryOpener>) -> Html {
    html! {
        <Reveal>
            <div class="bg-white rounded-2xl shadow-lg overflow-hidden grid md:grid-cols-2">
                <button class="block h-72 md:h-full overflow-hidden"
                    onclick={open_on_click(opener, site_gallery(site))}>
                    <FadeImage src={site.image.clone()} alt={site.label.clone()}
                        class={classes!("w-full", "h-full", "object-cover", "hover:scale-105", "transition-transform")} />
                </button>
                <div class="p-8">
                    <h3 class="text-2xl font-bold text-gray-800 mb-4">{&site.label}</h3>
                    <p class="text-gray-600 mb-6">{&site.description}</p>
                    <ul class="space-y-2 mb-6">
                        { for site.highlights.iter().map(|h| html! {
                            <li class="flex items-center text-gray-700">
                                <span class="text-secondary mr-2">{"✓"}</span>{h}
                            </li>
                        }) }
                    </ul>
                    <AnchorLink to="contact"
                        class={classes!("inline-block", "bg-secondary", "text-white", "font-semibold", "px-6", "py-3", "rounded-lg", "hover:bg-opacity-90", "transition-all")}>
                        {"Book this site"}
                    </AnchorLink>
                </div>
            </div>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let content = &props.content;
    let opener = use_context::<GalleryOpener>();

    let tabs: Vec<Tab> = content
        .sites
        .iter()
        .map(|site| Tab {
            name: site.name.clone().into(),
            label: site.label.clone().into(),
            body: site_card(site, &opener),
        })
        .collect();
    let gallery: Vec<AttrValue> = content.gallery.iter().map(|src| src.clone().into()).collect();
    let year = chrono::Local::now().year();

    html! {
        <main>
            <section id="home" class="relative min-h-screen flex items-center justify-center text-white bg-cover bg-center"
                style={format!("background-image: url('{}');", content.hero_image)}>
                <div class="absolute inset-0 bg-black bg-opacity-50"></div>
                <div class="relative text-center px-4">
                    <h1 class="text-5xl md:text-7xl font-bold mb-6">{&content.brand}</h1>
                    <p class="text-xl md:text-2xl mb-10">{&content.tagline}</p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <AnchorLink to="camping" class={classes!("bg-secondary", "px-8", "py-4", "rounded-lg", "font-semibold", "hover:bg-opacity-90", "transition-all")}>
                            {"Explore Sites"}
                        </AnchorLink>
                        <AnchorLink to="contact" class={classes!("border-2", "border-white", "px-8", "py-4", "rounded-lg", "font-semibold", "hover:bg-white", "hover:text-primary", "transition-all")}>
                            {"Book Now"}
                        </AnchorLink>
                    </div>
                </div>
            </section>

            <section id="about" class="py-20 bg-gray-50">
                <div class="container mx-auto px-4 grid md:grid-cols-2 gap-12 items-center">
                    <Reveal>
                        <h2 class="text-4xl font-bold text-gray-800 mb-6">{&content.about.title}</h2>
                        { for content.about.paragraphs.iter().map(|p| html! {
                            <p class="text-gray-600 text-lg mb-4">{p}</p>
                        }) }
                    </Reveal>
                    <button class="block rounded-2xl overflow-hidden shadow-xl"
                        onclick={open_on_click(&opener, GallerySource::Single(content.about.image.clone()))}>
                        <FadeImage src={content.about.image.clone()} alt="Campsite" class={classes!("w-full", "h-96", "object-cover")} />
                    </button>
                </div>
            </section>

            <section id="camping" class="py-20">
                <div class="container mx-auto px-4">
                    <h2 class="text-4xl font-bold text-center text-gray-800 mb-12">{"Our Campsites"}</h2>
                    <Tabs {tabs} />
                </div>
            </section>

            <section id="gallery" class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <h2 class="text-4xl font-bold text-center text-gray-800 mb-12">{"Gallery"}</h2>
                    <GalleryGrid images={gallery} />
                </div>
            </section>

            <section id="faq" class="py-20">
                <div class="container mx-auto px-4 max-w-3xl space-y-4">
                    <h2 class="text-4xl font-bold text-center text-gray-800 mb-12">{"Frequently Asked Questions"}</h2>
                    { for content.faq.iter().map(|entry| html! {
                        <AccordionItem key={entry.id.clone()} id={entry.id.clone()} question={entry.question.clone()}>
                            <p>{&entry.answer}</p>
                        </AccordionItem>
                    }) }
                </div>
            </section>

            <section id="contact" class="py-20 bg-primary text-white">
                <div class="container mx-auto px-4 grid md:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        <h2 class="text-4xl font-bold mb-6">{"Get in Touch"}</h2>
                        <Reveal class={classes!("bg-white", "bg-opacity-10", "rounded-xl", "p-6")}>
                            <h3 class="font-semibold mb-1">{"Phone"}</h3>
                            <p>{&content.contact.phone}</p>
                        </Reveal>
                        <Reveal class={classes!("bg-white", "bg-opacity-10", "rounded-xl", "p-6")}>
                            <h3 class="font-semibold mb-1">{"Email"}</h3>
                            <p>{&content.contact.email}</p>
                        </Reveal>
                        <Reveal class={classes!("bg-white", "bg-opacity-10", "rounded-xl", "p-6")}>
                            <h3 class="font-semibold mb-1">{"Location"}</h3>
                            <p>{&content.contact.address}</p>
                        </Reveal>
                    </div>
                    <ContactForm />
                </div>
            </section>

            <footer class="py-8 bg-gray-900 text-gray-400 text-center">
                <p>{format!("© {} {}. All rights reserved.", year, content.brand)}</p>
            </footer>
        </main>
    }
}
