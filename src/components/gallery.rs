use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::fade_image::FadeImage;
use crate::config;

/// What a caller hands to the gallery: a lone image or a list with a start index.
#[derive(Clone, Debug, PartialEq)]
pub enum GallerySource {
    Single(String),
    Sequence(Vec<String>, usize),
}

/// Ordered images plus the one on display. `index` is always valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryState {
    images: Vec<String>,
    index: usize,
}

impl GalleryState {
    /// Returns `None` for a source with nothing to show. A start index past
    /// the end wraps around like navigation does.
    pub fn open(source: GallerySource) -> Option<Self> {
        match source {
            GallerySource::Single(url) => Some(Self {
                images: vec![url],
                index: 0,
            }),
            GallerySource::Sequence(images, _) if images.is_empty() => None,
            GallerySource::Sequence(images, start) => {
                let index = start % images.len();
                Some(Self { images, index })
            }
        }
    }

    /// Moves by `direction`, wrapping both ways. A single image never moves.
    pub fn navigate(&mut self, direction: isize) {
        if !self.has_controls() {
            return;
        }
        let len = self.images.len() as isize;
        self.index = (self.index as isize + direction).rem_euclid(len) as usize;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &str {
        &self.images[self.index]
    }

    pub fn has_controls(&self) -> bool {
        self.images.len() > 1
    }

    fn image(&self, index: usize) -> &str {
        &self.images[index]
    }
}

/// What the open modal shows. Navigation updates the index right away, while
/// `shown` trails it until the fade-out completes.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalView {
    gallery: GalleryState,
    shown: usize,
    image_visible: bool,
    overlay_visible: bool,
    closing: bool,
}

pub enum ModalAction {
    FadeIn,
    Navigate(isize),
    Settle,
    Close,
}

impl ModalView {
    pub fn new(gallery: GalleryState) -> Self {
        Self {
            shown: gallery.index(),
            gallery,
            image_visible: true,
            overlay_visible: false,
            closing: false,
        }
    }

    pub fn shown_src(&self) -> &str {
        self.gallery.image(self.shown)
    }
}

impl Reducible for ModalView {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ModalAction::FadeIn if !self.closing => next.overlay_visible = true,
            ModalAction::FadeIn => return self,
            ModalAction::Navigate(_) if self.closing || !self.gallery.has_controls() => return self,
            ModalAction::Navigate(direction) => {
                next.gallery.navigate(direction);
                next.image_visible = false;
            }
            ModalAction::Settle => {
                next.shown = next.gallery.index();
                next.image_visible = true;
            }
            ModalAction::Close => {
                next.overlay_visible = false;
                next.closing = true;
            }
        }
        Rc::new(next)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Close,
    Navigate(isize),
}

pub fn key_command(key: &str) -> Option<KeyCommand> {
    match key {
        "Escape" => Some(KeyCommand::Close),
        "ArrowLeft" => Some(KeyCommand::Navigate(-1)),
        "ArrowRight" => Some(KeyCommand::Navigate(1)),
        _ => None,
    }
}

/// The page's single gallery slot. Each open bumps the generation, so a new
/// open replaces whatever modal is up instead of stacking another overlay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GallerySlot {
    generation: u32,
    gallery: Option<GalleryState>,
}

pub enum SlotAction {
    Open(GalleryState),
    Clear(u32),
}

impl GallerySlot {
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn gallery(&self) -> Option<&GalleryState> {
        self.gallery.as_ref()
    }
}

impl Reducible for GallerySlot {
    type Action = SlotAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SlotAction::Open(gallery) => Rc::new(Self {
                generation: self.generation.wrapping_add(1),
                gallery: Some(gallery),
            }),
            // A late clear from a replaced modal must not close its successor
            SlotAction::Clear(generation) if generation != self.generation => self,
            SlotAction::Clear(_) => Rc::new(Self {
                generation: self.generation,
                gallery: None,
            }),
        }
    }
}

/// Opens the page gallery. Provided through context by the app root.
#[derive(Clone, PartialEq)]
pub struct GalleryOpener(pub UseReducerHandle<GallerySlot>);

impl GalleryOpener {
    pub fn open(&self, source: GallerySource) {
        match GalleryState::open(source) {
            Some(gallery) => {
                debug!("opening gallery at {}", gallery.current());
                self.0.dispatch(SlotAction::Open(gallery));
            }
            None => debug!("gallery open ignored: nothing to show"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryModalProps {
    pub gallery: GalleryState,
    pub on_closed: Callback<()>,
}

type TimerSlot = Rc<RefCell<Option<Timeout>>>;

fn schedule(slot: &TimerSlot, millis: u32, f: impl FnOnce() + 'static) {
    // Replacing the handle cancels whatever was pending in this slot
    *slot.borrow_mut() = Some(Timeout::new(millis, f));
}

/// Lightbox overlay. Owns its gallery state and keyboard subscription; both
/// go away when the component unmounts, as do any pending fade timers.
#[function_component(GalleryModal)]
pub fn gallery_modal(props: &GalleryModalProps) -> Html {
    let view = use_reducer({
        let gallery = props.gallery.clone();
        move || ModalView::new(gallery)
    });
    let fade_timer: TimerSlot = use_mut_ref(|| None);
    let swap_timer: TimerSlot = use_mut_ref(|| None);
    let close_timer: TimerSlot = use_mut_ref(|| None);

    {
        let view = view.clone();
        let fade_timer = fade_timer.clone();
        use_effect_with_deps(
            move |_| {
                schedule(&fade_timer, config::MODAL_FADE_IN_MS, move || {
                    view.dispatch(ModalAction::FadeIn)
                });
                || ()
            },
            (),
        );
    }

    let navigate = {
        let view = view.clone();
        Callback::from(move |direction: isize| {
            if view.closing || !view.gallery.has_controls() {
                return;
            }
            view.dispatch(ModalAction::Navigate(direction));
            let view = view.clone();
            schedule(&swap_timer, config::IMAGE_SWAP_MS, move || {
                view.dispatch(ModalAction::Settle)
            });
        })
    };

    let close = {
        let view = view.clone();
        let on_closed = props.on_closed.clone();
        Callback::from(move |_: ()| {
            if view.closing {
                return;
            }
            view.dispatch(ModalAction::Close);
            let on_closed = on_closed.clone();
            schedule(&close_timer, config::MODAL_CLOSE_MS, move || on_closed.emit(()));
        })
    };

    {
        let navigate = navigate.clone();
        let close = close.clone();
        let closing = view.closing;
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if closing {
                return;
            }
            match key_command(&e.key()) {
                Some(KeyCommand::Close) => close.emit(()),
                Some(KeyCommand::Navigate(direction)) => navigate.emit(direction),
                None => {}
            }
        });
    }

    let on_background = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };
    let on_close_button = {
        let close = close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            close.emit(());
        })
    };
    let arrow = |direction: isize| {
        let navigate = navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            navigate.emit(direction);
        })
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let overlay_style = format!(
        "opacity: {}; transition: opacity 0.3s ease;",
        if view.overlay_visible { 1 } else { 0 }
    );
    let image_style = format!("opacity: {};", if view.image_visible { 1 } else { 0 });
    let arrow_class = "absolute top-1/2 -translate-y-1/2 text-white bg-black bg-opacity-60 hover:bg-opacity-80 rounded-full w-12 h-12 md:w-14 md:h-14 flex items-center justify-center text-3xl md:text-4xl font-bold transition-all z-10 shadow-lg";

    html! {
        <div id="imageModal"
            class="fixed inset-0 bg-black bg-opacity-90 z-50 flex items-center justify-center p-4"
            style={overlay_style}
            onclick={on_background}>
            <div class="relative max-w-5xl max-h-full w-full">
                <div class="relative flex items-center justify-center w-full">
                    <img id="modalImage"
                        src={view.shown_src().to_string()}
                        alt="Gallery Image"
                        class="max-w-full max-h-[90vh] object-contain rounded-lg transition-opacity duration-300"
                        style={image_style}
                        onclick={stop} />
                    if view.gallery.has_controls() {
                        <>
                        <button id="leftArrow" class={classes!(arrow_class, "left-2", "md:left-4")}
                            aria-label="Previous image"
                            onclick={arrow(-1)}>{"<"}</button>
                        <button id="rightArrow" class={classes!(arrow_class, "right-2", "md:right-4")}
                            aria-label="Next image"
                            onclick={arrow(1)}>{">"}</button>
                        </>
                    }
                </div>
                <button class="absolute top-4 right-4 text-white bg-black bg-opacity-50 hover:bg-opacity-75 rounded-full w-10 h-10 flex items-center justify-center text-2xl font-bold transition-all z-20"
                    aria-label="Close"
                    onclick={on_close_button}>{"✕"}</button>
            </div>
        </div>
    }
}

/// Mounts the modal for whatever the page's gallery slot holds.
#[function_component(GalleryHost)]
pub fn gallery_host() -> Html {
    let opener = use_context::<GalleryOpener>();
    let Some(GalleryOpener(slot)) = opener else {
        return html! {};
    };

    match slot.gallery() {
        Some(gallery) => {
            let generation = slot.generation();
            let on_closed = {
                let slot = slot.clone();
                Callback::from(move |_: ()| slot.dispatch(SlotAction::Clear(generation)))
            };
            html! {
                <GalleryModal key={generation} gallery={gallery.clone()} {on_closed} />
            }
        }
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryGridProps {
    pub images: Vec<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

/// Thumbnail grid; clicking a thumbnail opens the whole list at that image.
#[function_component(GalleryGrid)]
pub fn gallery_grid(props: &GalleryGridProps) -> Html {
    let opener = use_context::<GalleryOpener>();
    let images: Vec<String> = props.images.iter().map(|src| src.to_string()).collect();

    html! {
        <div class={classes!("grid", "grid-cols-2", "md:grid-cols-3", "gap-4", props.class.clone())}>
            { for props.images.iter().enumerate().map(|(index, src)| {
                let onclick = {
                    let opener = opener.clone();
                    let images = images.clone();
                    Callback::from(move |_: MouseEvent| {
                        if let Some(opener) = &opener {
                            opener.open(GallerySource::Sequence(images.clone(), index));
                        }
                    })
                };
                html! {
                    <button class="block overflow-hidden rounded-xl shadow-md hover:shadow-xl transition-shadow" {onclick}>
                        <FadeImage src={src.clone()} alt="Gallery thumbnail"
                            class={classes!("w-full", "h-48", "object-cover", "hover:scale-105", "transition-transform")} />
                    </button>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn three() -> GalleryState {
        let images = vec!["a.jpg".to_string(), "b.jpg".to_string(), "c.jpg".to_string()];
        GalleryState::open(GallerySource::Sequence(images, 2)).unwrap()
    }

    fn apply(view: ModalView, action: ModalAction) -> ModalView {
        (*Rc::new(view).reduce(action)).clone()
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut gallery = three();
        assert_eq!(gallery.current(), "c.jpg");
        gallery.navigate(1);
        assert_eq!(gallery.index(), 0);
        assert_eq!(gallery.current(), "a.jpg");
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut gallery = GalleryState::open(GallerySource::Sequence(
            vec!["a.jpg".into(), "b.jpg".into()],
            0,
        ))
        .unwrap();
        gallery.navigate(-1);
        assert_eq!(gallery.current(), "b.jpg");
    }

    #[test]
    fn single_image_never_moves() {
        let mut gallery = GalleryState::open(GallerySource::Single("solo.jpg".into())).unwrap();
        assert!(!gallery.has_controls());
        gallery.navigate(1);
        assert_eq!(gallery.index(), 0);
        gallery.navigate(-1);
        assert_eq!(gallery.index(), 0);
    }

    #[test]
    fn empty_sequence_is_ignored() {
        assert_eq!(GalleryState::open(GallerySource::Sequence(vec![], 0)), None);
    }

    #[test]
    fn start_past_the_end_wraps() {
        let gallery =
            GalleryState::open(GallerySource::Sequence(vec!["a.jpg".into(), "b.jpg".into()], 3)).unwrap();
        assert_eq!(gallery.current(), "b.jpg");
    }

    #[test]
    fn image_source_trails_index_until_settled() {
        let view = apply(ModalView::new(three()), ModalAction::FadeIn);
        assert!(view.overlay_visible);

        let view = apply(view, ModalAction::Navigate(1));
        assert_eq!(view.gallery.index(), 0);
        assert_eq!(view.shown_src(), "c.jpg");
        assert!(!view.image_visible);

        let view = apply(view, ModalAction::Settle);
        assert_eq!(view.shown_src(), "a.jpg");
        assert!(view.image_visible);
    }

    #[test]
    fn closing_modal_ignores_navigation_and_fade_in() {
        let view = apply(ModalView::new(three()), ModalAction::Close);
        assert!(view.closing);
        assert!(!view.overlay_visible);

        let view = apply(view, ModalAction::Navigate(1));
        assert_eq!(view.gallery.index(), 2);
        let view = apply(view, ModalAction::FadeIn);
        assert!(!view.overlay_visible);
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(key_command("Escape"), Some(KeyCommand::Close));
        assert_eq!(key_command("ArrowLeft"), Some(KeyCommand::Navigate(-1)));
        assert_eq!(key_command("ArrowRight"), Some(KeyCommand::Navigate(1)));
        assert_eq!(key_command("Enter"), None);
    }

    #[test]
    fn second_open_replaces_the_first() {
        let slot = Rc::new(GallerySlot::default());
        let first = slot.reduce(SlotAction::Open(three()));
        let first_generation = first.generation();
        let second = first.reduce(SlotAction::Open(
            GalleryState::open(GallerySource::Single("x.jpg".into())).unwrap(),
        ));
        assert_eq!(second.gallery().map(|g| g.current()), Some("x.jpg"));

        // the replaced modal's delayed clear is ignored
        let after_stale = second.clone().reduce(SlotAction::Clear(first_generation));
        assert!(after_stale.gallery().is_some());

        let cleared = after_stale.reduce(SlotAction::Clear(second.generation()));
        assert_eq!(cleared.gallery(), None);
    }

    proptest! {
        #[test]
        fn navigation_composes(len in 1usize..12, start in 0usize..12, d1 in -30isize..30, d2 in -30isize..30) {
            let images: Vec<String> = (0..len).map(|i| format!("{i}.jpg")).collect();
            let source = GallerySource::Sequence(images, start);

            let mut stepwise = GalleryState::open(source.clone()).unwrap();
            stepwise.navigate(d1);
            stepwise.navigate(d2);

            let mut combined = GalleryState::open(source).unwrap();
            combined.navigate((d1 + d2).rem_euclid(len as isize));

            prop_assert_eq!(stepwise.index(), combined.index());
            prop_assert!(stepwise.index() < len);
        }
    }
}
