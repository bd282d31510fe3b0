use yew::prelude::*;

pub fn load_classes(loaded: bool) -> &'static str {
    if loaded {
        "opacity-100 transition-opacity duration-300"
    } else {
        "opacity-0 transition-opacity duration-300"
    }
}

#[derive(Properties, PartialEq)]
pub struct FadeImageProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// An image that stays transparent until the browser has loaded it.
#[function_component(FadeImage)]
pub fn fade_image(props: &FadeImageProps) -> Html {
    let loaded = use_state_eq(|| false);

    let onload = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| loaded.set(true))
    };

    html! {
        <img src={props.src.clone()} alt={props.alt.clone()} loading="lazy"
            class={classes!(props.class.clone(), load_classes(*loaded))}
            {onload} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loaded_images_become_opaque() {
        assert!(load_classes(false).starts_with("opacity-0"));
        assert!(load_classes(true).starts_with("opacity-100"));
    }
}
