use i18nrs::yew::use_translation;
use web_sys::window;
use yew::{Callback, Classes, Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};
use yewdux::prelude::{use_dispatch, use_selector};

use crate::models::app_state::AppState;

/// Reflect the theme flag on `<html>`: the `data-theme` attribute for
/// DaisyUI and the `dark` class for Tailwind variants.
pub fn apply_theme(dark: bool) {
    let Some(root) = window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    let theme = if dark { "dark" } else { "light" };
    let _ = root.set_attribute("data-theme", theme);
    let _ = root.class_list().toggle_with_force("dark", dark);
}

#[derive(Properties, PartialEq, Eq)]
pub struct ThemeSwitcherProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeSwitcher)]
pub fn theme_switcher(props: &ThemeSwitcherProps) -> Html {
    let (i18n, ..) = use_translation();
    let dark = use_selector(|state: &AppState| state.theme.is_dark());
    let dispatch = use_dispatch::<AppState>();

    let toggle_theme = Callback::from(move |_: yew::MouseEvent| {
        dispatch.reduce_mut(|state| {
            let dark = state.theme.toggle();
            tracing::debug!(dark, "theme toggled");
            apply_theme(dark);
        });
    });

    // Sun in dark mode (switch to light), moon in light mode.
    let theme_icon = if *dark {
        IconId::HeroiconsSolidSun
    } else {
        IconId::HeroiconsSolidMoon
    };

    html! {
        <div class={props.class.clone()}>
            <button
                class="btn btn-ghost btn-circle"
                onclick={toggle_theme}
                aria-label={i18n.t("theme.toggle")}
            >
                <Icon icon_id={theme_icon} class="h-5 w-5" />
            </button>
        </div>
    }
}
