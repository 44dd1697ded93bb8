use crate::components::theme_switcher::ThemeSwitcher;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthCardProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub children: Children,
}

/// Centered card used by the signed-out screens.
#[function_component(AuthCard)]
pub fn auth_card(props: &AuthCardProps) -> Html {
    html! {
        <div class="relative flex items-center justify-center min-h-screen bg-base-200 p-4">
            <ThemeSwitcher class="absolute top-4 right-4" />
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <div class="card-body gap-4">
                    <div>
                        <h2 class="card-title text-2xl">{props.title.clone()}</h2>
                        if let Some(subtitle) = &props.subtitle {
                            <p class="text-sm text-base-content/70">{subtitle.clone()}</p>
                        }
                    </div>
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}
