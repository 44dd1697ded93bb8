mod api;
mod app;
mod components;
mod config;
mod containers;
mod language;
mod logging;
mod models;
mod pages;
mod routes;
mod storage;

#[cfg(test)]
mod api_test;
#[cfg(test)]
mod routes_test;

use app::App;
use config::FrontendConfig;
use i18nrs::yew::I18nProvider;
use i18nrs::yew::I18nProviderConfig;
use language::{DEFAULT_LANGUAGE, translations};
use shared::ThemeStore;
use storage::BrowserStorage;
use tracing::{error, info};
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let config = I18nProviderConfig {
        translations: translations(),
        default_language: DEFAULT_LANGUAGE.to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

fn main() {
    let config = FrontendConfig::new();
    logging::init(config.log_level);
    logging::install_panic_hook();
    info!(backend = config.backend_url(), "starting Dropwatch");

    // Paint the persisted theme before the first frame.
    let theme = ThemeStore::rehydrate(BrowserStorage);
    components::theme_switcher::apply_theme(theme.is_dark());

    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        error!("no document body to mount into");
        return;
    };
    Renderer::<InternationalApp>::with_root(body.into()).render();
}
