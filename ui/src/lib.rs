// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
mod screens;

use api::config::RateServiceConfig;
use components::pico::Container;
use screens::convert::ConvertScreen;

/// Pico.css from a CDN; the widget has no asset pipeline of its own.
const PICO_CSS_URL: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";

#[allow(non_snake_case)]
pub fn App() -> Element {
    // Read process-wide configuration once and hand it to the widget tree.
    use_context_provider(RateServiceConfig::from_env);

    let app_css = r#"
    .converter-card {
        max-width: 28rem;
        margin: 2.5rem auto;
    }
    "#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS_URL,
        }
        style {
            "{app_css}"
        }
        Container {
            ConvertScreen {}
        }
    }
}
