use dioxus::prelude::*;
use std::rc::Rc;

mod config;
mod flow_builder;
mod routes;
mod services;

use routes::Route;
use services::{Catalog, HttpReferenceDataClient, Locale, Services};

fn main() {
    dioxus::launch(App);
}

/// Build the production services from the loaded configuration.
fn default_services() -> Services {
    let config = config::client_config();
    Services {
        reference_data: Rc::new(HttpReferenceDataClient::new(&config.api)),
        translator: Rc::new(Catalog::new(Locale::from_tag(&config.i18n.locale))),
    }
}

#[component]
fn App() -> Element {
    use_context_provider(default_services);

    rsx! {
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
