pub mod not_found;

use dioxus::prelude::*;

use crate::flow_builder::FlowBuilder;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    FlowBuilder {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
