//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::{Dashboard, PageNotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Dashboard {},

    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}
