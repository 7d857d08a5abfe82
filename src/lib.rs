#[cfg(test)]
mod tests;

use rocket::{Build, Rocket};
use serde_json::Value;
use tracing::info;

mod structs;
mod utils;
use crate::utils::json::get_string_value_by_key;
use crate::utils::launch::{add_app_state, add_catchers, add_routes, load_corpus_state};
mod static_vars;
use crate::static_vars::DEFAULT_SOURCE;
pub use crate::static_vars::SOURCE_ENV_VAR;
mod endpoints;

/// Builds the server from a launch config such as `{"source": "gita.json"}`.
///
/// `source` may be a local path or an `http(s)://` URL and defaults to
/// `gita.json`. The document is ingested here, before launch, and the
/// resulting corpus is handed to Rocket as read-only managed state.
pub fn rocket(launch_config: Value) -> Rocket<Build> {
    let source = get_string_value_by_key(&launch_config, "source")
        .unwrap_or(DEFAULT_SOURCE)
        .to_string();
    info!("Loading verses from '{}'", source);
    let corpus_state = load_corpus_state(&source);

    let mut my_rocket = rocket::build();

    // Error handlers
    my_rocket = add_catchers(my_rocket);

    // Routes
    my_rocket = add_routes(my_rocket);

    // State
    add_app_state(my_rocket, &source, corpus_state)
}
