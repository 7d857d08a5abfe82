use rocket::{catchers, routes, Build, Rocket};
use tracing::error;
use crate::endpoints;
use crate::static_vars::LOAD_FAILURE_MESSAGE;
use crate::structs::{AppSettings, CorpusState};
use crate::utils::ingest::ingest;
use crate::utils::time::utc_now_timestamp_string;

pub(crate) fn add_routes(rocket_instance: Rocket<Build>) -> Rocket<Build> {
    rocket_instance
        .mount(
            "/",
            routes![
                endpoints::status::corpus_status,
                endpoints::version::get_version,
            ],
        )
        .mount("/verses", routes![
            endpoints::verses::random_verse
        ])
        .mount("/chapters", routes![
            endpoints::chapters::chapter_index,
            endpoints::chapters::chapter_reader
        ])
}

pub(crate) fn add_catchers(rocket_instance: Rocket<Build>) -> Rocket<Build> {
    rocket_instance
        .register("/", catchers![
            endpoints::error::not_found_catcher,
            endpoints::error::default_catcher
        ])
}

/// Runs ingestion once. A failure is logged here and never retried; the
/// server still starts and reports the static failure message.
pub(crate) fn load_corpus_state(source: &str) -> CorpusState {
    match ingest(source) {
        Ok(corpus) => CorpusState::Loaded(corpus),
        Err(e) => {
            error!("Error loading Gita data: {}", e);
            CorpusState::Unavailable(LOAD_FAILURE_MESSAGE.to_string())
        }
    }
}

pub(crate) fn add_app_state(rocket_instance: Rocket<Build>, source: &str, corpus_state: CorpusState) -> Rocket<Build> {
    rocket_instance
        .manage(AppSettings {
            source: source.to_string(),
            loaded_at: utc_now_timestamp_string(),
        })
        .manage(corpus_state)
}
