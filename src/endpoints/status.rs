use rocket::{get, State};
use rocket::http::ContentType;
use rocket::response::status;
use crate::structs::{AppSettings, CorpusState, CorpusStatus};
use crate::utils::response::serialized_json_response;

/// *`GET /status`*
///
/// Typically mounted as **`/status`**
///
/// Reports whether the verse document was loaded at startup.
///
/// `{"is_loaded":true,"source":"gita.json","verse_count":701,"loaded_at":"2026-10-18T09:12:00.000Z","reason":""}`
#[get("/status")]
pub fn corpus_status(
    state: &State<AppSettings>,
    corpus_state: &State<CorpusState>,
) -> status::Custom<(ContentType, String)> {
    let (is_loaded, verse_count, reason) = match corpus_state.inner() {
        CorpusState::Loaded(corpus) => (true, corpus.len(), String::new()),
        CorpusState::Unavailable(message) => (false, 0, message.clone()),
    };
    serialized_json_response(&CorpusStatus {
        is_loaded,
        source: state.source.clone(),
        verse_count,
        loaded_at: state.loaded_at.clone(),
        reason,
    })
}
