use rocket::{get, State};
use rocket::http::{ContentType, Status};
use rocket::response::status;
use crate::endpoints::corpus_guard::loaded_corpus;
use crate::structs::CorpusState;
use crate::utils::corpus::verse_view;
use crate::utils::json_responses::make_bad_json_data_response;
use crate::utils::response::{not_ok_json_response, serialized_json_response};

/// *`GET /random`*
///
/// Typically mounted as **`/verses/random`**
///
/// Returns one verse picked uniformly at random, with its display reference.
/// This backs both the landing view and the shuffle action.
///
/// ```text
/// {
///   "chapter": 2,
///   "verse": 47,
///   "original_text": "कर्मण्येवाधिकारस्ते मा फलेषु कदाचन। ... ।।",
///   "translation_text": "You have a right to perform your prescribed duties, ...",
///   "reference": "Chapter 2 • Verse 47"
/// }
/// ```
#[get("/random")]
pub fn random_verse(corpus_state: &State<CorpusState>) -> status::Custom<(ContentType, String)> {
    let corpus = match loaded_corpus(corpus_state) {
        Ok(c) => c,
        Err(response) => return response,
    };
    match corpus.pick_random(&mut rand::rng()) {
        Some(verse) => serialized_json_response(&verse_view(verse)),
        None => not_ok_json_response(
            Status::NotFound,
            make_bad_json_data_response("no verses were loaded".to_string()),
        ),
    }
}
