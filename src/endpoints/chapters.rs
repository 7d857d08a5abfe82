use rocket::{get, State};
use rocket::http::{ContentType, Status};
use rocket::response::status;
use crate::endpoints::corpus_guard::loaded_corpus;
use crate::structs::CorpusState;
use crate::utils::corpus::list_chapters;
use crate::utils::json_responses::make_bad_json_data_response;
use crate::utils::response::{not_ok_json_response, serialized_json_response};

/// *`GET /`*
///
/// Typically mounted as **`/chapters`**
///
/// Returns the fixed index of chapters with Sanskrit and English titles.
///
/// ```text
/// [
///   {"number": 1, "original_title": "अर्जुनविषादयोग", "translated_title": "The Distress of Arjuna"},
///   {"number": 2, "original_title": "सांख्ययोग", "translated_title": "The Path of Knowledge"},
///   ...
/// ]
/// ```
#[get("/")]
pub fn chapter_index(corpus_state: &State<CorpusState>) -> status::Custom<(ContentType, String)> {
    if let Err(response) = loaded_corpus(corpus_state) {
        return response;
    }
    serialized_json_response(&list_chapters())
}

/// *`GET /<chapter>`*
///
/// Typically mounted as **`/chapters/<chapter>`**
///
/// Returns the reader view for one chapter: its titles followed by its verses in order.
///
/// ```text
/// {
///   "number": 1,
///   "original_title": "अर्जुनविषादयोग",
///   "translated_title": "The Distress of Arjuna",
///   "verses": [
///     {"chapter": 1, "verse": 1, "original_text": "...", "translation_text": "..."},
///     ...
///   ]
/// }
/// ```
#[get("/<chapter>")]
pub fn chapter_reader(
    corpus_state: &State<CorpusState>,
    chapter: u32,
) -> status::Custom<(ContentType, String)> {
    let corpus = match loaded_corpus(corpus_state) {
        Ok(c) => c,
        Err(response) => return response,
    };
    match corpus.reader_chapter(chapter) {
        Some(reader) => serialized_json_response(&reader),
        None => not_ok_json_response(
            Status::NotFound,
            make_bad_json_data_response(format!("no chapter numbered {}", chapter)),
        ),
    }
}
