use rocket::http::{ContentType, Status};
use rocket::response::status;
use crate::structs::CorpusState;
use crate::utils::corpus::Corpus;
use crate::utils::json_responses::make_bad_json_data_response;
use crate::utils::response::not_ok_json_response;

/// Hands out the loaded corpus, or the static failure response if ingestion failed.
pub(crate) fn loaded_corpus(
    corpus_state: &CorpusState,
) -> Result<&Corpus, status::Custom<(ContentType, String)>> {
    match corpus_state {
        CorpusState::Loaded(corpus) => Ok(corpus),
        CorpusState::Unavailable(message) => Err(not_ok_json_response(
            Status::ServiceUnavailable,
            make_bad_json_data_response(message.clone()),
        )),
    }
}
