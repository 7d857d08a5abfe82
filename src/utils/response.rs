use rocket::http::{ContentType, Status};
use rocket::response::status;
use serde::Serialize;
use crate::utils::json_responses::make_bad_json_data_response;

pub(crate) fn string_response(
    status_code: Status,
    mime_type: ContentType,
    content: String,
) -> status::Custom<(ContentType, String)> {
    status::Custom(status_code, (mime_type, content))
}

pub(crate) fn ok_json_response(content: String) -> status::Custom<(ContentType, String)> {
    string_response(Status::Ok, ContentType::JSON, content)
}

pub(crate) fn not_ok_json_response(
    status_code: Status,
    content: String,
) -> status::Custom<(ContentType, String)> {
    string_response(status_code, ContentType::JSON, content)
}

/// Serializes a view payload, answering 500 if that somehow fails.
pub(crate) fn serialized_json_response<T: Serialize>(payload: &T) -> status::Custom<(ContentType, String)> {
    match serde_json::to_string(payload) {
        Ok(v) => ok_json_response(v),
        Err(e) => not_ok_json_response(
            Status::InternalServerError,
            make_bad_json_data_response(format!("could not serialize response as JSON: {}", e)),
        ),
    }
}
