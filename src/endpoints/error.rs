use rocket::{catch, Request};
use rocket::http::{ContentType, Status};
use rocket::response::status;
use crate::utils::json_responses::make_bad_json_data_response;
use crate::utils::response::not_ok_json_response;

#[catch(404)]
pub(crate) fn not_found_catcher(req: &Request<'_>) -> status::Custom<(ContentType, String)> {
    not_ok_json_response(
        Status::NotFound,
        make_bad_json_data_response(format!("Resource {} was not found", req.uri())),
    )
}

#[catch(default)]
pub(crate) fn default_catcher(status_code: Status, req: &Request<'_>) -> status::Custom<(ContentType, String)> {
    not_ok_json_response(
        status_code,
        make_bad_json_data_response(format!("{} while serving {}", status_code, req.uri())),
    )
}
