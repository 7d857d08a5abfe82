use rocket::get;
use rocket::http::ContentType;
use rocket::response::status;
use serde_json::json;
use crate::utils::response::ok_json_response;

/// *`GET /version`*
///
/// Typically mounted as **`/version`**
///
/// Returns an object containing version information
///
/// `{"pkg_version":"0.1.0"}`
#[get("/version")]
pub fn get_version() -> status::Custom<(ContentType, String)> {
    let json_value = json!({
        "pkg_version": env!("CARGO_PKG_VERSION"),
    })
        .to_string();
    ok_json_response(json_value)
}
