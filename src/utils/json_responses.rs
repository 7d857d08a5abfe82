use crate::structs::JsonDataResponse;

pub(crate) fn make_json_data_response(is_good: bool, reason: String) -> String {
    let jr: JsonDataResponse = JsonDataResponse { is_good, reason };
    match serde_json::to_string(&jr) {
        Ok(s) => s,
        Err(_) => format!("{{\"is_good\":{},\"reason\":\"\"}}", is_good),
    }
}

pub(crate) fn make_bad_json_data_response(reason: String) -> String {
    make_json_data_response(false, reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn bad_response_carries_reason() {
        let response: Value =
            serde_json::from_str(&make_bad_json_data_response("no such chapter".to_string())).unwrap();
        assert_eq!(response["is_good"], false);
        assert_eq!(response["reason"], "no such chapter");
    }
}
