use std::time::SystemTime;
use chrono::{DateTime, SecondsFormat, Utc};

pub(crate) fn utc_now_timestamp_string() -> String {
    let now_dt: DateTime<Utc> = SystemTime::now().into();
    now_dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}
