use chrono::{Local, NaiveDateTime, ParseResult};

/// Local time without offset, microsecond precision.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub fn now_iso() -> String {
    Local::now().naive_local().format(ISO_FORMAT).to_string()
}

pub fn parse_iso(value: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, ISO_FORMAT)
}
