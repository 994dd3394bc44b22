use std::ops::Index;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;

const FRONTMATTER_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const BODY_DATE_FORMAT: &str = "%a %d %b %Y, %I:%M";
const FILE_DATE_FORMAT: &str = "%Y-%m-%d";

fn to_int<T: std::str::FromStr>(num_str: &str) -> Option<T> {
    num_str.parse::<T>().ok()
}

/// Parses the ISO-8601 timestamps found in WordPress exports.
///
/// Accepts `2023-01-04`, `2023-01-04 09:15`, `2023-01-04 09:15:00` and
/// `2023-01-04T09:15:00.123456`. Anything that does not describe a real
/// calendar date, such as the `0000-00-00 00:00:00` placeholder WordPress
/// writes for unpublished drafts, yields `None`.
pub fn parse_date_time(buf: &str) -> Option<NaiveDateTime> {
    lazy_static! {
        static ref DATE_TIME_REGEX: Regex = Regex::new(
            r"^(\d{4})-(\d{2})-(\d{2})(?:[ T](\d{2}):(\d{2})(?::(\d{2})(?:\.(\d{1,9}))?)?)?$"
        ).unwrap();
    }

    let caps = DATE_TIME_REGEX.captures(buf.trim())?;

    let y: i32 = to_int(caps.index(1))?;
    let m: u32 = to_int(caps.index(2))?;
    let d: u32 = to_int(caps.index(3))?;
    let h: u32 = caps.get(4).map_or(Some(0), |x| to_int(x.as_str()))?;
    let mn: u32 = caps.get(5).map_or(Some(0), |x| to_int(x.as_str()))?;
    let s: u32 = caps.get(6).map_or(Some(0), |x| to_int(x.as_str()))?;
    let nanos: u32 = match caps.get(7) {
        // Right-pad the fraction so ".5" means 500ms
        Some(frac) => to_int(&format!("{:0<9}", frac.as_str()))?,
        None => 0,
    };

    let date = NaiveDate::from_ymd_opt(y, m, d)?;
    let time = NaiveTime::from_hms_nano_opt(h, mn, s, nanos)?;

    Some(NaiveDateTime::new(date, time))
}

/// `2023-01-04 09:15:00`
pub fn format_frontmatter_date(date_time: &NaiveDateTime) -> String {
    date_time.format(FRONTMATTER_DATE_FORMAT).to_string()
}

/// `Wed 04 Jan 2023, 09:15`
pub fn format_body_date(date_time: &NaiveDateTime) -> String {
    date_time.format(BODY_DATE_FORMAT).to_string()
}

/// `2023-01-04`
pub fn format_file_date(date_time: &NaiveDateTime) -> String {
    date_time.format(FILE_DATE_FORMAT).to_string()
}
