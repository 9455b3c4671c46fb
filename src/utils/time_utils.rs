use chrono::{DateTime, Days, NaiveDate, NaiveTime};

pub struct TimeUtils;

impl TimeUtils {
    pub const SECS_IN_MIN: i64 = 60;
    pub const SECS_IN_H: i64 = Self::SECS_IN_MIN * 60;
    pub const SECS_IN_D: i64 = Self::SECS_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

    /// Parse an ISO `YYYY-MM-DD` string.
    pub fn parse_date(text: &str) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(text.trim(), Self::STANDARD_TIME_FORMAT)
    }

    pub fn format_date(date: NaiveDate) -> String {
        date.format(Self::STANDARD_TIME_FORMAT).to_string()
    }
}

/// Midnight UTC of `date` as unix seconds. This is what the chart API expects for `period1`/`period2`.
pub fn date_to_epoch_sec(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Calendar date of a bar timestamp, shifted into the exchange's local time first.
/// A US session opening at 09:30 New York is 13:30/14:30 UTC, so the shift matters
/// only near midnight, but it keeps the date on the exchange's calendar.
pub fn epoch_sec_to_exchange_date(epoch_sec: i64, gmt_offset_sec: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(epoch_sec + gmt_offset_sec, 0).map(|dt| dt.date_naive())
}

/// X coordinate used by the charts: whole days since 1970-01-01.
pub fn date_to_plot_x(date: NaiveDate) -> f64 {
    (date_to_epoch_sec(date) / TimeUtils::SECS_IN_D) as f64
}

/// Inverse of `date_to_plot_x`, rounded to the nearest day. Empty for values outside chrono's range.
pub fn plot_x_to_date_string(x: f64) -> String {
    if !x.is_finite() {
        return String::new();
    }
    let days = x.round() as i64;
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();
    let date = if days >= 0 {
        epoch.checked_add_days(Days::new(days as u64))
    } else {
        epoch.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    date.map(TimeUtils::format_date).unwrap_or_default()
}
