//! Date and time endpoints.
//!
//! Both endpoints report calendar fields in the server's local time zone,
//! as configured in [`AppState::time_zone`].

use std::borrow::Cow;

use axum::{
    extract::{Query, State},
    response::Json,
};
use jiff::{Timestamp, Zoned, tz::TimeZone};
use serde::Serialize;

use super::routes::{AppState, Params, required};
use crate::error::{Result, ServerError};

const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// Calendar fields of a local date and time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateTimeFields {
    pub year: i16,
    pub month: i8,
    pub day: i8,
    pub hour: i8,
    pub minute: i8,
    pub second: i8,
}

impl From<&Zoned> for DateTimeFields {
    fn from(zoned: &Zoned) -> Self {
        Self {
            year: zoned.year(),
            month: zoned.month(),
            day: zoned.day(),
            hour: zoned.hour(),
            minute: zoned.minute(),
            second: zoned.second(),
        }
    }
}

/// Current date and time response.
#[derive(Debug, Serialize)]
pub struct NowResponse {
    #[serde(flatten)]
    pub fields: DateTimeFields,
    pub unix_timestamp: f64,
}

/// Current date and time, taken when the response is built.
pub async fn now(State(state): State<AppState>) -> Json<NowResponse> {
    Json(now_in(&state.time_zone))
}

/// Date and time of the `timestamp` query parameter.
pub async fn from_unix(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Json<DateTimeFields>> {
    let timestamp = required(&params, "timestamp")?;
    Ok(Json(fields_from_unix(timestamp, &state.time_zone)?))
}

pub fn now_in(time_zone: &TimeZone) -> NowResponse {
    let zoned = Timestamp::now().to_zoned(time_zone.clone());
    NowResponse {
        fields: DateTimeFields::from(&zoned),
        unix_timestamp: zoned.timestamp().as_microsecond() as f64 / MICROS_PER_SECOND,
    }
}

/// Drop `_` digit separators, as in `1_700_000_000`. Each separator must sit
/// between two ASCII digits; otherwise the text is returned untouched and
/// fails to parse.
fn strip_digit_separators(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let well_placed = bytes.iter().enumerate().all(|(i, b)| {
        *b != b'_'
            || (i > 0
                && i + 1 < bytes.len()
                && bytes[i - 1].is_ascii_digit()
                && bytes[i + 1].is_ascii_digit())
    });

    if well_placed && text.contains('_') {
        Cow::Owned(text.replace('_', ""))
    } else {
        Cow::Borrowed(text)
    }
}

/// Convert a textual UNIX timestamp (fractional seconds allowed) to local
/// calendar fields. The value is rounded to whole microseconds, and the
/// resulting local date must fall in years 1 to 9999.
pub fn fields_from_unix(timestamp: &str, time_zone: &TimeZone) -> Result<DateTimeFields> {
    let seconds: f64 = strip_digit_separators(timestamp.trim()).parse().map_err(|e| {
        ServerError::invalid_timestamp(format!("{:?} is not a number: {}", timestamp, e))
    })?;

    let micros = (seconds * MICROS_PER_SECOND).round_ties_even();
    if !micros.is_finite() {
        return Err(ServerError::invalid_timestamp(format!(
            "{:?} is out of range",
            timestamp
        )));
    }

    let zoned = Timestamp::from_microsecond(micros as i64)?.to_zoned(time_zone.clone());
    if zoned.year() < 1 {
        return Err(ServerError::invalid_timestamp(format!(
            "year {} is out of range",
            zoned.year()
        )));
    }
    Ok(DateTimeFields::from(&zoned))
}
