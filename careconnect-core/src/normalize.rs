//! Deterministic mapping from validated form state to the wire payload.
//!
//! Pure functions; the dispatcher serializes the result as-is. The scalar
//! selects (`hobbies`, `levelOfCare`, `facilitators`) are promoted to
//! singleton lists because the API fields are list-typed while the form only
//! offers a single choice.

use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};
use serde::Serialize;

use crate::models::{
    Ambulation, Dimension, LevelOfCare, RecurrenceSpec, ResidentStatus, UnknownVariant,
};
use crate::validate::{ProgramForm, ResidentForm};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("unparseable date {0:?}")]
    Date(String),
    #[error("unparseable time {0:?}, expected HH:MM")]
    Time(String),
    #[error(transparent)]
    Select(#[from] UnknownVariant),
}

/// Body of `POST programs`. There are no `startTime`/`endTime` fields here:
/// the raw clock strings are consumed by the date/time combination and never
/// serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramPayload {
    pub name: String,
    pub location: String,
    pub all_day: bool,
    pub start: String,
    pub end: String,
    pub tags: Vec<String>,
    pub dimension: Dimension,
    pub facilitators: Vec<String>,
    pub level_of_care: Vec<LevelOfCare>,
    pub hobbies: Vec<String>,
    pub recurrence: RecurrenceSpec,
    pub is_repeated: bool,
}

/// Body of `POST residents`: the form fields plus the derived display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentPayload {
    pub first_name: String,
    pub last_name: String,
    /// Kept nullable on the wire; the API receives an explicit `null`.
    pub preferred_name: Option<String>,
    pub name: String,
    pub status: ResidentStatus,
    pub room: String,
    pub level_of_care: LevelOfCare,
    pub ambulation: Ambulation,
    pub birth_date: String,
    pub move_in_date: String,
}

pub fn program_payload(form: &ProgramForm) -> Result<ProgramPayload, NormalizeError> {
    let (start, end) = if form.all_day {
        (
            combine_date_and_time(&form.start, "00:00")?,
            combine_date_and_time(&form.end, "23:59")?,
        )
    } else {
        (
            combine_date_and_time(&form.start, clock_or(&form.start_time, "00:00"))?,
            combine_date_and_time(&form.end, clock_or(&form.end_time, "23:59"))?,
        )
    };

    Ok(ProgramPayload {
        name: form.name.clone(),
        location: form.location.clone(),
        all_day: form.all_day,
        start,
        end,
        tags: form.tags.to_vec(),
        dimension: form.dimension.parse()?,
        facilitators: vec![form.facilitators.clone()],
        level_of_care: vec![form.level_of_care.parse()?],
        hobbies: vec![form.hobbies.clone()],
        recurrence: RecurrenceSpec {
            kind: Some(form.recurrence.parse()?),
        },
        is_repeated: form.is_repeated,
    })
}

pub fn resident_payload(form: &ResidentForm) -> Result<ResidentPayload, NormalizeError> {
    Ok(ResidentPayload {
        name: format!("{} {}", form.first_name, form.last_name),
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        preferred_name: form.preferred_name.clone(),
        status: form.status.parse()?,
        room: form.room.clone(),
        level_of_care: form.level_of_care.parse()?,
        ambulation: form.ambulation.parse()?,
        birth_date: form.birth_date.clone(),
        move_in_date: form.move_in_date.clone(),
    })
}

fn clock_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Overwrites the hour and minute of the selected day, zeroing seconds and
/// subseconds, all in UTC, and serializes as an ISO-8601 instant with
/// millisecond precision (`2024-03-05T14:30:00.000Z`).
fn combine_date_and_time(date: &str, time: &str) -> Result<String, NormalizeError> {
    let day = parse_day(date)?;
    let (hour, minute) = parse_clock(time)?;
    let instant = day
        .and_hms_opt(hour, minute, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| NormalizeError::Time(time.to_owned()))?;
    Ok(instant.to_rfc3339_opts(SecondsFormat::Millis, true))
}

// The datepicker emits a full ISO instant, while tests and other callers
// hold plain dates; both resolve to the calendar day in UTC.
fn parse_day(date: &str) -> Result<NaiveDate, NormalizeError> {
    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Ok(day);
    }
    DateTime::parse_from_rfc3339(date)
        .map(|instant| instant.with_timezone(&Utc).date_naive())
        .map_err(|_| NormalizeError::Date(date.to_owned()))
}

fn parse_clock(time: &str) -> Result<(u32, u32), NormalizeError> {
    let err = || NormalizeError::Time(time.to_owned());
    let (hour, minute) = time.split_once(':').ok_or_else(err)?;
    let hour: u32 = hour.parse().map_err(|_| err())?;
    let minute: u32 = minute.parse().map_err(|_| err())?;
    if hour > 23 || minute > 59 {
        return Err(err());
    }
    Ok((hour, minute))
}
