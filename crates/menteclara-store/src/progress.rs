use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;

use menteclara_core::models::exercise::Exercise;
use menteclara_core::models::progress::ProgressEntry;

/// Calendar day of a timestamp, in UTC.
pub fn utc_day(ts: Timestamp) -> Date {
    ts.to_zoned(TimeZone::UTC).date()
}

/// Summarize the completions that fall on the same UTC day as `at`.
///
/// The mood average is rounded to one decimal and is 0 when nothing was
/// completed that day.
pub fn summarize_day(exercises: &[Exercise], at: Timestamp) -> ProgressEntry {
    let day = utc_day(at);
    let ratings: Vec<f64> = exercises
        .iter()
        .filter_map(|e| e.completion.as_ref())
        .filter(|c| utc_day(c.completed_at) == day)
        .map(|c| f64::from(c.mood_rating_after.value()))
        .collect();

    let mood_average = if ratings.is_empty() {
        0.0
    } else {
        let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
        (mean * 10.0).round() / 10.0
    };

    ProgressEntry {
        date: at,
        mood_average,
        exercises_completed: ratings.len() as u32,
    }
}
