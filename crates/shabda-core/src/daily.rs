use chrono::{Datelike, NaiveDate};
use shabda_types::DailyWord;

/// Deterministic pick for `date`: day number since 0001-01-01 (day 1) modulo
/// the list length
pub fn word_of_the_day(words: &[DailyWord], date: NaiveDate) -> Option<&DailyWord> {
    if words.is_empty() {
        return None;
    }

    let day = i64::from(date.num_days_from_ce());
    let index = day.rem_euclid(words.len() as i64) as usize;
    words.get(index)
}
