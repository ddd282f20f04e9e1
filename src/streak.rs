use crate::date_key;
use chrono::{Duration, NaiveDate};
use tracing::warn;

/// Length of the run of consecutive marked days ending today, or ending
/// yesterday when today is not marked yet.
///
/// Keys that fail to decode are logged and skipped so one corrupt entry does
/// not zero an otherwise valid habit. Marked days after `today` are ignored.
pub fn compute_streak<I>(marked_days: I, today: NaiveDate) -> u32
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut dates: Vec<NaiveDate> = marked_days
        .into_iter()
        .filter_map(|key| match date_key::parse_date(key.as_ref()) {
            Ok(date) => Some(date),
            Err(err) => {
                warn!("skipping marked day: {err}");
                None
            }
        })
        .filter(|date| *date <= today)
        .collect();

    if dates.is_empty() {
        return 0;
    }

    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();

    let most_recent = dates[0];
    if most_recent < today - Duration::days(1) {
        return 0;
    }

    let mut streak = 1;
    for pair in dates.windows(2) {
        if pair[0] - pair[1] != Duration::days(1) {
            break;
        }
        streak += 1;
    }
    streak
}
