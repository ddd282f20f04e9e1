use crate::date_key::{self, DateKey};
use chrono::NaiveDate;

/// One lane per weekday position; the grid is laid out column-major.
pub const LANE_COUNT: usize = 7;

pub type Lanes = Vec<Vec<DateKey>>;

/// First day of the grid unless overridden in config.
pub fn tracker_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Every day from `epoch` through `today` inclusive, the i-th day landing in
/// lane `i % LANE_COUNT`. Lane 0 always holds the epoch's weekday.
///
/// A `today` before the epoch yields empty lanes rather than an error.
pub fn build_calendar_grid(epoch: NaiveDate, today: NaiveDate) -> Lanes {
    let mut lanes: Lanes = vec![Vec::new(); LANE_COUNT];
    if today < epoch {
        return lanes;
    }

    for (index, date) in epoch.iter_days().take_while(|date| *date <= today).enumerate() {
        lanes[index % LANE_COUNT].push(date_key::encode(date));
    }

    lanes
}

pub fn total_days(lanes: &Lanes) -> usize {
    lanes.iter().map(Vec::len).sum()
}
