use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Consecutive calendar days with a commit, ending yesterday.
///
/// Walks backward from `today - 1` one day at a time and stops at the
/// first date missing from the set. Today is never examined: a commit
/// made earlier today does not count until tomorrow. The walk has no
/// upper bound beyond the dates actually present.
pub fn consecutive_active_days(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut count = 0;
    let mut cursor = today.pred_opt();
    while let Some(day) = cursor {
        if !dates.contains(&day) {
            break;
        }
        count += 1;
        cursor = day.pred_opt();
    }
    count
}
