//! Consecutive-day logging streaks.

use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Count consecutive logged days ending today, or ending yesterday when
/// today has no entry yet.
///
/// Yesterday is a grace day: it may start the streak but is never counted
/// on top of today. Missing both today and yesterday yields 0 regardless of
/// older history.
pub fn current_streak(logged: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let start = if logged.contains(&today) {
        today
    } else {
        match today.pred_opt() {
            Some(yesterday) if logged.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0;
    let mut day = Some(start);
    while let Some(d) = day {
        if !logged.contains(&d) {
            break;
        }
        streak += 1;
        day = d.pred_opt();
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn days_ago(n: u64) -> NaiveDate {
        today() - Days::new(n)
    }

    fn set(offsets: &[u64]) -> BTreeSet<NaiveDate> {
        offsets.iter().map(|n| days_ago(*n)).collect()
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(current_streak(&BTreeSet::new(), today()), 0);
    }

    #[test]
    fn yesterday_alone_is_one() {
        assert_eq!(current_streak(&set(&[1]), today()), 1);
    }

    #[test]
    fn yesterday_and_day_before() {
        assert_eq!(current_streak(&set(&[2, 1]), today()), 2);
    }

    #[test]
    fn gap_stops_the_walk() {
        assert_eq!(current_streak(&set(&[1, 2, 4]), today()), 2);
    }

    #[test]
    fn today_counts() {
        assert_eq!(current_streak(&set(&[0, 1, 2]), today()), 3);
        assert_eq!(current_streak(&set(&[0, 2, 3]), today()), 1);
    }

    #[test]
    fn old_history_without_recent_entries_is_zero() {
        assert_eq!(current_streak(&set(&[2, 3, 4, 5]), today()), 0);
    }

    #[test]
    fn future_entries_are_ignored() {
        let mut logged = set(&[0]);
        logged.insert(today() + Days::new(1));
        assert_eq!(current_streak(&logged, today()), 1);
    }

    proptest! {
        #[test]
        fn zero_iff_today_and_yesterday_missing(offsets in prop::collection::vec(0u64..30, 0..20)) {
            let logged = set(&offsets);
            let recent = logged.contains(&days_ago(0)) || logged.contains(&days_ago(1));
            prop_assert_eq!(current_streak(&logged, today()) == 0, !recent);
        }

        #[test]
        fn never_exceeds_logged_days(offsets in prop::collection::vec(0u64..30, 0..20)) {
            let logged = set(&offsets);
            prop_assert!(current_streak(&logged, today()) as usize <= logged.len());
        }
    }
}
