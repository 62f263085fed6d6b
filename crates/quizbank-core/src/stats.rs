// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::types::date::Date;

/// One day's activity counts. The streak is derived from these, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStat {
    pub date: Date,
    pub seen: u32,
    pub correct: u32,
}

/// The consecutive-day streak ending at the most recent day with activity.
///
/// A backward day-by-day walk from the most recent active date until a gap
/// is found. Days with a zero `seen` count do not count as activity. No
/// activity at all means a streak of zero; activity today is not required.
pub fn streak(days: &[DailyStat]) -> u32 {
    let active: BTreeSet<Date> = days
        .iter()
        .filter(|day| day.seen > 0)
        .map(|day| day.date)
        .collect();
    let mut current = match active.last() {
        Some(date) => *date,
        None => return 0,
    };
    let mut count = 0;
    while active.contains(&current) {
        count += 1;
        current = match current.pred() {
            Some(prev) => prev,
            None => break,
        };
    }
    count
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn make_stat(y: i32, m: u32, d: u32, seen: u32) -> DailyStat {
        DailyStat {
            date: Date::new(NaiveDate::from_ymd_opt(y, m, d).unwrap()),
            seen,
            correct: 0,
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(streak(&[]), 0);
    }

    #[test]
    fn test_single_day() {
        assert_eq!(streak(&[make_stat(2024, 5, 10, 3)]), 1);
    }

    #[test]
    fn test_consecutive_days() {
        let days = [
            make_stat(2024, 5, 8, 1),
            make_stat(2024, 5, 9, 4),
            make_stat(2024, 5, 10, 2),
        ];
        assert_eq!(streak(&days), 3);
    }

    #[test]
    fn test_gap_ends_streak() {
        let days = [
            make_stat(2024, 5, 1, 1),
            make_stat(2024, 5, 2, 1),
            make_stat(2024, 5, 9, 4),
            make_stat(2024, 5, 10, 2),
        ];
        assert_eq!(streak(&days), 2);
    }

    #[test]
    fn test_unsorted_input() {
        let days = [
            make_stat(2024, 5, 10, 2),
            make_stat(2024, 5, 9, 4),
        ];
        assert_eq!(streak(&days), 2);
    }

    #[test]
    fn test_zero_seen_is_not_activity() {
        let days = [
            make_stat(2024, 5, 8, 1),
            make_stat(2024, 5, 9, 0),
            make_stat(2024, 5, 10, 2),
        ];
        assert_eq!(streak(&days), 1);
    }

    #[test]
    fn test_crosses_month_boundary() {
        let days = [
            make_stat(2024, 2, 29, 1),
            make_stat(2024, 3, 1, 1),
        ];
        assert_eq!(streak(&days), 2);
    }
}
