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

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use quizbank_core::DailyStat;
use quizbank_core::streak;
use serde::Serialize;

use crate::collection::Collection;
use crate::error::Fallible;

#[derive(ValueEnum, Clone, Copy, PartialEq)]
pub enum StatsFormat {
    Text,
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Serialize)]
struct StatsReport {
    days: Vec<DailyStat>,
    streak: u32,
}

/// Print the daily ledger and the consecutive-day streak.
pub fn print_stats(path: Option<String>, format: StatsFormat) -> Fallible<()> {
    let Collection { db, .. } = Collection::new(path)?;
    let days = db.daily_stats()?;
    let streak = streak(&days);
    match format {
        StatsFormat::Text => {
            if days.is_empty() {
                println!("No activity recorded.");
                return Ok(());
            }
            println!("{:<12} {:>6} {:>8}", "date", "seen", "correct");
            for day in &days {
                println!(
                    "{:<12} {:>6} {:>8}",
                    day.date.to_string(),
                    day.seen,
                    day.correct
                );
            }
            println!("Streak: {streak} day(s).");
        }
        StatsFormat::Json => {
            let report = StatsReport { days, streak };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use quizbank_core::Date;

    use super::*;
    use crate::helper::create_tmp_bank_directory;

    #[test]
    fn test_stats_on_fresh_collection() -> Fallible<()> {
        let directory = create_tmp_bank_directory()?;
        print_stats(Some(directory.clone()), StatsFormat::Text)?;
        print_stats(Some(directory), StatsFormat::Json)?;
        Ok(())
    }

    #[test]
    fn test_stats_after_activity() -> Fallible<()> {
        let directory = create_tmp_bank_directory()?;
        {
            let Collection { db, .. } = Collection::new(Some(directory.clone()))?;
            let date = Date::new(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
            db.bump_day(date, 3, 2)?;
        }
        print_stats(Some(directory), StatsFormat::Text)?;
        Ok(())
    }

    #[test]
    fn test_report_serialization() -> Fallible<()> {
        let date = Date::new(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
        let report = StatsReport {
            days: vec![DailyStat {
                date,
                seen: 3,
                correct: 2,
            }],
            streak: 1,
        };
        let json = serde_json::to_string(&report)?;
        assert_eq!(
            json,
            "{\"days\":[{\"date\":\"2024-05-10\",\"seen\":3,\"correct\":2}],\"streak\":1}"
        );
        Ok(())
    }
}
