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

use std::collections::HashMap;
use std::path::Path;

use quizbank_core::DailyStat;
use quizbank_core::Date;
use quizbank_core::Ease;
use quizbank_core::QuestionId;
use quizbank_core::ReviewState;
use quizbank_core::Timestamp;
use rusqlite::Connection;

use crate::error::Fallible;

/// Filename of the progress database, stored alongside the bank.
pub const DB_FILENAME: &str = "progress.db";

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS reviews (
    question_id TEXT PRIMARY KEY,
    ease TEXT NOT NULL,
    last_seen TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS days (
    date TEXT PRIMARY KEY,
    seen INTEGER NOT NULL,
    correct INTEGER NOT NULL
);
";

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(path: &Path) -> Fallible<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Database { conn })
    }

    /// All review states, keyed by question identifier.
    pub fn review_states(&self) -> Fallible<HashMap<QuestionId, ReviewState>> {
        let mut stmt = self
            .conn
            .prepare("SELECT question_id, ease, last_seen FROM reviews")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;
        let mut states = HashMap::new();
        for row in rows {
            let (id, ease, last_seen) = row?;
            let state = ReviewState {
                ease: Ease::try_from(ease)?,
                last_seen: Timestamp::try_from(last_seen)?,
            };
            states.insert(QuestionId::new(id), state);
        }
        Ok(states)
    }

    pub fn get_review(&self, id: &QuestionId) -> Fallible<Option<ReviewState>> {
        let mut stmt = self
            .conn
            .prepare("SELECT ease, last_seen FROM reviews WHERE question_id = ?1")?;
        let mut rows = stmt.query_map([id.as_str()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;
        match rows.next() {
            Some(row) => {
                let (ease, last_seen) = row?;
                Ok(Some(ReviewState {
                    ease: Ease::try_from(ease)?,
                    last_seen: Timestamp::try_from(last_seen)?,
                }))
            }
            None => Ok(None),
        }
    }

    pub fn set_review(&self, id: &QuestionId, state: ReviewState) -> Fallible<()> {
        self.conn.execute(
            "INSERT INTO reviews (question_id, ease, last_seen) VALUES (?1, ?2, ?3)
             ON CONFLICT(question_id) DO UPDATE SET ease = ?2, last_seen = ?3",
            (
                id.as_str(),
                state.ease.as_str(),
                state.last_seen.to_string(),
            ),
        )?;
        Ok(())
    }

    pub fn clear_review(&self, id: &QuestionId) -> Fallible<()> {
        self.conn
            .execute("DELETE FROM reviews WHERE question_id = ?1", [id.as_str()])?;
        Ok(())
    }

    /// Apply deltas to a day's counts, creating the row if needed. Negative
    /// deltas reverse an earlier bump (undo).
    pub fn bump_day(&self, date: Date, seen: i64, correct: i64) -> Fallible<()> {
        self.conn.execute(
            "INSERT INTO days (date, seen, correct) VALUES (?1, ?2, ?3)
             ON CONFLICT(date) DO UPDATE SET seen = seen + ?2, correct = correct + ?3",
            (date.to_string(), seen, correct),
        )?;
        Ok(())
    }

    /// The full daily ledger, oldest day first.
    pub fn daily_stats(&self) -> Fallible<Vec<DailyStat>> {
        let mut stmt = self
            .conn
            .prepare("SELECT date, seen, correct FROM days ORDER BY date")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })?;
        let mut days = Vec::new();
        for row in rows {
            let (date, seen, correct) = row?;
            days.push(DailyStat {
                date: Date::try_from(date)?,
                seen: seen.max(0) as u32,
                correct: correct.max(0) as u32,
            });
        }
        Ok(days)
    }
}
