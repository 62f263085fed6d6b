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

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::fail;
use crate::types::question::Question;
use crate::types::question::QuestionId;
use crate::types::timestamp::Timestamp;

/// A three-level self-assessment used to bias flashcard review order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Ease {
    Hard,
    Correct,
    Easy,
}

impl Ease {
    pub fn as_str(&self) -> &str {
        match self {
            Ease::Hard => "hard",
            Ease::Correct => "correct",
            Ease::Easy => "easy",
        }
    }

    /// Position in review order. Unseen questions rank ahead of all of these.
    fn rank(self) -> u8 {
        match self {
            Ease::Hard => 1,
            Ease::Correct => 2,
            Ease::Easy => 3,
        }
    }
}

impl TryFrom<String> for Ease {
    type Error = ErrorReport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "hard" => Ok(Ease::Hard),
            "correct" => Ok(Ease::Correct),
            "easy" => Ok(Ease::Easy),
            _ => fail(format!("invalid ease rating: '{value}'")),
        }
    }
}

/// Per-question review state. Mutated only by flashcard grading.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ReviewState {
    pub ease: Ease,
    pub last_seen: Timestamp,
}

/// Sort questions into review order: a stable sort by `(ease rank, last
/// seen)` ascending. Unseen questions come first, then hard, correct, easy;
/// within a rank, least recently seen first. Ties keep their bank order.
pub fn review_order(
    questions: Vec<Question>,
    states: &HashMap<QuestionId, ReviewState>,
) -> Vec<Question> {
    let mut questions = questions;
    questions.sort_by_key(|question| match states.get(question.id()) {
        None => (0, None),
        Some(state) => (state.ease.rank(), Some(state.last_seen)),
    });
    questions
}
