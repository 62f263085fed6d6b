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

use serde::Deserialize;
use serde::Serialize;

/// A two-language text pair: the exam language and a study-aid translation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
    pub primary: String,
    pub secondary: String,
}

impl Bilingual {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Bilingual {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}

/// A question identifier, e.g. `2.1.07`. The dot-separated prefix names the
/// section of the exam catalogue the question belongs to.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        QuestionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The section prefix: everything before the last dot separator. An
    /// identifier without a separator is its own section.
    pub fn section(&self) -> &str {
        match self.0.rfind('.') {
            Some(pos) => &self.0[..pos],
            None => &self.0,
        }
    }

    /// Whether this identifier falls under the given hierarchical prefix.
    /// `2.1` matches `2.1.07` but not `2.10.01`.
    pub fn in_section(&self, prefix: &str) -> bool {
        match self.0.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('.'),
            None => false,
        }
    }
}

impl Display for QuestionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A parsed question record. Immutable once parsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    question: Bilingual,
    answer: Bilingual,
    distractors: [Bilingual; 3],
}

impl Question {
    pub fn new(
        id: QuestionId,
        question: Bilingual,
        answer: Bilingual,
        distractors: [Bilingual; 3],
    ) -> Self {
        Question {
            id,
            question,
            answer,
            distractors,
        }
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn question(&self) -> &Bilingual {
        &self.question
    }

    /// The correct answer.
    pub fn answer(&self) -> &Bilingual {
        &self.answer
    }

    /// The three incorrect answers.
    pub fn distractors(&self) -> &[Bilingual; 3] {
        &self.distractors
    }
}
