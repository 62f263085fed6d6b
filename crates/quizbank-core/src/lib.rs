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

//! quizbank-core: Core library for the quizbank study aid.
//!
//! This library provides the pure logic:
//! - Parsing semicolon-delimited question bank files
//! - Flashcard review ordering from ease ratings
//! - Quiz sampling and scoring
//! - Daily progress aggregation and streak computation

pub mod error;
pub mod parser;
pub mod quiz;
pub mod review;
pub mod rng;
pub mod stats;
pub mod types;

// Re-exports for convenience
pub use error::{ErrorReport, Fallible, fail};
pub use parser::{duplicate_ids, parse_bank, parse_banks};
pub use quiz::{QuizItem, QuizScore};
pub use review::{Ease, ReviewState, review_order};
pub use stats::{DailyStat, streak};
pub use types::date::Date;
pub use types::question::{Bilingual, Question, QuestionId};
pub use types::timestamp::Timestamp;
