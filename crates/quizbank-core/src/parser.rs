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
use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::error::Fallible;
use crate::types::question::Bilingual;
use crate::types::question::Question;
use crate::types::question::QuestionId;

/// Fields per record: an identifier followed by five bilingual pairs
/// (question, correct answer, three wrong answers).
pub const FIELDS_PER_LINE: usize = 11;

#[derive(Debug, PartialEq)]
pub struct ParserError {
    pub message: String,
    pub source_path: String,
    pub line_num: usize,
}

impl ParserError {
    fn new(message: impl Into<String>, source_path: &str, line_num: usize) -> Self {
        ParserError {
            message: message.into(),
            source_path: source_path.to_string(),
            line_num,
        }
    }
}

impl Display for ParserError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Location: {}:{}",
            self.message,
            self.source_path,
            self.line_num + 1
        )
    }
}

impl Error for ParserError {}

/// Parse a single bank file's content into question records.
///
/// Single pass over semicolon-delimited lines. Blank lines and lines starting
/// with `#` are skipped. There is no escaping: a semicolon always delimits.
pub fn parse_bank(source_path: &str, text: &str) -> Result<Vec<Question>, ParserError> {
    let mut questions = Vec::new();
    for (line_num, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        questions.push(parse_line(source_path, line_num, line)?);
    }
    Ok(questions)
}

/// Parse multiple bank files into a combined list of question records.
///
/// # Arguments
/// * `files` - Iterator of (filename, content) pairs
pub fn parse_banks<'a>(files: impl Iterator<Item = (&'a str, &'a str)>) -> Fallible<Vec<Question>> {
    let mut all_questions = Vec::new();
    for (filename, text) in files {
        let questions = parse_bank(filename, text)?;
        all_questions.extend(questions);
    }
    Ok(all_questions)
}

fn parse_line(source_path: &str, line_num: usize, line: &str) -> Result<Question, ParserError> {
    let fields: Vec<&str> = line.split(';').collect();
    if fields.len() != FIELDS_PER_LINE {
        return Err(ParserError::new(
            format!(
                "Expected {} semicolon-separated fields, found {}.",
                FIELDS_PER_LINE,
                fields.len()
            ),
            source_path,
            line_num,
        ));
    }
    let id = fields[0].trim();
    if id.is_empty() {
        return Err(ParserError::new(
            "Empty question identifier.",
            source_path,
            line_num,
        ));
    }
    let pair = |i: usize| Bilingual::new(fields[i].trim(), fields[i + 1].trim());
    Ok(Question::new(
        QuestionId::new(id),
        pair(1),
        pair(3),
        [pair(5), pair(7), pair(9)],
    ))
}

/// Identifiers that occur more than once, in first-seen order. Uniqueness is
/// assumed by the rest of the system but not enforced by the parser.
pub fn duplicate_ids(questions: &[Question]) -> Vec<QuestionId> {
    let mut counts: HashMap<&QuestionId, usize> = HashMap::new();
    for question in questions {
        *counts.entry(question.id()).or_insert(0) += 1;
    }
    let mut duplicates = Vec::new();
    for question in questions {
        if counts[question.id()] > 1 && !duplicates.contains(question.id()) {
            duplicates.push(question.id().clone());
        }
    }
    duplicates
}
