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

use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;

use quizbank_core::Question;
use quizbank_core::parse_bank;
use walkdir::WalkDir;

use crate::config::Config;
use crate::db::DB_FILENAME;
use crate::db::Database;
use crate::error::Fallible;
use crate::error::fail;

/// Extension of question bank files discovered in a directory.
pub const BANK_EXTENSION: &str = "bank";

/// A loaded question bank: the parsed records, the progress database stored
/// alongside it, and the optional collection settings.
pub struct Collection {
    pub directory: PathBuf,
    pub db: Database,
    pub questions: Vec<Question>,
    pub config: Config,
}

impl Collection {
    /// Load from a bank file or a directory of bank files. By default, the
    /// current working directory is used.
    pub fn new(path: Option<String>) -> Fallible<Collection> {
        let path = PathBuf::from(path.unwrap_or_else(|| ".".to_string()));
        if !path.exists() {
            return fail("path does not exist.");
        }
        let (directory, files) = if path.is_dir() {
            (path.clone(), find_bank_files(&path)?)
        } else {
            (parent_directory(&path), vec![path])
        };
        let mut questions = Vec::new();
        for file in &files {
            let text = read_to_string(file)?;
            questions.extend(parse_bank(&file.display().to_string(), &text)?);
        }
        let config = Config::load(&directory)?;
        let db = Database::open(&directory.join(DB_FILENAME))?;
        Ok(Collection {
            directory,
            db,
            questions,
            config,
        })
    }
}

/// Keep only questions under the given hierarchical section prefix.
pub fn filter_section(questions: Vec<Question>, section: Option<&str>) -> Vec<Question> {
    match section {
        Some(prefix) => questions
            .into_iter()
            .filter(|question| question.id().in_section(prefix))
            .collect(),
        None => questions,
    }
}

fn parent_directory(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// All `*.bank` files under the directory, in path order.
fn find_bank_files(directory: &Path) -> Fallible<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(directory) {
        let entry = entry?;
        let is_bank = entry.path().extension().and_then(|ext| ext.to_str()) == Some(BANK_EXTENSION);
        if entry.file_type().is_file() && is_bank {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use quizbank_core::QuestionId;

    use super::*;
    use crate::helper::TEST_BANK;
    use crate::helper::create_tmp_bank_directory;

    #[test]
    fn test_nonexistent_path() {
        let result = Collection::new(Some("./derpherp".to_string()));
        assert_eq!(
            result.err().unwrap().to_string(),
            "error: path does not exist."
        );
    }

    #[test]
    fn test_load_directory() -> Fallible<()> {
        let directory = create_tmp_bank_directory()?;
        let collection = Collection::new(Some(directory))?;
        assert_eq!(collection.questions.len(), 3);
        assert_eq!(collection.questions[0].id(), &QuestionId::new("1.01"));
        Ok(())
    }

    #[test]
    fn test_load_single_file() -> Fallible<()> {
        let directory = create_tmp_bank_directory()?;
        let file = PathBuf::from(&directory).join("sample.bank");
        let collection = Collection::new(Some(file.display().to_string()))?;
        assert_eq!(collection.questions.len(), 3);
        assert_eq!(collection.directory, PathBuf::from(&directory));
        Ok(())
    }

    #[test]
    fn test_empty_directory() -> Fallible<()> {
        let dir = tempfile::tempdir()?.keep();
        let collection = Collection::new(Some(dir.display().to_string()))?;
        assert!(collection.questions.is_empty());
        Ok(())
    }

    #[test]
    fn test_filter_section() -> Fallible<()> {
        let questions = quizbank_core::parse_bank("test.bank", TEST_BANK)?;
        let filtered = filter_section(questions.clone(), Some("1"));
        assert_eq!(filtered.len(), 2);
        let all = filter_section(questions, None);
        assert_eq!(all.len(), 3);
        Ok(())
    }
}
