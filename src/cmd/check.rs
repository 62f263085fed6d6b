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

use std::collections::HashSet;

use quizbank_core::duplicate_ids;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;

/// Parse the bank and report duplicate identifiers. Parse errors and
/// duplicates make the command exit nonzero.
pub fn check_collection(path: Option<String>) -> Fallible<()> {
    let Collection { questions, .. } = Collection::new(path)?;
    let sections: HashSet<&str> = questions
        .iter()
        .map(|question| question.id().section())
        .collect();
    println!(
        "{} questions in {} sections.",
        questions.len(),
        sections.len()
    );
    let duplicates = duplicate_ids(&questions);
    if duplicates.is_empty() {
        Ok(())
    } else {
        for id in &duplicates {
            println!("duplicate identifier: {id}");
        }
        fail(format!("{} duplicate identifiers found.", duplicates.len()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;
    use std::path::PathBuf;

    use super::*;
    use crate::helper::create_tmp_bank_directory;

    #[test]
    fn test_check_ok() -> Fallible<()> {
        let directory = create_tmp_bank_directory()?;
        check_collection(Some(directory))
    }

    #[test]
    fn test_check_duplicates() -> Fallible<()> {
        let directory = create_tmp_bank_directory()?;
        let extra = "1.01;Nochmal?;Again?;Ja;Yes;Nein;No;Nie;Never;Oft;Often\n";
        write(PathBuf::from(&directory).join("extra.bank"), extra)?;
        let result = check_collection(Some(directory));
        assert_eq!(
            result.err().unwrap().to_string(),
            "error: 1 duplicate identifiers found."
        );
        Ok(())
    }

    #[test]
    fn test_check_parse_error() -> Fallible<()> {
        let directory = create_tmp_bank_directory()?;
        write(PathBuf::from(&directory).join("broken.bank"), "too;few\n")?;
        assert!(check_collection(Some(directory)).is_err());
        Ok(())
    }
}
