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

use serde::Deserialize;

use crate::error::Fallible;

/// Filename of the optional collection settings file.
pub const CONFIG_FILENAME: &str = "quizbank.toml";

/// Default quiz sample size when neither the CLI nor the config names one.
pub const DEFAULT_QUIZ_COUNT: usize = 20;

/// Optional settings read from `quizbank.toml` in the bank directory. The
/// CLI overrides these; absent keys fall back to built-in defaults.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Collection display name for page titles.
    pub name: Option<String>,
    /// Default flashcard session cap.
    pub card_limit: Option<usize>,
    /// Default quiz sample size.
    pub quiz_count: Option<usize>,
}

impl Config {
    pub fn load(directory: &Path) -> Fallible<Config> {
        let path = directory.join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Config::default());
        }
        let text = read_to_string(&path)?;
        let config: Config = toml::from_str(&text)?;
        Ok(config)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("quizbank")
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_absent_file_is_default() -> Fallible<()> {
        let dir = tempdir()?.keep();
        let config = Config::load(&dir)?;
        assert_eq!(config.name, None);
        assert_eq!(config.display_name(), "quizbank");
        Ok(())
    }

    #[test]
    fn test_load() -> Fallible<()> {
        let dir = tempdir()?.keep();
        write(
            dir.join(CONFIG_FILENAME),
            "name = \"Citizenship Exam\"\nquiz_count = 33\n",
        )?;
        let config = Config::load(&dir)?;
        assert_eq!(config.display_name(), "Citizenship Exam");
        assert_eq!(config.quiz_count, Some(33));
        assert_eq!(config.card_limit, None);
        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_an_error() -> Fallible<()> {
        let dir = tempdir()?.keep();
        write(dir.join(CONFIG_FILENAME), "name = [broken")?;
        assert!(Config::load(&dir).is_err());
        Ok(())
    }
}
