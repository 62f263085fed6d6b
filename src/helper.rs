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

//! Shared test fixtures.

use std::fs::write;

use crate::error::Fallible;

/// Three records: two in section 1, one in section 2.
pub const TEST_BANK: &str = "\
# sample question bank
1.01;Erste Frage?;First question?;Richtig eins;Right one;Falsch A;Wrong A;Falsch B;Wrong B;Falsch C;Wrong C
1.02;Zweite Frage?;Second question?;Richtig zwei;Right two;Falsch D;Wrong D;Falsch E;Wrong E;Falsch F;Wrong F
2.01;Dritte Frage?;Third question?;Richtig drei;Right three;Falsch G;Wrong G;Falsch H;Wrong H;Falsch I;Wrong I
";

/// Create a temporary directory holding `sample.bank` with [`TEST_BANK`].
pub fn create_tmp_bank_directory() -> Fallible<String> {
    let dir = tempfile::tempdir()?.keep();
    write(dir.join("sample.bank"), TEST_BANK)?;
    Ok(dir.display().to_string())
}
