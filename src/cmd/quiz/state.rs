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

use std::sync::Arc;
use std::sync::Mutex;

use quizbank_core::QuizItem;
use quizbank_core::QuizScore;
use quizbank_core::Timestamp;
use tokio::sync::oneshot::Sender;

use crate::db::Database;

pub struct MutableState {
    pub db: Database,
    pub items: Vec<QuizItem>,
    pub position: usize,
    /// The choice made for the current item, if any. `Some` means the
    /// feedback screen is showing.
    pub chosen: Option<usize>,
    pub score: QuizScore,
    pub finished_at: Option<Timestamp>,
    pub streak: Option<u32>,
}

impl MutableState {
    pub fn current(&self) -> Option<&QuizItem> {
        self.items.get(self.position)
    }
}

#[derive(Clone)]
pub struct ServerState {
    pub title: String,
    pub total: usize,
    pub session_started_at: Timestamp,
    pub mutable: Arc<Mutex<MutableState>>,
    pub shutdown_tx: Arc<Mutex<Option<Sender<()>>>>,
}
