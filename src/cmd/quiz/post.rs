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

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use quizbank_core::Timestamp;
use quizbank_core::streak;
use serde::Deserialize;

use crate::cmd::quiz::get::render;
use crate::cmd::quiz::state::MutableState;
use crate::cmd::quiz::state::ServerState;
use crate::error::Fallible;
use crate::error::fail;

#[derive(Deserialize)]
pub struct ActionForm {
    action: String,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<ActionForm>,
) -> (StatusCode, Html<String>) {
    let mut mutable = state.mutable.lock().unwrap();
    match apply_action(&state, &mut mutable, &form.action) {
        Ok(()) => (StatusCode::OK, render(&state, &mutable)),
        Err(e) => {
            log::error!("action '{}' failed: {e}", form.action);
            (StatusCode::INTERNAL_SERVER_ERROR, Html(e.to_string()))
        }
    }
}

fn apply_action(state: &ServerState, mutable: &mut MutableState, action: &str) -> Fallible<()> {
    if let Some(index) = action.strip_prefix("choose-") {
        let index: usize = match index.parse() {
            Ok(index) => index,
            Err(_) => return fail(format!("invalid choice: '{action}'")),
        };
        return choose(mutable, index);
    }
    match action {
        "Next" => next(mutable),
        "End" => finish(mutable),
        "Close" => {
            shutdown(state);
            Ok(())
        }
        _ => fail(format!("unknown action: '{action}'")),
    }
}

/// Score the choice and bump the daily ledger. Quiz answers never touch the
/// per-question review state.
fn choose(mutable: &mut MutableState, choice: usize) -> Fallible<()> {
    if mutable.finished_at.is_some() || mutable.chosen.is_some() {
        // Already answered; ignore the double submit.
        return Ok(());
    }
    let item = match mutable.current() {
        Some(item) => item,
        None => return Ok(()),
    };
    if choice >= item.choices().len() {
        return fail(format!("choice out of range: {choice}"));
    }
    let correct = item.is_correct(choice);
    mutable.score.record(correct);
    let answered_at = Timestamp::now();
    mutable.db.bump_day(answered_at.date(), 1, correct as i64)?;
    mutable.chosen = Some(choice);
    Ok(())
}

fn next(mutable: &mut MutableState) -> Fallible<()> {
    if mutable.chosen.is_none() {
        return Ok(());
    }
    mutable.position += 1;
    mutable.chosen = None;
    if mutable.position == mutable.items.len() {
        finish(mutable)?;
    }
    Ok(())
}

fn finish(mutable: &mut MutableState) -> Fallible<()> {
    if mutable.finished_at.is_none() {
        mutable.finished_at = Some(Timestamp::now());
        mutable.streak = Some(streak(&mutable.db.daily_stats()?));
    }
    Ok(())
}

fn shutdown(state: &ServerState) {
    if let Some(tx) = state.shutdown_tx.lock().unwrap().take() {
        let _ = tx.send(());
    }
}
