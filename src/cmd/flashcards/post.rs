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
use quizbank_core::Ease;
use quizbank_core::ReviewState;
use quizbank_core::Timestamp;
use quizbank_core::streak;
use serde::Deserialize;

use crate::cmd::flashcards::get::render;
use crate::cmd::flashcards::state::GradedReview;
use crate::cmd::flashcards::state::MutableState;
use crate::cmd::flashcards::state::ServerState;
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
    match action {
        "Reveal" => {
            if mutable.finished_at.is_none() {
                mutable.reveal = true;
            }
            Ok(())
        }
        "Hard" => grade(mutable, Ease::Hard),
        "Correct" => grade(mutable, Ease::Correct),
        "Easy" => grade(mutable, Ease::Easy),
        "Undo" => undo(mutable),
        "End" => finish(mutable),
        "Close" => {
            shutdown(state);
            Ok(())
        }
        _ => fail(format!("unknown action: '{action}'")),
    }
}

/// Write the rating and bump the daily ledger. A hard rating counts as seen
/// but not correct.
fn grade(mutable: &mut MutableState, ease: Ease) -> Fallible<()> {
    if mutable.finished_at.is_some() {
        return Ok(());
    }
    let question = match mutable.current() {
        Some(question) => question.clone(),
        None => return Ok(()),
    };
    let graded_at = Timestamp::now();
    let prev = mutable.db.get_review(question.id())?;
    mutable.db.set_review(
        question.id(),
        ReviewState {
            ease,
            last_seen: graded_at,
        },
    )?;
    let counted_correct = ease != Ease::Hard;
    mutable
        .db
        .bump_day(graded_at.date(), 1, counted_correct as i64)?;
    mutable.history.push(GradedReview {
        prev,
        graded_at,
        counted_correct,
    });
    mutable.position += 1;
    mutable.reveal = false;
    if mutable.position == mutable.queue.len() {
        finish(mutable)?;
    }
    Ok(())
}

fn undo(mutable: &mut MutableState) -> Fallible<()> {
    let entry = match mutable.history.pop() {
        Some(entry) => entry,
        None => return Ok(()),
    };
    mutable.position -= 1;
    let question = mutable.queue[mutable.position].clone();
    match entry.prev {
        Some(prev) => mutable.db.set_review(question.id(), prev)?,
        None => mutable.db.clear_review(question.id())?,
    }
    mutable
        .db
        .bump_day(entry.graded_at.date(), -1, -(entry.counted_correct as i64))?;
    mutable.reveal = false;
    mutable.finished_at = None;
    mutable.streak = None;
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
