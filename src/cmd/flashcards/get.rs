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

use axum::extract::State;
use axum::response::Html;
use maud::Markup;
use maud::html;
use quizbank_core::Question;

use crate::cmd::flashcards::state::MutableState;
use crate::cmd::flashcards::state::ServerState;
use crate::web::page_template;

pub async fn get_handler(State(state): State<ServerState>) -> Html<String> {
    let mutable = state.mutable.lock().unwrap();
    render(&state, &mutable)
}

pub fn render(state: &ServerState, mutable: &MutableState) -> Html<String> {
    let body = match (mutable.finished_at, mutable.current()) {
        (None, Some(question)) => card(state, mutable, question),
        _ => completion(state, mutable),
    };
    Html(page_template(&state.title, body).into_string())
}

fn card(state: &ServerState, mutable: &MutableState, question: &Question) -> Markup {
    html! {
        header {
            span class="progress" { (mutable.position + 1) " / " (state.total) }
            span class="section" { "Section " (question.id().section()) }
        }
        section class="question" {
            p class="id" { (question.id()) }
            p class="primary" { (question.question().primary) }
            p class="secondary" { (question.question().secondary) }
        }
        @if mutable.reveal {
            section class="answer" {
                p class="primary" { (question.answer().primary) }
                p class="secondary" { (question.answer().secondary) }
            }
            form method="post" action="/" class="controls" {
                button name="action" value="Hard" { "Hard" }
                button name="action" value="Correct" { "Correct" }
                button name="action" value="Easy" { "Easy" }
            }
        } @else {
            form method="post" action="/" class="controls" {
                button name="action" value="Reveal" { "Reveal" }
            }
        }
        form method="post" action="/" class="session-controls" {
            button name="action" value="Undo" { "Undo" }
            button name="action" value="End" { "End" }
        }
    }
}

fn completion(state: &ServerState, mutable: &MutableState) -> Markup {
    let reviewed = mutable.history.len();
    let correct = mutable
        .history
        .iter()
        .filter(|entry| entry.counted_correct)
        .count();
    let streak = mutable.streak.unwrap_or(0);
    html! {
        h1 { "Session Completed" }
        p class="score" { "Reviewed " (reviewed) " cards, " (correct) " rated correct or easy." }
        p class="streak" { "Streak: " (streak) " day(s)." }
        form method="post" action="/" {
            button name="action" value="Close" { "Close" }
        }
        p class="meta" { "Session started " (state.session_started_at) }
    }
}
