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
use quizbank_core::QuizItem;

use crate::cmd::quiz::state::MutableState;
use crate::cmd::quiz::state::ServerState;
use crate::web::page_template;

const CHOICE_LABELS: [&str; 4] = ["A", "B", "C", "D"];

pub async fn get_handler(State(state): State<ServerState>) -> Html<String> {
    let mutable = state.mutable.lock().unwrap();
    render(&state, &mutable)
}

pub fn render(state: &ServerState, mutable: &MutableState) -> Html<String> {
    let body = match (mutable.finished_at, mutable.current()) {
        (None, Some(item)) => match mutable.chosen {
            None => question(state, mutable, item),
            Some(chosen) => feedback(item, chosen),
        },
        _ => completion(state, mutable),
    };
    Html(page_template(&state.title, body).into_string())
}

fn question(state: &ServerState, mutable: &MutableState, item: &QuizItem) -> Markup {
    let question = item.question();
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
        @for (i, choice) in item.choices().iter().enumerate() {
            form method="post" action="/" class="choice" {
                button name="action" value=(format!("choose-{i}")) {
                    span class="label" { (CHOICE_LABELS[i]) }
                    (choice.primary)
                    span class="secondary" { (choice.secondary) }
                }
            }
        }
        form method="post" action="/" class="session-controls" {
            button name="action" value="End" { "End" }
        }
    }
}

fn feedback(item: &QuizItem, chosen: usize) -> Markup {
    let question = item.question();
    let correct = item.is_correct(chosen);
    html! {
        section class="question" {
            p class="id" { (question.id()) }
            p class="primary" { (question.question().primary) }
        }
        @if correct {
            p class="verdict" { "Correct!" }
        } @else {
            p class="verdict" { "Incorrect." }
        }
        section class="answer" {
            p class="primary" { (question.answer().primary) }
            p class="secondary" { (question.answer().secondary) }
        }
        form method="post" action="/" class="controls" {
            button name="action" value="Next" { "Next" }
        }
        form method="post" action="/" class="session-controls" {
            button name="action" value="End" { "End" }
        }
    }
}

fn completion(state: &ServerState, mutable: &MutableState) -> Markup {
    let score = mutable.score;
    let streak = mutable.streak.unwrap_or(0);
    html! {
        h1 { "Session Completed" }
        p class="score" {
            "Score: " (score.correct) " / " (score.answered) " (" (score.percent()) "%)"
        }
        p class="streak" { "Streak: " (streak) " day(s)." }
        form method="post" action="/" {
            button name="action" value="Close" { "Close" }
        }
        p class="meta" { "Session started " (state.session_started_at) }
    }
}
