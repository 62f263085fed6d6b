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

use axum::Router;
use axum::routing::get;
use axum::routing::post;
use quizbank_core::Question;
use quizbank_core::Timestamp;
use quizbank_core::review_order;
use tokio::net::TcpListener;
use tokio::sync::oneshot::channel;

use crate::cmd::flashcards::get::get_handler;
use crate::cmd::flashcards::post::post_handler;
use crate::cmd::flashcards::state::MutableState;
use crate::cmd::flashcards::state::ServerState;
use crate::collection::Collection;
use crate::collection::filter_section;
use crate::error::Fallible;
use crate::error::fail;
use crate::web::not_found_handler;
use crate::web::shutdown_signal;
use crate::web::style_handler;

pub struct FlashcardsConfig {
    pub path: Option<String>,
    pub host: String,
    pub port: u16,
    pub session_started_at: Timestamp,
    pub card_limit: Option<usize>,
    pub section_filter: Option<String>,
}

pub async fn start_flashcards_server(config: FlashcardsConfig) -> Fallible<()> {
    let Collection {
        directory: _,
        db,
        questions,
        config: bank_config,
    } = Collection::new(config.path)?;

    let states = db.review_states()?;
    let questions = filter_section(questions, config.section_filter.as_deref());
    let queue = review_order(questions, &states);
    let limit = config.card_limit.or(bank_config.card_limit);
    let queue: Vec<Question> = match limit {
        Some(limit) => queue.into_iter().take(limit).collect(),
        None => queue,
    };

    if queue.is_empty() {
        println!("No questions to review.");
        return Ok(());
    }

    // Create shutdown channel
    let (shutdown_tx, shutdown_rx) = channel();

    let state = ServerState {
        title: bank_config.display_name().to_string(),
        total: queue.len(),
        session_started_at: config.session_started_at,
        mutable: Arc::new(Mutex::new(MutableState {
            db,
            queue,
            position: 0,
            reveal: false,
            history: Vec::new(),
            finished_at: None,
            streak: None,
        })),
        shutdown_tx: Arc::new(Mutex::new(Some(shutdown_tx))),
    };
    let app = Router::new();
    let app = app.route("/", get(get_handler));
    let app = app.route("/", post(post_handler));
    let app = app.route("/style.css", get(style_handler));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state.clone());
    let bind = format!("{}:{}", config.host, config.port);

    // Start the server with graceful shutdown on Ctrl+C or the Close button.
    log::debug!("Starting flashcards server on {bind}");
    let listener = TcpListener::bind(bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_rx))
        .await?;

    // Check if the session was complete when the server shut down.
    let mutable = state.mutable.lock().unwrap();
    if mutable.finished_at.is_some() {
        Ok(())
    } else {
        fail("Session interrupted before completion")
    }
}
