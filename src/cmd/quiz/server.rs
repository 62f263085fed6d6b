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
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use axum::Router;
use axum::routing::get;
use axum::routing::post;
use quizbank_core::QuizItem;
use quizbank_core::QuizScore;
use quizbank_core::Timestamp;
use quizbank_core::rng::TinyRng;
use quizbank_core::rng::sample;
use tokio::net::TcpListener;
use tokio::sync::oneshot::channel;

use crate::cmd::quiz::get::get_handler;
use crate::cmd::quiz::post::post_handler;
use crate::cmd::quiz::state::MutableState;
use crate::cmd::quiz::state::ServerState;
use crate::collection::Collection;
use crate::collection::filter_section;
use crate::config::DEFAULT_QUIZ_COUNT;
use crate::error::Fallible;
use crate::error::fail;
use crate::web::not_found_handler;
use crate::web::shutdown_signal;
use crate::web::style_handler;

pub struct QuizConfig {
    pub path: Option<String>,
    pub host: String,
    pub port: u16,
    pub session_started_at: Timestamp,
    pub count: Option<usize>,
    pub section_filter: Option<String>,
    /// When false, the first `count` questions are asked in bank order with
    /// the correct answer first. Used by tests.
    pub shuffle: bool,
}

pub async fn start_quiz_server(config: QuizConfig) -> Fallible<()> {
    let Collection {
        directory: _,
        db,
        questions,
        config: bank_config,
    } = Collection::new(config.path)?;

    let questions = filter_section(questions, config.section_filter.as_deref());
    let count = config
        .count
        .or(bank_config.quiz_count)
        .unwrap_or(DEFAULT_QUIZ_COUNT);

    let items: Vec<QuizItem> = if config.shuffle {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64;
        let mut rng = TinyRng::from_seed(seed);
        let sampled = sample(questions, count, &mut rng);
        sampled
            .into_iter()
            .map(|question| QuizItem::shuffled(question, &mut rng))
            .collect()
    } else {
        questions
            .into_iter()
            .take(count)
            .map(QuizItem::ordered)
            .collect()
    };

    if items.is_empty() {
        println!("No questions to quiz.");
        return Ok(());
    }

    // Create shutdown channel
    let (shutdown_tx, shutdown_rx) = channel();

    let state = ServerState {
        title: bank_config.display_name().to_string(),
        total: items.len(),
        session_started_at: config.session_started_at,
        mutable: Arc::new(Mutex::new(MutableState {
            db,
            items,
            position: 0,
            chosen: None,
            score: QuizScore::default(),
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
    log::debug!("Starting quiz server on {bind}");
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
