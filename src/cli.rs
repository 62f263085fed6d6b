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

use std::process::exit;

use clap::Parser;
use quizbank_core::Timestamp;
use tokio::spawn;

use crate::cmd::check::check_collection;
use crate::cmd::flashcards::server::FlashcardsConfig;
use crate::cmd::flashcards::server::start_flashcards_server;
use crate::cmd::quiz::server::QuizConfig;
use crate::cmd::quiz::server::start_quiz_server;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_stats;
use crate::error::Fallible;
use crate::web::wait_for_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Review flashcards through a web interface, unseen and hard questions first.
    Flashcards {
        /// Path to the question bank file or directory. By default, the current working directory is used.
        path: Option<String>,
        /// Maximum number of cards in the session. By default, the whole bank is reviewed.
        #[arg(long)]
        card_limit: Option<usize>,
        /// Only review questions whose identifier falls under this section prefix.
        #[arg(long)]
        from_section: Option<String>,
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to use for the web server. Default is 8000.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Whether to open the browser automatically. Default is true.
        #[arg(long)]
        open_browser: Option<bool>,
    },
    /// Take a multiple-choice quiz through a web interface.
    Quiz {
        /// Path to the question bank file or directory. By default, the current working directory is used.
        path: Option<String>,
        /// Number of questions to sample. Default is 20.
        #[arg(long)]
        count: Option<usize>,
        /// Only quiz questions whose identifier falls under this section prefix.
        #[arg(long)]
        from_section: Option<String>,
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to use for the web server. Default is 8000.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Whether to open the browser automatically. Default is true.
        #[arg(long)]
        open_browser: Option<bool>,
    },
    /// Print the daily progress ledger and streak.
    Stats {
        /// Path to the question bank file or directory. By default, the current working directory is used.
        path: Option<String>,
        /// Which output format to use.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// Check a question bank: parse it and report duplicate identifiers.
    Check {
        /// Path to the question bank file or directory. By default, the current working directory is used.
        path: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Flashcards {
            path,
            card_limit,
            from_section,
            host,
            port,
            open_browser,
        } => {
            if open_browser.unwrap_or(true) {
                open_browser_when_ready(&host, port);
            }
            let config = FlashcardsConfig {
                path,
                host,
                port,
                session_started_at: Timestamp::now(),
                card_limit,
                section_filter: from_section,
            };
            start_flashcards_server(config).await
        }
        Command::Quiz {
            path,
            count,
            from_section,
            host,
            port,
            open_browser,
        } => {
            if open_browser.unwrap_or(true) {
                open_browser_when_ready(&host, port);
            }
            let config = QuizConfig {
                path,
                host,
                port,
                session_started_at: Timestamp::now(),
                count,
                section_filter: from_section,
                shuffle: true,
            };
            start_quiz_server(config).await
        }
        Command::Stats { path, format } => print_stats(path, format),
        Command::Check { path } => check_collection(path),
    }
}

/// Open the browser from a separate task once the server is up.
fn open_browser_when_ready(host: &str, port: u16) {
    let browser_host = host.to_string();
    spawn(async move {
        match wait_for_server(&browser_host, port).await {
            Ok(_) => {
                let _ = open::that(format!("http://{browser_host}:{port}/"));
            }
            Err(e) => {
                eprintln!("Failed to connect to server: {e}");
                exit(-1)
            }
        }
    });
}
