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

mod get;
mod post;
pub mod server;
mod state;

#[cfg(test)]
mod tests {
    use portpicker::pick_unused_port;
    use quizbank_core::Timestamp;
    use reqwest::StatusCode;
    use tokio::spawn;

    use crate::cmd::flashcards::server::FlashcardsConfig;
    use crate::cmd::flashcards::server::start_flashcards_server;
    use crate::error::Fallible;
    use crate::helper::create_tmp_bank_directory;
    use crate::web::wait_for_server;

    const TEST_HOST: &str = "127.0.0.1";

    fn make_config(path: Option<String>, port: u16) -> FlashcardsConfig {
        FlashcardsConfig {
            path,
            host: TEST_HOST.to_string(),
            port,
            session_started_at: Timestamp::now(),
            card_limit: None,
            section_filter: None,
        }
    }

    async fn post_action(port: u16, action: &str) -> Fallible<String> {
        let response = reqwest::Client::new()
            .post(format!("http://{TEST_HOST}:{port}/"))
            .form(&[("action", action)])
            .send()
            .await?;
        assert!(response.status().is_success());
        Ok(response.text().await?)
    }

    #[tokio::test]
    async fn test_start_server_on_non_existent_path() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let config = make_config(Some("./derpherp".to_string()), port);
        let result = start_flashcards_server(config).await;
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: path does not exist.");
        Ok(())
    }

    #[tokio::test]
    async fn test_start_server_with_no_questions() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let dir = tempfile::tempdir()?.keep();
        let config = make_config(Some(dir.display().to_string()), port);
        start_flashcards_server(config).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_e2e() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let directory = create_tmp_bank_directory()?;
        let config = make_config(Some(directory), port);
        spawn(async move { start_flashcards_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        // Hit the `style.css` endpoint.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/style.css")).await?;
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "text/css");

        // Hit the not found endpoint.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/herp-derp")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Hit the root endpoint. All questions are unseen, so the queue is in
        // bank order and the first question is shown.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        let html = response.text().await?;
        assert!(html.contains("Erste Frage?"));
        assert!(html.contains("1 / 3"));
        assert!(!html.contains("Richtig eins"));

        // Reveal the answer.
        let html = post_action(port, "Reveal").await?;
        assert!(html.contains("Richtig eins"));

        // Grade it, advancing to the second question.
        let html = post_action(port, "Correct").await?;
        assert!(html.contains("Zweite Frage?"));
        assert!(html.contains("2 / 3"));

        // Grade the rest.
        post_action(port, "Reveal").await?;
        let html = post_action(port, "Easy").await?;
        assert!(html.contains("Dritte Frage?"));
        post_action(port, "Reveal").await?;
        let html = post_action(port, "Hard").await?;
        assert!(html.contains("Session Completed"));
        assert!(html.contains("Reviewed 3 cards, 2 rated correct or easy."));
        assert!(html.contains("Streak: 1 day(s)."));

        Ok(())
    }

    #[tokio::test]
    async fn test_undo() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let directory = create_tmp_bank_directory()?;
        let config = make_config(Some(directory), port);
        spawn(async move { start_flashcards_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        post_action(port, "Reveal").await?;
        let html = post_action(port, "Easy").await?;
        assert!(html.contains("Zweite Frage?"));

        // Undo restores the first question, unrevealed.
        let html = post_action(port, "Undo").await?;
        assert!(html.contains("Erste Frage?"));
        assert!(html.contains("1 / 3"));
        assert!(!html.contains("Richtig eins"));

        Ok(())
    }

    #[tokio::test]
    async fn test_undo_initial() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let directory = create_tmp_bank_directory()?;
        let config = make_config(Some(directory), port);
        spawn(async move { start_flashcards_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        // Undo with nothing graded is a no-op.
        let html = post_action(port, "Undo").await?;
        assert!(html.contains("Erste Frage?"));

        Ok(())
    }

    #[tokio::test]
    async fn test_grade_without_reveal() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let directory = create_tmp_bank_directory()?;
        let config = make_config(Some(directory), port);
        spawn(async move { start_flashcards_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        let html = post_action(port, "Hard").await?;
        assert!(html.contains("Zweite Frage?"));

        Ok(())
    }

    #[tokio::test]
    async fn test_end() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let directory = create_tmp_bank_directory()?;
        let config = make_config(Some(directory), port);
        spawn(async move { start_flashcards_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        let html = post_action(port, "End").await?;
        assert!(html.contains("Session Completed"));
        assert!(html.contains("Reviewed 0 cards"));

        Ok(())
    }

    #[tokio::test]
    async fn test_card_limit() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let directory = create_tmp_bank_directory()?;
        let mut config = make_config(Some(directory), port);
        config.card_limit = Some(1);
        spawn(async move { start_flashcards_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/")).await?;
        let html = response.text().await?;
        assert!(html.contains("1 / 1"));

        post_action(port, "Reveal").await?;
        let html = post_action(port, "Correct").await?;
        assert!(html.contains("Session Completed"));

        Ok(())
    }

    #[tokio::test]
    async fn test_section_filter() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let directory = create_tmp_bank_directory()?;
        let mut config = make_config(Some(directory), port);
        config.section_filter = Some("2".to_string());
        spawn(async move { start_flashcards_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/")).await?;
        let html = response.text().await?;
        assert!(html.contains("Dritte Frage?"));
        assert!(html.contains("1 / 1"));

        Ok(())
    }
}
