//! Trello REST API client
//!
//! Fetches the board, its lists, per-list cards (with checklists), and the
//! board label set, then assembles the in-memory snapshot the analyzers run
//! over. Uses ureq (sync HTTP) — no async runtime needed.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::models::{Board, Card, Label, List};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API request failed: {0}")]
    Request(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse API response: {0}")]
    Parse(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

fn make_agent() -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false) // We map status codes to ClientError ourselves
        .timeout_global(Some(std::time::Duration::from_secs(30)))
        .build()
        .new_agent()
}

/// Authenticated Trello API client.
pub struct TrelloClient {
    agent: ureq::Agent,
    base_url: String,
    key: String,
    token: String,
}

impl TrelloClient {
    pub fn new(base_url: impl Into<String>, key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            agent: make_agent(),
            base_url: base_url.into(),
            key: key.into(),
            token: token.into(),
        }
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> ClientResult<T> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "GET");

        let mut request = self
            .agent
            .get(&url)
            .query("key", &self.key)
            .query("token", &self.token);
        for (name, value) in query {
            request = request.query(*name, *value);
        }

        let response = request
            .call()
            .map_err(|e| ClientError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if status >= 400 {
            let message = response.into_body().read_to_string().unwrap_or_default();
            return Err(ClientError::Api { status, message });
        }

        response
            .into_body()
            .read_json()
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    pub fn get_board(&self, board_id: &str) -> ClientResult<Board> {
        self.get(&format!("/boards/{board_id}"), &[("fields", "name")])
    }

    /// Open lists on a board, without their cards.
    pub fn get_lists(&self, board_id: &str) -> ClientResult<Vec<List>> {
        self.get(
            &format!("/boards/{board_id}/lists"),
            &[("filter", "open"), ("fields", "name,closed")],
        )
    }

    /// Cards in one list, with checklists attached.
    pub fn get_cards(&self, list_id: &str) -> ClientResult<Vec<Card>> {
        self.get(
            &format!("/lists/{list_id}/cards"),
            &[
                ("fields", "name,desc,due,closed,idMembers,labels"),
                ("checklists", "all"),
            ],
        )
    }

    pub fn get_labels(&self, board_id: &str) -> ClientResult<Vec<Label>> {
        self.get(
            &format!("/boards/{board_id}/labels"),
            &[("fields", "name,color"), ("limit", "1000")],
        )
    }

    /// Assemble a full board snapshot: board, open lists, cards per list,
    /// and the label set.
    pub fn fetch_snapshot(&self, board_id: &str) -> ClientResult<Board> {
        let mut board = self.get_board(board_id)?;
        board.lists = self.get_lists(board_id)?;
        for list in &mut board.lists {
            list.cards = self.get_cards(&list.id)?;
        }
        board.labels = self.get_labels(board_id)?;
        debug!(
            board = %board.name,
            lists = board.lists.len(),
            labels = board.labels.len(),
            "snapshot fetched"
        );
        Ok(board)
    }
}
