//! Application core - owns the state, the API client, and coordination
//! between the event loop and spawned request tasks.

mod actions;
mod event_loop;
pub mod state;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::api::types::Email;
use crate::api::{ApiClient, ApiError};
use crate::config::Config;
use crate::filters::FilterCriteria;
use crate::session::SessionStore;
use crate::view::ListView;

use state::AppState;

/// Results flowing back from spawned request tasks.
///
/// Fetches carry the sequence number they were started with; the event
/// loop drops results whose sequence is no longer current, so a slow
/// response can never overwrite a newer fetch.
#[derive(Debug)]
pub enum ApiEvent {
    EmailsFetched {
        seq: u64,
        result: Result<Vec<Email>, ApiError>,
    },
    QueryAnswered(Result<String, ApiError>),
    DocumentsUploaded(Result<usize, ApiError>),
    UrlProcessed(Result<(), ApiError>),
}

pub struct App {
    pub(crate) client: ApiClient,
    pub(crate) session: SessionStore,
    pub(crate) state: AppState,
    pub(crate) events_tx: mpsc::UnboundedSender<ApiEvent>,
    pub(crate) events_rx: mpsc::UnboundedReceiver<ApiEvent>,
    /// Sequence number of the most recently started fetch
    pub(crate) fetch_seq: u64,
    /// Dirty flag: when true, UI needs re-render
    pub(crate) dirty: bool,
}

impl App {
    pub fn new(config: Config, session: SessionStore) -> Self {
        let client = ApiClient::new(&config);
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let mut state = AppState::new(
            FilterCriteria::default(),
            ListView::new(config.ui.page_size),
        );
        state.signed_in = session.is_signed_in();
        state.backend_host = client.base_url().to_string();
        state.date_format = config.ui.date_format.clone();

        Self {
            client,
            session,
            state,
            events_tx,
            events_rx,
            fetch_seq: 0,
            dirty: true,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        let result = self.event_loop(&mut terminal).await;
        ratatui::restore();
        result
    }
}
