//! Email fetch task spawning.

use crate::app::{ApiEvent, App};

impl App {
    /// Start a fetch with the current criteria. Ignored while one is
    /// already in flight; the sequence number fences out any stale
    /// response that arrives after a newer fetch started.
    pub(crate) fn start_fetch(&mut self) {
        if self.state.fetch_in_flight {
            return;
        }

        self.fetch_seq += 1;
        let seq = self.fetch_seq;
        self.state.fetch_in_flight = true;
        self.state.has_searched = true;
        self.state.status.loading = true;
        self.state.status.clear_error();

        let client = self.client.clone();
        let criteria = self.state.filters.clone();
        let sender_search = self.state.sender_search.clone();
        let tx = self.events_tx.clone();

        tokio::spawn(async move {
            let result = client.fetch_emails(&criteria, &sender_search).await;
            // Receiver only drops on shutdown
            let _ = tx.send(ApiEvent::EmailsFetched { seq, result });
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::config::Config;
    use crate::session::SessionStore;

    #[tokio::test]
    async fn test_fetch_ignored_while_in_flight() {
        let mut app = App::new(Config::default(), SessionStore::in_memory());
        app.start_fetch();
        assert_eq!(app.fetch_seq, 1);
        assert!(app.state.fetch_in_flight);
        assert!(app.state.has_searched);

        // Second trigger before the first resolves does not start a
        // new request
        app.start_fetch();
        assert_eq!(app.fetch_seq, 1);
    }
}
