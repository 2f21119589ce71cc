//! Uploader operations: document upload, RAG query, URL ingestion.

use crate::app::{ApiEvent, App};

impl App {
    /// Upload the staged files. Ignored while another uploader request
    /// is running.
    pub(crate) fn upload_staged(&mut self) {
        if self.state.uploader.busy {
            return;
        }
        if self.state.uploader.staged.is_empty() {
            self.state.status.set_error("No files staged for upload");
            return;
        }

        self.state.uploader.busy = true;
        self.state.status.clear_error();

        let client = self.client.clone();
        let paths = self.state.uploader.staged.clone();
        let tx = self.events_tx.clone();

        tokio::spawn(async move {
            let result = client
                .upload_documents(&paths)
                .await
                .map(|_| paths.len());
            let _ = tx.send(ApiEvent::DocumentsUploaded(result));
        });
    }

    /// Send the typed prompt to the query endpoint.
    pub(crate) fn submit_query(&mut self) {
        if self.state.uploader.busy {
            return;
        }
        let prompt = self.state.uploader.prompt_input.trim().to_string();
        if prompt.is_empty() {
            return;
        }

        self.state.uploader.busy = true;
        self.state.status.clear_error();

        let client = self.client.clone();
        let tx = self.events_tx.clone();

        tokio::spawn(async move {
            let result = client.query(&prompt).await;
            let _ = tx.send(ApiEvent::QueryAnswered(result));
        });
    }

    /// Hand the typed URL(s) to the ingestion endpoint.
    pub(crate) fn submit_url(&mut self) {
        if self.state.uploader.busy {
            return;
        }
        let urls = self.state.uploader.url_input.trim().to_string();
        if urls.is_empty() {
            return;
        }

        self.state.uploader.busy = true;
        self.state.status.clear_error();
        self.state.uploader.url_input.clear();

        let client = self.client.clone();
        let tx = self.events_tx.clone();

        tokio::spawn(async move {
            let result = client.process_url(&urls).await.map(|_| ());
            let _ = tx.send(ApiEvent::UrlProcessed(result));
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::config::Config;
    use crate::session::SessionStore;

    #[tokio::test]
    async fn test_upload_with_nothing_staged_sets_error() {
        let mut app = App::new(Config::default(), SessionStore::in_memory());
        app.upload_staged();
        assert!(!app.state.uploader.busy);
        assert!(app.state.status.error.is_some());
    }

    #[tokio::test]
    async fn test_empty_query_is_noop() {
        let mut app = App::new(Config::default(), SessionStore::in_memory());
        app.state.uploader.prompt_input = "   ".to_string();
        app.submit_query();
        assert!(!app.state.uploader.busy);
    }
}
