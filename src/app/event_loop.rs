//! Main event loop and API event processing.

use std::time::Duration;

use anyhow::Result;
use crossterm::event;
use ratatui::{Terminal, backend::Backend};

use crate::input::{InputResult, handle_input};

use super::{ApiEvent, App};

impl App {
    pub(crate) async fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()>
    where
        B::Error: Send + Sync + 'static,
    {
        loop {
            // Drain request results first to keep the UI responsive
            if self.process_api_events() {
                self.dirty = true;
            }

            if self.state.status.clear_error_if_expired() {
                self.dirty = true;
            }

            if self.dirty {
                terminal.draw(|frame| crate::ui::render(frame, &self.state))?;
                self.dirty = false;
            }

            // Shorter poll while a request is in flight so the spinner
            // keeps moving
            let poll_timeout = if self.state.status.loading || self.state.uploader.busy {
                50
            } else {
                150
            };
            if event::poll(Duration::from_millis(poll_timeout))? {
                let evt = event::read()?;
                self.dirty = true;
                match handle_input(evt, &self.state) {
                    InputResult::Quit => break,
                    InputResult::Action(action) => self.handle_action(action),
                    InputResult::Char(c) => self.handle_char(c),
                    InputResult::Backspace => self.handle_backspace(),
                    InputResult::Submit => self.handle_submit(),
                    InputResult::NextField => self.handle_next_field(),
                    InputResult::PrevField => self.handle_prev_field(),
                    InputResult::Cancel => self.handle_cancel(),
                    InputResult::Continue => {}
                }
            }

            // Spinner animation while waiting
            if self.state.status.loading || self.state.uploader.busy {
                self.dirty = true;
            }
        }

        Ok(())
    }

    /// Apply all pending API events. Returns true if any were applied.
    pub(crate) fn process_api_events(&mut self) -> bool {
        let mut had_events = false;
        while let Ok(event) = self.events_rx.try_recv() {
            had_events = true;
            self.apply_api_event(event);
        }
        had_events
    }

    pub(crate) fn apply_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::EmailsFetched { seq, result } => {
                if seq != self.fetch_seq {
                    // A newer fetch superseded this one; drop it
                    tracing::debug!(seq, current = self.fetch_seq, "Dropping stale fetch result");
                    return;
                }
                self.state.fetch_in_flight = false;
                self.state.status.loading = false;
                match result {
                    Ok(emails) => {
                        self.state.status.clear_error();
                        self.state
                            .status
                            .set_message(format!("{} emails", emails.len()));
                        self.state.replace_emails(emails);
                    }
                    Err(e) => {
                        // Prior collection stays intact on failure
                        self.state.status.set_error(e);
                    }
                }
            }
            ApiEvent::QueryAnswered(result) => {
                self.state.uploader.busy = false;
                match result {
                    Ok(answer) => {
                        self.state.status.clear_error();
                        self.state.uploader.answer = Some(answer);
                    }
                    Err(e) => self.state.status.set_error(e),
                }
            }
            ApiEvent::DocumentsUploaded(result) => {
                self.state.uploader.busy = false;
                match result {
                    Ok(count) => {
                        self.state.status.clear_error();
                        self.state
                            .status
                            .set_message(format!("Uploaded {} file(s)", count));
                        self.state.uploader.staged.clear();
                    }
                    Err(e) => self.state.status.set_error(e),
                }
            }
            ApiEvent::UrlProcessed(result) => {
                self.state.uploader.busy = false;
                match result {
                    Ok(()) => {
                        self.state.status.clear_error();
                        self.state.status.set_message("URL submitted");
                    }
                    Err(e) => self.state.status.set_error(e),
                }
            }
        }
    }
}
