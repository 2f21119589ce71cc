//! List-view engine: sort, paginate and select over a fetched email
//! collection.
//!
//! All operations here are pure over the collection; rendering lives in
//! `ui::dashboard`. The collection itself is replaced wholesale on each
//! fetch, so the engine only ever holds indices into the caller's slice.

use std::ops::Range;

use crate::api::types::Email;
use crate::constants::PAGE_SIZE_CHOICES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Sender,
    Recipient,
    Subject,
    ReceivedAt,
}

impl SortKey {
    /// Default direction when this column becomes the active sort key.
    /// Timestamps default to newest-first; everything else ascending.
    pub fn default_direction(self) -> SortDirection {
        match self {
            Self::ReceivedAt => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sender => "Sender",
            Self::Recipient => "Recipient",
            Self::Subject => "Subject",
            Self::ReceivedAt => "Received At",
        }
    }

    fn field<'a>(self, email: &'a Email) -> &'a str {
        match self {
            Self::Sender => &email.sender,
            Self::Recipient => &email.recipient,
            Self::Subject => &email.subject,
            // ISO-8601 strings order lexicographically; never parsed
            Self::ReceivedAt => &email.email_received_at,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

/// Per-session sort/page/selection state over the current collection.
/// Sort and page persist across fetches; selection is the record open
/// in the detail dialog.
#[derive(Debug, Clone)]
pub struct ListView {
    pub sort_key: SortKey,
    pub direction: SortDirection,
    /// Zero-based page index
    pub page: usize,
    pub page_size: usize,
    /// Position in the *sorted* order of the record open in the detail
    /// dialog, None when the dialog is closed
    pub selected: Option<usize>,
    /// Highlighted row offset within the current page
    pub cursor: usize,
}

impl ListView {
    pub fn new(page_size: usize) -> Self {
        let page_size = if PAGE_SIZE_CHOICES.contains(&page_size) {
            page_size
        } else {
            PAGE_SIZE_CHOICES[1]
        };
        Self {
            sort_key: SortKey::ReceivedAt,
            direction: SortDirection::Desc,
            page: 0,
            page_size,
            selected: None,
            cursor: 0,
        }
    }

    /// Indices of `emails` in display order. `sort_by` is stable, so
    /// records with equal keys keep their fetched relative order in
    /// both directions; descending reverses the comparator, not the
    /// output.
    pub fn sorted_indices(&self, emails: &[Email]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..emails.len()).collect();
        let key = self.sort_key;
        indices.sort_by(|&a, &b| {
            let ord = key.field(&emails[a]).cmp(key.field(&emails[b]));
            match self.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
        indices
    }

    /// Click on a column header: flip direction if it is already the
    /// active key, otherwise switch to it with its default direction.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.direction = self.direction.flipped();
        } else {
            self.sort_key = key;
            self.direction = key.default_direction();
        }
    }

    /// Visible slice of the sorted order for the current page.
    pub fn page_bounds(&self, n: usize) -> Range<usize> {
        let start = (self.page * self.page_size).min(n);
        let end = ((self.page + 1) * self.page_size).min(n);
        start..end
    }

    /// Blank rows padding a short last page so the table keeps its row
    /// budget: `(p+1)*s - n` when positive, else 0. Only the last
    /// partial page of a non-empty view ever pads.
    pub fn empty_rows(&self, n: usize) -> usize {
        if self.page == 0 {
            return 0;
        }
        ((self.page + 1) * self.page_size).saturating_sub(n)
    }

    /// Number of pages needed for `n` records (at least 1).
    pub fn page_count(&self, n: usize) -> usize {
        n.div_ceil(self.page_size).max(1)
    }

    /// Re-establish the page invariant after the collection changed
    /// size: the page start offset must not land beyond the data.
    pub fn clamp_page(&mut self, n: usize) {
        let last = self.page_count(n) - 1;
        if self.page > last {
            self.page = last;
        }
        let visible = self.page_bounds(n).len();
        if visible == 0 {
            self.cursor = 0;
        } else if self.cursor >= visible {
            self.cursor = visible - 1;
        }
    }

    pub fn next_page(&mut self, n: usize) {
        if self.page + 1 < self.page_count(n) {
            self.page += 1;
            self.clamp_page(n);
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
            self.cursor = 0;
        }
    }

    /// Cycle through the fixed page-size choices. Changing the size
    /// resets to the first page.
    pub fn cycle_page_size(&mut self, n: usize) {
        let idx = PAGE_SIZE_CHOICES
            .iter()
            .position(|&s| s == self.page_size)
            .unwrap_or(0);
        self.page_size = PAGE_SIZE_CHOICES[(idx + 1) % PAGE_SIZE_CHOICES.len()];
        self.page = 0;
        self.clamp_page(n);
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self, n: usize) {
        let visible = self.page_bounds(n).len();
        if visible > 0 && self.cursor + 1 < visible {
            self.cursor += 1;
        }
    }

    /// Position of the cursor in the sorted order, None when the page
    /// is empty.
    pub fn cursor_position(&self, n: usize) -> Option<usize> {
        let bounds = self.page_bounds(n);
        let pos = bounds.start + self.cursor;
        bounds.contains(&pos).then_some(pos)
    }

    /// Open the detail dialog for the row under the cursor.
    pub fn select_at_cursor(&mut self, n: usize) {
        self.selected = self.cursor_position(n);
    }

    /// Close the detail dialog. Sort and page state are untouched.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(id: &str, sender: &str, received_at: &str) -> Email {
        Email {
            id: id.to_string(),
            thread_id: format!("t-{}", id),
            sender: sender.to_string(),
            recipient: "me@example.com".to_string(),
            subject: format!("subject {}", id),
            date: String::new(),
            email_received_at: received_at.to_string(),
            unread: false,
            labels: Vec::new(),
        }
    }

    fn sample() -> Vec<Email> {
        vec![
            email("a", "carol@example.com", "2024-03-01T10:00:00Z"),
            email("b", "alice@example.com", "2024-03-02T10:00:00Z"),
            email("c", "bob@example.com", "2024-03-01T10:00:00Z"),
        ]
    }

    #[test]
    fn test_sort_ascending_by_sender() {
        let emails = sample();
        let mut view = ListView::new(10);
        view.sort_key = SortKey::Sender;
        view.direction = SortDirection::Asc;
        assert_eq!(view.sorted_indices(&emails), vec![1, 2, 0]);
    }

    #[test]
    fn test_toggle_reverses_non_equal_keys() {
        let emails = sample();
        let mut view = ListView::new(10);
        view.sort_key = SortKey::Sender;
        view.direction = SortDirection::Asc;
        let asc = view.sorted_indices(&emails);

        view.toggle_sort(SortKey::Sender);
        assert_eq!(view.direction, SortDirection::Desc);
        let desc = view.sorted_indices(&emails);

        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_equal_keys_keep_fetch_order_descending() {
        // Two records share a received_at; descending sort must keep
        // their fetched relative order
        let emails = sample();
        let mut view = ListView::new(10);
        view.sort_key = SortKey::ReceivedAt;
        view.direction = SortDirection::Desc;
        let order = view.sorted_indices(&emails);
        // b is newest; a and c tie and stay in fetch order (a before c)
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn test_equal_keys_keep_fetch_order_ascending() {
        let emails = sample();
        let mut view = ListView::new(10);
        view.sort_key = SortKey::ReceivedAt;
        view.direction = SortDirection::Asc;
        assert_eq!(view.sorted_indices(&emails), vec![0, 2, 1]);
    }

    #[test]
    fn test_new_key_gets_default_direction() {
        let mut view = ListView::new(10);
        assert_eq!(view.sort_key, SortKey::ReceivedAt);
        assert_eq!(view.direction, SortDirection::Desc);

        view.toggle_sort(SortKey::Subject);
        assert_eq!(view.sort_key, SortKey::Subject);
        assert_eq!(view.direction, SortDirection::Asc);

        // Back to the timestamp column: descending by default again
        view.toggle_sort(SortKey::ReceivedAt);
        assert_eq!(view.direction, SortDirection::Desc);
    }

    #[test]
    fn test_page_bounds_and_padding() {
        let mut view = ListView::new(10);
        view.page = 1;

        // 13 records: page 1 shows [10, 13), pads 7 rows
        assert_eq!(view.page_bounds(13), 10..13);
        assert_eq!(view.empty_rows(13), 7);

        // Exactly full page: no padding
        assert_eq!(view.empty_rows(20), 0);

        // First page never pads, even when short
        view.page = 0;
        assert_eq!(view.empty_rows(3), 0);
    }

    #[test]
    fn test_padding_never_negative() {
        let mut view = ListView::new(5);
        view.page = 2;
        // (2+1)*5 - 40 would be negative; saturates to 0
        assert_eq!(view.empty_rows(40), 0);
    }

    #[test]
    fn test_clamp_page_after_shrink() {
        let mut view = ListView::new(10);
        view.page = 3;
        view.cursor = 7;

        // Collection shrank to 12 records: last non-empty page is 1
        view.clamp_page(12);
        assert_eq!(view.page, 1);
        assert_eq!(view.page_bounds(12), 10..12);
        assert!(view.cursor < 2);

        // Empty collection resets to page 0
        view.clamp_page(0);
        assert_eq!(view.page, 0);
        assert_eq!(view.cursor, 0);
    }

    #[test]
    fn test_selection_does_not_touch_sort_or_page() {
        let emails = sample();
        let mut view = ListView::new(10);
        view.toggle_sort(SortKey::Sender);
        view.cursor = 1;
        view.select_at_cursor(emails.len());
        assert_eq!(view.selected, Some(1));

        view.clear_selection();
        assert_eq!(view.selected, None);
        assert_eq!(view.sort_key, SortKey::Sender);
        assert_eq!(view.direction, SortDirection::Asc);
        assert_eq!(view.page, 0);
    }

    #[test]
    fn test_select_on_empty_page_is_none() {
        let mut view = ListView::new(10);
        view.select_at_cursor(0);
        assert_eq!(view.selected, None);
    }

    #[test]
    fn test_cycle_page_size_resets_page() {
        let mut view = ListView::new(10);
        view.page = 2;
        view.cycle_page_size(100);
        assert_eq!(view.page_size, 25);
        assert_eq!(view.page, 0);
    }
}
