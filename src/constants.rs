//! Application-wide constants for tuning and configuration
//!
//! Centralizes magic numbers to make them discoverable and configurable.

/// Error message display duration in seconds before auto-dismiss.
pub const ERROR_TTL_SECS: u64 = 5;

/// Page size choices offered by the table footer, cycled with `z`.
pub const PAGE_SIZE_CHOICES: [usize; 3] = [5, 10, 25];

/// Default rows per page when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Upper bound accepted for the `max_results` filter.
/// The form clamps before encoding so the backend never sees an
/// out-of-range cap.
pub const MAX_RESULTS_LIMIT: u32 = 1000;

/// Spinner animation frame duration in milliseconds.
pub const SPINNER_FRAME_MS: u128 = 80;

/// Fixed avatar palette size. Color assignment is the sender's first
/// char code modulo this, so it must match the palette in `ui::theme`.
pub const AVATAR_PALETTE_SIZE: usize = 8;

/// Minimum terminal width to show the recipient and labels columns.
pub const MIN_WIDE_TABLE_WIDTH: u16 = 100;
