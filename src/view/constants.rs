//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Height of the search input widget in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the trending strip when records exist.
pub const TRENDING_STRIP_HEIGHT: u16 = 1;

/// Height of the selected-movie details area below the result list.
pub const DETAILS_HEIGHT: u16 = 2;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Event loop wake-up interval when no terminal event arrives.
///
/// Bounds how late a debounced query settles and paces the spinner.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Loading indicator frames.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Ticks each spinner frame stays on screen.
pub const SPINNER_TICKS_PER_FRAME: usize = 2;
