//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// Printable characters are not actions: they always edit the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Query editing
    /// Delete the character before the cursor. Default: Backspace
    DeleteBackward,
    /// Delete the character under the cursor. Default: Delete
    DeleteForward,
    /// Move the cursor one character left. Default: ←
    CursorLeft,
    /// Move the cursor one character right. Default: →
    CursorRight,
    /// Move the cursor to the start of the query. Default: Home/Ctrl+a
    CursorHome,
    /// Move the cursor to the end of the query. Default: End/Ctrl+e
    CursorEnd,
    /// Search immediately without waiting for the debounce. Default: Enter
    SubmitQuery,
    /// Clear the query (back to discover). Default: Esc
    ClearQuery,

    // Pagination
    /// Go to the next result page. Default: Page Down/Ctrl+n
    NextPage,
    /// Go to the previous result page. Default: Page Up/Ctrl+p
    PrevPage,

    // Result selection
    /// Move the selection down one row. Default: ↓
    SelectNext,
    /// Move the selection up one row. Default: ↑
    SelectPrev,

    // Application
    /// Re-issue the current fetch. Default: Ctrl+r
    Retry,
    /// Toggle the help overlay. Default: F1
    Help,
    /// Exit the application. Default: Ctrl+q
    Quit,
}
