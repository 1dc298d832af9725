//! Centralized IPC command, element, and event names.
//! Prevents typos and keeps the binding table, the generated page glue,
//! and the Rust handlers in agreement.

/// Tauri command names (button/menu click → Rust handler)
pub mod commands {
    pub const NEW_WINDOW: &str = "new_window";
    pub const NEW_WINDOW_OR_FOCUS: &str = "new_window_or_focus";
    pub const EFFECTS: &str = "effects";
    pub const FLOATING: &str = "floating";
    pub const OPTIONS: &str = "options";
}

/// Element ids expected in the page markup. Tray menu items reuse the
/// same ids so both surfaces go through one binding table.
pub mod elements {
    pub const NEW_WINDOW: &str = "new-window";
    pub const NEW_WINDOW_OR_FOCUS: &str = "new-window-or-focus";
    pub const EFFECTS: &str = "effects";
    pub const FLOATING: &str = "floating";
    pub const OPTIONS: &str = "options";
}

/// Tauri event names (Rust emit ↔ Frontend listen)
pub mod events {
    pub const WINDOW_OPENED: &str = "window-opened";
}
