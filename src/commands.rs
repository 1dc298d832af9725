use tauri::{AppHandle, Manager};
use tracing::debug;

use crate::dispatch::{CommandSink, Profile};
use crate::ipc;
use crate::windows;

fn active_profile(app: &AppHandle) -> Profile {
    app.try_state::<Profile>().map(|p| *p).unwrap_or_default()
}

/// Create a new page window with a label no other window is using.
#[tauri::command]
pub fn new_window(app: AppHandle) -> Result<(), String> {
    let existing: Vec<String> = app.webview_windows().keys().cloned().collect();
    let label = windows::unique_label(&existing);
    windows::open_page_window(&app, &label, active_profile(&app))
        .map_err(|e| format!("Failed to open window: {}", e))?;
    Ok(())
}

/// Focus the window labeled `focus` if it exists, otherwise create it.
#[tauri::command]
pub fn new_window_or_focus(app: AppHandle) -> Result<(), String> {
    match app.get_webview_window(windows::FOCUS_LABEL) {
        None => {
            windows::open_page_window(&app, windows::FOCUS_LABEL, active_profile(&app))
                .map_err(|e| format!("Failed to open focus window: {}", e))?;
        }
        Some(window) => {
            window
                .set_focus()
                .map_err(|e| format!("Failed to focus window: {}", e))?;
        }
    }
    Ok(())
}

/// Open the transparent effects window.
#[tauri::command]
pub fn effects(app: AppHandle) -> Result<(), String> {
    windows::open_effects_window(&app)
        .map_err(|e| format!("Failed to open effects window: {}", e))?;
    Ok(())
}

/// Toggle the floating window: create when absent, close when present.
#[tauri::command]
pub fn floating(app: AppHandle) -> Result<(), String> {
    match app.get_webview_window(windows::FLOATING_LABEL) {
        None => {
            windows::open_floating_window(&app, active_profile(&app))
                .map_err(|e| format!("Failed to open floating window: {}", e))?;
        }
        Some(window) => {
            window
                .close()
                .map_err(|e| format!("Failed to close floating window: {}", e))?;
        }
    }
    Ok(())
}

/// Focus-or-create the options window.
#[tauri::command]
pub fn options(app: AppHandle) -> Result<(), String> {
    match app.get_webview_window(windows::OPTIONS_LABEL) {
        None => {
            windows::open_options_window(&app)
                .map_err(|e| format!("Failed to open options window: {}", e))?;
        }
        Some(window) => {
            window
                .set_focus()
                .map_err(|e| format!("Failed to focus options window: {}", e))?;
        }
    }
    Ok(())
}

#[tauri::command]
pub fn get_app_version(app: AppHandle) -> Result<String, String> {
    Ok(app.package_info().version.to_string())
}

/// The invocation primitive for surfaces living on the Rust side (the tray
/// menu). Page windows reach the same handlers through
/// `window.__TAURI__.core.invoke`.
pub struct CommandInvoker {
    app: AppHandle,
}

impl CommandInvoker {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl CommandSink for CommandInvoker {
    fn send(&self, command: &str) -> Result<(), String> {
        debug!("[INVOKE] {}", command);
        let app = self.app.clone();
        match command {
            ipc::commands::NEW_WINDOW => new_window(app),
            ipc::commands::NEW_WINDOW_OR_FOCUS => new_window_or_focus(app),
            ipc::commands::EFFECTS => effects(app),
            ipc::commands::FLOATING => floating(app),
            ipc::commands::OPTIONS => options(app),
            other => Err(format!("Unknown command: {}", other)),
        }
    }
}
