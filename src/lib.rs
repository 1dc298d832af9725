use tauri::{Manager, RunEvent};
use tracing::info;

mod commands;
mod dispatch;
mod ipc;
#[cfg(desktop)]
mod tray;
mod windows;

use commands::*;

#[cfg(test)]
mod tests;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Default to info (when RUST_LOG is unset) so [SETUP]/[TRAY] are visible
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    #[cfg(desktop)]
    let builder = tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            // Focus existing window when user tries to launch second instance
            if let Some(win) = app.get_webview_window(windows::MAIN_LABEL) {
                let _ = win.show();
                let _ = win.set_focus();
            }
        }))
        .plugin(tauri_plugin_positioner::init())
        .plugin(tauri_plugin_opener::init());
    #[cfg(not(desktop))]
    let builder = tauri::Builder::default().plugin(tauri_plugin_opener::init());

    builder
        .setup(|app| {
            let profile = dispatch::Profile::from_env();
            info!("[SETUP] Page profile {:?} serving {}", profile, profile.page());
            app.manage(profile);

            windows::open_page_window(app.handle(), windows::MAIN_LABEL, profile)?;

            #[cfg(desktop)]
            tray::setup(app, profile)?;

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            new_window,
            new_window_or_focus,
            effects,
            floating,
            options,
            get_app_version
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|_app_handle, event| {
            if let RunEvent::ExitRequested { .. } = event {
                info!("[SHUTDOWN] Exit requested");
            }
        });
}
