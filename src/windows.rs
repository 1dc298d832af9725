//! Window builders and labels.

use serde::Serialize;
use tauri::{
    utils::{config::WindowEffectsConfig, WindowEffect},
    AppHandle, Emitter, WebviewUrl, WebviewWindow, WebviewWindowBuilder,
};
use tracing::info;

use crate::dispatch::{self, Profile};
use crate::ipc::events;

pub const MAIN_LABEL: &str = "main";
pub const FOCUS_LABEL: &str = "focus";
pub const EFFECTS_LABEL: &str = "effects";
pub const FLOATING_LABEL: &str = "floating";
pub const OPTIONS_LABEL: &str = "options";
pub const POSITION_LABEL: &str = "position";

#[derive(Serialize, Clone)]
struct WindowOpened<'a> {
    label: &'a str,
}

/// Next free `window-N` label. Starts at the current window count and
/// probes upward so labels never collide after windows have been closed.
pub fn unique_label(existing: &[String]) -> String {
    let mut n = existing.len();
    loop {
        let label = format!("window-{}", n);
        if !existing.iter().any(|l| l == &label) {
            return label;
        }
        n += 1;
    }
}

fn notify_opened(app: &AppHandle, label: &str) {
    info!("[WINDOW] Opened {}", label);
    let _ = app.emit(events::WINDOW_OPENED, WindowOpened { label });
}

/// Build a regular page window for the given profile, with the profile's
/// click-to-command glue injected.
pub fn open_page_window(
    app: &AppHandle,
    label: &str,
    profile: Profile,
) -> tauri::Result<WebviewWindow> {
    let script = dispatch::init_script(profile.bindings());
    let window = WebviewWindowBuilder::new(app, label, WebviewUrl::App(profile.page().into()))
        .title("multiwin")
        .inner_size(600.0, 500.0)
        .initialization_script(&script)
        .build()?;
    notify_opened(app, label);
    Ok(window)
}

/// Transparent effects window; effects.html has a transparent <body>.
/// Setting the dark theme here changes the theme on other windows too.
pub fn open_effects_window(app: &AppHandle) -> tauri::Result<WebviewWindow> {
    let window = WebviewWindowBuilder::new(
        app,
        EFFECTS_LABEL,
        WebviewUrl::App("effects.html".into()),
    )
    .title("transparent effects")
    .resizable(false)
    .theme(Some(tauri::Theme::Dark))
    .closable(false)
    .transparent(true)
    .inner_size(400.0, 800.0)
    .effects(WindowEffectsConfig {
        effects: vec![
            // for macos
            WindowEffect::HudWindow,
            // for windows
            WindowEffect::Acrylic,
        ],
        state: None,
        radius: Some(24.0),
        color: None,
    })
    .build()?;
    notify_opened(app, EFFECTS_LABEL);
    Ok(window)
}

/// Persistent floating window pinned to the top left corner. Decorations
/// are off, so the floating command toggles it closed again.
pub fn open_floating_window(app: &AppHandle, profile: Profile) -> tauri::Result<WebviewWindow> {
    let script = dispatch::init_script(profile.bindings());
    let window = WebviewWindowBuilder::new(
        app,
        FLOATING_LABEL,
        WebviewUrl::App(profile.page().into()),
    )
    .always_on_top(true)
    .decorations(false)
    .inner_size(400.0, 400.0)
    .position(0.0, 0.0)
    .initialization_script(&script)
    .build()?;
    notify_opened(app, FLOATING_LABEL);
    Ok(window)
}

/// Small singleton options window.
pub fn open_options_window(app: &AppHandle) -> tauri::Result<WebviewWindow> {
    let script = dispatch::init_script(Profile::Options.bindings());
    let window = WebviewWindowBuilder::new(
        app,
        OPTIONS_LABEL,
        WebviewUrl::App(Profile::Options.page().into()),
    )
    .title("options")
    .inner_size(480.0, 360.0)
    .initialization_script(&script)
    .build()?;
    notify_opened(app, OPTIONS_LABEL);
    Ok(window)
}

/// Panel window anchored to the tray icon; dismissed when it loses focus.
#[cfg(desktop)]
pub fn open_tray_panel(app: &AppHandle) -> tauri::Result<()> {
    use tauri_plugin_positioner::{Position, WindowExt};

    let window = WebviewWindowBuilder::new(
        app,
        POSITION_LABEL,
        WebviewUrl::App("position.html".into()),
    )
    .decorations(false)
    .always_on_top(true)
    .skip_taskbar(true)
    .inner_size(320.0, 180.0)
    .build()?;

    window.move_window(Position::TrayCenter)?;

    window.clone().on_window_event(move |evt| match evt {
        tauri::WindowEvent::Focused(is_focused) if !is_focused => {
            window.close().ok();
        }
        _ => {}
    });
    notify_opened(app, POSITION_LABEL);
    Ok(())
}
