//! Tray icon and menu. Menu items reuse the page element ids, so clicks
//! route through the same dispatcher binding table as the page buttons.

use tauri::{
    menu::{MenuBuilder, MenuItemBuilder},
    tray::{TrayIconBuilder, TrayIconEvent},
    App, Manager,
};
use tracing::{info, warn};

use crate::commands::CommandInvoker;
use crate::dispatch::{Dispatcher, Profile};
use crate::ipc::elements;
use crate::windows;

const QUIT_MENU_ID: &str = "quit";

fn menu_label(element_id: &str) -> &'static str {
    match element_id {
        elements::NEW_WINDOW => "New window",
        elements::NEW_WINDOW_OR_FOCUS => "New window or focus",
        elements::EFFECTS => "Transparent effects",
        elements::FLOATING => "Floating window",
        elements::OPTIONS => "Options",
        _ => "Unknown",
    }
}

pub fn setup(app: &App, profile: Profile) -> tauri::Result<()> {
    let bindings = profile.bindings();

    let mut menu_builder = MenuBuilder::new(app);
    for binding in bindings {
        let item = MenuItemBuilder::with_id(binding.element_id, menu_label(binding.element_id))
            .build(app)?;
        menu_builder = menu_builder.item(&item);
    }
    let quit = MenuItemBuilder::with_id(QUIT_MENU_ID, "Quit").build(app)?;
    let menu = menu_builder.separator().item(&quit).build()?;

    // Every binding has a menu item by construction, so the whole table
    // attaches.
    let menu_ids: Vec<&str> = bindings.iter().map(|b| b.element_id).collect();
    let dispatcher = Dispatcher::attach(
        CommandInvoker::new(app.handle().clone()),
        bindings,
        &menu_ids[..],
    );

    let mut tray = TrayIconBuilder::with_id("main")
        .menu(&menu)
        .show_menu_on_left_click(false)
        .on_menu_event(move |app, event| match event.id().as_ref() {
            QUIT_MENU_ID => {
                info!("[TRAY] Quit requested");
                app.exit(0);
            }
            id => dispatcher.click(id),
        })
        .on_tray_icon_event(|tray_handle, event| {
            // Forward the event so the positioner plugin knows where the
            // tray icon lives.
            tauri_plugin_positioner::on_tray_event(tray_handle.app_handle(), &event);

            if let TrayIconEvent::Click { .. } = event {
                if let Err(e) = windows::open_tray_panel(tray_handle.app_handle()) {
                    warn!("[TRAY] Failed to open tray panel: {}", e);
                }
            }
        });
    if let Some(icon) = app.default_window_icon() {
        tray = tray.icon(icon.clone());
    }
    tray.build(app)?;

    info!("[TRAY] Tray menu wired for {:?} profile", profile);
    Ok(())
}
