//! Dash-Lens — Tauri application entry point.
//!
//! An AI analysis panel for dashboards: it screenshots the screen around
//! itself, sends the image plus a natural-language instruction to a locally
//! reachable Ollama-compatible vision endpoint, and renders the returned
//! markdown analysis.
//!
//! No business logic lives here — only module declarations, state
//! management, and the command registry. Commands are split across:
//!   - commands.rs  — simple one-step commands (intent list, selection, state snapshot)
//!   - pipeline.rs  — the multi-step capture-analyze orchestration
//!   - settings.rs  — settings persistence + commands

pub mod capture;
pub mod commands;
pub mod endpoint;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod prompts;
pub mod render;
pub mod session;
pub mod settings;

use session::PanelState;

/// Entry point — called by the Tauri runtime.
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Load .env.local → .env from the project root. CARGO_MANIFEST_DIR is
    // the compile-time crate path, so this works regardless of the binary's
    // working directory.
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    'env_load: for env_file in [".env.local", ".env"] {
        let path = manifest_dir.join(env_file);
        if path.exists() {
            match dotenvy::from_path(&path) {
                Ok(_) => eprintln!("[STARTUP] Loaded {}", path.display()),
                Err(e) => eprintln!("[STARTUP] Failed to load {}: {}", path.display(), e),
            }
            break 'env_load;
        }
    }

    env_logger::init();

    tauri::Builder::default()
        .manage(PanelState::new(settings::load_settings()))
        .invoke_handler(tauri::generate_handler![
            // Simple commands (commands.rs)
            commands::list_intents,
            commands::select_intent,
            commands::get_session_state,
            // Pipeline command (pipeline.rs)
            pipeline::run_analysis,
            // Settings commands (settings.rs)
            settings::get_panel_settings,
            settings::save_panel_settings,
        ])
        .setup(|_app| {
            log::info!("Dash-Lens starting up");
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("Error running Dash-Lens");
}
