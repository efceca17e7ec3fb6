//! Capture-analyze orchestration.
//!
//! The multi-step command lives here: conceal panel → capture → encode →
//! normalize endpoint → POST → parse → back to idle. State transitions go
//! through session.rs; this file owns the sequencing and the guarantee that
//! the panel never gets stuck in the running state.

use crate::capture;
use crate::endpoint;
use crate::error::AnalysisError;
use crate::llm;
use crate::session::PanelState;
use crate::settings::PanelSettings;
use tauri::{Emitter, Manager};

/// Window label of the panel itself — concealed during capture so the
/// analysis output does not photograph itself.
pub const PANEL_WINDOW: &str = "panel";

/// Event carrying the full session state after every transition.
pub const SESSION_EVENT: &str = "session-changed";

/// Tauri command: run one capture-analyze cycle.
///
/// A no-op when a run is already in flight — the trigger flag is the
/// one-bit semaphore that serializes runs. The session always comes back to
/// idle, success or failure: failures land in `error_text` and the log,
/// never in the output region.
#[tauri::command]
pub async fn run_analysis(
    app: tauri::AppHandle,
    state: tauri::State<'_, PanelState>,
) -> Result<(), String> {
    let pipeline_start = std::time::Instant::now();

    // Step 1: flip to running synchronously, before the first await, so the
    // UI reflects the in-flight run immediately.
    let (instruction, settings) = {
        let mut session = state.session.lock().map_err(|e| e.to_string())?;
        if !session.try_begin_run() {
            log::warn!("[PIPELINE] Trigger fired while a run is in flight — ignored");
            return Ok(());
        }
        let settings = state.settings.lock().map_err(|e| e.to_string())?.clone();
        (session.instruction.clone(), settings)
    };
    emit_session(&app, state.inner());

    // Step 2: the fallible middle. Any failure path below still reaches the
    // restore block — the match is the single exit.
    let result = analyze_once(&app, &settings, &instruction).await;

    {
        let mut session = state.session.lock().map_err(|e| e.to_string())?;
        match result {
            Ok(output) => {
                log::info!(
                    "[PIPELINE] Analysis complete in {}ms ({} chars)",
                    pipeline_start.elapsed().as_millis(),
                    output.len()
                );
                session.finish_run(output);
            }
            Err(err) => {
                log::error!("[PIPELINE] {}", err);
                session.fail_run(format!("Analysis failed — {}", err));
            }
        }
    }
    emit_session(&app, state.inner());

    Ok(())
}

/// One full capture → encode → dispatch → parse pass.
async fn analyze_once(
    app: &tauri::AppHandle,
    settings: &PanelSettings,
    instruction: &str,
) -> Result<String, AnalysisError> {
    // Capture with the panel window out of the shot. Conceal/reveal is
    // paired inside capture_excluding regardless of the capture outcome.
    let shot = match app.get_webview_window(PANEL_WINDOW) {
        Some(window) => capture::capture_excluding(&window, capture::capture_primary_monitor)?,
        None => {
            log::warn!(
                "[PIPELINE] Panel window {:?} not found — capturing without exclusion",
                PANEL_WINDOW
            );
            capture::capture_primary_monitor()?
        }
    };

    let payload = capture::to_png_base64(&shot)?;
    let payload = capture::strip_data_uri_prefix(&payload);

    let endpoint = endpoint::normalize_address(&settings.address)?;

    llm::generate(&endpoint, &settings.model, instruction, &payload).await
}

/// Push the current session state to the webview.
pub(crate) fn emit_session(app: &tauri::AppHandle, state: &PanelState) {
    let snapshot = match state.session.lock() {
        Ok(session) => session.clone(),
        Err(e) => {
            log::error!("[PIPELINE] Session lock poisoned: {}", e);
            return;
        }
    };
    if let Err(e) = app.emit(SESSION_EVENT, &snapshot) {
        log::error!("[PIPELINE] Failed to emit {}: {}", SESSION_EVENT, e);
    }
}
