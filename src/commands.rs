//! Simple Tauri command handlers.
//!
//! Thin wrappers that bridge frontend invoke() calls to the session state.
//! The multi-step run_analysis command lives in pipeline.rs instead.

use crate::pipeline;
use crate::prompts::AnalysisIntent;
use crate::session::{PanelState, SessionState};

/// Tauri command: the selectable intents, in catalog order.
///
/// Called once by the webview to populate the selector, so the selector and
/// the catalog can never drift apart.
#[tauri::command]
pub fn list_intents() -> Vec<&'static str> {
    AnalysisIntent::ALL.iter().map(|intent| intent.label()).collect()
}

/// Tauri command: point the session at a new analysis intent.
///
/// Called on every selector change. No network activity.
#[tauri::command]
pub fn select_intent(
    app: tauri::AppHandle,
    state: tauri::State<'_, PanelState>,
    label: String,
) -> Result<(), String> {
    let intent = AnalysisIntent::from_label(&label).map_err(|e| e.to_string())?;
    {
        let mut session = state.session.lock().map_err(|e| e.to_string())?;
        session.select_intent(intent);
    }
    log::info!("[PANEL] Intent selected: {}", label);
    pipeline::emit_session(&app, state.inner());
    Ok(())
}

/// Tauri command: snapshot of the session state.
///
/// Called by the webview on load — the initial render can't rely on an
/// event it may not have been listening for yet.
#[tauri::command]
pub fn get_session_state(state: tauri::State<'_, PanelState>) -> Result<SessionState, String> {
    let session = state.session.lock().map_err(|e| e.to_string())?;
    Ok(session.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_order_matches_the_catalog() {
        assert_eq!(
            list_intents(),
            vec![
                "Summary",
                "Insights",
                "Accessibility",
                "Diagnosis",
                "Comparison",
                "Forecasting"
            ]
        );
    }
}
