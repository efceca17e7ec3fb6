//! Session state owned by the orchestrator.
//!
//! One mutable value, only ever touched through the named transitions below
//! and always behind the managed `PanelState` lock. The webview renders it
//! and never writes it. Discarded with the process — no persistence.

use crate::prompts::AnalysisIntent;
use crate::render;
use crate::settings::PanelSettings;
use serde::Serialize;
use std::sync::Mutex;

/// Idle trigger label.
pub const TRIGGER_IDLE: &str = "Analyse";
/// Trigger label while a run is in flight.
pub const TRIGGER_RUNNING: &str = "Analysing...";
/// Output placeholder before the first run.
pub const OUTPUT_PLACEHOLDER: &str = "Please choose an analysis option and click Analyse.";

/// Everything the panel UI needs to render, serialized camelCase for the
/// webview.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub selected_intent: Option<AnalysisIntent>,
    pub instruction: String,
    pub trigger_label: String,
    pub trigger_enabled: bool,
    pub spinner_visible: bool,
    pub output_text: String,
    pub output_html: String,
    pub error_text: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            selected_intent: None,
            // No intent is preselected, but the instruction is primed with
            // the Summary text so the trigger works before the first
            // selector change.
            instruction: AnalysisIntent::Summary.instruction().to_string(),
            trigger_label: TRIGGER_IDLE.to_string(),
            trigger_enabled: true,
            spinner_visible: false,
            output_text: OUTPUT_PLACEHOLDER.to_string(),
            output_html: render::markdown_to_html(OUTPUT_PLACEHOLDER),
            error_text: None,
        }
    }

    /// Point the session at a new analysis intent. No network activity.
    pub fn select_intent(&mut self, intent: AnalysisIntent) {
        self.selected_intent = Some(intent);
        self.instruction = intent.instruction().to_string();
    }

    /// Flip to the running state. Returns false (and changes nothing) when a
    /// run is already in flight — the enabled flag is the one-bit semaphore
    /// that serializes runs.
    pub fn try_begin_run(&mut self) -> bool {
        if !self.trigger_enabled {
            return false;
        }
        self.trigger_label = TRIGGER_RUNNING.to_string();
        self.trigger_enabled = false;
        self.spinner_visible = true;
        self.error_text = None;
        true
    }

    /// Record a successful analysis and return to idle.
    pub fn finish_run(&mut self, output: String) {
        self.output_html = render::markdown_to_html(&output);
        self.output_text = output;
        self.error_text = None;
        self.restore_idle();
    }

    /// Record a failed analysis and return to idle. The output region keeps
    /// its previous contents; the failure is surfaced separately so it can
    /// never be mistaken for a result.
    pub fn fail_run(&mut self, message: String) {
        self.error_text = Some(message);
        self.restore_idle();
    }

    fn restore_idle(&mut self) {
        self.trigger_label = TRIGGER_IDLE.to_string();
        self.trigger_enabled = true;
        self.spinner_visible = false;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Managed Tauri state: the session plus the panel settings, each behind its
/// own lock. Written by the pipeline, read by the webview commands.
pub struct PanelState {
    pub session: Mutex<SessionState>,
    pub settings: Mutex<PanelSettings>,
}

impl PanelState {
    pub fn new(settings: PanelSettings) -> Self {
        Self {
            session: Mutex::new(SessionState::new()),
            settings: Mutex::new(settings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_idle_with_placeholder() {
        let state = SessionState::new();
        assert!(state.selected_intent.is_none());
        assert_eq!(state.trigger_label, TRIGGER_IDLE);
        assert!(state.trigger_enabled);
        assert!(!state.spinner_visible);
        assert_eq!(state.output_text, OUTPUT_PLACEHOLDER);
        assert!(state.error_text.is_none());
    }

    #[test]
    fn select_intent_matches_catalog_entry() {
        let mut state = SessionState::new();
        for intent in AnalysisIntent::ALL {
            state.select_intent(intent);
            assert_eq!(state.selected_intent, Some(intent));
            assert_eq!(state.instruction, intent.instruction());
        }
    }

    #[test]
    fn begin_run_flips_to_running() {
        let mut state = SessionState::new();
        assert!(state.try_begin_run());
        assert_eq!(state.trigger_label, TRIGGER_RUNNING);
        assert!(!state.trigger_enabled);
        assert!(state.spinner_visible);
    }

    #[test]
    fn second_begin_run_is_a_noop_while_in_flight() {
        let mut state = SessionState::new();
        assert!(state.try_begin_run());
        assert!(!state.try_begin_run());
        assert_eq!(state.trigger_label, TRIGGER_RUNNING);
        assert!(state.spinner_visible);
    }

    #[test]
    fn finish_run_sets_output_and_restores_idle() {
        let mut state = SessionState::new();
        state.try_begin_run();
        state.finish_run("This dashboard shows rising volume.".to_string());
        assert_eq!(state.output_text, "This dashboard shows rising volume.");
        assert!(state.output_html.contains("This dashboard shows rising volume."));
        assert!(state.trigger_enabled);
        assert!(!state.spinner_visible);
        assert_eq!(state.trigger_label, TRIGGER_IDLE);
    }

    #[test]
    fn fail_run_restores_idle_and_keeps_output() {
        let mut state = SessionState::new();
        state.try_begin_run();
        state.fail_run("Analysis failed — endpoint unreachable".to_string());
        assert!(state.trigger_enabled);
        assert!(!state.spinner_visible);
        assert_eq!(state.output_text, OUTPUT_PLACEHOLDER);
        assert!(state.error_text.as_deref().unwrap().contains("unreachable"));
    }

    #[test]
    fn next_run_clears_the_previous_error() {
        let mut state = SessionState::new();
        state.try_begin_run();
        state.fail_run("Analysis failed — timeout".to_string());
        assert!(state.try_begin_run());
        assert!(state.error_text.is_none());
    }
}
