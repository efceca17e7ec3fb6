//! Screen capture domain — public API.
//!
//! This module owns everything between "the user clicked Analyse" and "we
//! have a base64 payload": primary-monitor capture, in-memory PNG encoding,
//! and the conceal/reveal discipline that keeps the panel out of its own
//! screenshot.

mod surface;

pub use surface::{capture_primary_monitor, strip_data_uri_prefix, to_png_base64};

use crate::error::AnalysisError;
use image::DynamicImage;

/// A named region of the capture surface that can be hidden while the shot
/// is taken. The panel window implements this so the analysis output never
/// photographs itself.
pub trait ConcealableRegion {
    fn conceal(&self) -> Result<(), String>;
    fn reveal(&self) -> Result<(), String>;
}

impl ConcealableRegion for tauri::WebviewWindow {
    fn conceal(&self) -> Result<(), String> {
        self.hide().map_err(|e| e.to_string())
    }

    fn reveal(&self) -> Result<(), String> {
        self.show().map_err(|e| e.to_string())
    }
}

/// Capture the surface with `region` excluded from the shot.
///
/// Conceal and reveal are paired unconditionally: the region is revealed
/// even when the capture itself fails. A conceal failure is downgraded to a
/// warning — a panel that photographs itself beats no capture at all.
pub fn capture_excluding<F>(
    region: &dyn ConcealableRegion,
    capture: F,
) -> Result<DynamicImage, AnalysisError>
where
    F: FnOnce() -> Result<DynamicImage, AnalysisError>,
{
    if let Err(e) = region.conceal() {
        log::warn!("[CAPTURE] Could not conceal panel before capture: {}", e);
    }
    let shot = capture();
    if let Err(e) = region.reveal() {
        log::warn!("[CAPTURE] Could not reveal panel after capture: {}", e);
    }
    shot
}
