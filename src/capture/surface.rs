//! Primary-monitor capture and image payload encoding.

use crate::error::AnalysisError;
use image::DynamicImage;
use regex::Regex;

/// Capture the primary monitor as an RGBA image.
///
/// Falls back to the first monitor when none reports itself as primary.
pub fn capture_primary_monitor() -> Result<DynamicImage, AnalysisError> {
    let start = std::time::Instant::now();

    let mut monitors =
        xcap::Monitor::all().map_err(|e| AnalysisError::Capture(e.to_string()))?;
    if monitors.is_empty() {
        return Err(AnalysisError::Capture("no monitors detected".to_string()));
    }
    let primary = monitors
        .iter()
        .position(|m| m.is_primary().unwrap_or(false))
        .unwrap_or(0);
    let monitor = monitors.swap_remove(primary);

    let rgba = monitor
        .capture_image()
        .map_err(|e| AnalysisError::Capture(e.to_string()))?;

    log::info!(
        "[CAPTURE] xcap capture: {}ms ({}x{})",
        start.elapsed().as_millis(),
        rgba.width(),
        rgba.height()
    );
    Ok(DynamicImage::ImageRgba8(rgba))
}

/// Encode an image as PNG in memory and base64 the bytes.
///
/// No disk I/O — the payload goes straight into the request JSON.
pub fn to_png_base64(image: &DynamicImage) -> Result<String, AnalysisError> {
    let start = std::time::Instant::now();

    let mut png_bytes = Vec::new();
    image
        .write_to(
            &mut std::io::Cursor::new(&mut png_bytes),
            image::ImageFormat::Png,
        )
        .map_err(|e| AnalysisError::Capture(format!("PNG encode failed: {}", e)))?;

    let encoded = base64::Engine::encode(
        &base64::engine::general_purpose::STANDARD,
        &png_bytes,
    );

    log::info!(
        "[CAPTURE] PNG encode + base64: {}ms ({} bytes)",
        start.elapsed().as_millis(),
        png_bytes.len()
    );
    Ok(encoded)
}

/// Strip a `data:<mime>;base64,` header if the payload carries one.
///
/// The generate endpoint expects raw base64 characters in the `images`
/// array, never a data URI.
pub fn strip_data_uri_prefix(payload: &str) -> String {
    let prefix = Regex::new(r"^data:[^;,]+;base64,").expect("static pattern");
    prefix.replace(payload, "").into_owned()
}
