//! Single-shot generate call against an Ollama-compatible endpoint.
//!
//! One POST, no streaming, bounded timeout. The body is read as text first
//! so a non-JSON reply can be reported with its raw prefix.

use crate::error::AnalysisError;
use std::time::Duration;

/// Fixed fallback shown when the reply parses but lacks a `response` field.
pub const FALLBACK_OUTPUT: &str = "Error processing response";

/// Upper bound on the full HTTP exchange. Vision models are slow on CPU;
/// expiry is reported as a network failure.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// POST `{model, prompt, images, stream: false}` and extract the analysis text.
pub async fn generate(
    endpoint: &str,
    model: &str,
    prompt: &str,
    image_b64: &str,
) -> Result<String, AnalysisError> {
    log::info!(
        "[LLM] POST {} (model={}, prompt {} chars, image {} chars)",
        endpoint,
        model,
        prompt.len(),
        image_b64.len()
    );
    let start = std::time::Instant::now();

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| AnalysisError::Network(e.to_string()))?;

    let response = client
        .post(endpoint)
        .json(&serde_json::json!({
            "model": model,
            "prompt": prompt,
            "images": [image_b64],
            "stream": false,
        }))
        .send()
        .await
        .map_err(|e| AnalysisError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AnalysisError::Network(e.to_string()))?;

    log::info!(
        "[LLM] {} in {}ms ({} bytes)",
        status,
        start.elapsed().as_millis(),
        body.len()
    );
    if !status.is_success() {
        // The endpoint reports errors as JSON bodies ({"error": ...}); fall
        // through and let field extraction substitute the fallback text.
        log::warn!(
            "[LLM] Endpoint returned {}: {}",
            status,
            &body[..body.len().min(200)]
        );
    }

    extract_output(&body)
}

/// Parse the response body and pull out the `response` field.
fn extract_output(body: &str) -> Result<String, AnalysisError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        AnalysisError::MalformedResponse(format!(
            "{} — raw: {}",
            e,
            &body[..body.len().min(200)]
        ))
    })?;

    match value.get("response").and_then(|v| v.as_str()) {
        Some(text) => Ok(text.to_string()),
        None => {
            log::warn!("[LLM] Reply parsed but has no `response` field — substituting fallback");
            Ok(FALLBACK_OUTPUT.to_string())
        }
    }
}
