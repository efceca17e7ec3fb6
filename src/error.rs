//! Error taxonomy for the capture-analyze pipeline.
//!
//! Every hard failure the orchestrator can hit maps to one variant here.
//! A reply that parses but lacks the `response` field is NOT an error — it
//! degrades to a fixed fallback string in `llm::generate`.

use thiserror::Error;

/// Hard failure conditions surfaced by the capture-analyze pipeline.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The webview sent an intent label the catalog does not know.
    #[error("unknown analysis intent: {0:?}")]
    UnknownIntent(String),

    /// The configured address could not be normalized into an endpoint URL.
    #[error("invalid inference endpoint address: {0}")]
    InvalidEndpoint(String),

    /// Screen capture or image encoding failed.
    #[error("screen capture failed: {0}")]
    Capture(String),

    /// The request could not be sent, timed out, or the body never arrived.
    #[error("inference request failed: {0}")]
    Network(String),

    /// The response body was not valid JSON.
    #[error("inference endpoint returned a non-JSON body: {0}")]
    MalformedResponse(String),
}
