//! Inference client domain — Ollama-compatible generate endpoint.
//!
//! Public API for the network half of the pipeline. External code should
//! only use the functions exported here.

mod generate;

pub use generate::{generate, FALLBACK_OUTPUT, REQUEST_TIMEOUT};
