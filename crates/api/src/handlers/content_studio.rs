//! Handler for the mocked content studio.

use std::time::Duration;

use axum::extract::State;
use axum::Json;
use goat_core::content_studio::generate_mock_script;
use goat_core::validation::require_text;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateScriptRequest {
    pub topic: Option<String>,
    pub tone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateScriptResponse {
    pub generated_script: String,
}

/// POST /api/v1/content-studio/generate-script
///
/// Sleeps for `MOCK_SCRIPT_DELAY_MS` to imitate a model call, then renders
/// the canned template.
pub async fn generate_script(
    State(state): State<AppState>,
    AppJson(input): AppJson<GenerateScriptRequest>,
) -> AppResult<Json<GenerateScriptResponse>> {
    let topic = require_text("topic", input.topic.as_deref())?;

    let delay = state.config.mock_script_delay_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    tracing::debug!(topic = %topic, "Generated mock script");
    Ok(Json(GenerateScriptResponse {
        generated_script: generate_mock_script(&topic, input.tone.as_deref()),
    }))
}
