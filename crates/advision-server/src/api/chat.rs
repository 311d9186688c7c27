use axum::{extract::rejection::JsonRejection, extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use advision_engine::{ChatTurn, UserContext};

use crate::middleware::RequestId;

use super::{require_json, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct ChatRequest {
    #[serde(default)]
    question: String,
    #[serde(default)]
    conversation_history: Vec<ChatTurn>,
    #[serde(default)]
    user_context: Option<UserContext>,
}

#[derive(Debug, Serialize)]
pub(super) struct ChatAnswer {
    answer: String,
}

pub(super) async fn chat(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ChatAnswer>>, ApiError> {
    let request = require_json(&req_id, body)?;
    let question = request.question.trim();
    if question.is_empty() {
        return Err(ApiError::bad_request(req_id.0, "missing question"));
    }
    tracing::info!(
        history = request.conversation_history.len(),
        has_context = request.user_context.is_some(),
        "chat question received"
    );

    let answer = state
        .engine
        .answer_question(
            question,
            request.user_context.as_ref(),
            &request.conversation_history,
        )
        .await;

    Ok(ApiResponse::new(req_id, ChatAnswer { answer }))
}
