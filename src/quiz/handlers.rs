use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{info, instrument};

use crate::{error::ApiResult, quiz::repo::Question, state::AppState};

const SAMPLE_SIZE: i64 = 20;

pub fn quiz_routes() -> Router<AppState> {
    Router::new()
        .route("/questions", get(questions))
        .route("/submit-answers", post(submit_answers))
}

/// GET /questions
///
/// 20 random questions per call. Each response carries the stored rows
/// verbatim, answer field included.
#[instrument(skip(state))]
pub async fn questions(State(state): State<AppState>) -> ApiResult<Json<Vec<Question>>> {
    let questions = Question::sample(&state.db, SAMPLE_SIZE).await?;
    info!(count = questions.len(), "fetched questions");
    Ok(Json(questions))
}

/// POST /submit-answers
///
/// Acknowledgment only. The submitted body is logged and discarded; nothing
/// is scored or persisted.
#[instrument(skip(answers))]
pub async fn submit_answers(Json(answers): Json<serde_json::Value>) -> Json<serde_json::Value> {
    info!(%answers, "received answers");
    Json(json!({ "success": true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn submit_answers_acknowledges_any_body() {
        let body = json!({ "q1": "b", "q2": "d", "free_text": ["x", 42] });
        let Json(response) = submit_answers(Json(body)).await;
        assert_eq!(response, json!({ "success": true }));
    }

    #[tokio::test]
    async fn submit_answers_accepts_non_object_bodies() {
        let Json(response) = submit_answers(Json(json!([1, 2, 3]))).await;
        assert_eq!(response, json!({ "success": true }));
    }

    #[test]
    fn question_serializes_with_answer_included() {
        let q = Question {
            id: uuid::Uuid::new_v4(),
            question: "2 + 2?".into(),
            options: json!(["3", "4", "5"]),
            answer: "4".into(),
        };
        let encoded = serde_json::to_string(&q).unwrap();
        assert!(encoded.contains("\"answer\":\"4\""));
    }
}
