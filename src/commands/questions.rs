//! Quiz question bulk submit

use course_admin_core::draft::{SubmitPayload, BULK_QUESTIONS_PATH};
use course_admin_core::{AdminResult, MessageResponse};

use super::api;

pub async fn submit_questions(payload: &SubmitPayload) -> AdminResult<MessageResponse> {
    log::info!("posting {} questions for quiz {}", payload.questions.len(), payload.quiz_id);
    api().create(BULK_QUESTIONS_PATH, payload).await
}
