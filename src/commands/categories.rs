//! Category quick-create

use course_admin_core::category_form::{self, CategoryForm};
use course_admin_core::{AdminResult, MessageResponse};

use super::api;

pub async fn create_category(form: &CategoryForm) -> AdminResult<MessageResponse> {
    category_form::create_category(&api(), form).await
}
