//! Category Quick-Create
//!
//! The small dialog used from the category list and from course forms.

use serde::Serialize;

use crate::api::{Api, MessageResponse, Transport};
use crate::error::{AdminResult, FormSection, ValidationErrors};
use crate::records::Category;
use crate::resource::Resource;

/// Request body for `POST /categories`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
}

impl CategoryForm {
    pub fn validate(&self) -> Result<CategoryInput, ValidationErrors> {
        let name = self.name.trim();
        let mut errors = ValidationErrors::new();
        if name.is_empty() {
            errors.push("name", FormSection::Details, "Category name is required");
        } else if name.chars().count() > 100 {
            errors.push("name", FormSection::Details, "Category name must be at most 100 characters");
        }
        errors.into_result()?;

        let description = self.description.trim();
        Ok(CategoryInput {
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

/// Validate locally, then `POST /categories`.
pub async fn create_category<T: Transport>(api: &Api<T>, form: &CategoryForm) -> AdminResult<MessageResponse> {
    let input = form.validate()?;
    log::info!("creating category '{}'", input.name);
    api.create(Category::PATH, &input).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingTransport;
    use crate::error::AdminError;
    use serde_json::json;

    #[tokio::test]
    async fn test_blank_name_never_reaches_network() {
        let api = Api::new(RecordingTransport::default());
        let form = CategoryForm { name: "   ".into(), description: "x".into() };

        let err = create_category(&api, &form).await.unwrap_err();
        match err {
            AdminError::Validation(errors) => {
                assert_eq!(errors.for_field("name"), Some("Category name is required"))
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(api.transport().sent().is_empty());
    }

    #[tokio::test]
    async fn test_create_posts_trimmed_body() {
        let api = Api::new(RecordingTransport::default().respond(Ok(json!({
            "success": true,
            "message": "Category created",
            "data": {"_id": "c9"}
        }))));
        let form = CategoryForm { name: "  Design ".into(), description: String::new() };

        let response = create_category(&api, &form).await.expect("created");
        assert_eq!(response.message, "Category created");
        let sent = api.transport().sent();
        assert_eq!(sent[0].path, "categories");
        assert_eq!(sent[0].body, Some(json!({"name": "Design"})));
    }
}
