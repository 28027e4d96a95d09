//! Generic list / detail / delete calls for any `Resource`

use course_admin_core::fetch::fetch_page;
use course_admin_core::{AdminResult, ListQuery, MessageResponse, Page, Resource};

use super::api;

pub async fn list<R: Resource>(query: &ListQuery) -> AdminResult<Page<R>> {
    fetch_page::<R, _>(&api(), query).await
}

pub async fn get<R: Resource>(id: &str) -> AdminResult<R> {
    api().get::<R>(R::PATH, id).await
}

pub async fn delete<R: Resource>(id: &str) -> AdminResult<MessageResponse> {
    api().delete(R::PATH, id).await
}
