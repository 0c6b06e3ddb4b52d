// src/presentation/http/controllers/memos.rs
use crate::application::{
    commands::memos::{CreateMemoCommand, DeleteMemoCommand, UpdateMemoCommand},
    dto::{ChoiceInput, MemoDto, MemoLocator},
    queries::memos::{GetMemoByIdQuery, ListMemosQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::MemoPageResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MemoListParams {
    /// One of work, personal, study, hobby, other.
    pub category: Option<String>,
    /// 1-based page number, or `last`.
    pub page: Option<String>,
}

/// Memo fields as submitted by a client. Which ones are required depends on
/// the operation: create and full update need `title` and `content`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct MemoRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[schema(value_type = Option<String>, example = "work")]
    pub category: Option<ChoiceInput>,
    /// Name (`low`, `medium`, `high`) or rank (1, 2, 3).
    #[schema(value_type = Option<String>, example = "high")]
    pub priority: Option<ChoiceInput>,
}

impl MemoRequest {
    pub(crate) fn into_create(self) -> CreateMemoCommand {
        CreateMemoCommand {
            title: self.title,
            content: self.content,
            category: self.category,
            priority: self.priority,
        }
    }

    pub(crate) fn into_update(self, target: MemoLocator, partial: bool) -> UpdateMemoCommand {
        UpdateMemoCommand {
            target,
            title: self.title,
            content: self.content,
            category: self.category,
            priority: self.priority,
            partial,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/memo/",
    params(MemoListParams),
    responses(
        (status = 200, description = "One page of the caller's memos.", body = MemoPageResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Page out of range.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Memos"
)]
pub async fn list_memos(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<MemoListParams>,
) -> HttpResult<Json<MemoPageResponse>> {
    state
        .services
        .memo_queries
        .list_memos(
            &user,
            ListMemosQuery {
                category: params.category,
                page: params.page,
            },
        )
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    post,
    path = "/api/memo/",
    request_body = MemoRequest,
    responses(
        (status = 201, description = "Memo created with a generated slug.", body = MemoDto),
        (status = 400, description = "Invalid field.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Memos"
)]
pub async fn create_memo(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<MemoRequest>,
) -> HttpResult<(StatusCode, Json<MemoDto>)> {
    let memo = state
        .services
        .memo_commands
        .create_memo(&user, payload.into_create())
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(memo)))
}

#[utoipa::path(
    get,
    path = "/api/memo/{id}/",
    params(("id" = i64, Path, description = "Memo id")),
    responses(
        (status = 200, description = "The memo.", body = MemoDto),
        (status = 404, description = "No such memo for the caller.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Memos"
)]
pub async fn get_memo(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<MemoDto>> {
    state
        .services
        .memo_queries
        .get_memo_by_id(&user, GetMemoByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/memo/{id}/",
    params(("id" = i64, Path, description = "Memo id")),
    request_body = MemoRequest,
    responses(
        (status = 200, description = "Memo replaced; the slug is kept.", body = MemoDto),
        (status = 400, description = "Invalid field.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such memo for the caller.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Memos"
)]
pub async fn replace_memo(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<MemoRequest>,
) -> HttpResult<Json<MemoDto>> {
    state
        .services
        .memo_commands
        .update_memo(&user, payload.into_update(MemoLocator::Id(id), false))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/memo/{id}/",
    params(("id" = i64, Path, description = "Memo id")),
    request_body = MemoRequest,
    responses(
        (status = 200, description = "Memo partially updated.", body = MemoDto),
        (status = 400, description = "Invalid field.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such memo for the caller.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Memos"
)]
pub async fn patch_memo(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<MemoRequest>,
) -> HttpResult<Json<MemoDto>> {
    state
        .services
        .memo_commands
        .update_memo(&user, payload.into_update(MemoLocator::Id(id), true))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/memo/{id}/",
    params(("id" = i64, Path, description = "Memo id")),
    responses(
        (status = 204, description = "Memo deleted."),
        (status = 404, description = "No such memo for the caller.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Memos"
)]
pub async fn delete_memo(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .memo_commands
        .delete_memo(
            &user,
            DeleteMemoCommand {
                target: MemoLocator::Id(id),
            },
        )
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
