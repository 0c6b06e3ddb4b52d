// src/presentation/http/controllers/board.rs
//! Slug-addressed memo pages. They carry the data of the list, detail, edit
//! and delete views as JSON.
use crate::application::{
    commands::memos::DeleteMemoCommand,
    dto::{MemoDto, MemoLocator},
    queries::memos::{GetMemoBySlugQuery, MemoBoardQuery},
};
use crate::presentation::http::controllers::memos::{MemoListParams, MemoRequest};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::{BoardPageResponse, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};

#[utoipa::path(
    get,
    path = "/memos",
    params(MemoListParams),
    responses(
        (status = 200, description = "Board page; bad page numbers show page 1.", body = BoardPageResponse)
    ),
    tag = "Board"
)]
pub async fn memo_board(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<MemoListParams>,
) -> HttpResult<Json<BoardPageResponse>> {
    state
        .services
        .memo_queries
        .memo_board(
            &user,
            MemoBoardQuery {
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
    path = "/memos",
    request_body = MemoRequest,
    responses(
        (status = 201, description = "Memo created.", body = MemoDto),
        (status = 400, description = "Invalid field.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Board"
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
    path = "/memos/{slug}",
    params(("slug" = String, Path, description = "Memo slug")),
    responses(
        (status = 200, description = "The memo.", body = MemoDto),
        (status = 404, description = "No such memo for the caller.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Board"
)]
pub async fn memo_detail(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<MemoDto>> {
    state
        .services
        .memo_queries
        .get_memo_by_slug(&user, GetMemoBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/memos/{slug}",
    params(("slug" = String, Path, description = "Memo slug")),
    request_body = MemoRequest,
    responses(
        (status = 200, description = "Memo edited; the slug is kept.", body = MemoDto),
        (status = 400, description = "Invalid field.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such memo for the caller.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Board"
)]
pub async fn edit_memo(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<MemoRequest>,
) -> HttpResult<Json<MemoDto>> {
    state
        .services
        .memo_commands
        .update_memo(&user, payload.into_update(MemoLocator::Slug(slug), false))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/memos/{slug}",
    params(("slug" = String, Path, description = "Memo slug")),
    responses(
        (status = 200, description = "Memo deleted.", body = StatusResponse),
        (status = 404, description = "No such memo for the caller.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Board"
)]
pub async fn delete_memo(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .memo_commands
        .delete_memo(
            &user,
            DeleteMemoCommand {
                target: MemoLocator::Slug(slug),
            },
        )
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
