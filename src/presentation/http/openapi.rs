// src/presentation/http/openapi.rs
use crate::application::dto::{BoardPageDto, MemoDto, NumberedPage};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// API listing page. `next` and `previous` are page numbers.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MemoPageResponse {
    pub count: u64,
    pub next: Option<u64>,
    pub previous: Option<u64>,
    pub results: Vec<MemoDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BoardPageResponse {
    pub owner: String,
    pub nickname: String,
    pub category: Option<String>,
    pub page_number: u64,
    pub num_pages: u64,
    pub count: u64,
    pub has_previous: bool,
    pub has_next: bool,
    pub has_other_pages: bool,
    pub items: Vec<MemoDto>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::accounts::signup,
        crate::presentation::http::controllers::accounts::login,
        crate::presentation::http::controllers::accounts::logout,
        crate::presentation::http::controllers::accounts::profile,
        crate::presentation::http::controllers::memos::list_memos,
        crate::presentation::http::controllers::memos::create_memo,
        crate::presentation::http::controllers::memos::get_memo,
        crate::presentation::http::controllers::memos::replace_memo,
        crate::presentation::http::controllers::memos::patch_memo,
        crate::presentation::http::controllers::memos::delete_memo,
        crate::presentation::http::controllers::board::memo_board,
        crate::presentation::http::controllers::board::create_memo,
        crate::presentation::http::controllers::board::memo_detail,
        crate::presentation::http::controllers::board::edit_memo,
        crate::presentation::http::controllers::board::delete_memo,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            MemoPageResponse,
            BoardPageResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::accounts::SignupRequest,
            crate::presentation::http::controllers::accounts::LoginRequest,
            crate::presentation::http::controllers::accounts::LoginResponse,
            crate::presentation::http::controllers::memos::MemoRequest,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::MemoDto
        )
    ),
    tags(
        (name = "Accounts", description = "Signup, login and session endpoints"),
        (name = "Memos", description = "Memo REST API addressed by id"),
        (name = "Board", description = "Memo pages addressed by slug"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Memo API",
        description = "Personal memos with per-owner slugs",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi);
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

impl From<NumberedPage<MemoDto>> for MemoPageResponse {
    fn from(page: NumberedPage<MemoDto>) -> Self {
        Self {
            count: page.count,
            next: page.next,
            previous: page.previous,
            results: page.results,
        }
    }
}

impl From<BoardPageDto<MemoDto>> for BoardPageResponse {
    fn from(page: BoardPageDto<MemoDto>) -> Self {
        Self {
            owner: page.owner,
            nickname: page.nickname,
            category: page.category,
            page_number: page.page_number,
            num_pages: page.num_pages,
            count: page.count,
            has_previous: page.has_previous,
            has_next: page.has_next,
            has_other_pages: page.has_other_pages,
            items: page.items,
        }
    }
}
