use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use application::{AdDto, AdFilterQuery, UserDto};

use crate::{
    error::ApiError,
    extract::{Json, Path},
    state::AppState,
};

#[derive(Debug, Deserialize)]
struct CreateUserPayload {
    name: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct CreateAdPayload {
    title: String,
    text: String,
    user_id: i64,
}

#[derive(Debug, Deserialize)]
struct ChangeAdStatusPayload {
    published: bool,
    user_id: i64,
}

#[derive(Debug, Deserialize)]
struct UpdateAdPayload {
    title: String,
    text: String,
    user_id: i64,
}

/// 过滤查询参数；`published` 只看是否出现，不携带值
#[derive(Debug, Deserialize)]
struct FilterQuery {
    author: Option<String>,
    date: Option<String>,
    title: Option<String>,
    published: Option<String>,
}

/// 成功响应信封 `{"data": ..., "error": null}`
#[derive(Debug, Serialize)]
struct Envelope<T> {
    data: T,
    error: Option<String>,
}

fn success<T: Serialize>(data: T) -> Json<Envelope<T>> {
    Json(Envelope { data, error: None })
}

fn handle_panic(_err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    tracing::error!("panic while handling request");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "data": null, "error": "internal server error" })),
    )
        .into_response()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/user", post(create_user))
        .route("/ads", post(create_ad))
        .route("/ads/{ad_id}/status", put(change_ad_status))
        .route("/ads/{ad_id}", put(update_ad))
        .route("/ads/{ad_id}/info", get(get_ad_by_id))
        .route("/ads/find/{title}", get(get_ads_by_name))
        .route("/ads/filter", get(filter_ads))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<Json<Envelope<UserDto>>, ApiError> {
    let dto = state
        .user_service
        .create_user(payload.name, payload.email)
        .await?;
    Ok(success(dto))
}

async fn create_ad(
    State(state): State<AppState>,
    Json(payload): Json<CreateAdPayload>,
) -> Result<Json<Envelope<AdDto>>, ApiError> {
    let dto = state
        .ad_service
        .create_ad(payload.user_id, payload.title, payload.text)
        .await?;
    Ok(success(dto))
}

async fn change_ad_status(
    State(state): State<AppState>,
    Path(ad_id): Path<i64>,
    Json(payload): Json<ChangeAdStatusPayload>,
) -> Result<Json<Envelope<AdDto>>, ApiError> {
    let dto = state
        .ad_service
        .change_status(ad_id, payload.user_id, payload.published)
        .await?;
    Ok(success(dto))
}

async fn update_ad(
    State(state): State<AppState>,
    Path(ad_id): Path<i64>,
    Json(payload): Json<UpdateAdPayload>,
) -> Result<Json<Envelope<AdDto>>, ApiError> {
    let dto = state
        .ad_service
        .update_ad(ad_id, payload.user_id, payload.title, payload.text)
        .await?;
    Ok(success(dto))
}

async fn get_ad_by_id(
    State(state): State<AppState>,
    Path(ad_id): Path<i64>,
) -> Result<Json<Envelope<AdDto>>, ApiError> {
    let dto = state.ad_service.get_ad(ad_id).await?;
    Ok(success(dto))
}

async fn get_ads_by_name(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Envelope<Vec<AdDto>>>, ApiError> {
    let ads = state.ad_service.find_by_title(&title).await?;
    if ads.is_empty() {
        return Err(ApiError::not_found("no ads with such name"));
    }
    Ok(success(ads))
}

async fn filter_ads(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<Envelope<Vec<AdDto>>>, ApiError> {
    let ads = state
        .ad_service
        .filter(AdFilterQuery {
            author: query.author,
            date: query.date,
            title: query.title,
            published: query.published.is_some(),
        })
        .await?;
    Ok(success(ads))
}
