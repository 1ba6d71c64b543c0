use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        review::{CreateReviewDto, ReviewListDto, ReviewMessageDto},
    },
    server::{
        controller::extract::{ApiJson, ApiPath},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::review::CreateReviewParam,
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Rate a vehicle from 1 to 5 with an optional comment.
///
/// The vehicle's average rating is updated in the same transaction.
///
/// # Returns
/// - `201 Created` - Review stored
/// - `400 Bad Request` - Rating missing or outside 1..=5
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Vehicle not found
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ReviewMessageDto),
        (status = 400, description = "Rating must be between 1 and 5", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Rent])
        .await?;

    let review = ReviewService::new(&state.db)
        .create(CreateReviewParam {
            user_id: user.id,
            vehicle_id: payload.vehicle_id,
            rating: payload.rating,
            comment: payload.comment,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReviewMessageDto {
            message: "Review created".to_string(),
            review: review.into_dto(),
        }),
    ))
}

/// List a vehicle's reviews with reviewer names, newest first.
#[utoipa::path(
    get,
    path = "/api/reviews/vehicle/{vehicle_id}",
    tag = REVIEW_TAG,
    params(
        ("vehicle_id" = i32, Path, description = "Vehicle id")
    ),
    responses(
        (status = 200, description = "Reviews", body = ReviewListDto),
        (status = 400, description = "Invalid id", body = ErrorDto)
    ),
)]
pub async fn vehicle_reviews(
    State(state): State<AppState>,
    ApiPath(vehicle_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db)
        .list_for_vehicle(vehicle_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ReviewListDto {
            reviews: reviews.into_iter().map(|r| r.into_dto()).collect(),
        }),
    ))
}
