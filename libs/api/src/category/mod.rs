use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use tracing::info;

pub mod request;
pub mod response;

use crate::request::row_id;
use crate::response::{
    ApiResponse, DeletedResp, ErrorResp, IntoApiResponse, UpdatedResp,
};
use crate::{ApiError, ApiState};

use self::{request::CategoryParam, response::CategoryResp};

/// List all categories
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List all categories successfully", body = [CategoryResp])
    )
)]
pub async fn get_categories(
    State(state): State<ApiState>,
) -> ApiResponse<Json<Vec<CategoryResp>>> {
    let categories = state
        .repo
        .category
        .find_all()
        .await
        .into_response("500-001")?;

    Ok(Json(categories.into_iter().map(CategoryResp::from).collect()))
}

/// Get a category
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    responses(
        (status = 200, description = "Get a category successfully", body = CategoryResp),
        (status = 404, description = "Category not found", body = ErrorResp)
    ),
    params(
        ("id", description = "category id"),
    )
)]
pub async fn get_category(
    State(state): State<ApiState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> ApiResponse<Json<CategoryResp>> {
    let category = match row_id(id) {
        Some(id) => state
            .repo
            .category
            .find_by_id(id)
            .await
            .into_response("500-002")?,
        None => None,
    };

    let Some(category) = category else {
        return Err(ApiError::NotFound("Category not found".to_string()));
    };

    Ok(Json(category.into()))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CategoryParam,
    responses(
        (status = 200, description = "Create a category successfully", body = CategoryResp),
        (status = 400, description = "Name is missing", body = ErrorResp)
    )
)]
pub async fn post_category(
    State(state): State<ApiState>,
    WithRejection(Json(params), _): WithRejection<
        Json<CategoryParam>,
        ApiError,
    >,
) -> ApiResponse<Json<CategoryResp>> {
    let name = params.name()?;

    let category = state
        .repo
        .category
        .create(name)
        .await
        .into_response("500-003")?;

    info!(task = "create category", id = category.id);

    Ok(Json(category.into()))
}

/// Rename a category
///
/// An unknown id is not an error, the response reports zero updated rows.
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    request_body = CategoryParam,
    responses(
        (status = 200, description = "Update a category successfully", body = UpdatedResp),
        (status = 400, description = "Name is missing", body = ErrorResp)
    ),
    params(
        ("id", description = "category id"),
    )
)]
pub async fn put_category(
    State(state): State<ApiState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Json(params), _): WithRejection<
        Json<CategoryParam>,
        ApiError,
    >,
) -> ApiResponse<Json<UpdatedResp>> {
    let name = params.name()?;

    let updated = match row_id(id) {
        Some(id) => state
            .repo
            .category
            .update(id, name)
            .await
            .into_response("500-004")?,
        None => 0,
    };

    info!(task = "update category", id = id, updated = updated);

    Ok(Json(UpdatedResp { updated }))
}

/// Delete a category
///
/// Posts of the category are kept and lose their category.
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    responses(
        (status = 200, description = "Delete a category successfully", body = DeletedResp)
    ),
    params(
        ("id", description = "category id"),
    )
)]
pub async fn delete_category(
    State(state): State<ApiState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> ApiResponse<Json<DeletedResp>> {
    let deleted = match row_id(id) {
        Some(id) => state
            .repo
            .category
            .delete(id)
            .await
            .into_response("500-005")?,
        None => 0,
    };

    info!(task = "delete category", id = id, deleted = deleted);

    Ok(Json(DeletedResp { deleted }))
}
