use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use entity::prelude::*;
use tracing::info;

pub mod request;
pub mod response;

use crate::request::row_id;
use crate::response::{
    ApiResponse, CreatedResp, DeletedResp, ErrorResp, IntoApiResponse,
    UpdatedResp,
};
use crate::upload::{form::Form, MediaKind};
use crate::{ApiError, ApiState};

use self::request::{PostParam, PostUpload};
use self::response::PostResp;

const IMAGE_FIELD: (&str, MediaKind) = ("image", MediaKind::Image);

/// List all posts
#[utoipa::path(
    get,
    path = "/api/posts",
    responses(
        (status = 200, description = "List all posts successfully", body = [PostResp])
    )
)]
pub async fn get_posts(
    State(state): State<ApiState>,
) -> ApiResponse<Json<Vec<PostResp>>> {
    let posts = state.repo.post.find_all().await.into_response("500-006")?;

    Ok(Json(posts.into_iter().map(PostResp::from).collect()))
}

/// Get a post
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    responses(
        (status = 200, description = "Get a post successfully", body = PostResp),
        (status = 404, description = "Post not found", body = ErrorResp)
    ),
    params(
        ("id", description = "post id"),
    )
)]
pub async fn get_post(
    State(state): State<ApiState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> ApiResponse<Json<PostResp>> {
    let post = find_post(&state, id).await?;

    Ok(Json(post.into()))
}

/// Create a post
#[utoipa::path(
    post,
    path = "/api/posts",
    request_body(content = PostUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Create a post successfully", body = CreatedResp),
        (status = 400, description = "Title, content or image is missing", body = ErrorResp),
        (status = 413, description = "Upload exceeds the body limit", body = ErrorResp),
        (status = 415, description = "Image is not an image", body = ErrorResp)
    )
)]
pub async fn post_post(
    State(state): State<ApiState>,
    WithRejection(multipart, _): WithRejection<Multipart, ApiError>,
) -> ApiResponse<Json<CreatedResp>> {
    let mut form = Form::parse(multipart, &[IMAGE_FIELD]).await?;
    let params = PostParam::from_form(&form)?;

    let (Some(title), Some(content), Some(image)) =
        (params.title, params.content, form.take_file(IMAGE_FIELD.0))
    else {
        return Err(ApiError::ValidationError(
            "Title, content, and image are required".to_string(),
        ));
    };

    ensure_category(&state, params.category_id).await?;

    let filename = state.media.save(&image).await.into_response("500-017")?;

    let id = state
        .repo
        .post
        .create(PostEntity {
            title,
            description: params.description,
            content,
            image: filename.clone(),
            category_id: params.category_id,
            english_content: params.english_content,
            ..Default::default()
        })
        .await;

    if id.is_err() {
        state.media.remove(MediaKind::Image, &filename).await;
    }
    let id = id.into_response("500-008")?;

    info!(task = "create post", id = id, image = filename);

    Ok(Json(CreatedResp { id }))
}

/// Update a post
///
/// Without an image part the stored image is kept. A new image replaces the
/// old file.
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    request_body(content = PostUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Update a post successfully", body = UpdatedResp),
        (status = 400, description = "Title or content is missing", body = ErrorResp),
        (status = 404, description = "Post not found", body = ErrorResp)
    ),
    params(
        ("id", description = "post id"),
    )
)]
pub async fn put_post(
    State(state): State<ApiState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(multipart, _): WithRejection<Multipart, ApiError>,
) -> ApiResponse<Json<UpdatedResp>> {
    let mut form = Form::parse(multipart, &[IMAGE_FIELD]).await?;
    let params = PostParam::from_form(&form)?;

    let (Some(title), Some(content)) = (params.title, params.content) else {
        return Err(ApiError::ValidationError(
            "Title and content are required".to_string(),
        ));
    };

    let existing = find_post(&state, id).await?;
    ensure_category(&state, params.category_id).await?;

    let new_image = match form.take_file(IMAGE_FIELD.0) {
        Some(image) => {
            Some(state.media.save(&image).await.into_response("500-017")?)
        }
        None => None,
    };

    let updated = state
        .repo
        .post
        .update(PostEntity {
            id: existing.id,
            title,
            description: params.description,
            content,
            image: new_image.clone().unwrap_or_else(|| existing.image.clone()),
            category_id: params.category_id,
            english_content: params.english_content,
        })
        .await;

    if let Some(new_image) = &new_image {
        // keep exactly one of the two files, whichever the row points at
        let stale = match &updated {
            Ok(count) if *count > 0 => &existing.image,
            _ => new_image,
        };
        state.media.remove(MediaKind::Image, stale).await;
    }
    let updated = updated.into_response("500-009")?;

    info!(task = "update post", id = id, updated = updated);

    Ok(Json(UpdatedResp { updated }))
}

/// Delete a post and its image
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    responses(
        (status = 200, description = "Delete a post successfully", body = DeletedResp),
        (status = 404, description = "Post not found", body = ErrorResp)
    ),
    params(
        ("id", description = "post id"),
    )
)]
pub async fn delete_post(
    State(state): State<ApiState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> ApiResponse<Json<DeletedResp>> {
    let existing = find_post(&state, id).await?;

    let deleted = state
        .repo
        .post
        .delete(existing.id)
        .await
        .into_response("500-010")?;

    if deleted > 0 {
        state.media.remove(MediaKind::Image, &existing.image).await;
    }

    info!(task = "delete post", id = id, deleted = deleted);

    Ok(Json(DeletedResp { deleted }))
}

async fn find_post(state: &ApiState, id: i64) -> ApiResponse<PostEntity> {
    let post = match row_id(id) {
        Some(id) => state
            .repo
            .post
            .find_by_id(id)
            .await
            .into_response("500-007")?,
        None => None,
    };

    post.ok_or_else(|| ApiError::NotFound("Post not found".to_string()))
}

async fn ensure_category(
    state: &ApiState,
    category_id: Option<i32>,
) -> ApiResponse<()> {
    let Some(category_id) = category_id else {
        return Ok(());
    };

    let category = state
        .repo
        .category
        .find_by_id(category_id)
        .await
        .into_response("500-002")?;

    if category.is_none() {
        return Err(ApiError::ValidationError(format!(
            "Category {} does not exist",
            category_id
        )));
    }

    Ok(())
}
