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
use crate::upload::{form::Form, MediaKind, UploadedFile};
use crate::{ApiError, ApiState};

use self::request::VideoUpload;
use self::response::VideoResp;

const VIDEO_FIELD: (&str, MediaKind) = ("video", MediaKind::Video);

/// List all videos
#[utoipa::path(
    get,
    path = "/api/videos",
    responses(
        (status = 200, description = "List all videos successfully", body = [VideoResp])
    )
)]
pub async fn get_videos(
    State(state): State<ApiState>,
) -> ApiResponse<Json<Vec<VideoResp>>> {
    let videos = state.repo.video.find_all().await.into_response("500-011")?;

    Ok(Json(videos.into_iter().map(VideoResp::from).collect()))
}

/// Get a video
#[utoipa::path(
    get,
    path = "/api/videos/{id}",
    responses(
        (status = 200, description = "Get a video successfully", body = VideoResp),
        (status = 404, description = "Video not found", body = ErrorResp)
    ),
    params(
        ("id", description = "video id"),
    )
)]
pub async fn get_video(
    State(state): State<ApiState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> ApiResponse<Json<VideoResp>> {
    let video = find_video(&state, id).await?;

    Ok(Json(video.into()))
}

/// Upload a video
#[utoipa::path(
    post,
    path = "/api/videos",
    request_body(content = VideoUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Upload a video successfully", body = CreatedResp),
        (status = 400, description = "Video file is missing", body = ErrorResp),
        (status = 413, description = "Upload exceeds the body limit", body = ErrorResp),
        (status = 415, description = "File is not a video", body = ErrorResp)
    )
)]
pub async fn post_video(
    State(state): State<ApiState>,
    WithRejection(multipart, _): WithRejection<Multipart, ApiError>,
) -> ApiResponse<Json<CreatedResp>> {
    let file = video_file(multipart).await?;

    let filename = state.media.save(&file).await.into_response("500-017")?;

    let id = state.repo.video.create(&filename).await;

    if id.is_err() {
        state.media.remove(MediaKind::Video, &filename).await;
    }
    let id = id.into_response("500-013")?;

    info!(task = "create video", id = id, filename = filename);

    Ok(Json(CreatedResp { id }))
}

/// Replace a video file
///
/// A file is always required.
#[utoipa::path(
    put,
    path = "/api/videos/{id}",
    request_body(content = VideoUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Replace a video successfully", body = UpdatedResp),
        (status = 400, description = "Video file is missing", body = ErrorResp),
        (status = 404, description = "Video not found", body = ErrorResp)
    ),
    params(
        ("id", description = "video id"),
    )
)]
pub async fn put_video(
    State(state): State<ApiState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(multipart, _): WithRejection<Multipart, ApiError>,
) -> ApiResponse<Json<UpdatedResp>> {
    let file = video_file(multipart).await?;

    let existing = find_video(&state, id).await?;

    let filename = state.media.save(&file).await.into_response("500-017")?;

    let updated = state.repo.video.update(existing.id, &filename).await;

    let stale = match &updated {
        Ok(count) if *count > 0 => &existing.filename,
        _ => &filename,
    };
    state.media.remove(MediaKind::Video, stale).await;
    let updated = updated.into_response("500-014")?;

    info!(task = "update video", id = id, updated = updated);

    Ok(Json(UpdatedResp { updated }))
}

/// Delete a video and its file
#[utoipa::path(
    delete,
    path = "/api/videos/{id}",
    responses(
        (status = 200, description = "Delete a video successfully", body = DeletedResp),
        (status = 404, description = "Video not found", body = ErrorResp)
    ),
    params(
        ("id", description = "video id"),
    )
)]
pub async fn delete_video(
    State(state): State<ApiState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> ApiResponse<Json<DeletedResp>> {
    let existing = find_video(&state, id).await?;

    let deleted = state
        .repo
        .video
        .delete(existing.id)
        .await
        .into_response("500-015")?;

    if deleted > 0 {
        state
            .media
            .remove(MediaKind::Video, &existing.filename)
            .await;
    }

    info!(task = "delete video", id = id, deleted = deleted);

    Ok(Json(DeletedResp { deleted }))
}

async fn video_file(multipart: Multipart) -> ApiResponse<UploadedFile> {
    let mut form = Form::parse(multipart, &[VIDEO_FIELD]).await?;

    form.take_file(VIDEO_FIELD.0).ok_or_else(|| {
        ApiError::ValidationError("Video file is required".to_string())
    })
}

async fn find_video(state: &ApiState, id: i64) -> ApiResponse<VideoEntity> {
    let video = match row_id(id) {
        Some(id) => state
            .repo
            .video
            .find_by_id(id)
            .await
            .into_response("500-012")?,
        None => None,
    };

    video.ok_or_else(|| ApiError::NotFound("Video not found".to_string()))
}
