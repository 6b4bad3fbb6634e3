use std::path::PathBuf;

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use repository::Repository;
use toml::{map::Map, Value};
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::upload::MediaStore;

pub mod category;
pub mod healthz;
pub mod login;
pub mod not_found;
pub mod post;
mod request;
mod response;
pub mod upload;
pub mod video;

#[derive(Debug)]
pub enum ApiError {
    ValidationError(String),
    NotFound(String),
    UnsupportedMediaType(String),
    PayloadTooLarge(String),
    StorageError(String),
}

#[derive(Clone, Debug)]
pub struct ApiState {
    repo: Repository,
    media: MediaStore,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Root holding the `images` and `videos` directories.
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        category::get_categories,
        category::get_category,
        category::post_category,
        category::put_category,
        category::delete_category,
        post::get_posts,
        post::get_post,
        post::post_post,
        post::put_post,
        post::delete_post,
        video::get_videos,
        video::get_video,
        video::post_video,
        video::put_video,
        video::delete_video,
        login::post_login,
    ),
    components(schemas(
        category::request::CategoryParam,
        category::response::CategoryResp,
        post::request::PostUpload,
        post::response::PostResp,
        video::request::VideoUpload,
        video::response::VideoResp,
        login::request::LoginParam,
        login::response::LoginResp,
        response::CreatedResp,
        response::UpdatedResp,
        response::DeletedResp,
        response::ErrorResp,
    )),
    tags(
        (name = "kiosk", description = "Kiosk content management API")
    )
)]
pub struct ApiDoc;

pub fn init_config(config: &Map<String, Value>) -> anyhow::Result<Config> {
    let upload_dir = util::get_str(config, "storage", "upload_dir")?;
    let max_upload_mb = util::get_integer(config, "storage", "max_upload_mb")?;
    let max_upload_mb = usize::try_from(max_upload_mb)
        .context("storage.max_upload_mb must not be negative")?;

    Ok(Config {
        upload_dir: PathBuf::from(upload_dir),
        max_upload_bytes: max_upload_mb * 1024 * 1024,
    })
}

pub async fn serve(
    repository: Repository,
    config: Config,
) -> anyhow::Result<Router> {
    info!(task = "start api serving");

    let media = MediaStore::new(&config.upload_dir);
    media.ensure_dirs().await?;

    let state = ApiState {
        repo: repository,
        media: media.clone(),
    };

    // categories
    let category_router = Router::new()
        .route(
            "/",
            get(category::get_categories).post(category::post_category),
        )
        .route(
            "/:id",
            get(category::get_category)
                .put(category::put_category)
                .delete(category::delete_category),
        )
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // posts
    let post_router = Router::new()
        .route("/", get(post::get_posts).post(post::post_post))
        .route(
            "/:id",
            get(post::get_post)
                .put(post::put_post)
                .delete(post::delete_post),
        )
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // videos
    let video_router = Router::new()
        .route("/", get(video::get_videos).post(video::post_video))
        .route(
            "/:id",
            get(video::get_video)
                .put(video::put_video)
                .delete(video::delete_video),
        )
        .fallback(not_found::get_404)
        .with_state(state.clone());

    let api_router = Router::new()
        .nest("/categories", category_router)
        .nest("/posts", post_router)
        .nest("/videos", video_router)
        .route("/login", post(login::post_login))
        .fallback(not_found::get_404)
        .with_state(state);

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .route("/healthz", get(healthz::get_health))
        .nest("/api", api_router)
        .nest_service("/uploads", ServeDir::new(media.root()))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(CorsLayer::permissive())
        .fallback(not_found::get_404);

    Ok(router)
}
