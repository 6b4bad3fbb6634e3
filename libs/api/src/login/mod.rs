use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{info, warn};

pub mod request;
pub mod response;

use crate::response::{ApiResponse, IntoApiResponse};
use crate::ApiState;

use self::{request::LoginParam, response::LoginResp};

/// Check admin credentials
///
/// Nothing is issued on success. A wrong combination or an unreadable body is
/// `success: false`, never an error.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginParam,
    responses(
        (status = 200, description = "Credentials checked", body = LoginResp)
    )
)]
pub async fn post_login(
    State(state): State<ApiState>,
    body: Result<Json<LoginParam>, JsonRejection>,
) -> ApiResponse<Json<LoginResp>> {
    let params = match body {
        Ok(Json(params)) => params,
        Err(rejection) => {
            warn!(task = "login", error = rejection.body_text());
            LoginParam::default()
        }
    };

    let Some((username, password)) = params.credentials() else {
        info!(task = "login", success = false);
        return Ok(Json(LoginResp { success: false }));
    };

    let success = state
        .repo
        .admin
        .verify(username, password)
        .await
        .into_response("500-016")?;

    info!(task = "login", username = username, success = success);

    Ok(Json(LoginResp { success }))
}
