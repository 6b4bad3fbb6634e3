use serde::Deserialize;
use utoipa::ToSchema;

/// Multipart body accepted by the video endpoints.
#[allow(dead_code)]
#[derive(Deserialize, ToSchema)]
pub struct VideoUpload {
    #[schema(value_type = String, format = Binary)]
    pub video: Vec<u8>,
}
