use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct VideoResp {
    pub id: i32,
    pub filename: String,
}

impl From<VideoEntity> for VideoResp {
    fn from(value: VideoEntity) -> Self {
        Self {
            id: value.id,
            filename: value.filename,
        }
    }
}
