use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResp {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    pub image: String,
    pub category_id: Option<i32>,
    pub english_content: Option<String>,
}

impl From<PostEntity> for PostResp {
    fn from(value: PostEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            content: value.content,
            image: value.image,
            category_id: value.category_id,
            english_content: value.english_content,
        }
    }
}
