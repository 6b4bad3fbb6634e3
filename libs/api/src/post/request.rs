use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    request::parse_category_id, response::ApiResponse, upload::form::Form,
};

/// Text fields of a post form.
#[derive(Debug)]
pub struct PostParam {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<i32>,
    pub english_content: Option<String>,
}

impl PostParam {
    pub fn from_form(form: &Form) -> ApiResponse<Self> {
        Ok(Self {
            title: form.non_empty("title").map(str::to_string),
            description: form.text("description").map(str::to_string),
            content: form.non_empty("content").map(str::to_string),
            category_id: parse_category_id(form.text("categoryId"))?,
            english_content: form.text("englishContent").map(str::to_string),
        })
    }
}

/// Multipart body accepted by the post endpoints.
#[allow(dead_code)]
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostUpload {
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    pub category_id: Option<i32>,
    pub english_content: Option<String>,
    /// Required on create, optional on update.
    #[schema(value_type = String, format = Binary)]
    pub image: Option<Vec<u8>>,
}
