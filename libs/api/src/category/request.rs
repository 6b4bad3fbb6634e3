use serde::Deserialize;
use utoipa::ToSchema;

use crate::{response::ApiResponse, ApiError};

#[derive(Deserialize, ToSchema)]
pub struct CategoryParam {
    pub name: Option<String>,
}

impl CategoryParam {
    pub fn name(&self) -> ApiResponse<&str> {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| {
                ApiError::ValidationError(
                    "Category name is required".to_string(),
                )
            })
    }
}
