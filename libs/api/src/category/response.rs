use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct CategoryResp {
    pub id: i32,
    pub name: String,
}

impl From<CategoryEntity> for CategoryResp {
    fn from(value: CategoryEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}
