use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait,
    DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<category::Model> for CategoryEntity {
    fn from(value: category::Model) -> Self {
        CategoryEntity {
            id: value.id,
            name: value.name,
        }
    }
}

impl CategoryRepository {
    pub async fn find_all(&self) -> anyhow::Result<Vec<CategoryEntity>> {
        let categories = Category::find()
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await?;

        Ok(categories.into_iter().map(CategoryEntity::from).collect())
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> anyhow::Result<Option<CategoryEntity>> {
        let category = Category::find_by_id(id).one(&self.db).await?;

        Ok(category.map(CategoryEntity::from))
    }

    pub async fn create(&self, name: &str) -> anyhow::Result<CategoryEntity> {
        let category = category::ActiveModel {
            id: ActiveValue::not_set(),
            name: ActiveValue::Set(name.to_string()),
        }
        .insert(&self.db)
        .await?;

        Ok(category.into())
    }

    /// Returns the number of rows touched, 0 for an unknown id.
    pub async fn update(&self, id: i32, name: &str) -> anyhow::Result<u64> {
        let result = Category::update_many()
            .col_expr(category::Column::Name, Expr::value(name))
            .filter(category::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Detaches the category's posts and deletes it in one transaction.
    pub async fn delete(&self, id: i32) -> anyhow::Result<u64> {
        let txn = self.db.begin().await?;

        Post::update_many()
            .col_expr(
                post::Column::CategoryId,
                Expr::value(Option::<i32>::None),
            )
            .filter(post::Column::CategoryId.eq(id))
            .exec(&txn)
            .await?;

        let result = Category::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected)
    }
}
