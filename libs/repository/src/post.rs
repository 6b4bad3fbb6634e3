use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct PostRepository {
    db: DatabaseConnection,
}

impl PostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<post::Model> for PostEntity {
    fn from(value: post::Model) -> Self {
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

impl From<PostEntity> for post::ActiveModel {
    fn from(value: PostEntity) -> Self {
        Self {
            id: if value.id == i32::default() {
                ActiveValue::not_set()
            } else {
                ActiveValue::Set(value.id)
            },
            title: ActiveValue::Set(value.title),
            description: ActiveValue::Set(value.description),
            content: ActiveValue::Set(value.content),
            image: ActiveValue::Set(value.image),
            category_id: ActiveValue::Set(value.category_id),
            english_content: ActiveValue::Set(value.english_content),
        }
    }
}

impl PostRepository {
    pub async fn find_all(&self) -> anyhow::Result<Vec<PostEntity>> {
        let posts = Post::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await?;

        Ok(posts.into_iter().map(PostEntity::from).collect())
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> anyhow::Result<Option<PostEntity>> {
        let post = Post::find_by_id(id).one(&self.db).await?;

        Ok(post.map(PostEntity::from))
    }

    pub async fn create(&self, post: PostEntity) -> anyhow::Result<i32> {
        let mut model = post::ActiveModel::from(post);
        model.id = ActiveValue::not_set();
        let post = model.insert(&self.db).await?;

        Ok(post.id)
    }

    /// Overwrites every column of the row identified by `post.id`.
    pub async fn update(&self, post: PostEntity) -> anyhow::Result<u64> {
        let id = post.id;
        let mut model = post::ActiveModel::from(post);
        model.id = ActiveValue::not_set();

        let result = Post::update_many()
            .set(model)
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> anyhow::Result<u64> {
        let result = Post::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod test {
    use entity::prelude::*;

    use crate::test_util;

    fn sample() -> PostEntity {
        PostEntity {
            title: "Coffee".to_string(),
            description: Some("Hot".to_string()),
            content: "Espresso".to_string(),
            image: "1700000000000.jpg".to_string(),
            english_content: Some("Espresso".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_and_find_all() {
        // Arrange
        let (_dir, repo) = test_util::repository().await;

        // Act
        let id = repo.post.create(sample()).await.unwrap();
        let posts = repo.post.find_all().await.unwrap();

        // Assert
        assert_eq!(posts, vec![PostEntity { id, ..sample() }]);
    }

    #[tokio::test]
    async fn test_update_overwrites_columns() {
        // Arrange
        let (_dir, repo) = test_util::repository().await;
        let id = repo.post.create(sample()).await.unwrap();

        // Act
        let updated = repo
            .post
            .update(PostEntity {
                id,
                title: "Tea".to_string(),
                content: "Green".to_string(),
                image: "1700000000001.png".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        // Assert
        assert_eq!(updated, 1);
        let post = repo.post.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(post.title, "Tea");
        assert_eq!(post.image, "1700000000001.png");
        assert_eq!(post.description, None);
    }

    #[tokio::test]
    async fn test_delete() {
        let (_dir, repo) = test_util::repository().await;
        let id = repo.post.create(sample()).await.unwrap();

        assert_eq!(repo.post.delete(id).await.unwrap(), 1);
        assert_eq!(repo.post.find_by_id(id).await.unwrap(), None);
        assert_eq!(repo.post.delete(id).await.unwrap(), 0);
    }
}
