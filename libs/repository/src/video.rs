use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait,
    DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct VideoRepository {
    db: DatabaseConnection,
}

impl VideoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<video::Model> for VideoEntity {
    fn from(value: video::Model) -> Self {
        VideoEntity {
            id: value.id,
            filename: value.filename,
        }
    }
}

impl VideoRepository {
    pub async fn find_all(&self) -> anyhow::Result<Vec<VideoEntity>> {
        let videos = Video::find()
            .order_by_asc(video::Column::Id)
            .all(&self.db)
            .await?;

        Ok(videos.into_iter().map(VideoEntity::from).collect())
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> anyhow::Result<Option<VideoEntity>> {
        let video = Video::find_by_id(id).one(&self.db).await?;

        Ok(video.map(VideoEntity::from))
    }

    pub async fn create(&self, filename: &str) -> anyhow::Result<i32> {
        let video = video::ActiveModel {
            id: ActiveValue::not_set(),
            filename: ActiveValue::Set(filename.to_string()),
        }
        .insert(&self.db)
        .await?;

        Ok(video.id)
    }

    pub async fn update(&self, id: i32, filename: &str) -> anyhow::Result<u64> {
        let result = Video::update_many()
            .col_expr(video::Column::Filename, Expr::value(filename))
            .filter(video::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> anyhow::Result<u64> {
        let result = Video::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod test {
    use crate::test_util;

    #[tokio::test]
    async fn test_video_lifecycle() {
        // Arrange
        let (_dir, repo) = test_util::repository().await;

        // Act
        let id = repo.video.create("1.mp4").await.unwrap();
        let updated = repo.video.update(id, "2.mp4").await.unwrap();

        // Assert
        assert_eq!(updated, 1);
        let video = repo.video.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(video.filename, "2.mp4");
        assert_eq!(repo.video.find_all().await.unwrap().len(), 1);
        assert_eq!(repo.video.delete(id).await.unwrap(), 1);
        assert!(repo.video.find_all().await.unwrap().is_empty());
    }
}
