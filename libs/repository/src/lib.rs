use admin::AdminRepository;
use category::CategoryRepository;
use migration::Migrator;
use migration::MigratorTrait;
use post::PostRepository;
use response::{IntoResponse, Response};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use video::VideoRepository;

mod active_models;
pub mod admin;
pub mod category;
mod credential;
pub mod post;
mod response;
pub mod video;

#[derive(Clone, Debug)]
pub struct Repository {
    pub category: CategoryRepository,
    pub post: PostRepository,
    pub video: VideoRepository,
    pub admin: AdminRepository,
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(
        "in sea-orm crate from unsuccessful database operations: {}: {}",
        message,
        source
    )]
    InSeaOrmDbErr {
        message: String,
        source: sea_orm::DbErr,
    },
}

impl Repository {
    /// Connects and brings the schema up to date. Safe to call on every start.
    pub async fn new(db_url: &str) -> Result<Self, RepositoryError> {
        let db = init_db(db_url).await?;

        Ok(Self {
            category: CategoryRepository::new(db.clone()),
            post: PostRepository::new(db.clone()),
            video: VideoRepository::new(db.clone()),
            admin: AdminRepository::new(db),
        })
    }
}

async fn init_db(db_url: &str) -> Response<DatabaseConnection> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(5)
        .min_connections(1)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt)
        .await
        .into_response("in database connect")?;

    Migrator::up(&db, None)
        .await
        .into_response("in migrator up")?;

    Ok(db)
}


#[cfg(test)]
mod test {
    use crate::{test_util, Repository};

    #[tokio::test]
    async fn test_init_is_idempotent() {
        // Arrange
        let (dir, repo) = test_util::repository().await;
        repo.category.create("Menu").await.unwrap();

        // Act
        let reopened = Repository::new(&test_util::db_url(dir.path())).await;

        // Assert
        let categories = reopened.unwrap().category.find_all().await.unwrap();
        assert_eq!(categories.len(), 1);
    }
}
