use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::active_models::{prelude::*, *};
use crate::credential;
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct AdminRepository {
    db: DatabaseConnection,
}

impl AdminRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<admin::Model> for AdminEntity {
    fn from(value: admin::Model) -> Self {
        AdminEntity {
            id: value.id,
            username: value.username,
            password: value.password,
        }
    }
}

impl AdminRepository {
    pub async fn count(&self) -> anyhow::Result<u64> {
        let count = Admin::find().count(&self.db).await?;

        Ok(count)
    }

    /// Inserts the initial admin when none exists. Returns whether a row was
    /// written.
    pub async fn ensure_seeded(
        &self,
        username: &str,
        password: &str,
    ) -> anyhow::Result<bool> {
        if self.count().await? > 0 {
            return Ok(false);
        }

        admin::ActiveModel {
            id: ActiveValue::not_set(),
            username: ActiveValue::Set(username.to_string()),
            password: ActiveValue::Set(credential::hash(password)?),
        }
        .insert(&self.db)
        .await?;

        Ok(true)
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> anyhow::Result<Option<AdminEntity>> {
        let admin = Admin::find()
            .filter(admin::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        Ok(admin.map(AdminEntity::from))
    }

    pub async fn verify(
        &self,
        username: &str,
        password: &str,
    ) -> anyhow::Result<bool> {
        let Some(admin) = self.find_by_username(username).await? else {
            return Ok(false);
        };

        credential::verify(password, &admin.password)
    }
}

#[cfg(test)]
mod test {
    use crate::test_util;

    #[tokio::test]
    async fn test_seed_once() {
        // Arrange
        let (_dir, repo) = test_util::repository().await;

        // Act
        let first =
            repo.admin.ensure_seeded("admin", "password").await.unwrap();
        let second = repo.admin.ensure_seeded("other", "secret").await.unwrap();

        // Assert
        assert!(first);
        assert!(!second);
        assert_eq!(repo.admin.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_password_is_not_stored_in_plain_text() {
        let (_dir, repo) = test_util::repository().await;
        repo.admin.ensure_seeded("admin", "password").await.unwrap();

        let admin = repo.admin.find_by_username("admin").await.unwrap();

        assert_ne!(admin.unwrap().password, "password");
    }

    #[tokio::test]
    async fn test_verify() {
        let (_dir, repo) = test_util::repository().await;
        repo.admin.ensure_seeded("admin", "password").await.unwrap();

        assert!(repo.admin.verify("admin", "password").await.unwrap());
        assert!(!repo.admin.verify("admin", "Password").await.unwrap());
        assert!(!repo.admin.verify("root", "password").await.unwrap());
        assert!(!repo.admin.verify("", "").await.unwrap());
    }
}
