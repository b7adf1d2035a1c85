use super::database::MongoDb;
use crate::models::User;
use async_trait::async_trait;
use futures::TryStreamExt;
use service_core::error::AppError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

/// Persistence for user records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, in whatever order the store returns them.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    async fn insert(&self, user: &User) -> Result<(), AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}

pub struct MongoUserRepository {
    db: MongoDb,
}

impl MongoUserRepository {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.db.users().find(None, None).await.map_err(|e| {
            tracing::error!("Failed to query users: {}", e);
            AppError::from(e)
        })?;

        let users: Vec<User> = cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to read users cursor: {}", e);
            AppError::from(e)
        })?;

        Ok(users)
    }

    async fn insert(&self, user: &User) -> Result<(), AppError> {
        self.db.users().insert_one(user, None).await.map_err(|e| {
            tracing::error!(user_id = %user.id, "Failed to insert user: {}", e);
            AppError::from(e)
        })?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.db.health_check().await
    }
}

/// Process-local repository for tests and store-less local runs.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
    unavailable: AtomicBool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail as if the store were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError(anyhow::anyhow!(
                "in-memory store marked unavailable"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, AppError> {
        self.check_available()?;
        let users = self
            .users
            .read()
            .map_err(|_| AppError::DatabaseError(anyhow::anyhow!("user store lock poisoned")))?;
        Ok(users.clone())
    }

    async fn insert(&self, user: &User) -> Result<(), AppError> {
        self.check_available()?;
        self.users
            .write()
            .map_err(|_| AppError::DatabaseError(anyhow::anyhow!("user store lock poisoned")))?
            .push(user.clone());
        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.check_available()
    }
}
