//! Store connection lifecycle.
//!
//! [`ConnectionGuard`] owns the single connection handle for the process and
//! makes `connect`/`disconnect` idempotent. The guard is a plain value built at
//! startup and handed to whoever needs it; there is no global flag.

use super::database::MongoDb;
use async_trait::async_trait;
use service_core::error::AppError;
use tokio::sync::Mutex;

/// Opens and closes connections to an external store.
#[async_trait]
pub trait StoreConnector: Send + Sync {
    type Handle: Clone + Send + Sync + 'static;

    async fn open(&self, uri: &str) -> Result<Self::Handle, AppError>;

    async fn close(&self, handle: Self::Handle) -> Result<(), AppError>;
}

/// Connects to MongoDB, optionally overriding the database from the URI.
#[derive(Debug, Clone, Default)]
pub struct MongoConnector {
    database: Option<String>,
}

impl MongoConnector {
    pub fn new(database: Option<String>) -> Self {
        Self { database }
    }
}

#[async_trait]
impl StoreConnector for MongoConnector {
    type Handle = MongoDb;

    async fn open(&self, uri: &str) -> Result<MongoDb, AppError> {
        MongoDb::connect(uri, self.database.as_deref()).await
    }

    async fn close(&self, handle: MongoDb) -> Result<(), AppError> {
        handle.shutdown().await;
        Ok(())
    }
}

pub struct ConnectionGuard<C: StoreConnector> {
    connector: C,
    default_uri: Option<String>,
    handle: Mutex<Option<C::Handle>>,
}

pub type MongoConnectionGuard = ConnectionGuard<MongoConnector>;

impl<C: StoreConnector> ConnectionGuard<C> {
    /// `default_uri` is used whenever `connect` is called without one.
    pub fn new(connector: C, default_uri: Option<String>) -> Self {
        Self {
            connector,
            default_uri,
            handle: Mutex::new(None),
        }
    }

    /// Returns the live handle, opening it first if needed.
    ///
    /// Once connected, later calls return the same handle without touching the
    /// connector, whatever `uri` they pass.
    pub async fn connect(&self, uri: Option<&str>) -> Result<C::Handle, AppError> {
        let mut slot = self.handle.lock().await;

        if let Some(handle) = slot.as_ref() {
            tracing::debug!("Store already connected");
            return Ok(handle.clone());
        }

        let uri = uri
            .filter(|u| !u.trim().is_empty())
            .or_else(|| self.default_uri.as_deref().filter(|u| !u.trim().is_empty()))
            .ok_or_else(|| AppError::ConfigError(anyhow::anyhow!("MONGO_URI not found")))?;

        let handle = self.connector.open(uri).await?;
        *slot = Some(handle.clone());

        tracing::info!("Store connected");
        Ok(handle)
    }

    /// Closes the connection if one is open. The guard counts as disconnected
    /// even when closing fails.
    pub async fn disconnect(&self) -> Result<(), AppError> {
        let mut slot = self.handle.lock().await;

        match slot.take() {
            Some(handle) => {
                self.connector.close(handle).await?;
                tracing::info!("Store disconnected");
                Ok(())
            }
            None => Ok(()),
        }
    }

    pub async fn is_connected(&self) -> bool {
        self.handle.lock().await.is_some()
    }
}
