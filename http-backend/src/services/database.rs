use crate::models::User;
use mongodb::{
    bson::doc, options::ClientOptions, Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

/// Database used when neither `MONGO_DATABASE` nor the URI path names one.
pub const DEFAULT_DATABASE: &str = "test";

const USERS_COLLECTION: &str = "users";

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Builds a client and pings the server so that unreachable hosts and bad
    /// credentials fail here rather than on the first request.
    pub async fn connect(uri: &str, database: Option<&str>) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");

        let options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Invalid MongoDB connection string: {}", e);
            AppError::ConnectionError(anyhow::Error::new(e))
        })?;

        let database = database
            .map(str::to_string)
            .or_else(|| options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let client = MongoClient::with_options(options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::ConnectionError(anyhow::Error::new(e))
        })?;
        let db = client.database(&database);

        let mongo = Self { client, db };
        mongo.ping().await.map_err(|e| {
            tracing::error!("Failed to reach MongoDB: {}", e);
            AppError::ConnectionError(anyhow::Error::new(e))
        })?;

        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(mongo)
    }

    async fn ping(&self) -> mongodb::error::Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.ping().await.map_err(|e| {
            tracing::error!("MongoDB health check failed: {}", e);
            AppError::from(e)
        })
    }

    pub async fn shutdown(self) {
        self.client.shutdown().await;
        tracing::info!("MongoDB connection closed");
    }

    pub fn users(&self) -> Collection<User> {
        self.db.collection(USERS_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
