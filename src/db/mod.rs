//! MongoDB persistence for archived-card documents.
//!
//! The collection handle is opened once at startup and injected into the
//! handlers; the driver pools connections internally and its handles are
//! safe to share across concurrent requests.

use std::time::Duration;

use async_trait::async_trait;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use crate::config::Config;
use crate::errors::AppError;
use crate::models::ArchivedCardRecord;

/// How long the driver waits for a reachable server before failing an
/// operation.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(20);

/// Write access to the archived-card collection.
///
/// A trait seam so handlers can run against an in-memory store in tests.
#[async_trait]
pub trait ArchiveStore: Send + Sync {
    /// Insert a new archived-card document, returning its generated id.
    async fn insert_archived_card(&self, record: &ArchivedCardRecord) -> Result<String, AppError>;
}

/// MongoDB-backed store.
pub struct MongoArchiveStore {
    collection: Collection<ArchivedCardRecord>,
}

/// Parse the connection string and open the configured collection.
///
/// The driver connects lazily, so a misconfigured database or collection
/// name only surfaces on the first insert.
pub async fn connect(config: &Config) -> Result<MongoArchiveStore, AppError> {
    let mut options = ClientOptions::parse(&config.mongo_uri).await?;
    options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

    let client = Client::with_options(options)?;
    let collection = client
        .database(&config.mongo_db)
        .collection(&config.mongo_collection);

    Ok(MongoArchiveStore { collection })
}

#[async_trait]
impl ArchiveStore for MongoArchiveStore {
    async fn insert_archived_card(&self, record: &ArchivedCardRecord) -> Result<String, AppError> {
        let result = self.collection.insert_one(record).await?;

        // inserted_id is an ObjectId unless the document carried its own _id
        let id = result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .unwrap_or_else(|| result.inserted_id.to_string());

        Ok(id)
    }
}
