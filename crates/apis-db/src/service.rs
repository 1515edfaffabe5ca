//! Service layer over the database handle.
//!
//! `ApisService` wraps `ApisDb` and carries the advisor's dedup policy. All
//! repo methods are implemented as `impl ApisService`.

use apis_core::enums::DedupPolicy;

use crate::ApisDb;
use crate::error::DatabaseError;

/// Entry point for every stored-entity operation and the advisor pass.
pub struct ApisService {
    db: ApisDb,
    dedup: DedupPolicy,
}

impl ApisService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = ApisDb::open_local(db_path).await?;
        Ok(Self::from_db(db))
    }

    /// Create from an existing `ApisDb`. Dedup defaults to [`DedupPolicy::None`].
    #[must_use]
    pub fn from_db(db: ApisDb) -> Self {
        Self {
            db,
            dedup: DedupPolicy::default(),
        }
    }

    /// Set the dedup policy used by `generate_alerts`.
    #[must_use]
    pub fn with_dedup_policy(mut self, dedup: DedupPolicy) -> Self {
        self.dedup = dedup;
        self
    }

    #[must_use]
    pub const fn dedup_policy(&self) -> DedupPolicy {
        self.dedup
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &ApisDb {
        &self.db
    }
}
