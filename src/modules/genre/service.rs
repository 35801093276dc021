use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;

use super::model::GenreTable;
use crate::infrastructure::tmdb::{TmdbClient, TmdbError};

/// Resolves genre names to TMDB IDs, fetching the genre list at most once.
///
/// The table is populated on first use and then kept for the lifetime of the
/// resolver. Concurrent first callers wait on the same fetch; a failed fetch
/// leaves the table empty so the next caller tries again.
#[derive(Debug)]
pub struct GenreResolver {
    client: Arc<TmdbClient>,
    table: OnceCell<GenreTable>,
}

impl GenreResolver {
    pub fn new(client: Arc<TmdbClient>) -> Self {
        Self {
            client,
            table: OnceCell::new(),
        }
    }

    /// Returns the genre table, fetching it if this is the first request.
    pub async fn table(&self) -> Result<&GenreTable, TmdbError> {
        self.table
            .get_or_try_init(|| async {
                let genres = self.client.movie_genres().await?;
                let table = GenreTable::from_genres(genres);
                info!(genres = table.len(), "Genre table populated");
                Ok::<_, TmdbError>(table)
            })
            .await
    }

    /// `Ok(None)` when the name is not in the table.
    pub async fn resolve(&self, name: &str) -> Result<Option<u32>, TmdbError> {
        Ok(self.table().await?.lookup(name))
    }

    pub fn is_populated(&self) -> bool {
        self.table.initialized()
    }
}
