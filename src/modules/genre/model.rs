use std::collections::HashMap;

use crate::infrastructure::tmdb::types::TmdbGenre;

/// Lowercased genre name to TMDB genre ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreTable {
    ids: HashMap<String, u32>,
}

impl GenreTable {
    pub fn from_genres(genres: impl IntoIterator<Item = TmdbGenre>) -> Self {
        Self {
            ids: genres
                .into_iter()
                .map(|g| (g.name.to_lowercase(), g.id))
                .collect(),
        }
    }

    /// Case-insensitive exact match.
    pub fn lookup(&self, name: &str) -> Option<u32> {
        self.ids.get(&name.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
