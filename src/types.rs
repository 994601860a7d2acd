use serde::{Deserialize, Serialize};

/// A stored album row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// Request body for `POST /albums`.
///
/// The id is assigned by the database, so an `id` field sent by the client
/// is dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl NewAlbum {
    pub fn into_album(self, id: i64) -> Album {
        Album { id, title: self.title, artist: self.artist, price: self.price }
    }
}
