//! Game domain types.
//!
//! `Game` is the persisted record, `NewGame` is the insert payload without
//! an ID, and `GameSummary` / `GameDetail` are read-side projections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::reference::Genre;

/// A game in the collection.
///
/// The `id` is assigned by storage on creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub name: String,
    /// Purchase value, in the collector's currency.
    pub value: Option<f64>,
    /// Location of the cover art.
    pub image_url: String,
    pub purchase_date: Option<NaiveDate>,
    pub highscore: Option<i32>,
    pub console_id: i64,
    pub developer_id: i64,
    pub publisher_id: i64,
}

/// A game to be inserted. Storage assigns the ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGame {
    pub name: String,
    pub value: Option<f64>,
    pub image_url: String,
    pub purchase_date: Option<NaiveDate>,
    pub highscore: Option<i32>,
    pub console_id: i64,
    pub developer_id: i64,
    pub publisher_id: i64,
}

impl NewGame {
    /// Create a new game with the required fields; optional fields start absent.
    pub fn new(
        name: impl Into<String>,
        image_url: impl Into<String>,
        console_id: i64,
        developer_id: i64,
        publisher_id: i64,
    ) -> Self {
        Self {
            name: name.into(),
            value: None,
            image_url: image_url.into(),
            purchase_date: None,
            highscore: None,
            console_id,
            developer_id,
            publisher_id,
        }
    }

    /// Attach the storage-assigned ID, producing the persisted record.
    pub fn with_id(self, id: i64) -> Game {
        Game {
            id,
            name: self.name,
            value: self.value,
            image_url: self.image_url,
            purchase_date: self.purchase_date,
            highscore: self.highscore,
            console_id: self.console_id,
            developer_id: self.developer_id,
            publisher_id: self.publisher_id,
        }
    }
}

/// Lightweight projection used for listing cover art.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: i64,
    pub image_url: String,
}

/// A game's scalar fields merged with its associated genres.
///
/// Assembled from reads; never stored as such.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDetail {
    pub id: i64,
    pub name: String,
    pub value: Option<f64>,
    pub image_url: String,
    pub purchase_date: Option<NaiveDate>,
    pub highscore: Option<i32>,
    pub console_id: i64,
    pub developer_id: i64,
    pub publisher_id: i64,
    /// Associated genres, in no guaranteed order.
    pub genres: Vec<Genre>,
}

impl GameDetail {
    /// Merge a game record with its genre list.
    pub fn from_parts(game: Game, genres: Vec<Genre>) -> Self {
        Self {
            id: game.id,
            name: game.name,
            value: game.value,
            image_url: game.image_url,
            purchase_date: game.purchase_date,
            highscore: game.highscore,
            console_id: game.console_id,
            developer_id: game.developer_id,
            publisher_id: game.publisher_id,
            genres,
        }
    }

    /// Whether the genre with the given ID is associated with this game.
    pub fn has_genre(&self, genre_id: i64) -> bool {
        self.genres.iter().any(|g| g.id == genre_id)
    }

    /// Split back into the scalar record, dropping the genres.
    pub fn into_game(self) -> Game {
        Game {
            id: self.id,
            name: self.name,
            value: self.value,
            image_url: self.image_url,
            purchase_date: self.purchase_date,
            highscore: self.highscore,
            console_id: self.console_id,
            developer_id: self.developer_id,
            publisher_id: self.publisher_id,
        }
    }

    /// Genre names sorted alphabetically, for stable display.
    pub fn genre_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.genres.iter().map(|g| g.name.as_str()).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chrono_trigger() -> Game {
        let mut new = NewGame::new("Chrono Trigger", "https://img/ct.png", 3, 5, 5);
        new.highscore = Some(42);
        new.purchase_date = NaiveDate::from_ymd_opt(1995, 3, 11);
        new.with_id(7)
    }

    #[test]
    fn test_new_game_starts_with_absent_optionals() {
        let game = NewGame::new("Earthbound", "eb.png", 3, 1, 1);
        assert_eq!(game.value, None);
        assert_eq!(game.highscore, None);
        assert_eq!(game.purchase_date, None);
    }

    #[test]
    fn test_detail_merges_scalars_and_genres() {
        let genres = vec![
            Genre {
                id: 2,
                name: "RPG".to_string(),
            },
            Genre {
                id: 1,
                name: "Adventure".to_string(),
            },
        ];
        let detail = GameDetail::from_parts(chrono_trigger(), genres);

        assert_eq!(detail.id, 7);
        assert_eq!(detail.highscore, Some(42));
        assert!(detail.has_genre(2));
        assert!(!detail.has_genre(9));
        assert_eq!(detail.genre_names(), vec!["Adventure", "RPG"]);
        assert_eq!(detail.into_game(), chrono_trigger());
    }

    #[test]
    fn test_detail_serializes_date_as_iso() {
        let detail = GameDetail::from_parts(chrono_trigger(), Vec::new());
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["purchase_date"], "1995-03-11");
        assert_eq!(json["genres"], serde_json::json!([]));
        assert!(json["value"].is_null());
    }
}
