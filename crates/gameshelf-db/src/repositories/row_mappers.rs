//! Row mapping helpers for `SQLite` queries.
//!
//! Optional columns decode as `Option<T>`, so a stored NULL always comes
//! back as `None` and a bound `None` is always written as NULL.

use chrono::NaiveDate;
use gameshelf_core::{Company, Console, Game, GameDetail, GameSummary, Genre, RepositoryError};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use super::errors::map_sqlx_error;

/// Shared SELECT column list for game queries.
pub const GAME_SELECT_COLUMNS: &str = "id, name, value, image_url, highscore, purchase_date, console_id, developer_id, publisher_id";

/// Game columns joined with genre columns, keyed by game ID.
pub const GAME_DETAIL_QUERY: &str = r#"
    SELECT g.id AS id, g.name AS name, g.value AS value, g.image_url AS image_url,
           g.highscore AS highscore, g.purchase_date AS purchase_date,
           g.console_id AS console_id, g.developer_id AS developer_id,
           g.publisher_id AS publisher_id,
           ge.id AS genre_id, ge.name AS genre_name
    FROM game g
    LEFT JOIN game_genre gg ON gg.game_id = g.id
    LEFT JOIN genre ge ON ge.id = gg.genre_id
    WHERE g.id = ?
"#;

/// Row type for game queries, mapped via `sqlx::FromRow`.
#[derive(FromRow)]
pub struct GameRow {
    id: i64,
    name: String,
    value: Option<f64>,
    image_url: String,
    highscore: Option<i32>,
    purchase_date: Option<NaiveDate>,
    console_id: i64,
    developer_id: i64,
    publisher_id: i64,
}

impl From<GameRow> for Game {
    fn from(r: GameRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            value: r.value,
            image_url: r.image_url,
            purchase_date: r.purchase_date,
            highscore: r.highscore,
            console_id: r.console_id,
            developer_id: r.developer_id,
            publisher_id: r.publisher_id,
        }
    }
}

/// Row type for `(id, name)` reference tables.
#[derive(FromRow)]
pub struct NamedRow {
    id: i64,
    name: String,
}

impl From<NamedRow> for Company {
    fn from(r: NamedRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
        }
    }
}

impl From<NamedRow> for Console {
    fn from(r: NamedRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
        }
    }
}

impl From<NamedRow> for Genre {
    fn from(r: NamedRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
        }
    }
}

/// Row type for summary listings.
#[derive(FromRow)]
pub struct SummaryRow {
    id: i64,
    image_url: String,
}

impl From<SummaryRow> for GameSummary {
    fn from(r: SummaryRow) -> Self {
        Self {
            id: r.id,
            image_url: r.image_url,
        }
    }
}

/// Fold the rows of [`GAME_DETAIL_QUERY`] into one detail record.
///
/// Every row repeats the game columns; a game without genres produces a
/// single row whose genre columns are NULL.
pub fn rows_to_detail(rows: &[SqliteRow]) -> Result<Option<GameDetail>, RepositoryError> {
    let Some(first) = rows.first() else {
        return Ok(None);
    };

    let game: Game = GameRow::from_row(first).map_err(map_sqlx_error)?.into();

    let mut genres = Vec::with_capacity(rows.len());
    for row in rows {
        let genre_id: Option<i64> = row.try_get("genre_id").map_err(map_sqlx_error)?;
        let genre_name: Option<String> = row.try_get("genre_name").map_err(map_sqlx_error)?;
        if let (Some(id), Some(name)) = (genre_id, genre_name) {
            genres.push(Genre { id, name });
        }
    }

    Ok(Some(GameDetail::from_parts(game, genres)))
}
