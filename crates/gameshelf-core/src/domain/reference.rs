//! Reference data domain types.
//!
//! Companies, consoles and genres are small lookup tables that games point
//! at. A company plays both the developer and the publisher role.

use serde::{Deserialize, Serialize};

/// A game company (developer and/or publisher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    /// Unique across all companies.
    pub name: String,
}

/// A gaming console or platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Console {
    pub id: i64,
    pub name: String,
}

/// A game genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// All reference tables loaded together, used to populate pickers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub companies: Vec<Company>,
    pub consoles: Vec<Console>,
    pub genres: Vec<Genre>,
}

impl ReferenceData {
    /// Look up a company by ID.
    pub fn company(&self, id: i64) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    /// Look up a console by ID.
    pub fn console(&self, id: i64) -> Option<&Console> {
        self.consoles.iter().find(|c| c.id == id)
    }

    /// Find a genre by name, ignoring ASCII case.
    pub fn genre_named(&self, name: &str) -> Option<&Genre> {
        self.genres
            .iter()
            .find(|g| g.name.eq_ignore_ascii_case(name.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReferenceData {
        ReferenceData {
            companies: vec![Company {
                id: 5,
                name: "Square".to_string(),
            }],
            consoles: vec![Console {
                id: 3,
                name: "SNES".to_string(),
            }],
            genres: vec![
                Genre {
                    id: 1,
                    name: "RPG".to_string(),
                },
                Genre {
                    id: 2,
                    name: "Adventure".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let data = sample();
        assert_eq!(data.company(5).map(|c| c.name.as_str()), Some("Square"));
        assert_eq!(data.console(3).map(|c| c.name.as_str()), Some("SNES"));
        assert!(data.company(99).is_none());
    }

    #[test]
    fn test_genre_named_ignores_case_and_padding() {
        let data = sample();
        assert_eq!(data.genre_named(" adventure ").map(|g| g.id), Some(2));
        assert_eq!(data.genre_named("rpg").map(|g| g.id), Some(1));
        assert!(data.genre_named("Puzzle").is_none());
    }
}
