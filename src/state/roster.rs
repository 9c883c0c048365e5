/// The displayed character list
///
/// The roster is written only by the completion of the list fetch and
/// read by the view. A failed fetch is logged and leaves it untouched;
/// there is no error state to show.

use std::fmt::Display;

use super::data::Character;

/// Displayed state of the character list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Roster {
    /// Nothing fetched yet
    #[default]
    Empty,
    /// Last successful fetch result, in API order
    Loaded(Vec<Character>),
}

impl Roster {
    /// Characters currently on screen
    pub fn characters(&self) -> &[Character] {
        match self {
            Roster::Empty => &[],
            Roster::Loaded(characters) => characters,
        }
    }

    /// Whether a character with this id is on screen
    pub fn contains(&self, id: i64) -> bool {
        self.characters().iter().any(|c| c.id == id)
    }

    /// Apply the outcome of a fetch.
    ///
    /// Returns `true` when the roster was replaced.
    pub fn apply<E: Display>(&mut self, result: Result<Vec<Character>, E>) -> bool {
        match result {
            Ok(characters) => {
                tracing::info!("📥 Loaded {} characters", characters.len());
                *self = Roster::Loaded(characters);
                true
            }
            Err(error) => {
                tracing::error!("❌ Error fetching characters: {error}");
                false
            }
        }
    }
}
