/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the API layer and the UI layer.

use serde::Deserialize;

/// Represents a single character returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Character {
    /// Unique within one response page
    pub id: i64,
    /// Display name (e.g., "Rick Sanchez")
    pub name: String,
    /// "Alive", "Dead", or "unknown" upstream; any string is accepted
    pub status: String,
    /// Species (e.g., "Human")
    pub species: String,
    /// URL of the character's avatar image
    #[serde(rename = "image")]
    pub image_url: String,
}

/// One page of the character listing
///
/// Only `results` is consumed; pagination `info` is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterListResponse {
    pub results: Vec<Character>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_image_field_as_image_url() {
        let character: Character = serde_json::from_value(json!({
            "id": 2,
            "name": "Morty Smith",
            "status": "Alive",
            "species": "Human",
            "image": "https://rickandmortyapi.com/api/character/avatar/2.jpeg",
            "gender": "Male",
            "episode": []
        }))
        .unwrap();

        assert_eq!(character.id, 2);
        assert_eq!(
            character.image_url,
            "https://rickandmortyapi.com/api/character/avatar/2.jpeg"
        );
    }

    #[test]
    fn test_ignores_pagination_info() {
        let response: CharacterListResponse = serde_json::from_value(json!({
            "info": { "count": 826, "pages": 42, "next": "https://rickandmortyapi.com/api/character?page=2" },
            "results": []
        }))
        .unwrap();

        assert!(response.results.is_empty());
    }

    #[test]
    fn test_missing_required_field_fails() {
        let result = serde_json::from_value::<Character>(json!({
            "id": 3,
            "name": "Summer Smith",
            "species": "Human",
            "image": "https://x/3.png"
        }));

        assert!(result.is_err());
    }
}
