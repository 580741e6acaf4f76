use serde::{Deserialize, Serialize};
use std::fmt;

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Identity of one tile instance in the overview list. Tiles are recycled,
/// so the id names the tile object, not the desktop session it shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(String);

impl TileId {
    pub fn new() -> Self {
        Self(new_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_valid_uuid() {
        let id = new_id();
        let parsed = uuid::Uuid::parse_str(&id);
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap().get_version_num(), 4);
    }

    #[test]
    fn new_id_is_unique() {
        assert_ne!(new_id(), new_id());
    }

    #[test]
    fn tile_id_display_matches_str() {
        let tid = TileId::new();
        assert_eq!(tid.to_string(), tid.as_str());
        assert!(uuid::Uuid::parse_str(tid.as_str()).is_ok());
    }

    #[test]
    fn tile_id_equality() {
        let tid = TileId::default();
        assert_eq!(tid, tid.clone());
        assert_ne!(tid, TileId::new());
    }

    #[test]
    fn tile_id_serialization() {
        let tid = TileId::new();
        let json = serde_json::to_string(&tid).unwrap();
        let deserialized: TileId = serde_json::from_str(&json).unwrap();
        assert_eq!(tid, deserialized);
    }
}
