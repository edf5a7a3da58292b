use crate::error::ModelError;
use uuid::Uuid;

/// Strongly typed ID for wardrobe items
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub Uuid);

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemId {
    pub fn new() -> Self {
        ItemId(Uuid::now_v7())
    }

    pub fn from_string(id: &str) -> Result<Self, ModelError> {
        if id.is_empty() {
            return Err(ModelError::InvalidItem(
                "Item ID cannot be empty".to_string(),
            ));
        }
        id.parse()
            .map(ItemId)
            .map_err(|err| ModelError::InvalidItem(format!("{id}: {err}")))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for ItemId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hyphenated_uuid() {
        let raw = "0190c3d4-5e6f-7a8b-9c0d-1e2f3a4b5c6d";
        let id = ItemId::from_string(raw).expect("valid uuid");
        assert_eq!(id.to_string(), raw);
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert!(matches!(
            ItemId::from_string(""),
            Err(ModelError::InvalidItem(_))
        ));
        assert!(ItemId::from_string("not-a-uuid").is_err());
    }
}
