use serde::{Deserialize, Serialize};
use super::{ItemId, ItemPayload};

/// An item the user marked as favorite. Keyed by the item's own id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorite {
    pub item: ItemPayload,
}

impl Favorite {
    pub fn item_id(&self) -> ItemId {
        self.item.id
    }
}
