use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type ItemId = i64;
pub type ExtraId = i64;

/// A food item as served by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
}

impl Item {
    /// Creates a new Item instance.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier
    /// * `name` - Display name
    /// * `description` - Long description shown under the image
    /// * `price` - Unit price
    /// * `image_url` - URI of the item picture
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            image_url: image_url.into(),
        }
    }

    /// Projection of the item that is safe to send to the API: core fields only,
    /// never display-only values.
    pub fn payload(&self) -> ItemPayload {
        ItemPayload {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            image_url: self.image_url.clone(),
        }
    }
}

/// Optional add-on for an item. `quantity` is the per-order count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    pub id: ExtraId,
    pub name: String,
    pub value: Decimal,
    #[serde(default)]
    pub quantity: u32,
}

impl Extra {
    pub fn new(id: ExtraId, name: impl Into<String>, value: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            value,
            quantity: 0,
        }
    }

    /// `value * quantity` for this extra, `None` on overflow.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.value.checked_mul(Decimal::from(self.quantity))
    }
}

/// Submission-safe view of an [`Item`], used for favorites and orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
}

/// Catalog record: an item plus its extras in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub item: Item,
    pub extras: Vec<Extra>,
}

/// Payload for adding an entry to the catalog.
#[derive(Debug, Clone)]
pub struct CatalogEntryCreate {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
    pub extras: Vec<ExtraCreate>,
}

#[derive(Debug, Clone)]
pub struct ExtraCreate {
    pub name: String,
    pub value: Decimal,
}

impl CatalogEntryCreate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            image_url: image_url.into(),
            extras: Vec::new(),
        }
    }

    pub fn with_extra(mut self, name: impl Into<String>, value: Decimal) -> Self {
        self.extras.push(ExtraCreate { name: name.into(), value });
        self
    }
}
