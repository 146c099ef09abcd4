use serde::{Deserialize, Serialize};
use super::ItemPayload;

pub type OrderId = i64;

/// Represents a submitted order as stored by the API.
///
/// Carries the item projection only. Extras and quantities chosen on the
/// screen are not part of the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub item: ItemPayload,
}
