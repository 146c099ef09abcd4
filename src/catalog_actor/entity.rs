use crate::actor_framework::Entity;
use crate::domain::{CatalogEntry, CatalogEntryCreate, Extra, Item, ItemId};

impl Entity for CatalogEntry {
    type Id = ItemId;
    type CreatePayload = CatalogEntryCreate;

    fn id(&self) -> &ItemId { &self.item.id }

    /// Creates a new catalog entry from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the actor
    /// * `params` - Item fields plus the extras, in display order
    ///
    /// # Notes
    /// Extras are numbered from 1 in the order given and start at quantity 0.
    fn from_create(id: ItemId, params: CatalogEntryCreate) -> Result<Self, String> {
        let extras = params
            .extras
            .into_iter()
            .zip(1..)
            .map(|(extra, extra_id)| Extra::new(extra_id, extra.name, extra.value))
            .collect();
        Ok(Self {
            item: Item::new(id, params.name, params.description, params.price, params.image_url),
            extras,
        })
    }

    /// Rejects entries with a negative price or extra value.
    fn on_create(&mut self) -> Result<(), String> {
        if self.item.price.is_sign_negative() {
            return Err(format!("Negative price for item {}", self.item.name));
        }
        if let Some(extra) = self.extras.iter().find(|e| e.value.is_sign_negative()) {
            return Err(format!("Negative value for extra {}", extra.name));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_extras_numbered_in_display_order() {
        let params = CatalogEntryCreate::new("Veggie", "Salad", Decimal::new(1000, 2), "img")
            .with_extra("Cheese", Decimal::new(200, 2))
            .with_extra("Egg", Decimal::new(150, 2));

        let entry = CatalogEntry::from_create(7, params).unwrap();
        assert_eq!(*entry.id(), 7);
        let names: Vec<(i64, &str)> = entry.extras.iter().map(|e| (e.id, e.name.as_str())).collect();
        assert_eq!(names, vec![(1, "Cheese"), (2, "Egg")]);
        assert!(entry.extras.iter().all(|e| e.quantity == 0));
    }

    #[test]
    fn test_on_create_rejects_negative_amounts() {
        let params = CatalogEntryCreate::new("Broken", "", Decimal::new(-1, 0), "img");
        let mut entry = CatalogEntry::from_create(1, params).unwrap();
        assert_eq!(entry.on_create(), Err("Negative price for item Broken".to_string()));

        let params = CatalogEntryCreate::new("Tea", "", Decimal::new(5, 0), "img")
            .with_extra("Refund", Decimal::new(-50, 2));
        let mut entry = CatalogEntry::from_create(2, params).unwrap();
        assert_eq!(entry.on_create(), Err("Negative value for extra Refund".to_string()));

        let mut entry = CatalogEntry::from_create(3, CatalogEntryCreate::new("Ok", "", Decimal::ZERO, "img")).unwrap();
        assert_eq!(entry.on_create(), Ok(()));
    }

    #[tokio::test]
    async fn test_actor_refuses_negative_price() {
        use crate::actor_framework::{FrameworkError, ResourceActor};

        let (actor, client) = ResourceActor::<CatalogEntry>::new(4, || 1);
        tokio::spawn(actor.run());

        let params = CatalogEntryCreate::new("Broken", "", Decimal::new(-1, 0), "img");
        assert_eq!(
            client.create(params).await,
            Err(FrameworkError::Rejected("Negative price for item Broken".to_string()))
        );
        assert_eq!(client.get(1).await, Ok(None));
    }
}
