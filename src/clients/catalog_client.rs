use tracing::{debug, info, instrument};
use crate::domain::{CatalogEntry, CatalogEntryCreate, ItemId};
use crate::error::ApiError;

/// Client for the catalog (`/foods`) resource.
#[derive(Clone)]
pub struct CatalogClient {
    inner: crate::actor_framework::ResourceClient<CatalogEntry>,
}

impl_client_new!(CatalogClient, CatalogEntry);
impl_client_methods!(CatalogClient, CatalogEntry, catalog_entry; get);

impl CatalogClient {
    /// Loads an item and its extras. A missing id is `ApiError::NotFound`.
    #[instrument(skip(self))]
    pub async fn load_item(&self, id: ItemId) -> Result<CatalogEntry, ApiError> {
        match self.get_catalog_entry(id).await? {
            Some(entry) => {
                info!(item_name = %entry.item.name, extras = entry.extras.len(), "Item loaded");
                Ok(entry)
            }
            None => Err(ApiError::NotFound(id.to_string())),
        }
    }

    #[instrument(skip(self, entry), fields(item_name = %entry.name))]
    pub async fn add_entry(&self, entry: CatalogEntryCreate) -> Result<ItemId, ApiError> {
        debug!("Sending request");
        Ok(self.inner.create(entry).await?)
    }
}
