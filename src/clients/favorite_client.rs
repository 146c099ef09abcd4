use tracing::{debug, instrument};
use crate::domain::{Favorite, ItemId, ItemPayload};
use crate::error::ApiError;

/// Client for the favorites (`/favorites`) resource.
#[derive(Clone)]
pub struct FavoriteClient {
    inner: crate::actor_framework::ResourceClient<Favorite>,
}

impl_client_new!(FavoriteClient, Favorite);
impl_client_methods!(FavoriteClient, Favorite, favorite; list, delete);

impl FavoriteClient {
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub async fn create_favorite(&self, item: ItemPayload) -> Result<ItemId, ApiError> {
        debug!("Sending request");
        Ok(self.inner.create(item).await?)
    }
}
