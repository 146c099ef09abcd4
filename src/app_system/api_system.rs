use tracing::{error, info, instrument};
use crate::actor_framework::ResourceActor;
use crate::clients::{CatalogClient, FavoriteClient, OrderClient};
use crate::composer::{OrderComposer, ScreenClients, ScreenEvent};
use crate::currency::CurrencyFormat;
use crate::domain::{CatalogEntry, CatalogEntryCreate, Favorite, ItemId, Order};
use crate::error::ApiError;
use super::SystemConfig;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::mpsc;

fn id_counter() -> impl Fn() -> i64 + Send + Sync + 'static {
    let counter = Arc::new(AtomicI64::new(1));
    move || counter.fetch_add(1, Ordering::SeqCst)
}

/// In-process stand-in for the remote API: one actor per resource.
///
/// Responsible for starting the actors, handing out clients, and shutdown.
pub struct ApiSystem {
    pub catalog_client: CatalogClient,
    pub favorite_client: FavoriteClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ApiSystem {
    pub fn new(config: SystemConfig) -> Self {
        info!(buffer_size = config.buffer_size, "Starting API actors");

        let (catalog_actor, catalog_inner) = ResourceActor::<CatalogEntry>::new(config.buffer_size, id_counter());
        let catalog_handle = tokio::spawn(catalog_actor.run());

        // Favorites are keyed by item id, the generator is never consulted.
        let (favorite_actor, favorite_inner) = ResourceActor::<Favorite>::new(config.buffer_size, id_counter());
        let favorite_handle = tokio::spawn(favorite_actor.run());

        let (order_actor, order_inner) = ResourceActor::<Order>::new(config.buffer_size, id_counter());
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            catalog_client: CatalogClient::new(catalog_inner),
            favorite_client: FavoriteClient::new(favorite_inner),
            order_client: OrderClient::new(order_inner),
            handles: vec![catalog_handle, favorite_handle, order_handle],
        }
    }

    /// Adds catalog entries in the given order and returns their ids.
    #[instrument(skip(self, entries))]
    pub async fn seed_catalog(&self, entries: Vec<CatalogEntryCreate>) -> Result<Vec<ItemId>, ApiError> {
        let mut ids = Vec::with_capacity(entries.len());
        for entry in entries {
            ids.push(self.catalog_client.add_entry(entry).await?);
        }
        info!(count = ids.len(), "Catalog seeded");
        Ok(ids)
    }

    /// A detail screen wired to this system's clients.
    pub fn open_screen(
        &self,
        formatter: impl CurrencyFormat + 'static,
    ) -> (OrderComposer, mpsc::UnboundedReceiver<ScreenEvent>) {
        let clients = ScreenClients {
            catalog: self.catalog_client.clone(),
            favorites: self.favorite_client.clone(),
            orders: self.order_client.clone(),
        };
        OrderComposer::new(clients, formatter)
    }

    /// Drops this system's clients and waits for the actors to drain.
    ///
    /// Actors stop once every client clone is gone, so screens opened from
    /// this system must be dropped first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down API actors...");
        drop(self.catalog_client);
        drop(self.favorite_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("API shutdown complete.");
        Ok(())
    }
}
