use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, info_span, instrument, warn, Instrument};
use crate::clients::{CatalogClient, FavoriteClient, OrderClient};
use crate::currency::CurrencyFormat;
use crate::domain::{ExtraId, ItemId, OrderId};
use crate::error::ApiError;
use super::state::{FavoriteStatus, OrderState};

/// Notifications the screen emits for whoever hosts it.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent {
    /// Outcome of a favorite toggle's remote call. Local state was already
    /// switched to `status` and is not rolled back on failure.
    FavoriteSynced {
        item_id: ItemId,
        status: FavoriteStatus,
        result: Result<(), ApiError>,
    },
    /// The order went through; return to the previous screen.
    NavigateBack,
}

/// The API handles a composer needs.
#[derive(Clone)]
pub struct ScreenClients {
    pub catalog: CatalogClient,
    pub favorites: FavoriteClient,
    pub orders: OrderClient,
}

/// Holds the order state for one open item detail screen.
///
/// Mutators are synchronous and take `&mut self`, so interactions are applied
/// one at a time. `toggle_favorite` spawns its remote call and must run inside
/// a tokio runtime. Screen events go out on an unbounded channel so a host
/// that has not drained them never stalls a submit or a favorite sync.
pub struct OrderComposer {
    clients: ScreenClients,
    formatter: Arc<dyn CurrencyFormat>,
    events: mpsc::UnboundedSender<ScreenEvent>,
    item_id: Option<ItemId>,
    state: Option<OrderState>,
}

impl OrderComposer {
    pub fn new(
        clients: ScreenClients,
        formatter: impl CurrencyFormat + 'static,
    ) -> (Self, mpsc::UnboundedReceiver<ScreenEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let composer = Self {
            clients,
            formatter: Arc::new(formatter),
            events,
            item_id: None,
            state: None,
        };
        (composer, receiver)
    }

    /// Loads the screen for `item_id`.
    ///
    /// Does nothing when `item_id` is the id already opened, even if that
    /// load failed. Otherwise the item and the favorites list are fetched
    /// concurrently and the state is installed once both arrive. On error the
    /// screen stays empty.
    #[instrument(skip(self))]
    pub async fn open(&mut self, item_id: ItemId) -> Result<(), ApiError> {
        if self.item_id == Some(item_id) {
            debug!("Item already open");
            return Ok(());
        }
        self.item_id = Some(item_id);
        self.state = None;

        let (entry, favorites) = tokio::join!(
            self.clients.catalog.load_item(item_id),
            self.clients.favorites.list_favorites()
        );

        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                error!(error = %e, "Item load failed");
                return Err(e);
            }
        };
        let favorites = match favorites {
            Ok(favorites) => favorites,
            Err(e) => {
                error!(error = %e, "Favorites load failed");
                return Err(e);
            }
        };

        let favorite = FavoriteStatus::from_flag(favorites.iter().any(|f| f.item_id() == item_id));
        let state = OrderState::new(entry, favorite);
        info!(item_name = %state.item().name, ?favorite, "Screen ready");
        self.state = Some(state);
        Ok(())
    }

    /// Discards the screen state.
    pub fn close(&mut self) {
        debug!(item_id = ?self.item_id, "Closing screen");
        self.item_id = None;
        self.state = None;
    }

    pub fn state(&self) -> Option<&OrderState> {
        self.state.as_ref()
    }

    // --- Quantity mutators (no-ops while nothing is loaded) ---

    pub fn increment_extra(&mut self, extra_id: ExtraId) {
        if let Some(state) = self.state.as_mut() {
            if state.increment_extra(extra_id) {
                debug!(extra_id, total = %state.total(), "Extra incremented");
            }
        }
    }

    pub fn decrement_extra(&mut self, extra_id: ExtraId) {
        if let Some(state) = self.state.as_mut() {
            if state.decrement_extra(extra_id) {
                debug!(extra_id, total = %state.total(), "Extra decremented");
            }
        }
    }

    pub fn increment_item_quantity(&mut self) {
        if let Some(state) = self.state.as_mut() {
            state.increment_item_quantity();
            debug!(quantity = state.quantity(), total = %state.total(), "Quantity incremented");
        }
    }

    pub fn decrement_item_quantity(&mut self) {
        if let Some(state) = self.state.as_mut() {
            if state.decrement_item_quantity() {
                debug!(quantity = state.quantity(), total = %state.total(), "Quantity decremented");
            }
        }
    }

    pub fn set_item_quantity(&mut self, quantity: u32) {
        if let Some(state) = self.state.as_mut() {
            if state.set_item_quantity(quantity) {
                debug!(quantity = state.quantity(), total = %state.total(), "Quantity set");
            }
        }
    }

    // --- Display values ---

    pub fn formatted_total(&self) -> Option<String> {
        self.state.as_ref().map(|s| self.formatter.format(s.total()))
    }

    pub fn formatted_price(&self) -> Option<String> {
        self.state.as_ref().map(|s| self.formatter.format(s.item().price))
    }

    pub fn formatted_extra_value(&self, extra_id: ExtraId) -> Option<String> {
        let extra = self.state.as_ref()?.extra(extra_id)?;
        Some(self.formatter.format(extra.value))
    }

    // --- Remote actions ---

    /// Flips the favorite flag at once and sends the matching create/delete
    /// request in the background. The request's outcome arrives later as
    /// [`ScreenEvent::FavoriteSynced`].
    #[instrument(skip(self), fields(item_id = ?self.item_id))]
    pub fn toggle_favorite(&mut self) -> Option<FavoriteStatus> {
        let state = self.state.as_mut()?;
        let status = state.toggle_favorite();
        let payload = state.item().payload();
        let item_id = payload.id;
        info!(?status, "Favorite toggled");

        let favorites = self.clients.favorites.clone();
        let events = self.events.clone();
        let span = info_span!("favorite_sync", item_id, ?status);
        tokio::spawn(
            async move {
                let result = match status {
                    FavoriteStatus::Favorite => favorites.create_favorite(payload).await.map(|_| ()),
                    FavoriteStatus::NotFavorite => favorites.delete_favorite(item_id).await,
                };
                if let Err(e) = &result {
                    warn!(error = %e, "Favorite sync failed, keeping local state");
                }
                if events.send(ScreenEvent::FavoriteSynced { item_id, status, result }).is_err() {
                    debug!("Screen closed before favorite sync finished");
                }
            }
            .instrument(span),
        );
        Some(status)
    }

    /// Submits the item as an order and asks to navigate back on success.
    ///
    /// The payload is the item projection only; chosen extras and quantity
    /// are not sent.
    #[instrument(skip(self), fields(item_id = ?self.item_id))]
    pub async fn submit_order(&self) -> Result<OrderId, ApiError> {
        let Some(state) = self.state.as_ref() else {
            warn!("Submit with no item loaded");
            return Err(ApiError::NotFound("no item loaded".to_string()));
        };
        info!(total = %state.total(), quantity = state.quantity(), "Submitting order");

        match self.clients.orders.create_order(state.item().payload()).await {
            Ok(order_id) => {
                info!(order_id, "Order created");
                if self.events.send(ScreenEvent::NavigateBack).is_err() {
                    warn!("Screen event channel closed, navigation dropped");
                }
                Ok(order_id)
            }
            Err(e) => {
                error!(error = %e, "Order submission failed");
                Err(e)
            }
        }
    }
}
