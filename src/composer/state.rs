use rust_decimal::Decimal;
use tracing::warn;
use crate::domain::{CatalogEntry, Extra, ExtraId, Item};

/// Two-state favorite flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteStatus {
    NotFavorite,
    Favorite,
}

impl FavoriteStatus {
    pub fn from_flag(is_favorite: bool) -> Self {
        if is_favorite { Self::Favorite } else { Self::NotFavorite }
    }

    pub fn is_favorite(self) -> bool {
        self == Self::Favorite
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::NotFavorite => Self::Favorite,
            Self::Favorite => Self::NotFavorite,
        }
    }
}

/// `(Σ extra.value * extra.quantity + item.price) * quantity`, `None` when the
/// result does not fit in a `Decimal`.
pub fn compute_total(item: &Item, extras: &[Extra], quantity: u32) -> Option<Decimal> {
    let extras_sum = extras
        .iter()
        .try_fold(Decimal::ZERO, |acc, extra| acc.checked_add(extra.subtotal()?))?;
    extras_sum.checked_add(item.price)?.checked_mul(Decimal::from(quantity))
}

/// In-memory order being composed for one item.
///
/// Invariants: `quantity >= 1`, extras keep their display order, and `total`
/// always equals [`compute_total`] of the current fields. A change whose
/// total would overflow is refused and leaves the state as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderState {
    item: Item,
    extras: Vec<Extra>,
    quantity: u32,
    favorite: FavoriteStatus,
    total: Decimal,
}

impl OrderState {
    /// Fresh state for a loaded catalog entry: quantity 1, every extra at 0.
    pub fn new(entry: CatalogEntry, favorite: FavoriteStatus) -> Self {
        let CatalogEntry { item, mut extras } = entry;
        for extra in &mut extras {
            extra.quantity = 0;
        }
        // Quantity 1 with every extra at 0 is exactly the unit price.
        let total = compute_total(&item, &extras, 1).unwrap_or(item.price);
        Self { item, extras, quantity: 1, favorite, total }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn extras(&self) -> &[Extra] {
        &self.extras
    }

    pub fn extra(&self, extra_id: ExtraId) -> Option<&Extra> {
        self.extras.iter().find(|e| e.id == extra_id)
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn favorite(&self) -> FavoriteStatus {
        self.favorite
    }

    /// Total for the current quantities, unformatted.
    pub fn total(&self) -> Decimal {
        self.total
    }

    // --- Quantity mutators; each returns whether anything changed ---

    pub fn increment_extra(&mut self, extra_id: ExtraId) -> bool {
        let Some(index) = self.extras.iter().position(|e| e.id == extra_id) else {
            return false;
        };
        let Some(next) = self.extras[index].quantity.checked_add(1) else {
            return false;
        };
        let previous = std::mem::replace(&mut self.extras[index].quantity, next);
        self.commit(|state| state.extras[index].quantity = previous)
    }

    pub fn decrement_extra(&mut self, extra_id: ExtraId) -> bool {
        let Some(index) = self.extras.iter().position(|e| e.id == extra_id) else {
            return false;
        };
        if self.extras[index].quantity == 0 {
            return false;
        }
        self.extras[index].quantity -= 1;
        self.commit(|state| state.extras[index].quantity += 1)
    }

    pub fn increment_item_quantity(&mut self) -> bool {
        let Some(next) = self.quantity.checked_add(1) else {
            return false;
        };
        let previous = std::mem::replace(&mut self.quantity, next);
        self.commit(|state| state.quantity = previous)
    }

    pub fn decrement_item_quantity(&mut self) -> bool {
        if self.quantity <= 1 {
            return false;
        }
        self.quantity -= 1;
        self.commit(|state| state.quantity += 1)
    }

    /// Sets the item quantity directly. Values below 1 are clamped to 1.
    pub fn set_item_quantity(&mut self, quantity: u32) -> bool {
        let quantity = quantity.max(1);
        if quantity == self.quantity {
            return false;
        }
        let previous = std::mem::replace(&mut self.quantity, quantity);
        self.commit(|state| state.quantity = previous)
    }

    /// Flips the favorite flag locally and returns the new status.
    pub fn toggle_favorite(&mut self) -> FavoriteStatus {
        self.favorite = self.favorite.toggled();
        self.favorite
    }

    /// Recomputes the cached total after a change; on overflow runs `undo`
    /// and keeps the previous total.
    fn commit(&mut self, undo: impl FnOnce(&mut Self)) -> bool {
        match compute_total(&self.item, &self.extras, self.quantity) {
            Some(total) => {
                self.total = total;
                true
            }
            None => {
                undo(self);
                warn!(item_id = self.item.id, "Total would overflow, change refused");
                false
            }
        }
    }
}
