mod domain;
mod error;
mod currency;
mod clients;
mod composer;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod catalog_actor;
mod favorite_actor;
mod order_actor;

use rust_decimal::Decimal;
use tracing::{error, info, warn, Instrument};
use crate::app_system::{setup_tracing, ApiSystem, SystemConfig};
use crate::composer::ScreenEvent;
use crate::currency::LocaleCurrency;
use crate::domain::CatalogEntryCreate;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting item detail demo");

    let system = ApiSystem::new(SystemConfig::default());

    let menu = vec![
        CatalogEntryCreate::new(
            "Ao molho",
            "Macarrão ao molho branco, fughi e cheiro verde das montanhas",
            Decimal::new(1990, 2),
            "https://storage.example.com/foods/ao-molho.png",
        )
        .with_extra("Bacon", Decimal::new(150, 2))
        .with_extra("Frango", Decimal::new(200, 2)),
        CatalogEntryCreate::new(
            "Veggie",
            "Macarrão com pimentão, ervilha e ervas finas colhidas no himalaia",
            Decimal::new(2190, 2),
            "https://storage.example.com/foods/veggie.png",
        )
        .with_extra("Queijo", Decimal::new(300, 2)),
    ];
    let ids = system.seed_catalog(menu).await.map_err(|e| e.to_string())?;
    let item_id = *ids.first().ok_or("catalog is empty")?;

    let (mut screen, mut events) = system.open_screen(LocaleCurrency::brl());

    let span = tracing::info_span!("screen_load", item_id);
    screen.open(item_id).instrument(span).await.map_err(|e| e.to_string())?;

    let span = tracing::info_span!("compose_order");
    async {
        screen.increment_extra(1);
        screen.increment_extra(1);
        screen.increment_extra(2);
        screen.decrement_extra(1);
        screen.set_item_quantity(3);
        screen.decrement_item_quantity();

        if let Some(state) = screen.state() {
            for extra in state.extras() {
                info!(
                    extra = %extra.name,
                    quantity = extra.quantity,
                    value = ?screen.formatted_extra_value(extra.id),
                    "Extra chosen"
                );
            }
            info!(
                price = ?screen.formatted_price(),
                quantity = state.quantity(),
                total = ?screen.formatted_total(),
                "Order composed"
            );
        }

        screen.toggle_favorite();
        match events.recv().await {
            Some(ScreenEvent::FavoriteSynced { status, result: Ok(()), .. }) => {
                info!(favorite = status.is_favorite(), "Favorite saved")
            }
            Some(other) => warn!(event = ?other, "Unexpected screen event"),
            None => warn!("Screen event channel closed"),
        }
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("order_submission");
    let order_result = async {
        info!("Submitting order");
        screen.submit_order().await
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(order_id) => {
            info!(order_id = %order_id, "Order placed");
            match system.order_client.get_order(order_id).await {
                Ok(Some(order)) => info!(item_name = %order.item.name, "Order stored"),
                Ok(None) => warn!("Order missing after creation"),
                Err(e) => warn!(error = %e, "Order lookup failed"),
            }
            if let Some(ScreenEvent::NavigateBack) = events.recv().await {
                info!("Navigating back");
            }
        }
        Err(e) => {
            error!(error = %e, "Order submission failed")
        }
    }

    screen.close();
    drop(screen);

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
