//! # Mock Framework
//!
//! Utilities for testing clients and screens in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_get`] or [`expect_create`] to assert behavior
//! and answer each request by hand.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

type Responder<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// No actor runs behind the client: the test plays the actor, so success,
/// failure and ordering of replies are fully under its control.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreatePayload, Responder<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<Responder<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::FavoriteClient;
    use crate::domain::{Favorite, ItemPayload};
    use crate::error::ApiError;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<Favorite>(10);
        let client = FavoriteClient::new(inner);

        let create_task = tokio::spawn(async move {
            let item = ItemPayload {
                id: 4,
                name: "Tapioca".to_string(),
                description: String::new(),
                price: Decimal::new(800, 2),
                image_url: String::new(),
            };
            client.create_favorite(item).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "Tapioca");
        responder.send(Ok(4)).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(4));
    }

    #[tokio::test]
    async fn test_closed_actor_is_network_failure() {
        let (inner, receiver) = create_mock_client::<Favorite>(10);
        drop(receiver);
        let client = FavoriteClient::new(inner);

        let result = client.list_favorites().await;
        assert!(matches!(result, Err(ApiError::NetworkFailure(_))));
    }
}
