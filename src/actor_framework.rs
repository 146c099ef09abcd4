use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with hooks and create payloads)
// =============================================================================

/// Trait that any remote resource must implement to be served by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Ord + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, String>;

    /// Lets a resource key a record by an id taken from the payload instead of
    /// the actor's generator.
    fn preferred_id(_payload: &Self::CreatePayload) -> Option<Self::Id> {
        None
    }

    // --- Lifecycle Hooks ---

    /// Validates a freshly built entity before it is stored.
    fn on_create(&mut self) -> Result<(), String> { Ok(()) }
}

/// Errors produced by the actor layer itself.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the response")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Request rejected: {0}")]
    Rejected(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_create(payload));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items = self.store.values().cloned().collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
            }
        }
        debug!("Resource actor stopped");
    }

    fn handle_create(&mut self, payload: T::CreatePayload) -> Result<T::Id, FrameworkError> {
        let id = match T::preferred_id(&payload) {
            Some(id) => id,
            None => (self.next_id_fn)(),
        };
        if self.store.contains_key(&id) {
            warn!(id = %id, "Create rejected, id taken");
            return Err(FrameworkError::AlreadyExists(id.to_string()));
        }
        let mut item = T::from_create(id.clone(), payload).map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(FrameworkError::Rejected)?;
        let id = item.id().clone();
        self.store.insert(id.clone(), item);
        Ok(id)
    }

    fn handle_delete(&mut self, id: T::Id) -> Result<(), FrameworkError> {
        match self.store.remove(&id) {
            Some(_) => Ok(()),
            None => Err(FrameworkError::NotFound(id.to_string())),
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Manual impl: derive would demand `T: Clone` on the sender.
impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Create { payload, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Get { id, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::List { respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Delete { id, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: i64,
        text: String,
    }

    #[derive(Debug)]
    struct NoteCreate {
        pinned_id: Option<i64>,
        text: String,
    }

    impl Entity for Note {
        type Id = i64;
        type CreatePayload = NoteCreate;

        fn id(&self) -> &i64 { &self.id }

        fn from_create(id: i64, payload: NoteCreate) -> Result<Self, String> {
            Ok(Self { id, text: payload.text })
        }

        fn on_create(&mut self) -> Result<(), String> {
            if self.text.is_empty() {
                return Err("empty note".to_string());
            }
            Ok(())
        }

        fn preferred_id(payload: &NoteCreate) -> Option<i64> {
            payload.pinned_id
        }
    }

    fn spawn_notes() -> ResourceClient<Note> {
        let counter = Arc::new(AtomicI64::new(1));
        let next_id = move || counter.fetch_add(1, Ordering::SeqCst);
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_resource_actor_crud() {
        let client = spawn_notes();

        let first = client.create(NoteCreate { pinned_id: None, text: "a".into() }).await.unwrap();
        let second = client.create(NoteCreate { pinned_id: None, text: "b".into() }).await.unwrap();
        assert_eq!((first, second), (1, 2));

        let note = client.get(first).await.unwrap().unwrap();
        assert_eq!(note.text, "a");
        assert_eq!(*note.id(), 1);

        client.delete(first).await.unwrap();
        assert_eq!(client.get(first).await.unwrap(), None);
        assert_eq!(client.delete(first).await, Err(FrameworkError::NotFound("1".to_string())));

        let remaining = client.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].text, "b");
    }

    #[tokio::test]
    async fn test_preferred_id_and_conflicts() {
        let client = spawn_notes();

        let id = client.create(NoteCreate { pinned_id: Some(42), text: "x".into() }).await.unwrap();
        assert_eq!(id, 42);

        let again = client.create(NoteCreate { pinned_id: Some(42), text: "y".into() }).await;
        assert_eq!(again, Err(FrameworkError::AlreadyExists("42".to_string())));

        let rejected = client.create(NoteCreate { pinned_id: None, text: String::new() }).await;
        assert_eq!(rejected, Err(FrameworkError::Rejected("empty note".to_string())));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let client = spawn_notes();
        client.create(NoteCreate { pinned_id: Some(9), text: "late".into() }).await.unwrap();
        client.create(NoteCreate { pinned_id: Some(3), text: "early".into() }).await.unwrap();

        let ids: Vec<i64> = client.list().await.unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 9]);
    }
}
