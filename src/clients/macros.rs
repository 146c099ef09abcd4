/// Generates thin client methods over the inner `ResourceClient`, with tracing
/// and `FrameworkError` -> `ApiError` conversion.
///
/// `impl_client_methods!(FavoriteClient, Favorite, favorite; list, delete)`
/// expands to `list_favorites` and `delete_favorite`.
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $entity_name_snake:ident; $($op:ident),+) => {
        $( impl_client_methods!(@$op $client_name, $entity, $entity_name_snake); )+
    };
    (@get $client_name:ident, $entity:ty, $entity_name_snake:ident) => {
        paste::paste! {
            #[allow(dead_code)]
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake>](
                    &self,
                    id: <$entity as $crate::actor_framework::Entity>::Id,
                ) -> Result<Option<$entity>, $crate::error::ApiError> {
                    tracing::debug!("Sending request");
                    self.inner.get(id).await.map_err($crate::error::ApiError::from)
                }
            }
        }
    };
    (@list $client_name:ident, $entity:ty, $entity_name_snake:ident) => {
        paste::paste! {
            #[allow(dead_code)]
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<list_ $entity_name_snake s>](&self) -> Result<Vec<$entity>, $crate::error::ApiError> {
                    tracing::debug!("Sending request");
                    self.inner.list().await.map_err($crate::error::ApiError::from)
                }
            }
        }
    };
    (@delete $client_name:ident, $entity:ty, $entity_name_snake:ident) => {
        paste::paste! {
            #[allow(dead_code)]
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<delete_ $entity_name_snake>](
                    &self,
                    id: <$entity as $crate::actor_framework::Entity>::Id,
                ) -> Result<(), $crate::error::ApiError> {
                    tracing::debug!("Sending request");
                    self.inner.delete(id).await.map_err($crate::error::ApiError::from)
                }
            }
        }
    };
}

macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: $crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}
