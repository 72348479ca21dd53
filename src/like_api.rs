use crate::error::Error;
use crate::models::{EntityId, LikeStatus};

/// The remote side of the like toggle: one request per call, no retries.
///
/// `Arc<T>` forwards to `T`, so several controllers can share one client.
pub trait LikeApi {
    /// `GET /api/likes?cafe_id=<id>`
    fn status(&self, id: &EntityId)
        -> impl std::future::Future<Output = Result<LikeStatus, Error>> + Send;
    /// `POST /api/like` with `{"cafe_id": <id>}`
    fn like(&self, id: &EntityId) -> impl std::future::Future<Output = Result<(), Error>> + Send;
    /// `POST /api/unlike` with `{"cafe_id": <id>}`
    fn unlike(&self, id: &EntityId) -> impl std::future::Future<Output = Result<(), Error>> + Send;
}

impl<T: LikeApi + Send + Sync> LikeApi for std::sync::Arc<T> {
    fn status(
        &self,
        id: &EntityId,
    ) -> impl std::future::Future<Output = Result<LikeStatus, Error>> + Send {
        (**self).status(id)
    }

    fn like(&self, id: &EntityId) -> impl std::future::Future<Output = Result<(), Error>> + Send {
        (**self).like(id)
    }

    fn unlike(&self, id: &EntityId) -> impl std::future::Future<Output = Result<(), Error>> + Send {
        (**self).unlike(id)
    }
}
