//! Seam to the growth sessions server.
//!
//! Persistence and authorization live entirely on the server; the engine only
//! fetches a week and passes create/join/leave/delete through, reflecting the
//! results into local state.

use crate::error::FetchError;
use async_trait::async_trait;
use shared::{CreateGrowthSessionRequest, GrowthSession};

/// Client for the growth sessions endpoints
///
/// Futures are not `Send`: the engine runs on a single cooperative thread,
/// in the browser and in tests alike.
#[async_trait(?Send)]
pub trait SessionApi {
    /// Every session in the week containing `anchor_iso_date` (YYYY-MM-DD)
    async fn fetch_week(&self, anchor_iso_date: &str) -> Result<Vec<GrowthSession>, FetchError>;

    async fn create(&self, request: &CreateGrowthSessionRequest) -> Result<GrowthSession, FetchError>;

    /// Returns the session with the viewer added to its attendees
    async fn join(&self, session: &GrowthSession) -> Result<GrowthSession, FetchError>;

    /// Returns the session with the viewer removed from its attendees
    async fn leave(&self, session: &GrowthSession) -> Result<GrowthSession, FetchError>;

    async fn delete(&self, session: &GrowthSession) -> Result<(), FetchError>;
}
