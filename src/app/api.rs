//! Server functions bridging the views to the upstream launches API.
//!
//! Both reads run on the server via the shared upstream client; the views
//! call them like local async functions.

use dioxus::prelude::*;

use crate::model::Launch;

/// Fetch the full launch collection.
#[server]
pub async fn list_launches() -> Result<Vec<Launch>, ServerFnError> {
    crate::upstream::shared().launches().await.map_err(|err| {
        tracing::error!(%err, "error fetching launches");
        ServerFnError::new("Failed to fetch launches")
    })
}

/// Fetch one launch by flight number. `None` means the upstream resolved the
/// request but had no record for it.
#[server]
pub async fn get_launch(flight_number: u32) -> Result<Option<Launch>, ServerFnError> {
    crate::upstream::shared()
        .launch(flight_number)
        .await
        .map_err(|err| {
            tracing::error!(%err, flight_number, "error fetching launch details");
            ServerFnError::new("Failed to fetch launch details")
        })
}
