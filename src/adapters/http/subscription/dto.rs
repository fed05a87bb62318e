//! HTTP DTOs for subscription and billing endpoints.

use serde::Serialize;

/// Response body for a billing portal session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalResponse {
    pub url: String,
}
