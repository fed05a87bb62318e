//! Loyalty points reader port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, UserId};

/// Port for reading loyalty point balances.
#[async_trait]
pub trait LoyaltyReader: Send + Sync {
    /// Aggregate the user's point balances.
    ///
    /// A user with no loyalty activity gets an all-zero summary, not an
    /// error.
    async fn points_summary(&self, user_id: &UserId) -> Result<PointsSummary, DomainError>;
}

/// Aggregated loyalty point balances for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsSummary {
    /// Lifetime points earned.
    pub total: i64,

    /// Points awaiting settlement (e.g. pending purchase confirmation).
    pub pending: i64,

    /// Points currently redeemable.
    pub available: i64,

    /// Redeemable points expiring within the next 30 days.
    pub expiring: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loyalty_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn LoyaltyReader) {}
    }

    #[test]
    fn default_summary_is_all_zero() {
        let summary = PointsSummary::default();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.available, 0);
    }

    #[test]
    fn summary_serializes_camel_case() {
        let summary = PointsSummary {
            total: 100,
            pending: 10,
            available: 80,
            expiring: 5,
        };
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["total"], 100);
        assert_eq!(json["expiring"], 5);
    }
}
