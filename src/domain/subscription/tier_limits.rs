//! Tier-based usage limits.
//!
//! Defines the numeric ceilings derived from each subscription tier. Limits
//! are never persisted; they are recomputed from the tier on every request.

use super::SubscriptionTier;
use serde::{Deserialize, Serialize};

/// Usage limits for a subscription tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierLimits {
    /// The tier these limits apply to.
    pub tier: SubscriptionTier,
    /// Maximum simultaneously active coupons. None = unlimited.
    pub max_active_coupons: Option<u32>,
    /// Maximum connected stores. None = unlimited.
    pub max_stores: Option<u32>,
    /// Maximum analytics queries per month. None = unlimited.
    pub max_analytics_queries: Option<u32>,
    /// Whether API access is enabled.
    pub api_access: bool,
}

impl TierLimits {
    /// Get the limits for a specific tier.
    ///
    /// # Tier Configuration
    ///
    /// | Tier | Coupons | Stores | Analytics queries | API |
    /// |------|---------|--------|-------------------|-----|
    /// | Free | 5 | 1 | 10 | No |
    /// | Basic | 25 | 3 | 100 | No |
    /// | Pro | 100 | 10 | 1000 | Yes |
    /// | Enterprise | Unlimited | Unlimited | Unlimited | Yes |
    pub fn for_tier(tier: SubscriptionTier) -> Self {
        match tier {
            SubscriptionTier::Free => Self {
                tier,
                max_active_coupons: Some(5),
                max_stores: Some(1),
                max_analytics_queries: Some(10),
                api_access: false,
            },
            SubscriptionTier::Basic => Self {
                tier,
                max_active_coupons: Some(25),
                max_stores: Some(3),
                max_analytics_queries: Some(100),
                api_access: false,
            },
            SubscriptionTier::Pro => Self {
                tier,
                max_active_coupons: Some(100),
                max_stores: Some(10),
                max_analytics_queries: Some(1000),
                api_access: true,
            },
            SubscriptionTier::Enterprise => Self {
                tier,
                max_active_coupons: None, // Unlimited
                max_stores: None,
                max_analytics_queries: None,
                api_access: true,
            },
        }
    }

    /// Check if the active coupon limit has been reached.
    ///
    /// Returns false if unlimited or under limit.
    pub fn coupon_limit_reached(&self, active_coupons: u32) -> bool {
        self.max_active_coupons
            .map(|max| active_coupons >= max)
            .unwrap_or(false)
    }

    /// Check if the store limit has been reached.
    ///
    /// Returns false if unlimited or under limit.
    pub fn store_limit_reached(&self, stores: u32) -> bool {
        self.max_stores.map(|max| stores >= max).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tier Configuration Tests

    #[test]
    fn free_tier_has_5_coupons() {
        let limits = TierLimits::for_tier(SubscriptionTier::Free);
        assert_eq!(limits.max_active_coupons, Some(5));
    }

    #[test]
    fn free_tier_has_1_store() {
        let limits = TierLimits::for_tier(SubscriptionTier::Free);
        assert_eq!(limits.max_stores, Some(1));
    }

    #[test]
    fn free_tier_has_no_api_access() {
        let limits = TierLimits::for_tier(SubscriptionTier::Free);
        assert!(!limits.api_access);
    }

    #[test]
    fn basic_tier_has_25_coupons() {
        let limits = TierLimits::for_tier(SubscriptionTier::Basic);
        assert_eq!(limits.max_active_coupons, Some(25));
        assert_eq!(limits.max_stores, Some(3));
    }

    #[test]
    fn basic_tier_has_no_api_access() {
        let limits = TierLimits::for_tier(SubscriptionTier::Basic);
        assert!(!limits.api_access);
    }

    #[test]
    fn pro_tier_has_api_access() {
        let limits = TierLimits::for_tier(SubscriptionTier::Pro);
        assert!(limits.api_access);
        assert_eq!(limits.max_analytics_queries, Some(1000));
    }

    #[test]
    fn enterprise_tier_is_unlimited() {
        let limits = TierLimits::for_tier(SubscriptionTier::Enterprise);
        assert_eq!(limits.max_active_coupons, None);
        assert_eq!(limits.max_stores, None);
        assert_eq!(limits.max_analytics_queries, None);
        assert!(limits.api_access);
    }

    // Limit Check Tests

    #[test]
    fn coupon_limit_reached_when_at_max() {
        let limits = TierLimits::for_tier(SubscriptionTier::Free);
        assert!(limits.coupon_limit_reached(5));
    }

    #[test]
    fn coupon_limit_not_reached_when_under() {
        let limits = TierLimits::for_tier(SubscriptionTier::Basic);
        assert!(!limits.coupon_limit_reached(10));
    }

    #[test]
    fn coupon_limit_never_reached_for_unlimited() {
        let limits = TierLimits::for_tier(SubscriptionTier::Enterprise);
        assert!(!limits.coupon_limit_reached(100_000));
    }

    #[test]
    fn store_limit_reached_when_over_max() {
        let limits = TierLimits::for_tier(SubscriptionTier::Free);
        assert!(limits.store_limit_reached(2));
    }

    #[test]
    fn limits_serialize_camel_case() {
        let limits = TierLimits::for_tier(SubscriptionTier::Free);
        let json = serde_json::to_value(&limits).unwrap();
        assert_eq!(json["maxActiveCoupons"], 5);
        assert_eq!(json["apiAccess"], false);
    }
}
