//! Featured content reader port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;

/// Port for reading the public featured-content block.
///
/// Backs the unauthenticated landing page; nothing here is user-specific.
#[async_trait]
pub trait FeaturedReader: Send + Sync {
    /// Fetch featured coupons, trending stores, and categories.
    async fn featured(&self) -> Result<FeaturedContent, DomainError>;
}

/// The public featured-content block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedContent {
    pub featured_coupons: Vec<FeaturedCoupon>,
    pub trending_stores: Vec<TrendingStore>,
    pub categories: Vec<Category>,
}

/// A coupon surfaced on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedCoupon {
    pub id: String,
    pub title: String,
    pub store_name: String,
    pub discount: String,
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// A store ranked by recent coupon activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingStore {
    pub id: String,
    pub name: String,
    pub active_coupons: i64,
}

/// A browsable coupon category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
}
