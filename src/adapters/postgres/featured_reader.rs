//! PostgreSQL implementation of FeaturedReader.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{Category, FeaturedContent, FeaturedCoupon, FeaturedReader, TrendingStore};

const FEATURED_COUPON_LIMIT: i64 = 6;
const TRENDING_STORE_LIMIT: i64 = 8;

/// PostgreSQL implementation of the FeaturedReader port.
#[derive(Clone)]
pub struct PostgresFeaturedReader {
    pool: PgPool,
}

impl PostgresFeaturedReader {
    /// Creates a new PostgresFeaturedReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct FeaturedCouponRow {
    id: Uuid,
    title: String,
    store_name: String,
    discount: String,
    expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, sqlx::FromRow)]
struct TrendingStoreRow {
    id: Uuid,
    name: String,
    active_coupons: i64,
}

#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: Uuid,
    name: String,
}

#[async_trait]
impl FeaturedReader for PostgresFeaturedReader {
    async fn featured(&self) -> Result<FeaturedContent, DomainError> {
        let coupon_rows: Vec<FeaturedCouponRow> = sqlx::query_as(
            r#"
            SELECT c.id, c.title, s.name AS store_name, c.discount, c.expires_at
            FROM coupons c
            JOIN stores s ON s.id = c.store_id
            WHERE c.featured = TRUE
              AND c.active = TRUE
              AND (c.expires_at IS NULL OR c.expires_at > NOW())
            ORDER BY c.featured_rank ASC, c.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(FEATURED_COUPON_LIMIT)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch featured coupons: {}", e),
            )
        })?;

        let store_rows: Vec<TrendingStoreRow> = sqlx::query_as(
            r#"
            SELECT s.id, s.name, COUNT(c.id) AS active_coupons
            FROM stores s
            JOIN coupons c ON c.store_id = s.id
            WHERE c.active = TRUE
              AND (c.expires_at IS NULL OR c.expires_at > NOW())
            GROUP BY s.id, s.name
            ORDER BY active_coupons DESC, s.name ASC
            LIMIT $1
            "#,
        )
        .bind(TRENDING_STORE_LIMIT)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch trending stores: {}", e),
            )
        })?;

        let category_rows: Vec<CategoryRow> = sqlx::query_as(
            r#"
            SELECT id, name
            FROM categories
            ORDER BY display_order ASC, name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch categories: {}", e),
            )
        })?;

        Ok(FeaturedContent {
            featured_coupons: coupon_rows
                .into_iter()
                .map(|row| FeaturedCoupon {
                    id: row.id.to_string(),
                    title: row.title,
                    store_name: row.store_name,
                    discount: row.discount,
                    expires_at: row.expires_at,
                })
                .collect(),
            trending_stores: store_rows
                .into_iter()
                .map(|row| TrendingStore {
                    id: row.id.to_string(),
                    name: row.name,
                    active_coupons: row.active_coupons,
                })
                .collect(),
            categories: category_rows
                .into_iter()
                .map(|row| Category {
                    id: row.id.to_string(),
                    name: row.name,
                })
                .collect(),
        })
    }
}
