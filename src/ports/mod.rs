//! Ports - trait contracts between the application core and adapters.
//!
//! Each external dependency (database, cache, billing provider, queue) is
//! reached through one of these traits, so handlers can be exercised with
//! in-memory fakes.

mod featured_reader;
mod job_scheduler;
mod loyalty_reader;
mod payment_provider;
mod recommendation_engine;
mod session_cache;
mod session_store;
mod subscription_repository;

pub use featured_reader::{Category, FeaturedContent, FeaturedCoupon, FeaturedReader, TrendingStore};
pub use job_scheduler::{AggregationJob, JobScheduler};
pub use loyalty_reader::{LoyaltyReader, PointsSummary};
pub use payment_provider::{
    PaymentError, PaymentErrorCode, PaymentProvider, PortalSession, ProviderSubscription,
};
pub use recommendation_engine::{
    BehaviorEvent, Recommendation, RecommendationEngine, RecommendationError,
    RecommendationRequest, RecommendationSet,
};
pub use session_cache::SessionCache;
pub use session_store::SessionStore;
pub use subscription_repository::SubscriptionRepository;
