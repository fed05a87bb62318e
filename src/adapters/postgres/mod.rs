//! PostgreSQL adapters.

mod featured_reader;
mod loyalty_reader;
mod session_store;
mod subscription_repository;

pub use featured_reader::PostgresFeaturedReader;
pub use loyalty_reader::PostgresLoyaltyReader;
pub use session_store::PostgresSessionStore;
pub use subscription_repository::PostgresSubscriptionRepository;
