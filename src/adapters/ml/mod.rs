//! Recommendation engine adapters.
//!
//! Only the stub exists today; a real engine slots in behind the same
//! port once one is built.

mod unimplemented_engine;

pub use unimplemented_engine::UnimplementedRecommendationEngine;
