//! Shared in-memory fakes for HTTP handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::foundation::{DomainError, JobId, UserId};
use crate::domain::session::{AuthSession, InvalidatedCredentials};
use crate::domain::subscription::Subscription;
use crate::ports::{
    AggregationJob, BehaviorEvent, FeaturedContent, FeaturedReader, JobScheduler, LoyaltyReader,
    PaymentError, PaymentProvider, PointsSummary, PortalSession, ProviderSubscription,
    RecommendationEngine, RecommendationError, RecommendationRequest, RecommendationSet,
    SessionCache, SessionStore, SubscriptionRepository,
};

use super::AppState;

pub struct InMemorySessionStore {
    pub sessions: Mutex<Vec<AuthSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(Vec::new()),
        }
    }

    pub fn with_session(session: AuthSession) -> Self {
        Self {
            sessions: Mutex::new(vec![session]),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn find_valid(&self, token: &str) -> Result<Option<AuthSession>, DomainError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.token == token && s.is_valid_at(Utc::now()))
            .cloned())
    }

    async fn delete_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<InvalidatedCredentials, DomainError> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|s| &s.user_id != user_id);
        Ok(InvalidatedCredentials {
            sessions: (before - sessions.len()) as u64,
            refresh_tokens: 0,
        })
    }
}

pub struct FailingSessionStore;

#[async_trait]
impl SessionStore for FailingSessionStore {
    async fn find_valid(&self, _token: &str) -> Result<Option<AuthSession>, DomainError> {
        Err(DomainError::database("Simulated store failure"))
    }

    async fn delete_by_user(
        &self,
        _user_id: &UserId,
    ) -> Result<InvalidatedCredentials, DomainError> {
        Err(DomainError::database("Simulated store failure"))
    }
}

pub struct InMemorySessionCache {
    pub entries: Mutex<Vec<(String, UserId)>>,
}

impl InMemorySessionCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SessionCache for InMemorySessionCache {
    async fn get(&self, token: &str) -> Result<Option<UserId>, DomainError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, u)| *u))
    }

    async fn put(&self, session: &AuthSession) -> Result<(), DomainError> {
        self.entries
            .lock()
            .unwrap()
            .push((session.token.clone(), session.user_id));
        Ok(())
    }

    async fn invalidate_user(&self, user_id: &UserId) -> Result<u64, DomainError> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|(_, u)| u != user_id);
        Ok((before - entries.len()) as u64)
    }
}

pub struct StubSubscriptionRepository {
    pub subscription: Option<Subscription>,
}

#[async_trait]
impl SubscriptionRepository for StubSubscriptionRepository {
    async fn find_by_user(&self, _user_id: &UserId) -> Result<Option<Subscription>, DomainError> {
        Ok(self.subscription.clone())
    }
}

pub struct StubPaymentProvider {
    pub cancel_calls: Mutex<Vec<String>>,
}

impl StubPaymentProvider {
    pub fn new() -> Self {
        Self {
            cancel_calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PaymentProvider for StubPaymentProvider {
    async fn cancel_at_period_end(
        &self,
        subscription_id: &str,
    ) -> Result<ProviderSubscription, PaymentError> {
        self.cancel_calls
            .lock()
            .unwrap()
            .push(subscription_id.to_string());
        Ok(ProviderSubscription {
            id: subscription_id.to_string(),
            customer_id: "cus_test123".to_string(),
            status: "active".to_string(),
            cancel_at_period_end: true,
            current_period_end: 1_767_225_600,
        })
    }

    async fn create_portal_session(
        &self,
        _customer_id: &str,
        _return_url: &str,
    ) -> Result<PortalSession, PaymentError> {
        Ok(PortalSession {
            id: "bps_test123".to_string(),
            url: "https://billing.stripe.com/test".to_string(),
        })
    }
}

pub struct StubRecommendationEngine;

#[async_trait]
impl RecommendationEngine for StubRecommendationEngine {
    async fn record_behavior(&self, _event: BehaviorEvent) -> Result<(), RecommendationError> {
        Err(RecommendationError::NotImplemented)
    }

    async fn recommend(
        &self,
        _request: RecommendationRequest,
    ) -> Result<RecommendationSet, RecommendationError> {
        Err(RecommendationError::NotImplemented)
    }
}

pub struct StubLoyaltyReader {
    pub summary: PointsSummary,
}

#[async_trait]
impl LoyaltyReader for StubLoyaltyReader {
    async fn points_summary(&self, _user_id: &UserId) -> Result<PointsSummary, DomainError> {
        Ok(self.summary)
    }
}

pub struct StubFeaturedReader {
    pub content: FeaturedContent,
}

#[async_trait]
impl FeaturedReader for StubFeaturedReader {
    async fn featured(&self) -> Result<FeaturedContent, DomainError> {
        Ok(self.content.clone())
    }
}

pub struct RecordingJobScheduler {
    pub jobs: Mutex<Vec<AggregationJob>>,
}

impl RecordingJobScheduler {
    pub fn new() -> Self {
        Self {
            jobs: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl JobScheduler for RecordingJobScheduler {
    async fn enqueue_aggregation(&self, job: AggregationJob) -> Result<JobId, DomainError> {
        self.jobs.lock().unwrap().push(job);
        Ok(JobId::new())
    }
}

/// A state wired entirely with in-memory fakes.
pub fn test_state() -> AppState {
    AppState {
        session_store: Arc::new(InMemorySessionStore::new()),
        session_cache: Arc::new(InMemorySessionCache::new()),
        subscriptions: Arc::new(StubSubscriptionRepository { subscription: None }),
        payment: Arc::new(StubPaymentProvider::new()),
        recommendations: Arc::new(StubRecommendationEngine),
        loyalty: Arc::new(StubLoyaltyReader {
            summary: PointsSummary::default(),
        }),
        featured: Arc::new(StubFeaturedReader {
            content: FeaturedContent::default(),
        }),
        scheduler: Arc::new(RecordingJobScheduler::new()),
        portal_return_url: "https://app.example.com/account".to_string(),
    }
}
