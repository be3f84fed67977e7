//! Mock API - the request/response surface of the post board, served from
//! local storage with simulated network latency.

mod latency;

use std::sync::Arc;
use std::time::Duration;

use board_core::cancel::AbortSignal;
use board_core::domain::{ChartData, ChartKind, NewPost, Post, PostPatch, PostQuery, Session};
use board_core::error::DomainError;
use board_core::ports::{ChartSource, KeyValueStorage, PostRepository, TokenService};
use board_shared::ListResponse;
use board_shared::dto::{DeleteResponse, LoginRequest, LoginResponse, UserResponse};

pub use latency::SimulatedLatency;

use crate::auth::{MockAuthService, SessionStore};
use crate::charts::MockChartSource;
use crate::posts::LocalPostStore;

/// Stand-in for the remote post API.
///
/// Every call waits for its simulated latency first. An abort observed
/// before the wait completes fails the call with [`DomainError::Aborted`]
/// and leaves the store untouched.
#[derive(Clone)]
pub struct MockApi {
    posts: Arc<dyn PostRepository>,
    charts: Arc<dyn ChartSource>,
    auth: Arc<MockAuthService>,
    session: SessionStore,
    latency: SimulatedLatency,
}

impl MockApi {
    /// Wire the local post store, session and mock login over one storage.
    pub fn new(storage: Arc<dyn KeyValueStorage>, tokens: Arc<dyn TokenService>) -> Self {
        Self {
            posts: Arc::new(LocalPostStore::new(storage.clone())),
            charts: Arc::new(MockChartSource::new()),
            auth: Arc::new(MockAuthService::new(tokens)),
            session: SessionStore::new(storage),
            latency: SimulatedLatency::default(),
        }
    }

    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn auth(&self) -> &MockAuthService {
        &self.auth
    }

    pub async fn login(
        &self,
        request: LoginRequest,
        signal: Option<&AbortSignal>,
    ) -> Result<LoginResponse, DomainError> {
        self.wait(self.latency.login, signal).await?;

        let Session { token, user } = self.auth.login(&request.email, &request.password)?;
        Ok(LoginResponse {
            token,
            user: UserResponse {
                id: user.id,
                email: user.email,
            },
        })
    }

    pub async fn list_posts(
        &self,
        query: &PostQuery,
        signal: Option<&AbortSignal>,
    ) -> Result<ListResponse<Post>, DomainError> {
        self.wait(self.latency.list, signal).await?;

        let items = self.posts.list(query).await?;
        Ok(ListResponse::new(items))
    }

    pub async fn get_post(
        &self,
        id: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<Post, DomainError> {
        self.wait(self.latency.list, signal).await?;

        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound { id: id.to_string() })
    }

    /// Create a post owned by the signed-in user.
    pub async fn create_post(
        &self,
        post: NewPost,
        signal: Option<&AbortSignal>,
    ) -> Result<Post, DomainError> {
        self.wait(self.latency.create, signal).await?;

        let owner = self
            .session
            .current_user()
            .ok_or(DomainError::Unauthenticated)?;

        Ok(self.posts.create(post, &owner.id).await?)
    }

    pub async fn update_post(
        &self,
        id: &str,
        patch: PostPatch,
        signal: Option<&AbortSignal>,
    ) -> Result<Post, DomainError> {
        self.wait(self.latency.update, signal).await?;

        Ok(self.posts.update(id, patch).await?)
    }

    pub async fn delete_post(
        &self,
        id: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<DeleteResponse, DomainError> {
        self.wait(self.latency.delete, signal).await?;

        self.posts.delete(id).await?;
        Ok(DeleteResponse::ok())
    }

    pub async fn chart(
        &self,
        kind: ChartKind,
        signal: Option<&AbortSignal>,
    ) -> Result<ChartData, DomainError> {
        self.wait(self.latency.chart, signal).await?;

        self.charts.fetch(kind).await
    }

    async fn wait(&self, delay: Duration, signal: Option<&AbortSignal>) -> Result<(), DomainError> {
        let Some(signal) = signal else {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            return Ok(());
        };

        if signal.is_aborted() {
            return Err(DomainError::Aborted);
        }

        tokio::select! {
            biased;
            () = signal.aborted() => {
                tracing::debug!("Request aborted during simulated latency");
                Err(DomainError::Aborted)
            }
            () = tokio::time::sleep(delay) => Ok(()),
        }
    }
}

#[cfg(all(test, feature = "auth"))]
mod tests {
    use board_core::cancel::{AbortController, AbortSlot};
    use board_core::domain::{Category, SortField, SortOrder};

    use super::*;
    use crate::auth::{JwtConfig, JwtTokenService, MOCK_USER_ID};
    use crate::storage::InMemoryStorage;

    fn api() -> MockApi {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(InMemoryStorage::new());
        let tokens = Arc::new(JwtTokenService::new(JwtConfig::default()));
        MockApi::new(storage, tokens).with_latency(SimulatedLatency::none())
    }

    async fn signed_in() -> MockApi {
        let api = api();
        let response = api.login(credentials("123"), None).await.unwrap();
        api.session()
            .save(&Session {
                token: response.token,
                user: board_core::domain::User::new(response.user.id, response.user.email),
            })
            .unwrap();
        api
    }

    fn credentials(password: &str) -> LoginRequest {
        LoginRequest {
            email: "jinworld13@gmail.com".to_string(),
            password: password.to_string(),
        }
    }

    fn new_post(title: &str, category: Category) -> NewPost {
        NewPost {
            title: title.to_string(),
            body: "nothing".to_string(),
            category,
            tags: vec!["foo".to_string()],
        }
    }

    #[tokio::test]
    async fn test_login() {
        let api = api();
        let response = api.login(credentials("123"), None).await.unwrap();
        assert_eq!(response.user.id, MOCK_USER_ID);
        assert_eq!(api.auth().authenticate(&response.token).unwrap().user_id, MOCK_USER_ID);

        let err = api.login(credentials("wrong"), None).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_create_requires_session_owner() {
        let api = api();
        let err = api
            .create_post(new_post("t", Category::Free), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_create_uses_session_owner() {
        let api = signed_in().await;
        let post = api.create_post(new_post("Hello World", Category::Free), None).await.unwrap();
        assert_eq!(post.user_id, MOCK_USER_ID);

        let listed = api
            .list_posts(&PostQuery::new().owned_by(MOCK_USER_ID), None)
            .await
            .unwrap();
        assert_eq!(listed.items, vec![post.clone()]);
        assert_eq!(api.get_post(&post.id, None).await.unwrap(), post);
    }

    #[tokio::test]
    async fn test_crud_round() {
        let api = signed_in().await;
        let a = api.create_post(new_post("Hello World", Category::Qna), None).await.unwrap();
        let b = api.create_post(new_post("other", Category::Free), None).await.unwrap();

        let found = api.list_posts(&PostQuery::new().search("hello"), None).await.unwrap();
        assert_eq!(found.items, vec![a.clone()]);
        let found = api.list_posts(&PostQuery::new().search("foo"), None).await.unwrap();
        assert_eq!(found.len(), 2);
        assert!(api.list_posts(&PostQuery::new().search("xyz"), None).await.unwrap().is_empty());

        let qna = api.list_posts(&PostQuery::new().category(Category::Qna), None).await.unwrap();
        assert_eq!(qna.items, vec![a.clone()]);

        let patch = PostPatch {
            title: Some("x".to_string()),
            ..Default::default()
        };
        let updated = api.update_post(&b.id, patch, None).await.unwrap();
        assert_eq!(updated.created_at, b.created_at);

        let by_title = api
            .list_posts(&PostQuery::new().sort_by(SortField::Title, SortOrder::Asc), None)
            .await
            .unwrap();
        let titles: Vec<_> = by_title.items.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Hello World", "x"]);

        assert_eq!(api.delete_post(&a.id, None).await.unwrap(), DeleteResponse::ok());
        assert!(matches!(
            api.delete_post(&a.id, None).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            api.update_post(&a.id, PostPatch::default(), None).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            api.get_post(&a.id, None).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_already_aborted_signal_skips_store() {
        let api = signed_in().await;
        let controller = AbortController::new();
        controller.abort();

        let err = api
            .create_post(new_post("t", Category::Free), Some(&controller.signal()))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Aborted));
        assert!(api.list_posts(&PostQuery::new(), None).await.unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_abort_during_latency_short_circuits() {
        let api = signed_in().await.with_latency(SimulatedLatency::default());
        let slot = AbortSlot::new();
        let stale = slot.renew();

        let pending = {
            let api = api.clone();
            tokio::spawn(async move {
                api.create_post(new_post("stale", Category::Free), Some(&stale))
                    .await
            })
        };
        tokio::task::yield_now().await;

        // a newer request of the same kind supersedes the first one
        let fresh = slot.renew();
        let err = pending.await.unwrap().unwrap_err();
        assert!(matches!(err, DomainError::Aborted));

        let created = api
            .create_post(new_post("fresh", Category::Free), Some(&fresh))
            .await
            .unwrap();
        slot.finish();

        let listed = api.list_posts(&PostQuery::new(), None).await.unwrap();
        assert_eq!(listed.items, vec![created]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let api = api().with_latency(SimulatedLatency::default());
        let started = tokio::time::Instant::now();
        api.list_posts(&PostQuery::new(), None).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test]
    async fn test_chart_passthrough() {
        let api = api();
        let data = api.chart(ChartKind::WeeklyMoodTrend, None).await.unwrap();
        assert_eq!(data.len(), 6);
    }
}
