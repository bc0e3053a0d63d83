//! Use-case tests for the auth crate, driven through in-memory repositories

#[cfg(test)]
mod support {
    use std::sync::{Arc, Mutex};

    use chrono::Utc;
    use platform::token::TokenManager;

    use crate::domain::entity::{
        session::{NewSession, Session},
        user::{NewUser, User},
    };
    use crate::domain::repository::{SessionRepository, UserRepository};
    use crate::domain::value_object::{
        UserId, refresh_token::RefreshToken, session_id::SessionId, user_name::UserName,
    };
    use crate::error::{AuthError, AuthResult};

    #[derive(Default)]
    struct State {
        users: Vec<User>,
        sessions: Vec<Session>,
        next_id: i64,
    }

    impl State {
        fn next_id(&mut self) -> i64 {
            self.next_id += 1;
            self.next_id
        }
    }

    #[derive(Clone, Default)]
    pub struct InMemoryAuthRepo {
        state: Arc<Mutex<State>>,
    }

    impl InMemoryAuthRepo {
        pub fn user_count(&self) -> usize {
            self.state.lock().unwrap().users.len()
        }

        pub fn session_count(&self) -> usize {
            self.state.lock().unwrap().sessions.len()
        }

        pub fn remove_user(&self, user_id: UserId) {
            self.state
                .lock()
                .unwrap()
                .users
                .retain(|u| u.user_id != user_id);
        }
    }

    impl UserRepository for InMemoryAuthRepo {
        async fn create(&self, user: &NewUser) -> AuthResult<User> {
            let mut state = self.state.lock().unwrap();
            if state.users.iter().any(|u| u.user_name == user.user_name) {
                return Err(AuthError::UserAlreadyExists);
            }
            let created = User {
                user_id: UserId::from_raw(state.next_id()),
                user_name: user.user_name.clone(),
                password_hash: user.password_hash.clone(),
                gender: user.gender,
                created_at: Utc::now(),
            };
            state.users.push(created.clone());
            Ok(created)
        }

        async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
            let state = self.state.lock().unwrap();
            Ok(state.users.iter().find(|u| u.user_id == user_id).cloned())
        }

        async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
            let state = self.state.lock().unwrap();
            Ok(state
                .users
                .iter()
                .find(|u| &u.user_name == user_name)
                .cloned())
        }
    }

    impl SessionRepository for InMemoryAuthRepo {
        async fn create(&self, session: &NewSession) -> AuthResult<Session> {
            let mut state = self.state.lock().unwrap();
            let created = Session {
                session_id: SessionId::from_raw(state.next_id()),
                user_id: session.user_id,
                refresh_token: session.refresh_token,
                expires_at: session.expires_at,
                created_at: Utc::now(),
            };
            state.sessions.push(created.clone());
            Ok(created)
        }

        async fn find_by_refresh_token(
            &self,
            token: &RefreshToken,
        ) -> AuthResult<Option<Session>> {
            let state = self.state.lock().unwrap();
            Ok(state
                .sessions
                .iter()
                .find(|s| &s.refresh_token == token)
                .cloned())
        }

        async fn rotate(&self, old: SessionId, replacement: &NewSession) -> AuthResult<Session> {
            {
                let mut state = self.state.lock().unwrap();
                let before = state.sessions.len();
                state.sessions.retain(|s| s.session_id != old);
                if state.sessions.len() == before {
                    return Err(AuthError::SessionNotFound);
                }
            }
            SessionRepository::create(self, replacement).await
        }

        async fn cleanup_expired(&self) -> AuthResult<u64> {
            let mut state = self.state.lock().unwrap();
            let now = Utc::now();
            let before = state.sessions.len();
            state.sessions.retain(|s| !s.is_expired_at(now));
            Ok((before - state.sessions.len()) as u64)
        }
    }

    pub const SECRET: &[u8] = b"auth-crate-test-secret";

    pub fn tokens() -> Arc<TokenManager> {
        Arc::new(TokenManager::new(SECRET).unwrap())
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use chrono::Duration;

    use super::support::*;
    use crate::application::config::AuthConfig;
    use crate::application::{
        LogInInput, LogInUseCase, RefreshUseCase, SignUpInput, SignUpUseCase,
        VerifyCredentialsUseCase, WhoUseCase,
    };
    use crate::domain::repository::SessionRepository;
    use crate::domain::value_object::gender::Gender;
    use crate::error::AuthError;

    struct Harness {
        repo: Arc<InMemoryAuthRepo>,
        tokens: Arc<platform::token::TokenManager>,
        config: Arc<AuthConfig>,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_config(AuthConfig::default())
        }

        fn with_config(config: AuthConfig) -> Self {
            Self {
                repo: Arc::new(InMemoryAuthRepo::default()),
                tokens: tokens(),
                config: Arc::new(config),
            }
        }

        fn sign_up(&self) -> SignUpUseCase<InMemoryAuthRepo, InMemoryAuthRepo> {
            SignUpUseCase::new(
                self.repo.clone(),
                self.repo.clone(),
                self.tokens.clone(),
                self.config.clone(),
            )
        }

        fn log_in(&self) -> LogInUseCase<InMemoryAuthRepo, InMemoryAuthRepo> {
            LogInUseCase::new(
                self.repo.clone(),
                self.repo.clone(),
                self.tokens.clone(),
                self.config.clone(),
            )
        }

        fn refresh(&self) -> RefreshUseCase<InMemoryAuthRepo> {
            RefreshUseCase::new(self.repo.clone(), self.tokens.clone(), self.config.clone())
        }

        fn verify(&self) -> VerifyCredentialsUseCase {
            VerifyCredentialsUseCase::new(self.tokens.clone())
        }
    }

    fn sign_up_input(name: &str) -> SignUpInput {
        SignUpInput {
            user_name: name.to_string(),
            password: "correct-horse".to_string(),
            gender: Gender::Female,
        }
    }

    #[tokio::test]
    async fn test_sign_up_twice_yields_user_already_exists() {
        let h = Harness::new();
        h.sign_up().execute(sign_up_input("alice")).await.unwrap();

        let second = h.sign_up().execute(sign_up_input("alice")).await;
        assert!(matches!(second, Err(AuthError::UserAlreadyExists)));
        assert_eq!(h.repo.user_count(), 1);
    }

    #[tokio::test]
    async fn test_sign_up_opens_a_session() {
        let h = Harness::new();
        let pair = h.sign_up().execute(sign_up_input("alice")).await.unwrap();

        assert_eq!(h.repo.session_count(), 1);
        assert!(h.verify().execute(&pair.access_token).is_ok());
    }

    #[tokio::test]
    async fn test_sign_up_validates_input() {
        let h = Harness::new();

        let bad_name = h.sign_up().execute(sign_up_input("a_b")).await;
        assert!(matches!(bad_name, Err(AuthError::Validation(_))));

        let short_password = h
            .sign_up()
            .execute(SignUpInput {
                password: "short".to_string(),
                ..sign_up_input("alice")
            })
            .await;
        assert!(matches!(short_password, Err(AuthError::Validation(_))));
        assert_eq!(h.repo.user_count(), 0);
    }

    #[tokio::test]
    async fn test_log_in_then_verify_returns_same_user() {
        let h = Harness::new();
        let signed_up = h.sign_up().execute(sign_up_input("alice")).await.unwrap();
        let signup_user = h.verify().execute(&signed_up.access_token).unwrap();

        let logged_in = h
            .log_in()
            .execute(LogInInput {
                user_name: "alice".to_string(),
                password: "correct-horse".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(h.verify().execute(&logged_in.access_token).unwrap(), signup_user);
        // Concurrent sessions are allowed
        assert_eq!(h.repo.session_count(), 2);
    }

    #[tokio::test]
    async fn test_log_in_failures() {
        let h = Harness::new();
        h.sign_up().execute(sign_up_input("alice")).await.unwrap();

        let unknown = h
            .log_in()
            .execute(LogInInput {
                user_name: "bob".to_string(),
                password: "correct-horse".to_string(),
            })
            .await;
        assert!(matches!(unknown, Err(AuthError::UserNotFound)));

        let wrong = h
            .log_in()
            .execute(LogInInput {
                user_name: "alice".to_string(),
                password: "wrong-horse".to_string(),
            })
            .await;
        assert!(matches!(wrong, Err(AuthError::CredentialsInvalid)));

        let too_short = h
            .log_in()
            .execute(LogInInput {
                user_name: "alice".to_string(),
                password: "x".to_string(),
            })
            .await;
        assert!(matches!(too_short, Err(AuthError::CredentialsInvalid)));
    }

    #[tokio::test]
    async fn test_refresh_rotates_and_consumes_old_token() {
        let h = Harness::new();
        let first = h.sign_up().execute(sign_up_input("alice")).await.unwrap();
        let old = first.refresh_token.to_string();

        let second = h.refresh().execute(&old).await.unwrap();
        assert_ne!(second.refresh_token, first.refresh_token);
        assert_eq!(h.repo.session_count(), 1);
        assert_eq!(
            h.verify().execute(&second.access_token).unwrap(),
            h.verify().execute(&first.access_token).unwrap()
        );

        let replay = h.refresh().execute(&old).await;
        assert!(matches!(replay, Err(AuthError::SessionNotFound)));

        // the new token keeps working
        assert!(h.refresh().execute(&second.refresh_token.to_string()).await.is_ok());
    }

    #[tokio::test]
    async fn test_refresh_after_expiry_fails() {
        let h = Harness::with_config(AuthConfig {
            refresh_token_ttl: Duration::seconds(-1),
            ..AuthConfig::default()
        });
        let pair = h.sign_up().execute(sign_up_input("alice")).await.unwrap();

        let result = h.refresh().execute(&pair.refresh_token.to_string()).await;
        assert!(matches!(result, Err(AuthError::RefreshTokenExpired)));
        // expired sessions are left for cleanup, not rotated
        assert_eq!(h.repo.session_count(), 1);
        assert_eq!(h.repo.cleanup_expired().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_refresh_with_unknown_or_malformed_token() {
        let h = Harness::new();
        let unknown = h
            .refresh()
            .execute("6f1c1c8e-8d3a-4c56-9a43-0f0d6c1f2b11")
            .await;
        assert!(matches!(unknown, Err(AuthError::SessionNotFound)));

        let malformed = h.refresh().execute("definitely-not-a-uuid").await;
        assert!(matches!(malformed, Err(AuthError::SessionNotFound)));
    }

    #[tokio::test]
    async fn test_verify_rejects_foreign_and_expired_tokens() {
        let h = Harness::new();
        let foreign = platform::token::TokenManager::new(b"someone-else")
            .unwrap()
            .issue_access_token(1, Duration::minutes(5))
            .unwrap();
        assert!(matches!(
            h.verify().execute(&foreign),
            Err(AuthError::InvalidToken)
        ));

        let expired = h
            .tokens
            .issue_access_token(1, Duration::seconds(-10))
            .unwrap();
        assert!(matches!(
            h.verify().execute(&expired),
            Err(AuthError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn test_who() {
        let h = Harness::new();
        let pair = h.sign_up().execute(sign_up_input("alice")).await.unwrap();
        let user_id = h.verify().execute(&pair.access_token).unwrap();

        let user = WhoUseCase::new(h.repo.clone()).execute(user_id).await.unwrap();
        assert_eq!(user.user_name.as_str(), "alice");
        assert_eq!(user.gender, Gender::Female);

        h.repo.remove_user(user_id);
        let gone = WhoUseCase::new(h.repo.clone()).execute(user_id).await;
        assert!(matches!(gone, Err(AuthError::UserNotFound)));
    }
}

#[cfg(test)]
mod router_tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::support::*;
    use crate::application::config::AuthConfig;
    use crate::presentation::router::auth_router_generic;

    fn app() -> axum::Router {
        auth_router_generic(InMemoryAuthRepo::default(), tokens(), AuthConfig::default())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_sign_up_then_who() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_json(
                "/signup",
                json!({"username": "carol", "password": "password-1", "gender": "NONE"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let tokens = json_body(response).await;
        let access = tokens["access_token"].as_str().unwrap().to_string();
        assert!(tokens["refresh_token"].is_string());

        let response = app
            .oneshot(
                Request::get("/who")
                    .header(header::AUTHORIZATION, format!("Bearer {access}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let me = json_body(response).await;
        assert_eq!(me["username"], "carol");
        assert_eq!(me["gender"], "NONE");
    }

    #[tokio::test]
    async fn test_who_requires_bearer_token() {
        let response = app()
            .oneshot(Request::get("/who").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app()
            .oneshot(
                Request::get("/who")
                    .header(header::AUTHORIZATION, "Bearer garbage")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let problem = json_body(response).await;
        assert_eq!(problem["detail"], "Invalid access token");
    }

    #[tokio::test]
    async fn test_unknown_gender_is_rejected() {
        let response = app()
            .oneshot(post_json(
                "/signup",
                json!({"username": "dave", "password": "password-1", "gender": "OTHER"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
