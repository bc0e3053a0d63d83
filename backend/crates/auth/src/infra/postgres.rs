//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    session::{NewSession, Session},
    user::{NewUser, User},
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{
    UserId, gender::Gender, refresh_token::RefreshToken, session_id::SessionId,
    user_name::UserName, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, password_hash, gender)
            VALUES ($1, $2, $3)
            RETURNING user_id, username, password_hash, gender, created_at
            "#,
        )
        .bind(user.user_name.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.gender.code())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AuthError::UserAlreadyExists
            } else {
                AuthError::Database(e)
            }
        })?;

        row.into_user()
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, username, password_hash, gender, created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, username, password_hash, gender, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgAuthRepository {
    async fn create(&self, session: &NewSession) -> AuthResult<Session> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            INSERT INTO sessions (user_id, refresh_token, expires_at)
            VALUES ($1, $2, $3)
            RETURNING session_id, user_id, refresh_token, expires_at, created_at
            "#,
        )
        .bind(session.user_id.get())
        .bind(session.refresh_token.as_uuid())
        .bind(session.expires_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_session())
    }

    async fn find_by_refresh_token(&self, token: &RefreshToken) -> AuthResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT session_id, user_id, refresh_token, expires_at, created_at
            FROM sessions
            WHERE refresh_token = $1
            "#,
        )
        .bind(token.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SessionRow::into_session))
    }

    async fn rotate(&self, old: SessionId, replacement: &NewSession) -> AuthResult<Session> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM sessions WHERE session_id = $1")
            .bind(old.get())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        // A concurrent refresh already consumed this session
        if deleted == 0 {
            tx.rollback().await?;
            return Err(AuthError::SessionNotFound);
        }

        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            INSERT INTO sessions (user_id, refresh_token, expires_at)
            VALUES ($1, $2, $3)
            RETURNING session_id, user_id, refresh_token, expires_at, created_at
            "#,
        )
        .bind(replacement.user_id.get())
        .bind(replacement.refresh_token.as_uuid())
        .bind(replacement.expires_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into_session())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let deleted = sqlx::query("DELETE FROM sessions WHERE expires_at <= now()")
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired sessions");

        Ok(deleted)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i64,
    username: String,
    password_hash: String,
    gender: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let gender = Gender::from_code(&self.gender)
            .ok_or_else(|| AuthError::Internal(format!("Invalid gender: {}", self.gender)))?;

        Ok(User {
            user_id: UserId::from_raw(self.user_id),
            user_name: UserName::from_db(self.username),
            password_hash: UserPassword::from_db(self.password_hash),
            gender,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: i64,
    user_id: i64,
    refresh_token: Uuid,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session {
            session_id: SessionId::from_raw(self.session_id),
            user_id: UserId::from_raw(self.user_id),
            refresh_token: RefreshToken::from_uuid(self.refresh_token),
            expires_at: self.expires_at,
            created_at: self.created_at,
        }
    }
}
