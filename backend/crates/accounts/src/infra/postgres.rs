//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use nid::Nanoid;
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::entity::{access_session::AccessSession, user::User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{
    full_name::FullName, provider_subject::ProviderSubject, public_id::PublicId, user_id::UserId,
    user_role::UserRole, user_status::UserStatus,
};
use crate::error::{AccountsError, AccountsResult};

/// PostgreSQL-backed accounts repository
#[derive(Clone)]
pub struct PgAccountsRepository {
    pool: PgPool,
}

impl PgAccountsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Clean up expired sessions
    pub async fn cleanup_expired(&self) -> AccountsResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM access_sessions WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired access sessions");

        Ok(deleted)
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAccountsRepository {
    async fn create(&self, user: &User) -> AccountsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                public_id,
                provider_subject,
                full_name,
                user_role,
                user_status,
                last_login_at,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.public_id.as_str())
        .bind(user.provider_subject.as_str())
        .bind(user.full_name.as_str())
        .bind(user.user_role.id())
        .bind(user.user_status.id())
        .bind(user.last_login_at)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AccountsResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                public_id,
                provider_subject,
                full_name,
                user_role,
                user_status,
                last_login_at,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_public_id(&self, public_id: &PublicId) -> AccountsResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                public_id,
                provider_subject,
                full_name,
                user_role,
                user_status,
                last_login_at,
                created_at,
                updated_at
            FROM users
            WHERE public_id = $1
            "#,
        )
        .bind(public_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_provider_subject(
        &self,
        subject: &ProviderSubject,
    ) -> AccountsResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                public_id,
                provider_subject,
                full_name,
                user_role,
                user_status,
                last_login_at,
                created_at,
                updated_at
            FROM users
            WHERE provider_subject = $1
            "#,
        )
        .bind(subject.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn update(&self, user: &User) -> AccountsResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                full_name = $2,
                user_role = $3,
                user_status = $4,
                last_login_at = $5,
                updated_at = $6
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.full_name.as_str())
        .bind(user.user_role.id())
        .bind(user.user_status.id())
        .bind(user.last_login_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgAccountsRepository {
    async fn create(&self, session: &AccessSession) -> AccountsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO access_sessions (
                session_id,
                user_id,
                expires_at_ms,
                client_fingerprint_hash,
                created_at,
                last_seen_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(session.session_id)
        .bind(session.user_id.as_uuid())
        .bind(session.expires_at_ms)
        .bind(&session.client_fingerprint_hash)
        .bind(session.created_at)
        .bind(session.last_seen_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        session_id: Uuid,
        fingerprint_hash: &[u8],
    ) -> AccountsResult<Option<AccessSession>> {
        let now_ms = Utc::now().timestamp_millis();

        let row = sqlx::query_as::<_, AccessSessionRow>(
            r#"
            SELECT
                session_id,
                user_id,
                expires_at_ms,
                client_fingerprint_hash,
                created_at,
                last_seen_at
            FROM access_sessions
            WHERE session_id = $1 AND expires_at_ms > $2
            "#,
        )
        .bind(session_id)
        .bind(now_ms)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => {
                // Verify fingerprint
                if r.client_fingerprint_hash != fingerprint_hash {
                    tracing::warn!(
                        session_id = %session_id,
                        "Access session fingerprint mismatch"
                    );
                    return Err(AccountsError::SessionFingerprintMismatch);
                }
                Ok(Some(r.into_session()))
            }
            None => Ok(None),
        }
    }

    async fn update(&self, session: &AccessSession) -> AccountsResult<()> {
        sqlx::query(
            r#"
            UPDATE access_sessions SET
                expires_at_ms = $2,
                last_seen_at = $3
            WHERE session_id = $1
            "#,
        )
        .bind(session.session_id)
        .bind(session.expires_at_ms)
        .bind(session.last_seen_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AccountsResult<()> {
        sqlx::query("DELETE FROM access_sessions WHERE session_id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cleanup_expired(&self) -> AccountsResult<u64> {
        self.cleanup_expired().await
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    public_id: String,
    provider_subject: String,
    full_name: String,
    user_role: i16,
    user_status: i16,
    last_login_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AccountsResult<User> {
        let public_id = PublicId::from_nanoid(
            Nanoid::from_str(&self.public_id)
                .map_err(|e| AccountsError::Internal(format!("Invalid public_id: {}", e)))?,
        );

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            public_id,
            provider_subject: ProviderSubject::from_db(&self.provider_subject),
            full_name: FullName::from_db(&self.full_name),
            user_role: UserRole::from_id(self.user_role),
            user_status: UserStatus::from_id(self.user_status).unwrap_or_default(),
            last_login_at: self.last_login_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AccessSessionRow {
    session_id: Uuid,
    user_id: Uuid,
    expires_at_ms: i64,
    client_fingerprint_hash: Vec<u8>,
    created_at: DateTime<Utc>,
    last_seen_at: DateTime<Utc>,
}

impl AccessSessionRow {
    fn into_session(self) -> AccessSession {
        AccessSession {
            session_id: self.session_id,
            user_id: UserId::from_uuid(self.user_id),
            expires_at_ms: self.expires_at_ms,
            client_fingerprint_hash: self.client_fingerprint_hash,
            created_at: self.created_at,
            last_seen_at: self.last_seen_at,
        }
    }
}
