//! Unit tests for accounts crate
//! Target: C0 coverage 100%, C1 coverage 80%

#[cfg(test)]
mod config_tests {
    use crate::application::config::*;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = AccountsConfig::default();

        assert_eq!(config.cookie.name, "reward_session");
        assert!(config.cookie.secure);
        assert!(config.cookie.http_only);
        assert_eq!(config.cookie.max_age_secs, Some(7 * 24 * 3600));
        assert_eq!(config.session_ttl, Duration::from_secs(7 * 24 * 3600));
        assert!(config.gateway_key.is_empty());
        assert_eq!(config.session_secret, [0u8; 32]);
    }

    #[test]
    fn test_session_ttl_ms() {
        let config = AccountsConfig::default();
        assert_eq!(config.session_ttl_ms(), 604_800_000);
    }

    #[test]
    fn test_with_random_secret() {
        let config1 = AccountsConfig::with_random_secret();
        let config2 = AccountsConfig::with_random_secret();

        assert_ne!(config1.session_secret, config2.session_secret);
        assert!(config1.session_secret.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_development_config() {
        let config = AccountsConfig::development();

        assert!(!config.cookie.secure);
        assert_eq!(config.gateway_key, b"dev-gateway-key");
        assert!(config.session_secret.iter().any(|&b| b != 0));
    }
}

#[cfg(test)]
mod models_tests {
    use crate::presentation::dto::*;

    #[test]
    fn test_open_session_request_deserialization() {
        let json = r#"{"subject":"provider|1234","fullName":"Ali Raza","role":"admin"}"#;
        let request: OpenSessionRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.subject, "provider|1234");
        assert_eq!(request.full_name, "Ali Raza");
        assert_eq!(request.role.as_deref(), Some("admin"));
    }

    #[test]
    fn test_open_session_request_role_optional() {
        let json = r#"{"subject":"provider|1234","fullName":"Ali Raza"}"#;
        let request: OpenSessionRequest = serde_json::from_str(json).unwrap();

        assert!(request.role.is_none());
    }

    #[test]
    fn test_session_profile_serialization() {
        let profile = SessionProfile {
            public_id: "0123456789abcdefghi01".to_string(),
            full_name: "Ali Raza".to_string(),
            role: "member".to_string(),
            status: "active".to_string(),
            member_since: 1700000000000,
            expires_at_ms: 1700604800000,
        };

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("publicId"));
        assert!(json.contains("fullName"));
        assert!(json.contains("memberSince"));
        assert!(json.contains("expiresAtMs"));
        assert!(json.contains(r#""role":"member""#));
        assert!(json.contains(r#""status":"active""#));
    }

    #[test]
    fn test_open_session_response_serialization() {
        let response = OpenSessionResponse {
            profile: SessionProfile {
                public_id: "0123456789abcdefghi01".to_string(),
                full_name: "Ali Raza".to_string(),
                role: "member".to_string(),
                status: "active".to_string(),
                member_since: 1700000000000,
                expires_at_ms: 1700604800000,
            },
            created: true,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""created":true"#));
        assert!(json.contains(r#""profile":{"#));
    }
}

#[cfg(test)]
mod session_flow_tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use platform::client::ClientFingerprint;
    use uuid::Uuid;

    use crate::application::config::AccountsConfig;
    use crate::application::{
        CheckSessionUseCase, CloseSessionUseCase, ModerateUserUseCase, OpenSessionInput,
        OpenSessionUseCase,
    };
    use crate::domain::entity::{access_session::AccessSession, user::User};
    use crate::domain::repository::{SessionRepository, UserRepository};
    use crate::domain::value_object::{
        full_name::FullName, provider_subject::ProviderSubject, public_id::PublicId,
        user_id::UserId, user_role::UserRole, user_status::UserStatus,
    };
    use crate::error::{AccountsError, AccountsResult};

    /// In-memory repository mirroring the PostgreSQL behavior
    #[derive(Clone, Default)]
    struct MemoryRepo {
        users: Arc<Mutex<HashMap<Uuid, User>>>,
        sessions: Arc<Mutex<HashMap<Uuid, AccessSession>>>,
    }

    impl UserRepository for MemoryRepo {
        async fn create(&self, user: &User) -> AccountsResult<()> {
            self.users
                .lock()
                .unwrap()
                .insert(*user.user_id.as_uuid(), user.clone());
            Ok(())
        }

        async fn find_by_id(&self, user_id: &UserId) -> AccountsResult<Option<User>> {
            Ok(self.users.lock().unwrap().get(user_id.as_uuid()).cloned())
        }

        async fn find_by_public_id(&self, public_id: &PublicId) -> AccountsResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .values()
                .find(|u| u.public_id == *public_id)
                .cloned())
        }

        async fn find_by_provider_subject(
            &self,
            subject: &ProviderSubject,
        ) -> AccountsResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .values()
                .find(|u| u.provider_subject == *subject)
                .cloned())
        }

        async fn update(&self, user: &User) -> AccountsResult<()> {
            self.users
                .lock()
                .unwrap()
                .insert(*user.user_id.as_uuid(), user.clone());
            Ok(())
        }
    }

    impl SessionRepository for MemoryRepo {
        async fn create(&self, session: &AccessSession) -> AccountsResult<()> {
            self.sessions
                .lock()
                .unwrap()
                .insert(session.session_id, session.clone());
            Ok(())
        }

        async fn find_by_id(
            &self,
            session_id: Uuid,
            fingerprint_hash: &[u8],
        ) -> AccountsResult<Option<AccessSession>> {
            let now_ms = chrono::Utc::now().timestamp_millis();
            let sessions = self.sessions.lock().unwrap();

            match sessions.get(&session_id) {
                Some(s) if s.expires_at_ms <= now_ms => Ok(None),
                Some(s) if s.client_fingerprint_hash != fingerprint_hash => {
                    Err(AccountsError::SessionFingerprintMismatch)
                }
                Some(s) => Ok(Some(s.clone())),
                None => Ok(None),
            }
        }

        async fn update(&self, session: &AccessSession) -> AccountsResult<()> {
            self.sessions
                .lock()
                .unwrap()
                .insert(session.session_id, session.clone());
            Ok(())
        }

        async fn delete(&self, session_id: Uuid) -> AccountsResult<()> {
            self.sessions.lock().unwrap().remove(&session_id);
            Ok(())
        }

        async fn cleanup_expired(&self) -> AccountsResult<u64> {
            let now_ms = chrono::Utc::now().timestamp_millis();
            let mut sessions = self.sessions.lock().unwrap();
            let before = sessions.len();
            sessions.retain(|_, s| s.expires_at_ms > now_ms);
            Ok((before - sessions.len()) as u64)
        }
    }

    fn test_config() -> Arc<AccountsConfig> {
        let mut config = AccountsConfig::with_random_secret();
        config.gateway_key = b"test-gateway-key".to_vec();
        Arc::new(config)
    }

    fn fingerprint(seed: u8) -> ClientFingerprint {
        ClientFingerprint::new([seed; 32], None, None)
    }

    fn input(subject: &str, full_name: &str) -> OpenSessionInput {
        OpenSessionInput {
            gateway_key: "test-gateway-key".to_string(),
            subject: subject.to_string(),
            full_name: full_name.to_string(),
            role: None,
        }
    }

    fn open_use_case(
        repo: &Arc<MemoryRepo>,
        config: &Arc<AccountsConfig>,
    ) -> OpenSessionUseCase<MemoryRepo, MemoryRepo> {
        OpenSessionUseCase::new(repo.clone(), repo.clone(), config.clone())
    }

    fn check_use_case(
        repo: &Arc<MemoryRepo>,
        config: &Arc<AccountsConfig>,
    ) -> CheckSessionUseCase<MemoryRepo, MemoryRepo> {
        CheckSessionUseCase::new(repo.clone(), repo.clone(), config.clone())
    }

    #[tokio::test]
    async fn test_open_session_creates_account() {
        let repo = Arc::new(MemoryRepo::default());
        let config = test_config();

        let output = open_use_case(&repo, &config)
            .execute(input("provider|1", "Ali Raza"), fingerprint(1))
            .await
            .unwrap();

        assert!(output.created);
        assert_eq!(output.user.full_name.as_str(), "Ali Raza");
        assert_eq!(output.user.user_role, UserRole::Member);
        assert_eq!(output.user.user_status, UserStatus::Active);
        assert!(output.user.last_login_at.is_some());
        assert!(output.session_token.contains('.'));
        assert_eq!(repo.users.lock().unwrap().len(), 1);
        assert_eq!(repo.sessions.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_open_session_reuses_account() {
        let repo = Arc::new(MemoryRepo::default());
        let config = test_config();
        let use_case = open_use_case(&repo, &config);

        let first = use_case
            .execute(input("provider|1", "Ali Raza"), fingerprint(1))
            .await
            .unwrap();

        let second = use_case
            .execute(input("provider|1", "Ali Raza"), fingerprint(2))
            .await
            .unwrap();

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(first.user.user_id, second.user.user_id);
        // Account reused, but each login gets its own session
        assert_eq!(repo.users.lock().unwrap().len(), 1);
        assert_eq!(repo.sessions.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_open_session_updates_display_name() {
        let repo = Arc::new(MemoryRepo::default());
        let config = test_config();
        let use_case = open_use_case(&repo, &config);

        use_case
            .execute(input("provider|1", "Ali Raza"), fingerprint(1))
            .await
            .unwrap();

        let second = use_case
            .execute(input("provider|1", "Ali R. Khan"), fingerprint(1))
            .await
            .unwrap();

        assert_eq!(second.user.full_name.as_str(), "Ali R. Khan");
    }

    #[tokio::test]
    async fn test_open_session_rejects_wrong_gateway_key() {
        let repo = Arc::new(MemoryRepo::default());
        let config = test_config();

        let mut bad = input("provider|1", "Ali Raza");
        bad.gateway_key = "wrong-key".to_string();

        let result = open_use_case(&repo, &config).execute(bad, fingerprint(1)).await;

        assert!(matches!(result, Err(AccountsError::InvalidGatewayKey)));
        assert!(repo.users.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_session_rejects_unconfigured_gateway_key() {
        let repo = Arc::new(MemoryRepo::default());
        // Default config has an empty gateway key
        let config = Arc::new(AccountsConfig::with_random_secret());

        let mut empty = input("provider|1", "Ali Raza");
        empty.gateway_key = String::new();

        let result = open_use_case(&repo, &config).execute(empty, fingerprint(1)).await;

        assert!(matches!(result, Err(AccountsError::InvalidGatewayKey)));
    }

    #[tokio::test]
    async fn test_open_session_rejects_unknown_role() {
        let repo = Arc::new(MemoryRepo::default());
        let config = test_config();

        let mut bad = input("provider|1", "Ali Raza");
        bad.role = Some("superuser".to_string());

        let result = open_use_case(&repo, &config).execute(bad, fingerprint(1)).await;

        assert!(matches!(result, Err(AccountsError::InvalidIdentity(_))));
    }

    #[tokio::test]
    async fn test_open_session_honors_admin_role() {
        let repo = Arc::new(MemoryRepo::default());
        let config = test_config();

        let mut admin = input("provider|admin", "Admin One");
        admin.role = Some("admin".to_string());

        let output = open_use_case(&repo, &config)
            .execute(admin, fingerprint(1))
            .await
            .unwrap();

        assert_eq!(output.user.user_role, UserRole::Admin);
        assert!(output.user.is_admin());
    }

    #[tokio::test]
    async fn test_check_session_round_trip() {
        let repo = Arc::new(MemoryRepo::default());
        let config = test_config();

        let opened = open_use_case(&repo, &config)
            .execute(input("provider|1", "Ali Raza"), fingerprint(1))
            .await
            .unwrap();

        let current = check_use_case(&repo, &config)
            .execute(&opened.session_token, &[1u8; 32])
            .await
            .unwrap();

        assert_eq!(current.user_id, opened.user.user_id);
        assert_eq!(current.public_id, opened.user.public_id);
        assert_eq!(current.full_name.as_str(), "Ali Raza");
        assert_eq!(current.expires_at_ms, opened.expires_at_ms);
        assert!(current.can_transact());
        assert!(!current.is_admin());
    }

    #[tokio::test]
    async fn test_check_session_rejects_garbage_token() {
        let repo = Arc::new(MemoryRepo::default());
        let config = test_config();

        let result = check_use_case(&repo, &config)
            .execute("not-a-token", &[1u8; 32])
            .await;

        assert!(matches!(result, Err(AccountsError::SessionInvalid)));
    }

    #[tokio::test]
    async fn test_check_session_rejects_tampered_token() {
        let repo = Arc::new(MemoryRepo::default());
        let config = test_config();

        let opened = open_use_case(&repo, &config)
            .execute(input("provider|1", "Ali Raza"), fingerprint(1))
            .await
            .unwrap();

        // Flip the last signature character
        let mut chars: Vec<char> = opened.session_token.chars().collect();
        let last = chars.len() - 1;
        chars[last] = if chars[last] == 'A' { 'B' } else { 'A' };
        let tampered: String = chars.into_iter().collect();

        let result = check_use_case(&repo, &config)
            .execute(&tampered, &[1u8; 32])
            .await;

        assert!(matches!(result, Err(AccountsError::SessionInvalid)));
    }

    #[tokio::test]
    async fn test_check_session_rejects_foreign_secret() {
        let repo = Arc::new(MemoryRepo::default());
        let config = test_config();

        let opened = open_use_case(&repo, &config)
            .execute(input("provider|1", "Ali Raza"), fingerprint(1))
            .await
            .unwrap();

        // Same session store, different signing secret
        let mut other = AccountsConfig::with_random_secret();
        other.gateway_key = b"test-gateway-key".to_vec();

        let result = check_use_case(&repo, &Arc::new(other))
            .execute(&opened.session_token, &[1u8; 32])
            .await;

        assert!(matches!(result, Err(AccountsError::SessionInvalid)));
    }

    #[tokio::test]
    async fn test_check_session_rejects_wrong_fingerprint() {
        let repo = Arc::new(MemoryRepo::default());
        let config = test_config();

        let opened = open_use_case(&repo, &config)
            .execute(input("provider|1", "Ali Raza"), fingerprint(1))
            .await
            .unwrap();

        let result = check_use_case(&repo, &config)
            .execute(&opened.session_token, &[9u8; 32])
            .await;

        assert!(matches!(
            result,
            Err(AccountsError::SessionFingerprintMismatch)
        ));
    }

    #[tokio::test]
    async fn test_check_session_rejects_expired() {
        let repo = Arc::new(MemoryRepo::default());
        let config = test_config();

        let opened = open_use_case(&repo, &config)
            .execute(input("provider|1", "Ali Raza"), fingerprint(1))
            .await
            .unwrap();

        // Age the stored session past its expiry
        {
            let mut sessions = repo.sessions.lock().unwrap();
            for session in sessions.values_mut() {
                session.expires_at_ms = chrono::Utc::now().timestamp_millis() - 1000;
            }
        }

        let result = check_use_case(&repo, &config)
            .execute(&opened.session_token, &[1u8; 32])
            .await;

        assert!(matches!(result, Err(AccountsError::SessionInvalid)));
    }

    #[tokio::test]
    async fn test_close_session_invalidates_token() {
        let repo = Arc::new(MemoryRepo::default());
        let config = test_config();

        let opened = open_use_case(&repo, &config)
            .execute(input("provider|1", "Ali Raza"), fingerprint(1))
            .await
            .unwrap();

        CloseSessionUseCase::new(repo.clone(), config.clone())
            .execute(&opened.session_token)
            .await
            .unwrap();

        let result = check_use_case(&repo, &config)
            .execute(&opened.session_token, &[1u8; 32])
            .await;

        assert!(matches!(result, Err(AccountsError::SessionInvalid)));
        assert!(repo.sessions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blocked_user_still_resolves_but_cannot_transact() {
        let repo = Arc::new(MemoryRepo::default());
        let config = test_config();

        let opened = open_use_case(&repo, &config)
            .execute(input("provider|1", "Ali Raza"), fingerprint(1))
            .await
            .unwrap();

        ModerateUserUseCase::new(repo.clone())
            .execute(opened.user.public_id.as_str(), UserStatus::Blocked)
            .await
            .unwrap();

        // Session survives the block; transact gates flip immediately
        let current = check_use_case(&repo, &config)
            .execute(&opened.session_token, &[1u8; 32])
            .await
            .unwrap();

        assert_eq!(current.status, UserStatus::Blocked);
        assert!(!current.can_transact());
    }

    #[tokio::test]
    async fn test_moderate_user_blocks_and_unblocks() {
        let repo = Arc::new(MemoryRepo::default());
        let user = User::new(
            ProviderSubject::new("provider|1").unwrap(),
            FullName::new("Ali Raza").unwrap(),
            UserRole::Member,
        );
        UserRepository::create(repo.as_ref(), &user).await.unwrap();

        let use_case = ModerateUserUseCase::new(repo.clone());

        let blocked = use_case
            .execute(user.public_id.as_str(), UserStatus::Blocked)
            .await
            .unwrap();
        assert_eq!(blocked.user_status, UserStatus::Blocked);

        let unblocked = use_case
            .execute(user.public_id.as_str(), UserStatus::Active)
            .await
            .unwrap();
        assert_eq!(unblocked.user_status, UserStatus::Active);
    }

    #[tokio::test]
    async fn test_moderate_user_unknown_public_id() {
        let repo = Arc::new(MemoryRepo::default());
        let use_case = ModerateUserUseCase::new(repo.clone());

        let result = use_case
            .execute(PublicId::new().as_str(), UserStatus::Blocked)
            .await;

        assert!(matches!(result, Err(AccountsError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_moderate_user_malformed_public_id() {
        let repo = Arc::new(MemoryRepo::default());
        let use_case = ModerateUserUseCase::new(repo.clone());

        // Malformed ids get the same answer as unknown ones
        let result = use_case.execute("not a nanoid!", UserStatus::Blocked).await;

        assert!(matches!(result, Err(AccountsError::UserNotFound)));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(AccountsError, StatusCode)> = vec![
            (AccountsError::UserNotFound, StatusCode::NOT_FOUND),
            (AccountsError::InvalidGatewayKey, StatusCode::UNAUTHORIZED),
            (
                AccountsError::InvalidIdentity("bad subject".into()),
                StatusCode::BAD_REQUEST,
            ),
            (AccountsError::SessionInvalid, StatusCode::UNAUTHORIZED),
            (
                AccountsError::SessionFingerprintMismatch,
                StatusCode::UNAUTHORIZED,
            ),
            (AccountsError::AdminRequired, StatusCode::FORBIDDEN),
            (
                AccountsError::MissingHeader("User-Agent".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AccountsError::Database(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AccountsError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_error_display() {
        assert!(AccountsError::UserNotFound.to_string().contains("not found"));
        assert!(AccountsError::AdminRequired.to_string().contains("Admin"));
        assert!(
            AccountsError::InvalidGatewayKey
                .to_string()
                .contains("Gateway key")
        );
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(AccountsError::UserNotFound.code(), "USER_NOT_FOUND");
        assert_eq!(AccountsError::SessionInvalid.code(), "SESSION_INVALID");
        // Fingerprint mismatches are indistinguishable from dead sessions
        assert_eq!(
            AccountsError::SessionFingerprintMismatch.code(),
            "SESSION_INVALID"
        );
        assert_eq!(AccountsError::AdminRequired.code(), "ADMIN_REQUIRED");
    }

    #[test]
    fn test_fingerprint_error_conversion() {
        let err = platform::client::FingerprintError::MissingHeader("User-Agent".into());
        let converted: AccountsError = err.into();

        assert!(matches!(converted, AccountsError::MissingHeader(_)));
    }
}
