//! User service for authentication and account management
//!
//! Password hashing and verification run on the blocking thread pool.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{UpdateAccount, UserRecord, UserRepository};
use fitness_tracker_shared::types::{
    AccountSummary, AuthResponse, RegisterRequest, UpdateAccountRequest, UpdateAccountResponse,
    UserProfile,
};
use fitness_tracker_shared::validation::{check_field, validate_email, validate_name, validate_password};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

/// User service for authentication operations
pub struct UserService;

/// Emails are compared case-insensitively
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Whether an error came from a unique constraint violation
pub(crate) fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .map(|e| e.is_unique_violation())
        .unwrap_or(false)
}

impl UserService {
    /// Register a new account and sign it in
    pub async fn register(
        pool: &PgPool,
        jwt_service: &JwtService,
        req: RegisterRequest,
    ) -> Result<AuthResponse, ApiError> {
        let name = req.name.trim().to_string();
        let email = normalize_email(&req.email);

        check_field("name", || validate_name(&name))?;
        check_field("email", || validate_email(&email))?;
        check_field("password", || validate_password(&req.password))?;

        if UserRepository::email_exists(pool, &email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }

        let password_hash = PasswordService::hash_async(req.password)
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(pool, &name, &email, &password_hash)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ApiError::Conflict("Email already registered".to_string())
                } else {
                    ApiError::Internal(e)
                }
            })?;

        metrics::counter!("accounts_registered_total").increment(1);
        info!(user_id = %user.id, "Account registered");

        Self::auth_response(jwt_service, "Registration successful", &user)
    }

    /// Login with email and password
    ///
    /// A legacy bcrypt hash is replaced with an argon2 hash once the password
    /// has been verified.
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let email = normalize_email(email);
        let user = UserRepository::find_by_email(pool, &email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

        let valid = PasswordService::verify_async(password.to_string(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }

        if PasswordService::is_legacy_hash(&user.password_hash) {
            Self::upgrade_legacy_hash(pool, user.id, password).await;
        }

        metrics::counter!("logins_total").increment(1);

        Self::auth_response(jwt_service, "Login successful", &user)
    }

    async fn upgrade_legacy_hash(pool: &PgPool, user_id: Uuid, password: &str) {
        let rehashed = match PasswordService::hash_async(password.to_string()).await {
            Ok(hash) => hash,
            Err(e) => {
                warn!(%user_id, "Failed to rehash legacy password: {}", e);
                return;
            }
        };

        match UserRepository::update_password_hash(pool, user_id, &rehashed).await {
            Ok(()) => info!(%user_id, "Upgraded legacy password hash"),
            Err(e) => warn!(%user_id, "Failed to store upgraded password hash: {}", e),
        }
    }

    /// Exchange a refresh token for a new token pair
    pub async fn refresh_token(
        pool: &PgPool,
        jwt_service: &JwtService,
        refresh_token: &str,
    ) -> Result<AuthResponse, ApiError> {
        let claims = jwt_service
            .validate_refresh_token(refresh_token)
            .map_err(|e| ApiError::Unauthorized(format!("Invalid refresh token: {}", e)))?;

        let user_id = claims
            .user_id()
            .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

        Self::auth_response(jwt_service, "Token refreshed", &user)
    }

    /// Get the signed-in user's profile
    pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<UserProfile, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(UserProfile {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        })
    }

    /// Update name, email and password
    ///
    /// The password only changes when both the current and new password are
    /// supplied and the current one verifies.
    pub async fn update_account(
        pool: &PgPool,
        user_id: Uuid,
        req: UpdateAccountRequest,
    ) -> Result<UpdateAccountResponse, ApiError> {
        let name = req.name.trim().to_string();
        check_field("name", || validate_name(&name))?;

        let email = req.email.as_deref().map(normalize_email);
        if let Some(ref email) = email {
            check_field("email", || validate_email(email))?;
        }
        if let Some(ref current) = req.current_password {
            check_field("current_password", || validate_password(current))?;
        }
        if let Some(ref new) = req.new_password {
            check_field("new_password", || validate_password(new))?;
        }

        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        if let Some(ref email) = email {
            if *email != user.email
                && UserRepository::email_taken_by_other(pool, email, user_id)
                    .await
                    .map_err(ApiError::Internal)?
            {
                return Err(ApiError::Conflict("Email already in use".to_string()));
            }
        }

        let password_hash = match (req.current_password, req.new_password) {
            (Some(current), Some(new)) => {
                let valid = PasswordService::verify_async(current, user.password_hash.clone())
                    .await
                    .map_err(ApiError::Internal)?;
                if !valid {
                    return Err(ApiError::Unauthorized(
                        "Current password is incorrect".to_string(),
                    ));
                }

                Some(
                    PasswordService::hash_async(new)
                        .await
                        .map_err(ApiError::Internal)?,
                )
            }
            _ => None,
        };

        let updated = UserRepository::update_account(
            pool,
            user_id,
            UpdateAccount {
                name,
                email,
                password_hash,
            },
        )
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::Conflict("Email already in use".to_string())
            } else {
                ApiError::Internal(e)
            }
        })?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        info!(%user_id, "Account updated");

        Ok(UpdateAccountResponse {
            message: "Account updated successfully".to_string(),
            user: AccountSummary {
                name: updated.name,
                email: updated.email,
            },
        })
    }

    fn auth_response(
        jwt_service: &JwtService,
        message: &str,
        user: &UserRecord,
    ) -> Result<AuthResponse, ApiError> {
        let access_token = jwt_service
            .generate_access_token(user.id)
            .map_err(ApiError::Internal)?;
        let refresh_token = jwt_service
            .generate_refresh_token(user.id)
            .map_err(ApiError::Internal)?;

        Ok(AuthResponse {
            message: message.to_string(),
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: jwt_service.access_token_expiry_secs(),
            user: AccountSummary {
                name: user.name.clone(),
                email: user.email.clone(),
            },
        })
    }
}
