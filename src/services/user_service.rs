//! User service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::roles,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
    services::AuthService,
    utils::validation::validate_password,
};

/// User service for profile management
pub struct UserService;

impl UserService {
    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// List users with pagination
    pub async fn list_users(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        search: Option<&str>,
        role: Option<&str>,
    ) -> AppResult<(Vec<User>, i64)> {
        let offset = ((page.max(1) - 1) * per_page) as i64;
        let limit = per_page as i64;

        UserRepository::list(pool, offset, limit, search, role).await
    }

    /// Update a user's profile
    ///
    /// Users may only update their own profile unless they are admins.
    /// Password changes require the current password.
    pub async fn update_user(
        pool: &PgPool,
        requester_id: &Uuid,
        requester_role: &str,
        target_id: &Uuid,
        display_name: Option<&str>,
        email: Option<&str>,
        current_password: Option<&str>,
        new_password: Option<&str>,
    ) -> AppResult<User> {
        if requester_id != target_id && requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Cannot update other users' profiles".to_string(),
            ));
        }

        let user = Self::get_user_by_id(pool, target_id).await?;

        let password_hash = match new_password {
            Some(new_password) => {
                let current = current_password.ok_or_else(|| {
                    AppError::Validation(
                        "Current password is required to set a new password".to_string(),
                    )
                })?;

                if !AuthService::verify_password(current, &user.password_hash)? {
                    return Err(AppError::InvalidCredentials);
                }

                validate_password(new_password)
                    .map_err(|e| AppError::Validation(e.to_string()))?;

                Some(AuthService::hash_password(new_password)?)
            }
            None => None,
        };

        if let Some(email) = email {
            let taken = UserRepository::find_by_email(pool, email)
                .await?
                .is_some_and(|existing| existing.id != user.id);
            if taken {
                return Err(AppError::AlreadyExists("Email already registered".to_string()));
            }
        }

        UserRepository::update(pool, target_id, email, display_name, password_hash.as_deref())
            .await
    }
}
