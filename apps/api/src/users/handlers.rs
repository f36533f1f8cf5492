//! Axum route handlers for the Users API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

impl CreateUserRequest {
    fn validate(&self) -> Result<(String, String), AppError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("name cannot be empty".to_string()));
        }
        let email = self.email.trim().to_lowercase();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => {
                return Err(AppError::Validation(format!(
                    "'{}' is not a valid email address",
                    self.email
                )))
            }
        }
        Ok((name.to_string(), email))
    }
}

/// GET /api/v1/users
pub async fn handle_list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserRow>>, AppError> {
    let users = sqlx::query_as::<_, UserRow>("SELECT * FROM users ORDER BY created_at, id")
        .fetch_all(&state.db)
        .await?;
    Ok(Json(users))
}

/// GET /api/v1/users/:id
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserRow>, AppError> {
    let user = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {id} not found")))?;
    Ok(Json(user))
}

/// POST /api/v1/users
pub async fn handle_create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserRow>), AppError> {
    let (name, email) = request.validate()?;

    let user = sqlx::query_as::<_, UserRow>(
        "INSERT INTO users (id, name, email) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(&name)
    .bind(&email)
    .fetch_one(&state.db)
    .await
    .map_err(|e| {
        if e.as_database_error()
            .is_some_and(|db| db.is_unique_violation())
        {
            AppError::Validation(format!("A user with email {email} already exists"))
        } else {
            AppError::Database(e)
        }
    })?;

    info!(user_id = %user.id, "Created user");
    Ok((StatusCode::CREATED, Json(user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(name: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_valid_user_normalized() {
        let (name, email) = req("  Ada ", " Ada@Example.COM ").validate().unwrap();
        assert_eq!(name, "Ada");
        assert_eq!(email, "ada@example.com");
    }

    #[test]
    fn test_invalid_users_rejected() {
        for (name, email) in [("", "a@b.c"), ("Ada", "no-at-sign"), ("Ada", "@b.c"), ("Ada", "a@")] {
            assert!(
                matches!(req(name, email).validate(), Err(AppError::Validation(_))),
                "{name:?} / {email:?} should be rejected"
            );
        }
    }
}
