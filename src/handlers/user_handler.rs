use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_admin, AuthenticatedUser},
    errors::AppError,
    models::dto::{request::SaveUserRequest, response::DeleteResponse},
};

#[get("/users")]
async fn list_users(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let users = state.user_service.list_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

#[post("/users")]
async fn create_user(
    state: web::Data<AppState>,
    request: web::Json<SaveUserRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let user = state.user_service.create_user(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

#[put("/users/{username}")]
async fn update_user(
    state: web::Data<AppState>,
    username: web::Path<String>,
    request: web::Json<SaveUserRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let user = state
        .user_service
        .update_user(&username, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(user))
}

#[delete("/users/{username}")]
async fn delete_user(
    state: web::Data<AppState>,
    username: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    if auth.0.username() == username.as_str() {
        return Err(AppError::ValidationError(
            "You cannot delete your own account".to_string(),
        ));
    }

    state.user_service.delete_user(&username).await?;
    Ok(HttpResponse::Ok().json(DeleteResponse {
        message: format!("User '{}' deleted", username),
    }))
}
