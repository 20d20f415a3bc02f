use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::LoginRequest, response::AuthResponse},
};

#[post("/auth/login")]
async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let user = state
        .user_service
        .authenticate(&request.username, &request.password)
        .await
        .map_err(|e| {
            log::warn!("Failed login for '{}'", request.username);
            e
        })?;

    let access_token = state.jwt_service.create_token(&user)?;
    log::info!("User '{}' logged in", user.username);

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.jwt_service.expiration_hours() * 3600,
        user: user.into(),
    }))
}
