use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_admin, AuthenticatedUser},
    errors::AppError,
    models::dto::{request::SaveSchoolRequest, response::DeleteResponse},
};

#[get("/schools")]
async fn list_schools(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let schools = state.school_service.list_schools().await?;
    Ok(HttpResponse::Ok().json(schools))
}

#[post("/schools")]
async fn create_school(
    state: web::Data<AppState>,
    request: web::Json<SaveSchoolRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let school = state.school_service.create_school(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(school))
}

#[put("/schools/{id}")]
async fn update_school(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SaveSchoolRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let school = state
        .school_service
        .update_school(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(school))
}

#[delete("/schools/{id}")]
async fn delete_school(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    state.school_service.delete_school(&id).await?;
    Ok(HttpResponse::Ok().json(DeleteResponse {
        message: format!("School '{}' deleted", id),
    }))
}
