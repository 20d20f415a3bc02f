use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_admin, AuthenticatedUser},
    errors::AppError,
    models::dto::{
        request::{LevelQuery, SaveSubjectRequest},
        response::DeleteResponse,
    },
};

#[get("/subjects")]
async fn list_subjects(
    state: web::Data<AppState>,
    query: web::Query<LevelQuery>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let subjects = state.subject_service.list_subjects(query.level).await?;
    Ok(HttpResponse::Ok().json(subjects))
}

#[post("/subjects")]
async fn create_subject(
    state: web::Data<AppState>,
    request: web::Json<SaveSubjectRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let subject = state
        .subject_service
        .create_subject(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(subject))
}

#[put("/subjects/{id}")]
async fn update_subject(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SaveSubjectRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let subject = state
        .subject_service
        .update_subject(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(subject))
}

#[delete("/subjects/{id}")]
async fn delete_subject(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    state.subject_service.delete_subject(&id).await?;
    Ok(HttpResponse::Ok().json(DeleteResponse {
        message: format!("Subject '{}' deleted", id),
    }))
}
