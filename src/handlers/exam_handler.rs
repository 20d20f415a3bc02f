use actix_web::{get, http::header, post, web, HttpRequest, HttpResponse};
use chrono::{Datelike, Local};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::{ExamDocument, GradeLevel},
        dto::{
            request::{CurriculumQuery, ExportQuery, GenerateExamRequest, LevelQuery},
            response::{CurriculumResponse, GradeOption},
        },
    },
    services::export_service::{ExportFormat, ExportOptions},
};

#[post("/exams/generate")]
async fn generate_exam(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateExamRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let config = request.into_config();
    let request_id = get_request_id(&req).unwrap_or_default();
    log::info!(
        "[{}] '{}' requested an exam for {}",
        request_id,
        auth.0.username(),
        config.subject
    );

    let exam = state.exam_service.generate_exam(&config, &request_id).await?;
    Ok(HttpResponse::Ok().json(exam))
}

#[post("/exams/export")]
async fn export_exam(
    state: web::Data<AppState>,
    query: web::Query<ExportQuery>,
    exam: web::Json<ExamDocument>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let format = ExportFormat::parse(&query.format).ok_or_else(|| {
        AppError::ValidationError(format!("Unsupported export format '{}'", query.format))
    })?;

    let options = ExportOptions {
        include_answer_key: query.include_key,
        academic_year: Local::now().year(),
    };
    let document = state.export_service.export(&exam, format, options);

    let disposition = match format {
        ExportFormat::Word => "attachment",
        ExportFormat::Print => "inline",
    };

    Ok(HttpResponse::Ok()
        .content_type(document.content_type)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("{}; filename=\"{}\"", disposition, document.filename),
        ))
        .body(document.body))
}

#[get("/curriculum")]
async fn get_curriculum(
    state: web::Data<AppState>,
    query: web::Query<CurriculumQuery>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let CurriculumQuery { grade, semester } = query.into_inner();
    Ok(HttpResponse::Ok().json(CurriculumResponse {
        grade,
        semester,
        context: state.exam_service.curriculum_context(grade, semester),
    }))
}

#[get("/grades")]
async fn get_grades(
    query: web::Query<LevelQuery>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let level = query
        .level
        .ok_or_else(|| AppError::ValidationError("Query parameter 'level' is required".to_string()))?;

    let options: Vec<GradeOption> = GradeLevel::for_level(level)
        .iter()
        .copied()
        .map(GradeOption::from)
        .collect();
    Ok(HttpResponse::Ok().json(options))
}
