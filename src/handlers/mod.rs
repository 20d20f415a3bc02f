pub mod auth_handler;
pub mod exam_handler;
pub mod graphql_handler;
pub mod health_handler;
pub mod school_handler;
pub mod subject_handler;
pub mod user_handler;

use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

use crate::auth::bearer_validator;

/// Routes served without a bearer token.
pub fn configure_public(cfg: &mut web::ServiceConfig) {
    cfg.service(health_handler::health_check)
        .service(health_handler::readiness)
        .service(auth_handler::login)
        .service(graphql_handler::graphiql);
}

/// Routes mounted under `/api`, behind bearer authentication.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(exam_handler::generate_exam)
        .service(exam_handler::export_exam)
        .service(exam_handler::get_curriculum)
        .service(exam_handler::get_grades)
        .service(school_handler::list_schools)
        .service(school_handler::create_school)
        .service(school_handler::update_school)
        .service(school_handler::delete_school)
        .service(subject_handler::list_subjects)
        .service(subject_handler::create_subject)
        .service(subject_handler::update_subject)
        .service(subject_handler::delete_subject)
        .service(user_handler::list_users)
        .service(user_handler::create_user)
        .service(user_handler::update_user)
        .service(user_handler::delete_user)
        .service(graphql_handler::graphql);
}

/// Public routes plus the authenticated `/api` scope.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_public).service(
        web::scope("/api")
            .wrap(HttpAuthentication::bearer(bearer_validator))
            .configure(configure_api),
    );
}
