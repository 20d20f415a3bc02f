pub mod exam_service;
pub mod export_service;
pub mod model_service;
pub mod prompt_builder;
pub mod response_repair;
pub mod school_service;
pub mod subject_service;
pub mod user_service;
