use chrono::{Local, NaiveDate};
use std::sync::Arc;

use crate::{
    constants::curriculum::CurriculumTable,
    errors::{AppResult, GenerationError},
    models::domain::{ExamDocument, GeneratorConfig, GradeLevel, Semester},
    services::{
        model_service::TextGenerator,
        prompt_builder::{subject_or_default, PromptBuilder},
        response_repair::parse_exam_payload,
    },
};

pub struct ExamService {
    prompt_builder: PromptBuilder,
    generator: Arc<dyn TextGenerator>,
}

impl ExamService {
    pub fn new(prompt_builder: PromptBuilder, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            prompt_builder,
            generator,
        }
    }

    pub fn curriculum(&self) -> &CurriculumTable {
        self.prompt_builder.curriculum()
    }

    pub fn curriculum_context(&self, grade: GradeLevel, semester: Semester) -> String {
        self.curriculum().context_for(grade, semester).to_string()
    }

    /// Runs one generation request end to end. Nothing is retried.
    pub async fn generate_exam(
        &self,
        config: &GeneratorConfig,
        request_id: &str,
    ) -> AppResult<ExamDocument> {
        self.generate_exam_on(config, Local::now().date_naive())
            .await
            .map_err(|e| {
                log::error!("{}", failure_message(request_id, &config.subject, &e));
                e.into()
            })
    }

    pub async fn generate_exam_on(
        &self,
        config: &GeneratorConfig,
        date: NaiveDate,
    ) -> Result<ExamDocument, GenerationError> {
        if !self.generator.has_credentials() {
            return Err(GenerationError::ProviderUnavailable);
        }

        let prompt = self.prompt_builder.build(config);
        log::info!(
            "Generating exam for {} {} {} ({} PG / {} uraian, prompt {} chars)",
            config.school_level,
            config.grade,
            config.semester.code(),
            config.mcq_count,
            config.essay_count,
            prompt.text.len()
        );

        let raw = self
            .generator
            .generate(&prompt.text, &prompt.response_schema)
            .await?
            .filter(|text| !text.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)?;

        let payload = parse_exam_payload(&raw, subject_or_default(&config.subject))?;

        Ok(ExamDocument::from_generation(payload, config, date))
    }
}

fn failure_message(request_id: &str, subject: &str, err: &GenerationError) -> String {
    match err {
        GenerationError::MalformedResponse { reason, excerpt } => format!(
            "[{}] Exam generation for '{}' returned malformed output: {} (excerpt: {})",
            request_id, subject, reason, excerpt
        ),
        other => format!(
            "[{}] Exam generation for '{}' failed: {}",
            request_id, subject, other
        ),
    }
}
