use schemars::schema_for;
use serde_json::Value;

use crate::{
    constants::{
        curriculum::CurriculumTable,
        exam_prompt::{
            SubjectCategory, SubjectOverride, ANSWER_KEY_DIRECTIVE, AUDIENCE_SMA, AUDIENCE_SMK,
            AUDIENCE_SMP, CURRICULUM_SCOPE_CLAUSE, DEFAULT_SUBJECT, FORMATTING_DIRECTIVE,
            KISI_KISI_DIRECTIVE, SUBJECT_OVERRIDES,
        },
    },
    models::domain::{ExamPayload, GeneratorConfig, SchoolLevel},
};

/// Prompt text plus the JSON Schema the provider must answer with.
#[derive(Debug, Clone)]
pub struct ExamPrompt {
    pub text: String,
    pub response_schema: Value,
}

#[derive(Clone)]
pub struct PromptBuilder {
    curriculum: CurriculumTable,
}

impl PromptBuilder {
    pub fn new(curriculum: CurriculumTable) -> Self {
        Self { curriculum }
    }

    pub fn curriculum(&self) -> &CurriculumTable {
        &self.curriculum
    }

    pub fn build(&self, config: &GeneratorConfig) -> ExamPrompt {
        let subject = subject_or_default(&config.subject);
        let level = config.school_level;
        let curriculum_context = self.curriculum.context_for(config.grade, config.semester);

        let topic_clause = match config.topic() {
            Some(topic) => format!(
                "FOKUS MATERI / TOPIK KHUSUS: \"{}\". (Pastikan 80% soal berfokus pada topik ini, sisanya materi pendukung yang relevan).",
                topic
            ),
            None => CURRICULUM_SCOPE_CLAUSE.to_string(),
        };

        let overrides = subject_overrides(subject)
            .map(|o| o.directive)
            .collect::<Vec<_>>()
            .join("\n\n");

        let smk_quality = if level == SchoolLevel::Smk {
            "\n   - If SMK, ensure questions are practical and scenario-based."
        } else {
            ""
        };

        let text = format!(
            "You are an expert {subject} teacher for Indonesian Schools ({level}) implementing Kurikulum Merdeka.
Your task is to create a complete Exam Package (Soal + Kisi-kisi + Kunci Jawaban) for \"Sumatif Akhir Semester\".

CONTEXT DATA:
Grade: {grade}
Semester: {semester}
Subject: {subject}
{audience}

OFFICIAL CURRICULUM REFERENCE (Must Follow):
{curriculum_context}

{topic_clause}

Directives for Content Generation:
{kisi_kisi}

2. Question Quality:
   - Questions must use HOTS (Higher Order Thinking Skills) where appropriate.
   - Use stimulus (charts, data descriptions, case studies) relevant to {subject}.{smk_quality}

3. Structure:
   - {mcq_count} Multiple Choice Questions (Options A-E).
   - {essay_count} Essay Questions (Uraian).

{answer_keys}

{formatting}
{overrides}
Generate the full exam package now.",
            subject = subject,
            level = level,
            grade = config.grade,
            semester = config.semester,
            audience = audience_clause(level),
            curriculum_context = curriculum_context,
            topic_clause = topic_clause,
            kisi_kisi = KISI_KISI_DIRECTIVE,
            smk_quality = smk_quality,
            mcq_count = config.mcq_count,
            essay_count = config.essay_count,
            answer_keys = ANSWER_KEY_DIRECTIVE,
            formatting = FORMATTING_DIRECTIVE,
            overrides = if overrides.is_empty() {
                String::new()
            } else {
                format!("\n{}\n", overrides)
            },
        );

        ExamPrompt {
            text,
            response_schema: response_schema(),
        }
    }
}

pub fn subject_or_default(subject: &str) -> &str {
    let trimmed = subject.trim();
    if trimmed.is_empty() {
        DEFAULT_SUBJECT
    } else {
        trimmed
    }
}

pub fn audience_clause(level: SchoolLevel) -> &'static str {
    match level {
        SchoolLevel::Smp => AUDIENCE_SMP,
        SchoolLevel::Smk => AUDIENCE_SMK,
        SchoolLevel::Sma => AUDIENCE_SMA,
    }
}

/// Overrides whose fragments occur in the subject name, ignoring case.
pub fn subject_overrides(subject: &str) -> impl Iterator<Item = &'static SubjectOverride> {
    let subject = subject.to_lowercase();
    SUBJECT_OVERRIDES
        .iter()
        .filter(move |o| o.fragments.iter().any(|f| subject.contains(f)))
}

pub fn subject_categories(subject: &str) -> Vec<SubjectCategory> {
    subject_overrides(subject).map(|o| o.category).collect()
}

/// JSON Schema of [`ExamPayload`]; every top-level field is required.
pub fn response_schema() -> Value {
    let mut schema = schema_for!(ExamPayload).to_value();
    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
    }
    schema
}
