use async_graphql::SimpleObject;
use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::domain::generator_config::GeneratorConfig;

const MONTHS_ID: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

/// Kisi-kisi columns attached to every question.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, SimpleObject, JsonSchema)]
pub struct QuestionMetadata {
    /// Capaian Pembelajaran: the broad competency standard.
    pub cp: String,
    /// Alur Tujuan Pembelajaran: the specific learning objective.
    pub atp: String,
    /// Materi Esensial: the topic this question covers.
    pub material: String,
    /// Indikator Soal: an operational, testable statement starting with "Disajikan...".
    pub indicator: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoiceQuestion {
    pub id: i32,
    /// Plain text only, no markdown.
    pub question: String,
    /// Exactly 5 plain strings. Do NOT include "A." or "B." prefixes.
    #[schemars(length(equal = 5))]
    pub options: Vec<String>,
    /// Just the letter, e.g. "A".
    pub correct_answer: String,
    #[serde(flatten)]
    #[graphql(flatten)]
    pub metadata: QuestionMetadata,
}

impl MultipleChoiceQuestion {
    pub const OPTION_COUNT: usize = 5;
    pub const OPTION_LETTERS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

    /// Index of the correct option, if the answer letter names one.
    pub fn correct_index(&self) -> Option<usize> {
        let mut chars = self.correct_answer.chars();
        let letter = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::OPTION_LETTERS
            .iter()
            .position(|l| *l == letter)
            .filter(|i| *i < self.options.len())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EssayQuestion {
    pub id: i32,
    /// Plain text only.
    pub question: String,
    /// Full model answer followed by a scoring rubric (Pedoman Penskoran).
    /// Use newlines for structure. Plain text only, no markdown.
    pub answer_key: String,
    #[serde(flatten)]
    #[graphql(flatten)]
    pub metadata: QuestionMetadata,
}

/// The part of an exam the generation provider is responsible for.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExamPayload {
    /// Formal title, e.g. "SUMATIF AKHIR SEMESTER EKONOMI".
    pub title: String,
    pub subject: String,
    pub grade: String,
    pub semester: String,
    pub multiple_choice: Vec<MultipleChoiceQuestion>,
    pub essay: Vec<EssayQuestion>,
}

/// A finished exam package. Identity fields always come from the request,
/// never from the generator.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct ExamDocument {
    pub title: String,
    pub subject: String,
    pub grade: String,
    pub semester: String,
    pub multiple_choice: Vec<MultipleChoiceQuestion>,
    pub essay: Vec<EssayQuestion>,
    pub school_name: String,
    pub logo_url: String,
    pub headmaster_name: String,
    #[serde(rename = "headmasterNIP")]
    #[graphql(name = "headmasterNIP")]
    pub headmaster_nip: String,
    pub teacher_name: String,
    #[serde(rename = "teacherNIP")]
    #[graphql(name = "teacherNIP")]
    pub teacher_nip: String,
    pub date: String,
}

impl ExamDocument {
    pub fn from_generation(payload: ExamPayload, config: &GeneratorConfig, date: NaiveDate) -> Self {
        ExamDocument {
            title: payload.title,
            subject: payload.subject,
            grade: payload.grade,
            semester: payload.semester,
            multiple_choice: payload.multiple_choice,
            essay: payload.essay,
            school_name: config.school_name.clone(),
            logo_url: config.logo_url.clone(),
            headmaster_name: config.headmaster_name.clone(),
            headmaster_nip: config.headmaster_nip.clone(),
            teacher_name: config.teacher_name.clone(),
            teacher_nip: config.teacher_nip.clone(),
            date: format_exam_date(date),
        }
    }
}

/// Indonesian long date, e.g. "20 Mei 2024".
pub fn format_exam_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_ID[date.month0() as usize],
        date.year()
    )
}

#[cfg(test)]
pub mod fixtures {
    use super::*;

    pub fn metadata() -> QuestionMetadata {
        QuestionMetadata {
            cp: "Peserta didik mampu memahami konsep kelangkaan".to_string(),
            atp: "Menjelaskan masalah ekonomi".to_string(),
            material: "Kelangkaan".to_string(),
            indicator: "Disajikan ilustrasi kebutuhan, peserta didik dapat menentukan skala prioritas"
                .to_string(),
        }
    }

    pub fn mcq(id: i32, answer: &str) -> MultipleChoiceQuestion {
        MultipleChoiceQuestion {
            id,
            question: format!("Soal pilihan ganda nomor {}", id),
            options: ["satu", "dua", "tiga", "empat", "lima"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            correct_answer: answer.to_string(),
            metadata: metadata(),
        }
    }

    pub fn essay(id: i32) -> EssayQuestion {
        EssayQuestion {
            id,
            question: format!("Soal uraian nomor {}", id),
            answer_key: "Jawaban model.\nPedoman Penskoran: skor 10".to_string(),
            metadata: metadata(),
        }
    }

    pub fn payload() -> ExamPayload {
        ExamPayload {
            title: "SUMATIF AKHIR SEMESTER EKONOMI".to_string(),
            subject: "Ekonomi".to_string(),
            grade: "X (10)".to_string(),
            semester: "1 (Ganjil)".to_string(),
            multiple_choice: vec![mcq(1, "A"), mcq(2, "C")],
            essay: vec![essay(1)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::models::domain::generator_config::{GradeLevel, SchoolLevel};

    #[test]
    fn test_format_exam_date() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        assert_eq!(format_exam_date(date), "20 Mei 2024");

        let date = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        assert_eq!(format_exam_date(date), "3 Januari 2025");
    }

    #[test]
    fn test_metadata_is_flattened_in_json() {
        let value = serde_json::to_value(mcq(1, "B")).unwrap();

        assert_eq!(value["correctAnswer"], "B");
        assert_eq!(value["material"], "Kelangkaan");
        assert!(value.get("metadata").is_none());
    }

    #[test]
    fn test_correct_index() {
        assert_eq!(mcq(1, "A").correct_index(), Some(0));
        assert_eq!(mcq(1, "E").correct_index(), Some(4));
        assert_eq!(mcq(1, "F").correct_index(), None);
        assert_eq!(mcq(1, "AB").correct_index(), None);
        assert_eq!(mcq(1, "").correct_index(), None);
    }

    #[test]
    fn test_from_generation_uses_config_identity() {
        let config = GeneratorConfig::test_config("Ekonomi", GradeLevel::X, SchoolLevel::Sma);
        let date = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();

        let doc = ExamDocument::from_generation(payload(), &config, date);

        assert_eq!(doc.title, "SUMATIF AKHIR SEMESTER EKONOMI");
        assert_eq!(doc.school_name, config.school_name);
        assert_eq!(doc.logo_url, config.logo_url);
        assert_eq!(doc.headmaster_nip, config.headmaster_nip);
        assert_eq!(doc.teacher_name, config.teacher_name);
        assert_eq!(doc.date, "20 Mei 2024");
        assert_eq!(doc.multiple_choice.len(), 2);
    }

    #[test]
    fn test_document_uses_uppercase_nip_keys() {
        let config = GeneratorConfig::test_config("Ekonomi", GradeLevel::X, SchoolLevel::Sma);
        let date = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let value =
            serde_json::to_value(ExamDocument::from_generation(payload(), &config, date)).unwrap();

        assert_eq!(value["headmasterNIP"], "19700101 199501 1 001");
        assert_eq!(value["teacherNIP"], "19850505 201001 2 003");
        assert!(value.get("multipleChoice").is_some());
    }
}
