use async_graphql::Enum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Enum)]
pub enum SchoolLevel {
    #[serde(rename = "SMP")]
    Smp,
    #[serde(rename = "SMA")]
    Sma,
    #[serde(rename = "SMK")]
    Smk,
}

impl SchoolLevel {
    pub const ALL: [SchoolLevel; 3] = [SchoolLevel::Smp, SchoolLevel::Sma, SchoolLevel::Smk];

    pub fn code(&self) -> &'static str {
        match self {
            SchoolLevel::Smp => "SMP",
            SchoolLevel::Sma => "SMA",
            SchoolLevel::Smk => "SMK",
        }
    }
}

impl fmt::Display for SchoolLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Enum)]
pub enum GradeLevel {
    #[serde(rename = "VII", alias = "VII (7)")]
    Vii,
    #[serde(rename = "VIII", alias = "VIII (8)")]
    Viii,
    #[serde(rename = "IX", alias = "IX (9)")]
    Ix,
    #[serde(rename = "X", alias = "X (10)")]
    X,
    #[serde(rename = "XI", alias = "XI (11)")]
    Xi,
    #[serde(rename = "XII", alias = "XII (12)")]
    Xii,
}

impl GradeLevel {
    const LOWER_SECONDARY: [GradeLevel; 3] = [GradeLevel::Vii, GradeLevel::Viii, GradeLevel::Ix];
    const UPPER_SECONDARY: [GradeLevel; 3] = [GradeLevel::X, GradeLevel::Xi, GradeLevel::Xii];

    /// Grades offered at a school level, lowest first.
    pub fn for_level(level: SchoolLevel) -> &'static [GradeLevel] {
        match level {
            SchoolLevel::Smp => &Self::LOWER_SECONDARY,
            SchoolLevel::Sma | SchoolLevel::Smk => &Self::UPPER_SECONDARY,
        }
    }

    pub fn is_valid_for(&self, level: SchoolLevel) -> bool {
        Self::for_level(level).contains(self)
    }

    pub fn roman(&self) -> &'static str {
        match self {
            GradeLevel::Vii => "VII",
            GradeLevel::Viii => "VIII",
            GradeLevel::Ix => "IX",
            GradeLevel::X => "X",
            GradeLevel::Xi => "XI",
            GradeLevel::Xii => "XII",
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            GradeLevel::Vii => 7,
            GradeLevel::Viii => 8,
            GradeLevel::Ix => 9,
            GradeLevel::X => 10,
            GradeLevel::Xi => 11,
            GradeLevel::Xii => 12,
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.roman(), self.number())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Enum)]
pub enum Semester {
    #[serde(rename = "GANJIL", alias = "1 (Ganjil)")]
    Ganjil,
    #[serde(rename = "GENAP", alias = "2 (Genap)")]
    Genap,
}

impl Semester {
    pub fn code(&self) -> &'static str {
        match self {
            Semester::Ganjil => "GANJIL",
            Semester::Genap => "GENAP",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Semester::Ganjil => f.write_str("1 (Ganjil)"),
            Semester::Genap => f.write_str("2 (Genap)"),
        }
    }
}

/// Everything a single generation request needs: what to ask for and
/// whose names go on the finished document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub subject: String,
    pub topic: Option<String>,
    pub grade: GradeLevel,
    pub semester: Semester,
    pub school_level: SchoolLevel,
    pub school_name: String,
    pub logo_url: String,
    pub headmaster_name: String,
    pub headmaster_nip: String,
    pub teacher_name: String,
    pub teacher_nip: String,
    pub mcq_count: u32,
    pub essay_count: u32,
}

impl GeneratorConfig {
    /// Replaces a grade that does not belong to the school level with the
    /// first grade of that level.
    pub fn with_corrected_grade(mut self) -> Self {
        if !self.grade.is_valid_for(self.school_level) {
            self.grade = GradeLevel::for_level(self.school_level)[0];
        }
        self
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
impl GeneratorConfig {
    pub fn test_config(subject: &str, grade: GradeLevel, level: SchoolLevel) -> Self {
        GeneratorConfig {
            subject: subject.to_string(),
            topic: None,
            grade,
            semester: Semester::Ganjil,
            school_level: level,
            school_name: "SMAS DHARMA BAKTI".to_string(),
            logo_url: "https://example.com/logo.png".to_string(),
            headmaster_name: "Drs. H. Mulyadi, M.Pd".to_string(),
            headmaster_nip: "19700101 199501 1 001".to_string(),
            teacher_name: "Siti Aminah, S.Pd".to_string(),
            teacher_nip: "19850505 201001 2 003".to_string(),
            mcq_count: 25,
            essay_count: 5,
        }
    }
}
