pub mod exam;
pub mod generator_config;
pub mod school;
pub mod subject;
pub mod user;

pub use exam::{
    EssayQuestion, ExamDocument, ExamPayload, MultipleChoiceQuestion, QuestionMetadata,
};
pub use generator_config::{GeneratorConfig, GradeLevel, SchoolLevel, Semester};
pub use school::SchoolProfile;
pub use subject::Subject;
pub use user::{User, UserRole};
