pub mod curriculum;
pub mod exam_prompt;
pub mod seed_data;
