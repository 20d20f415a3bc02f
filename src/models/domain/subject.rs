use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{domain::generator_config::SchoolLevel, dto::request::SaveSubjectRequest};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct Subject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub levels: Vec<SchoolLevel>,
}

impl Subject {
    pub fn new(id: &str, name: &str, levels: &[SchoolLevel]) -> Self {
        Subject {
            id: id.to_string(),
            name: name.to_string(),
            levels: levels.to_vec(),
        }
    }

    pub fn from_request(request: SaveSubjectRequest) -> Self {
        Subject {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            levels: request.levels,
        }
    }

    pub fn applies_to(&self, level: SchoolLevel) -> bool {
        self.levels.contains(&level)
    }
}
