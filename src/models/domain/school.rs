use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{domain::generator_config::SchoolLevel, dto::request::SaveSchoolRequest};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct SchoolProfile {
    pub id: String,
    pub name: String,
    pub level: SchoolLevel,
    pub logo_url: String,
    pub headmaster_name: String,
    pub headmaster_nip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl SchoolProfile {
    pub fn from_request(request: SaveSchoolRequest) -> Self {
        SchoolProfile {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            level: request.level,
            logo_url: request.logo_url,
            headmaster_name: request.headmaster_name,
            headmaster_nip: request.headmaster_nip,
            address: request.address,
            created_at: Some(Utc::now()),
        }
    }

    /// Applies an edit while keeping identity and creation time.
    pub fn apply(&self, request: SaveSchoolRequest) -> Self {
        SchoolProfile {
            id: self.id.clone(),
            created_at: self.created_at,
            ..SchoolProfile::from_request(request)
        }
    }
}
