use crate::{
    constants::seed_data::{seed_schools, seed_subjects, seed_users},
    models::domain::{SchoolProfile, Subject, User},
    repositories::Record,
};

impl Record for SchoolProfile {
    const ENTITY: &'static str = "School";
    const COLLECTION: &'static str = "schools";
    const LOCAL_KEY: &'static str = "app_schools";
    const KEY_FIELD: &'static str = "id";

    fn key(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed_schools()
    }
}

impl Record for Subject {
    const ENTITY: &'static str = "Subject";
    const COLLECTION: &'static str = "subjects";
    const LOCAL_KEY: &'static str = "app_subjects";
    const KEY_FIELD: &'static str = "id";

    fn key(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed_subjects()
    }
}

impl Record for User {
    const ENTITY: &'static str = "User";
    const COLLECTION: &'static str = "app_users";
    const LOCAL_KEY: &'static str = "app_users_list";
    const KEY_FIELD: &'static str = "username";

    fn key(&self) -> &str {
        &self.username
    }

    fn seed() -> Vec<Self> {
        seed_users()
    }
}
