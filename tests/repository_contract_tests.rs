use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::sync::RwLock;

use soal_server::{
    errors::{AppError, AppResult},
    models::domain::{SchoolLevel, SchoolProfile, Subject, User, UserRole},
    repositories::{
        LocalReferenceRepository, LocalStore, Record, ReferenceRepository, ResilientRepository,
    },
};

/// Stand-in for the remote table store. `online` toggles reachability.
struct InMemoryRepository<T: Record> {
    records: RwLock<HashMap<String, T>>,
    online: AtomicBool,
}

impl<T: Record> InMemoryRepository<T> {
    fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            online: AtomicBool::new(true),
        }
    }

    fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    fn check(&self) -> AppResult<()> {
        if self.online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::DatabaseError("server selection timeout".to_string()))
        }
    }
}

#[async_trait]
impl<T: Record> ReferenceRepository<T> for InMemoryRepository<T> {
    async fn list(&self) -> AppResult<Vec<T>> {
        self.check()?;
        let records = self.records.read().await;
        let mut items: Vec<T> = records.values().cloned().collect();
        items.sort_by(|a, b| a.key().cmp(b.key()));
        Ok(items)
    }

    async fn find(&self, key: &str) -> AppResult<Option<T>> {
        self.check()?;
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn create(&self, record: T) -> AppResult<T> {
        self.check()?;
        let mut records = self.records.write().await;
        if records.contains_key(record.key()) {
            return Err(AppError::AlreadyExists(format!(
                "{} '{}' already exists",
                T::ENTITY,
                record.key()
            )));
        }
        records.insert(record.key().to_string(), record.clone());
        Ok(record)
    }

    async fn update(&self, key: &str, record: T) -> AppResult<T> {
        self.check()?;
        self.records
            .write()
            .await
            .insert(key.to_string(), record.clone());
        Ok(record)
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.check()?;
        self.records
            .write()
            .await
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("{} '{}' not found", T::ENTITY, key)))
    }
}

fn local<T: Record>(dir: &TempDir) -> Arc<LocalReferenceRepository<T>> {
    Arc::new(LocalReferenceRepository::new(Arc::new(LocalStore::new(
        dir.path(),
    ))))
}

fn resilient<T: Record>(
    remote: &Arc<InMemoryRepository<T>>,
    local: &Arc<LocalReferenceRepository<T>>,
) -> ResilientRepository<T> {
    let remote: Arc<dyn ReferenceRepository<T>> = remote.clone();
    let local: Arc<dyn ReferenceRepository<T>> = local.clone();
    ResilientRepository::new(Some(remote), local)
}

fn make_subject(id: &str, name: &str) -> Subject {
    Subject::new(id, name, &[SchoolLevel::Sma, SchoolLevel::Smk])
}

fn make_school(id: &str, name: &str) -> SchoolProfile {
    SchoolProfile {
        id: id.to_string(),
        name: name.to_string(),
        level: SchoolLevel::Smp,
        logo_url: String::new(),
        headmaster_name: "Hj. Nurhayati, S.Pd".to_string(),
        headmaster_nip: "19720808 199803 2 005".to_string(),
        address: None,
        created_at: None,
    }
}

async fn exercise_contract(repo: &dyn ReferenceRepository<Subject>) {
    let subject = make_subject("contract-1", "Sejarah Indonesia");

    repo.create(subject.clone()).await.expect("create should work");
    let duplicate = repo.create(subject.clone()).await;
    assert!(matches!(duplicate, Err(AppError::AlreadyExists(_))));

    let found = repo.find("contract-1").await.expect("find should work");
    assert_eq!(found, Some(subject.clone()));
    assert!(repo.find("missing").await.expect("find should work").is_none());

    let renamed = make_subject("contract-1", "Sejarah Tingkat Lanjut");
    repo.update("contract-1", renamed.clone())
        .await
        .expect("update should work");
    assert_eq!(repo.find("contract-1").await.unwrap(), Some(renamed));

    let inserted = make_subject("contract-2", "Antropologi");
    repo.update("contract-2", inserted.clone())
        .await
        .expect("update of absent key inserts");
    assert!(repo.list().await.unwrap().contains(&inserted));

    repo.delete("contract-1").await.expect("delete should work");
    assert!(repo.find("contract-1").await.unwrap().is_none());
    let missing = repo.delete("contract-1").await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn in_memory_repository_honours_contract() {
    exercise_contract(&InMemoryRepository::<Subject>::new()).await;
}

#[tokio::test]
async fn local_repository_honours_contract() {
    let dir = TempDir::new().unwrap();
    exercise_contract(local::<Subject>(&dir).as_ref()).await;
}

#[tokio::test]
async fn resilient_repository_honours_contract() {
    let dir = TempDir::new().unwrap();
    let remote = Arc::new(InMemoryRepository::new());
    exercise_contract(&resilient(&remote, &local(&dir))).await;
}

#[tokio::test]
async fn reads_prefer_remote_when_it_has_data() {
    let dir = TempDir::new().unwrap();
    let remote = Arc::new(InMemoryRepository::new());
    remote
        .create(make_school("remote-1", "SMPN 5 BANDUNG"))
        .await
        .unwrap();
    let repo = resilient(&remote, &local(&dir));

    let schools = repo.list().await.unwrap();

    assert_eq!(schools.len(), 1);
    assert_eq!(schools[0].id, "remote-1");
}

#[tokio::test]
async fn empty_remote_falls_back_to_local_seed() {
    let dir = TempDir::new().unwrap();
    let remote = Arc::new(InMemoryRepository::<SchoolProfile>::new());
    let repo = resilient(&remote, &local(&dir));

    let schools = repo.list().await.unwrap();

    assert_eq!(schools.len(), 3);
    assert!(schools.iter().any(|s| s.id == "sch_demo_1"));
}

#[tokio::test]
async fn outage_writes_land_locally_and_sync_on_next_edit() {
    let dir = TempDir::new().unwrap();
    let remote = Arc::new(InMemoryRepository::new());
    let local = local::<Subject>(&dir);
    let repo = resilient(&remote, &local);

    remote.set_online(false);
    repo.create(make_subject("offline-1", "Informatika"))
        .await
        .expect("write succeeds while remote is down");
    assert!(repo.find("offline-1").await.unwrap().is_some());

    remote.set_online(true);
    // the remote never saw the record
    assert!(remote.find("offline-1").await.unwrap().is_none());
    assert!(repo.find("offline-1").await.unwrap().is_some());

    repo.update("offline-1", make_subject("offline-1", "Informatika Lanjut"))
        .await
        .unwrap();
    assert_eq!(
        remote.find("offline-1").await.unwrap().map(|s| s.name),
        Some("Informatika Lanjut".to_string())
    );
}

#[tokio::test]
async fn remote_only_record_can_be_deleted() {
    let dir = TempDir::new().unwrap();
    let remote = Arc::new(InMemoryRepository::new());
    remote
        .create(make_subject("remote-only", "Bahasa Mandarin"))
        .await
        .unwrap();
    let repo = resilient(&remote, &local(&dir));

    repo.delete("remote-only").await.expect("delete should work");

    assert!(remote.find("remote-only").await.unwrap().is_none());
}

#[tokio::test]
async fn local_only_record_can_be_deleted_once_remote_returns() {
    let dir = TempDir::new().unwrap();
    let remote = Arc::new(InMemoryRepository::new());
    let local = local::<Subject>(&dir);
    let repo = resilient(&remote, &local);

    remote.set_online(false);
    repo.create(make_subject("offline-2", "Sejarah Lokal"))
        .await
        .unwrap();
    remote.set_online(true);

    repo.delete("offline-2")
        .await
        .expect("remote NotFound must not fail the delete");

    assert!(local.find("offline-2").await.unwrap().is_none());
    assert!(remote.find("offline-2").await.unwrap().is_none());
    assert!(matches!(
        repo.delete("offline-2").await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn users_are_keyed_by_username() {
    let dir = TempDir::new().unwrap();
    let remote = Arc::new(InMemoryRepository::new());
    let repo = resilient(&remote, &local::<User>(&dir));

    let user = User::new("siti", "Siti Aminah", UserRole::User)
        .with_password_hash("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string());
    repo.create(user.clone()).await.unwrap();

    assert_eq!(remote.find("siti").await.unwrap(), Some(user.clone()));
    assert_eq!(repo.find("siti").await.unwrap(), Some(user));
}
