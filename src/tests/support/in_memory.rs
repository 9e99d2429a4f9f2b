//! In-memory adapters behind the outgoing ports, with write counters so tests
//! can assert how many times a record was persisted.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::catalog::application::domain::{CatalogEntity, CatalogKind};
use crate::catalog::application::ports::outgoing::{CatalogRepository, CatalogRepositoryError};
use crate::system::application::domain::SystemDocument;
use crate::system::application::ports::outgoing::{SystemRepository, SystemRepositoryError};
use crate::user::application::domain::entities::{User, UserDetail};
use crate::user::application::ports::outgoing::{
    UserDetailsRepository, UserDetailsRepositoryError, UserRepository, UserRepositoryError,
};

#[derive(Default)]
struct UserTables {
    users: HashMap<Uuid, User>,
    details: HashMap<Uuid, UserDetail>,
    user_writes: usize,
    detail_writes: usize,
}

/// Backs both user repositories so services wired with it share one state.
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    tables: Arc<Mutex<UserTables>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, user: User) -> Self {
        self.tables.lock().unwrap().users.insert(user.id, user);
        self
    }

    pub fn with_detail(self, detail: UserDetail) -> Self {
        self.tables
            .lock()
            .unwrap()
            .details
            .insert(detail.user_id, detail);
        self
    }

    pub fn user(&self, id: Uuid) -> Option<User> {
        self.tables.lock().unwrap().users.get(&id).cloned()
    }

    pub fn user_by_email(&self, email: &str) -> Option<User> {
        self.tables
            .lock()
            .unwrap()
            .users
            .values()
            .find(|u| u.email == email)
            .cloned()
    }

    pub fn detail(&self, user_id: Uuid) -> Option<UserDetail> {
        self.tables.lock().unwrap().details.get(&user_id).cloned()
    }

    pub fn user_count(&self) -> usize {
        self.tables.lock().unwrap().users.len()
    }

    /// Inserts and updates on the users table since creation.
    pub fn user_writes(&self) -> usize {
        self.tables.lock().unwrap().user_writes
    }

    pub fn detail_writes(&self) -> usize {
        self.tables.lock().unwrap().detail_writes
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.user(user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.user_by_email(email))
    }

    async fn find_by_nickname_and_tag(
        &self,
        nickname: &str,
        tag: &str,
    ) -> Result<Option<User>, UserRepositoryError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .users
            .values()
            .find(|u| u.nickname == nickname && u.tag == tag)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        let mut users: Vec<User> = self.tables.lock().unwrap().users.values().cloned().collect();
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }

    async fn insert(&self, user: User) -> Result<User, UserRepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(UserRepositoryError::UserAlreadyExists);
        }
        tables.user_writes += 1;
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, UserRepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.users.contains_key(&user.id) {
            return Err(UserRepositoryError::UserNotFound);
        }
        tables.user_writes += 1;
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        self.tables
            .lock()
            .unwrap()
            .users
            .remove(&user_id)
            .map(|_| ())
            .ok_or(UserRepositoryError::UserNotFound)
    }
}

#[async_trait]
impl UserDetailsRepository for InMemoryUserStore {
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserDetail>, UserDetailsRepositoryError> {
        Ok(self.detail(user_id))
    }

    async fn insert(&self, detail: UserDetail) -> Result<UserDetail, UserDetailsRepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        tables.detail_writes += 1;
        tables.details.insert(detail.user_id, detail.clone());
        Ok(detail)
    }

    async fn update(&self, detail: UserDetail) -> Result<UserDetail, UserDetailsRepositoryError> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.details.contains_key(&detail.user_id) {
            return Err(UserDetailsRepositoryError::NotFound);
        }
        tables.detail_writes += 1;
        tables.details.insert(detail.user_id, detail.clone());
        Ok(detail)
    }

    async fn delete_by_user_id(&self, user_id: Uuid) -> Result<(), UserDetailsRepositoryError> {
        self.tables.lock().unwrap().details.remove(&user_id);
        Ok(())
    }
}

#[derive(Default)]
struct CatalogTable {
    entities: HashMap<(CatalogKind, Uuid), CatalogEntity>,
    writes: usize,
}

#[derive(Clone, Default)]
pub struct InMemoryCatalogStore {
    table: Arc<Mutex<CatalogTable>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity(self, entity: CatalogEntity) -> Self {
        self.table
            .lock()
            .unwrap()
            .entities
            .insert((entity.kind, entity.id), entity);
        self
    }

    pub fn entity(&self, kind: CatalogKind, id: Uuid) -> Option<CatalogEntity> {
        self.table.lock().unwrap().entities.get(&(kind, id)).cloned()
    }

    pub fn writes(&self) -> usize {
        self.table.lock().unwrap().writes
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogStore {
    async fn find_all(
        &self,
        kind: CatalogKind,
        active: bool,
    ) -> Result<Vec<CatalogEntity>, CatalogRepositoryError> {
        Ok(self
            .table
            .lock()
            .unwrap()
            .entities
            .values()
            .filter(|e| e.kind == kind && e.active == active)
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        kind: CatalogKind,
        id: Uuid,
    ) -> Result<Option<CatalogEntity>, CatalogRepositoryError> {
        Ok(self.entity(kind, id))
    }

    async fn insert(&self, entity: CatalogEntity) -> Result<CatalogEntity, CatalogRepositoryError> {
        let mut table = self.table.lock().unwrap();
        table.writes += 1;
        table
            .entities
            .insert((entity.kind, entity.id), entity.clone());
        Ok(entity)
    }

    async fn save(&self, entity: CatalogEntity) -> Result<CatalogEntity, CatalogRepositoryError> {
        let mut table = self.table.lock().unwrap();
        if !table.entities.contains_key(&(entity.kind, entity.id)) {
            return Err(CatalogRepositoryError::NotFound);
        }
        table.writes += 1;
        table
            .entities
            .insert((entity.kind, entity.id), entity.clone());
        Ok(entity)
    }

    async fn delete(&self, kind: CatalogKind, id: Uuid) -> Result<(), CatalogRepositoryError> {
        let mut table = self.table.lock().unwrap();
        table
            .entities
            .remove(&(kind, id))
            .map(|_| ())
            .ok_or(CatalogRepositoryError::NotFound)?;
        table.writes += 1;
        Ok(())
    }
}

#[derive(Default)]
struct SystemTable {
    systems: HashMap<Uuid, SystemDocument>,
    writes: usize,
}

#[derive(Clone, Default)]
pub struct InMemorySystemStore {
    table: Arc<Mutex<SystemTable>>,
}

impl InMemorySystemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_system(self, system: SystemDocument) -> Self {
        self.table
            .lock()
            .unwrap()
            .systems
            .insert(system.id, system);
        self
    }

    pub fn system(&self, id: Uuid) -> Option<SystemDocument> {
        self.table.lock().unwrap().systems.get(&id).cloned()
    }

    pub fn writes(&self) -> usize {
        self.table.lock().unwrap().writes
    }
}

#[async_trait]
impl SystemRepository for InMemorySystemStore {
    async fn find_all(&self) -> Result<Vec<SystemDocument>, SystemRepositoryError> {
        Ok(self.table.lock().unwrap().systems.values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SystemDocument>, SystemRepositoryError> {
        Ok(self.system(id))
    }

    async fn insert(&self, system: SystemDocument) -> Result<SystemDocument, SystemRepositoryError> {
        let mut table = self.table.lock().unwrap();
        table.writes += 1;
        table.systems.insert(system.id, system.clone());
        Ok(system)
    }

    async fn save(&self, system: SystemDocument) -> Result<SystemDocument, SystemRepositoryError> {
        let mut table = self.table.lock().unwrap();
        if !table.systems.contains_key(&system.id) {
            return Err(SystemRepositoryError::NotFound);
        }
        table.writes += 1;
        table.systems.insert(system.id, system.clone());
        Ok(system)
    }
}
