//! Shared test fixtures: in-memory store implementations.
//!
//! These doubles implement the photark-db store traits over plain maps so
//! orchestration and HTTP behavior can be tested without a database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use photark_core::UserId;
use photark_db::{
    AlbumStore, Job, JobQueue, NewUser, StoreError, User, UserMetadataKey, UserPatch, UserStatus,
    UserStore,
};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Build a user record with sensible defaults for tests.
#[allow(dead_code)]
pub fn make_user(email: &str, is_admin: bool) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        name: "Test User".to_string(),
        password: "hashed-password".to_string(),
        is_admin,
        status: UserStatus::Active,
        quota_size_in_bytes: None,
        quota_usage_in_bytes: 0,
        should_change_password: false,
        profile_image_path: String::new(),
        deleted_at: None,
        created_at: now,
        updated_at: now,
        preferences_patch: serde_json::json!({}),
    }
}

/// In-memory `UserStore` with call recording for resync assertions.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<Uuid, User>>,
    /// Quota value observed at each `sync_usage` call, in call order.
    sync_calls: Mutex<Vec<Option<i64>>>,
}

#[allow(dead_code)]
impl InMemoryUserStore {
    /// Insert a pre-built user record directly.
    pub fn insert(&self, user: User) -> UserId {
        let id = user.user_id();
        self.users.lock().unwrap().insert(user.id, user);
        id
    }

    /// Snapshot of a stored user record.
    pub fn stored(&self, id: UserId) -> Option<User> {
        self.users.lock().unwrap().get(id.as_uuid()).cloned()
    }

    /// Quota values observed by `sync_usage`, in call order.
    pub fn sync_calls(&self) -> Vec<Option<i64>> {
        self.sync_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get(&self, id: UserId, with_deleted: bool) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .get(id.as_uuid())
            .filter(|u| with_deleted || u.status == UserStatus::Active)
            .cloned())
    }

    async fn list(&self, with_deleted: bool) -> Result<Vec<User>, StoreError> {
        let users = self.users.lock().unwrap();
        let mut result: Vec<User> = users
            .values()
            .filter(|u| with_deleted || u.status == UserStatus::Active)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(result)
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == new_user.email) {
            return Err(StoreError::EmailConflict);
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: new_user.email,
            name: new_user.name,
            password: format!("hashed:{}", new_user.password),
            is_admin: false,
            status: UserStatus::Active,
            quota_size_in_bytes: new_user.quota_size_in_bytes,
            quota_usage_in_bytes: 0,
            should_change_password: new_user.should_change_password,
            profile_image_path: String::new(),
            deleted_at: None,
            created_at: now,
            updated_at: now,
            preferences_patch: serde_json::json!({}),
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();

        if let Some(ref email) = patch.email {
            if users
                .values()
                .any(|u| u.email == *email && u.id != *id.as_uuid())
            {
                return Err(StoreError::EmailConflict);
            }
        }

        let user = users
            .get_mut(id.as_uuid())
            .ok_or(StoreError::Database(sqlx::Error::RowNotFound))?;

        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(password) = patch.password {
            user.password = format!("hashed:{password}");
        }
        if let Some(is_admin) = patch.is_admin {
            user.is_admin = is_admin;
        }
        if let Some(should_change) = patch.should_change_password {
            user.should_change_password = should_change;
        }
        if let Some(quota) = patch.quota_size_in_bytes {
            user.quota_size_in_bytes = quota;
        }
        if let Some(status) = patch.status {
            user.status = status;
        }
        if let Some(deleted_at) = patch.deleted_at {
            user.deleted_at = deleted_at;
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    async fn upsert_metadata(
        &self,
        id: UserId,
        key: UserMetadataKey,
        value: serde_json::Value,
    ) -> Result<(), StoreError> {
        assert_eq!(key, UserMetadataKey::Preferences);
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(id.as_uuid())
            .ok_or(StoreError::Database(sqlx::Error::RowNotFound))?;
        user.preferences_patch = value;
        Ok(())
    }

    async fn sync_usage(&self, id: UserId) -> Result<(), StoreError> {
        let users = self.users.lock().unwrap();
        let quota = users
            .get(id.as_uuid())
            .ok_or(StoreError::Database(sqlx::Error::RowNotFound))?
            .quota_size_in_bytes;
        self.sync_calls.lock().unwrap().push(quota);
        Ok(())
    }
}

/// In-memory `AlbumStore` tracking per-owner album deletion state.
#[derive(Default)]
pub struct InMemoryAlbumStore {
    /// owner id -> deleted flags, one per album.
    albums: Mutex<HashMap<Uuid, Vec<Option<DateTime<Utc>>>>>,
}

#[allow(dead_code)]
impl InMemoryAlbumStore {
    /// Add an active album owned by the user.
    pub fn add_album(&self, owner_id: UserId) {
        self.albums
            .lock()
            .unwrap()
            .entry(*owner_id.as_uuid())
            .or_default()
            .push(None);
    }

    /// Number of soft-deleted albums owned by the user.
    pub fn deleted_count(&self, owner_id: UserId) -> usize {
        self.albums
            .lock()
            .unwrap()
            .get(owner_id.as_uuid())
            .map_or(0, |albums| {
                albums.iter().filter(|deleted| deleted.is_some()).count()
            })
    }

    /// Number of active albums owned by the user.
    pub fn active_count(&self, owner_id: UserId) -> usize {
        self.albums
            .lock()
            .unwrap()
            .get(owner_id.as_uuid())
            .map_or(0, |albums| {
                albums.iter().filter(|deleted| deleted.is_none()).count()
            })
    }
}

#[async_trait]
impl AlbumStore for InMemoryAlbumStore {
    async fn soft_delete_all(&self, owner_id: UserId) -> Result<(), StoreError> {
        let mut albums = self.albums.lock().unwrap();
        if let Some(owned) = albums.get_mut(owner_id.as_uuid()) {
            let now = Utc::now();
            for deleted in owned.iter_mut() {
                deleted.get_or_insert(now);
            }
        }
        Ok(())
    }

    async fn restore_all(&self, owner_id: UserId) -> Result<(), StoreError> {
        let mut albums = self.albums.lock().unwrap();
        if let Some(owned) = albums.get_mut(owner_id.as_uuid()) {
            for deleted in owned.iter_mut() {
                *deleted = None;
            }
        }
        Ok(())
    }
}

/// `JobQueue` that records every enqueued job.
#[derive(Default)]
pub struct RecordingJobQueue {
    jobs: Mutex<Vec<Job>>,
}

#[allow(dead_code)]
impl RecordingJobQueue {
    /// All jobs enqueued so far, in order.
    pub fn jobs(&self) -> Vec<Job> {
        self.jobs.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobQueue for RecordingJobQueue {
    async fn queue(&self, job: Job) -> Result<(), StoreError> {
        self.jobs.lock().unwrap().push(job);
        Ok(())
    }
}

/// `JobQueue` that fails every enqueue, for error-propagation tests.
#[allow(dead_code)]
#[derive(Default)]
pub struct FailingJobQueue;

#[async_trait]
impl JobQueue for FailingJobQueue {
    async fn queue(&self, _job: Job) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }
}

/// `AlbumStore` whose cascade operations always fail.
#[allow(dead_code)]
#[derive(Default)]
pub struct FailingAlbumStore;

#[async_trait]
impl AlbumStore for FailingAlbumStore {
    async fn soft_delete_all(&self, _owner_id: UserId) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn restore_all(&self, _owner_id: UserId) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }
}
