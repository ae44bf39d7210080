//! 内存用户仓储
//!
//! 与广告仓储使用各自独立的锁，跨仓储的读写不具备原子性。

use std::collections::HashMap;

use async_trait::async_trait;
use domain::{DomainError, DomainResult, NewUser, User, UserRepository};
use tokio::sync::Mutex;

struct UserStore {
    entries: HashMap<i64, User>,
    next_id: i64,
}

/// 互斥锁守护的内存用户仓储
pub struct MemoryUserRepository {
    inner: Mutex<UserStore>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(UserStore {
                entries: HashMap::new(),
                next_id: 0,
            }),
        }
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, draft: NewUser) -> DomainResult<User> {
        let mut store = self.inner.lock().await;
        let user = User {
            id: store.next_id,
            name: draft.name,
            email: draft.email,
        };
        store.entries.insert(user.id, user.clone());
        store.next_id += 1;
        tracing::debug!(user_id = user.id, "user created");
        Ok(user)
    }

    async fn update(&self, id: i64, name: String, email: String) -> DomainResult<User> {
        let mut store = self.inner.lock().await;
        let user = store
            .entries
            .get_mut(&id)
            .ok_or(DomainError::UserNotFound)?;
        user.name = name;
        user.email = email;
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let mut store = self.inner.lock().await;
        if store.entries.remove(&id).is_none() {
            return Err(DomainError::UserNotFound);
        }
        tracing::debug!(user_id = id, "user deleted");
        Ok(())
    }

    async fn get(&self, id: i64) -> DomainResult<User> {
        let store = self.inner.lock().await;
        store
            .entries
            .get(&id)
            .cloned()
            .ok_or(DomainError::UserNotFound)
    }
}
