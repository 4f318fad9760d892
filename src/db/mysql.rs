use crate::db::bridge::MySqlBridge;
use crate::db::engine::{SessionStorage, SqlSessionStorage, SqlUserStorage, UserStorage};
use crate::db::models::{SessionEntry, UserId, UserModel};
use crate::db::queries::{MySqlQueries, MySqlSessionQueries};
use crate::error::AuthStoreError;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
use std::collections::HashMap;

pub type MySqlUserStorage = SqlUserStorage<MySqlQueries, MySqlBridge>;
pub type MySqlSessionStorage = SqlSessionStorage<MySqlSessionQueries, MySqlBridge>;

impl SqlUserStorage<MySqlQueries, MySqlBridge> {
    /// User storage on a caller-owned pool. `replace_mapping` overrides
    /// template placeholders such as `$TABLE_NAME$`.
    pub fn from_pool(
        pool: MySqlPool,
        replace_mapping: Option<&HashMap<String, String>>,
    ) -> Result<Self, AuthStoreError> {
        let queries = MySqlQueries::new(replace_mapping)?;
        Ok(Self::new(pool, queries, MySqlBridge::new()))
    }
}

impl SqlSessionStorage<MySqlSessionQueries, MySqlBridge> {
    pub fn from_pool(
        pool: MySqlPool,
        replace_mapping: Option<&HashMap<String, String>>,
    ) -> Result<Self, AuthStoreError> {
        let queries = MySqlSessionQueries::new(replace_mapping)?;
        Ok(Self::new(pool, queries, MySqlBridge::new()))
    }
}

/// User and session storage sharing one pool.
#[derive(Clone)]
pub struct MySqlStorage {
    users: MySqlUserStorage,
    sessions: MySqlSessionStorage,
}

impl MySqlStorage {
    pub fn from_pool(
        pool: MySqlPool,
        replace_mapping: Option<&HashMap<String, String>>,
    ) -> Result<Self, AuthStoreError> {
        Ok(Self {
            users: MySqlUserStorage::from_pool(pool.clone(), replace_mapping)?,
            sessions: MySqlSessionStorage::from_pool(pool, replace_mapping)?,
        })
    }

    pub fn pool(&self) -> &MySqlPool {
        self.users.pool()
    }

    pub fn users(&self) -> &MySqlUserStorage {
        &self.users
    }

    pub fn sessions(&self) -> &MySqlSessionStorage {
        &self.sessions
    }

    /// Creates both tables if they do not exist yet.
    pub async fn init(&self) -> Result<(), AuthStoreError> {
        self.users.init_users().await?;
        self.sessions.init_sessions().await
    }
}

impl UserStorage for MySqlStorage {
    async fn init_users(&self) -> Result<(), AuthStoreError> {
        self.users.init_users().await
    }

    async fn get_user(&self, id: UserId) -> Result<UserModel, AuthStoreError> {
        self.users.get_user(id).await
    }

    async fn get_user_by_name(&self, username: &str) -> Result<UserModel, AuthStoreError> {
        self.users.get_user_by_name(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AuthStoreError> {
        self.users.get_user_by_email(email).await
    }

    async fn insert_user(&self, user: &UserModel) -> Result<UserId, AuthStoreError> {
        self.users.insert_user(user).await
    }

    async fn update_user(
        &self,
        id: UserId,
        user: &UserModel,
        fields: &[&str],
    ) -> Result<(), AuthStoreError> {
        self.users.update_user(id, user, fields).await
    }

    async fn delete_user(&self, id: UserId) -> Result<(), AuthStoreError> {
        self.users.delete_user(id).await
    }
}

impl SessionStorage for MySqlStorage {
    async fn init_sessions(&self) -> Result<(), AuthStoreError> {
        self.sessions.init_sessions().await
    }

    async fn insert_session(&self, session: &SessionEntry) -> Result<(), AuthStoreError> {
        self.sessions.insert_session(session).await
    }

    async fn get_session(&self, key: &str) -> Result<SessionEntry, AuthStoreError> {
        self.sessions.get_session(key).await
    }

    async fn delete_session(&self, key: &str) -> Result<(), AuthStoreError> {
        self.sessions.delete_session(key).await
    }

    async fn clean_up(&self, reference: DateTime<Utc>) -> Result<u64, AuthStoreError> {
        self.sessions.clean_up(reference).await
    }

    async fn delete_for_user(&self, user: UserId) -> Result<u64, AuthStoreError> {
        self.sessions.delete_for_user(user).await
    }
}
