use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type UserId = i64;

pub const FIELD_ID: &str = "ID";
pub const FIELD_USERNAME: &str = "Username";
pub const FIELD_PASSWORD: &str = "Password";
pub const FIELD_EMAIL: &str = "EMail";
pub const FIELD_FIRST_NAME: &str = "FirstName";
pub const FIELD_LAST_NAME: &str = "LastName";
pub const FIELD_IS_SUPERUSER: &str = "IsSuperUser";
pub const FIELD_IS_STAFF: &str = "IsStaff";
pub const FIELD_IS_ACTIVE: &str = "IsActive";
pub const FIELD_DATE_JOINED: &str = "DateJoined";
pub const FIELD_LAST_LOGIN: &str = "LastLogin";

/// Every logical field name a partial update may reference.
pub const USER_FIELDS: [&str; 11] = [
    FIELD_ID,
    FIELD_USERNAME,
    FIELD_PASSWORD,
    FIELD_EMAIL,
    FIELD_FIRST_NAME,
    FIELD_LAST_NAME,
    FIELD_IS_SUPERUSER,
    FIELD_IS_STAFF,
    FIELD_IS_ACTIVE,
    FIELD_DATE_JOINED,
    FIELD_LAST_LOGIN,
];

/// A `UserModel` field, addressed by its logical name in partial updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    Id,
    Username,
    Password,
    Email,
    FirstName,
    LastName,
    IsSuperUser,
    IsStaff,
    IsActive,
    DateJoined,
    LastLogin,
}

impl UserField {
    pub const ALL: [UserField; 11] = [
        UserField::Id,
        UserField::Username,
        UserField::Password,
        UserField::Email,
        UserField::FirstName,
        UserField::LastName,
        UserField::IsSuperUser,
        UserField::IsStaff,
        UserField::IsActive,
        UserField::DateJoined,
        UserField::LastLogin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UserField::Id => FIELD_ID,
            UserField::Username => FIELD_USERNAME,
            UserField::Password => FIELD_PASSWORD,
            UserField::Email => FIELD_EMAIL,
            UserField::FirstName => FIELD_FIRST_NAME,
            UserField::LastName => FIELD_LAST_NAME,
            UserField::IsSuperUser => FIELD_IS_SUPERUSER,
            UserField::IsStaff => FIELD_IS_STAFF,
            UserField::IsActive => FIELD_IS_ACTIVE,
            UserField::DateJoined => FIELD_DATE_JOINED,
            UserField::LastLogin => FIELD_LAST_LOGIN,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// A row of the user table. `password` holds an already hashed value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserModel {
    pub id: UserId,
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_superuser: bool,
    pub is_staff: bool,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

impl UserModel {
    /// A fresh, active, non-staff user; `id` is assigned on insert.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            username: username.into(),
            password: password.into(),
            email: email.into(),
            first_name: String::new(),
            last_name: String::new(),
            is_superuser: false,
            is_staff: false,
            is_active: true,
            date_joined: now,
            last_login: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionEntry {
    pub key: String,
    pub user: UserId,
    pub expire_date: DateTime<Utc>,
}

impl SessionEntry {
    pub fn new(key: impl Into<String>, user: UserId, expire_date: DateTime<Utc>) -> Self {
        Self {
            key: key.into(),
            user,
            expire_date,
        }
    }

    /// Same predicate the cleanup statement uses: strictly before `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expire_date < now
    }
}
