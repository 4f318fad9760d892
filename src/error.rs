use crate::db::models::UserId;
use sqlx::Error as SqlxError;
use std::fmt;
use thiserror::Error as ThisError;

/// Which lookup key failed to match a stored user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    Id(UserId),
    Username(String),
    Email(String),
}

impl fmt::Display for UserLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserLookup::Id(id) => write!(f, "id={id}"),
            UserLookup::Username(name) => write!(f, "username={name}"),
            UserLookup::Email(email) => write!(f, "email={email}"),
        }
    }
}

#[derive(Debug, ThisError)]
pub enum AuthStoreError {
    #[error("no such user: {0}")]
    NoSuchUser(UserLookup),

    #[error("no such session")]
    NoSuchSession,

    #[error("ambiguous credentials: {0}")]
    AmbiguousCredentials(String),

    #[error("ambiguous session key")]
    AmbiguousSessionKey,

    #[error("invalid field name \"{0}\": must be a valid field name of UserModel")]
    InvalidField(String),

    #[error("got NULL datetime in column {0}, expected to be not NULL")]
    NullTime(String),

    #[error("unresolved placeholder {placeholder} in statement")]
    UnresolvedPlaceholder { placeholder: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("invalid connection url: {0}")]
    InvalidConnectionUrl(String),

    #[error("Config error: {0}")]
    Config(#[from] figment::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),
}

impl AuthStoreError {
    pub fn is_ambiguous_credentials(&self) -> bool {
        matches!(self, AuthStoreError::AmbiguousCredentials(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AuthStoreError::NoSuchUser(_) | AuthStoreError::NoSuchSession
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_display_names_the_key() {
        let err = AuthStoreError::NoSuchUser(UserLookup::Username("alice".to_string()));
        assert_eq!(err.to_string(), "no such user: username=alice");
        assert!(err.is_not_found());
        assert!(!err.is_ambiguous_credentials());
    }

    #[test]
    fn database_errors_pass_through_unchanged() {
        let err: AuthStoreError = SqlxError::RowNotFound.into();
        assert!(matches!(
            err,
            AuthStoreError::DatabaseError(SqlxError::RowNotFound)
        ));
        assert!(!err.is_not_found());
    }
}
