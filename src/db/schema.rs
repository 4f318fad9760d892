//! MySQL statement templates for the user and session tables.
//! Tokens of the form `$NAME$` are filled in by [`crate::db::replacer::SqlTemplateReplacer`].

/// User table DDL.
/// - `id` BIGINT AUTO_INCREMENT primary key
/// - `username` always UNIQUE
/// - `email` uniqueness controlled by `$EMAIL_UNIQUE$`
/// - flags stored as BOOL (TINYINT(1))
pub const MYSQL_USERS_INIT: &str = r#"CREATE TABLE IF NOT EXISTS $TABLE_NAME$ (
id BIGINT AUTO_INCREMENT,
username VARCHAR(150) NOT NULL UNIQUE,
password VARCHAR(270) NOT NULL,
email VARCHAR(254) NOT NULL $EMAIL_UNIQUE$,
first_name VARCHAR(50) NOT NULL,
last_name VARCHAR(150) NOT NULL,
is_superuser BOOL NOT NULL,
is_staff BOOL NOT NULL,
is_active BOOL NOT NULL,
date_joined DATETIME NOT NULL,
last_login DATETIME NOT NULL,
PRIMARY KEY(id)
);"#;

pub const MYSQL_QUERY_USER_ID: &str = "SELECT * FROM $TABLE_NAME$ WHERE id=?;";

pub const MYSQL_QUERY_USERNAME: &str = "SELECT * FROM $TABLE_NAME$ WHERE username=?;";

pub const MYSQL_QUERY_USER_EMAIL: &str = "SELECT * FROM $TABLE_NAME$ WHERE email=?;";

pub const MYSQL_INSERT_USER: &str = r#"INSERT INTO $TABLE_NAME$(
username, password, email, first_name, last_name, is_superuser, is_staff,
is_active, date_joined, last_login)
VALUES(?, ?, ?, ?, ?, ?, ?, ?, ?, ?);"#;

pub const MYSQL_UPDATE_USER: &str = r#"UPDATE $TABLE_NAME$
SET username=?, password=?, email=?, first_name=?, last_name=?,
    is_superuser=?, is_staff=?, is_active=?, date_joined=?, last_login=?
WHERE id=?;"#;

pub const MYSQL_DELETE_USER: &str = "DELETE FROM $TABLE_NAME$ WHERE id = ?;";

/// `$UPDATE_CONTENT$` survives template application and is filled per call.
pub const MYSQL_UPDATE_USER_FIELDS: &str = r#"UPDATE $TABLE_NAME$
SET $UPDATE_CONTENT$
WHERE id = ?;"#;

/// Session table DDL. `session_key` is at most 39 characters.
pub const MYSQL_SESSIONS_INIT: &str = r#"CREATE TABLE IF NOT EXISTS $SESSION_TABLE_NAME$ (
session_key CHAR(39) NOT NULL,
user_id BIGINT NOT NULL,
expire_date DATETIME NOT NULL,
PRIMARY KEY(session_key),
INDEX(user_id)
);"#;

pub const MYSQL_INSERT_SESSION: &str =
    "INSERT INTO $SESSION_TABLE_NAME$ (session_key, user_id, expire_date) VALUES(?, ?, ?);";

pub const MYSQL_GET_SESSION: &str = "SELECT * FROM $SESSION_TABLE_NAME$ WHERE session_key=?;";

pub const MYSQL_DELETE_SESSION: &str = "DELETE FROM $SESSION_TABLE_NAME$ WHERE session_key=?;";

pub const MYSQL_CLEANUP_SESSIONS: &str = "DELETE FROM $SESSION_TABLE_NAME$ WHERE expire_date < ?;";

pub const MYSQL_DELETE_SESSIONS_FOR_USER: &str =
    "DELETE FROM $SESSION_TABLE_NAME$ WHERE user_id=?;";
