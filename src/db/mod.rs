//! Database module: MySQL binding for user and session storage.
//!
//! Layout:
//! - `schema.rs`: statement templates with `$NAME$` placeholders
//! - `replacer.rs`: placeholder substitution
//! - `row_names.rs`: model field name to column mapping
//! - `queries.rs`: finished statement bundles for users and sessions
//! - `bridge.rs`: MySQL type handling and duplicate-key detection
//! - `engine.rs`: storage traits and the sqlx-backed engine
//! - `mysql.rs`: pool-bound facades
//! - `models.rs`: row structs

pub mod bridge;
pub mod engine;
pub mod models;
pub mod mysql;
pub mod queries;
pub mod replacer;
pub mod row_names;
pub mod schema;

pub use bridge::{MYSQL_KEY_EXISTS, MySqlBridge, MySqlErrorKind};
pub use engine::{SessionStorage, SqlBridge, UserStorage};
pub use models::{SessionEntry, UserId, UserModel};
pub use mysql::{MySqlSessionStorage, MySqlStorage, MySqlUserStorage};
pub use queries::{MySqlQueries, MySqlSessionQueries};
pub use replacer::SqlTemplateReplacer;
pub use row_names::UserRowNames;
