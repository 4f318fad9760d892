pub mod config;
pub mod db;
pub mod error;

pub use config::{Config, MySqlTestConfig};
pub use db::{MySqlStorage, SessionStorage, UserStorage};
pub use error::AuthStoreError;
