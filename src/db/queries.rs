use crate::db::engine::{SessionSql, UserSql};
use crate::db::replacer::{SqlTemplateReplacer, UPDATE_CONTENT, ensure_resolved};
use crate::db::row_names::UserRowNames;
use crate::db::schema::{
    MYSQL_CLEANUP_SESSIONS, MYSQL_DELETE_SESSION, MYSQL_DELETE_SESSIONS_FOR_USER,
    MYSQL_DELETE_USER, MYSQL_GET_SESSION, MYSQL_INSERT_SESSION, MYSQL_INSERT_USER,
    MYSQL_QUERY_USER_EMAIL, MYSQL_QUERY_USER_ID, MYSQL_QUERY_USERNAME, MYSQL_SESSIONS_INIT,
    MYSQL_UPDATE_USER, MYSQL_UPDATE_USER_FIELDS, MYSQL_USERS_INIT,
};
use crate::error::AuthStoreError;
use std::collections::HashMap;

/// User statements for MySQL, built once from the templates in [`crate::db::schema`].
#[derive(Debug, Clone)]
pub struct MySqlQueries {
    init: Vec<String>,
    get_user: String,
    get_user_by_name: String,
    get_user_by_email: String,
    insert_user: String,
    update_user: String,
    delete_user: String,
    update_fields: String,
    row_names: UserRowNames,
}

impl MySqlQueries {
    pub fn new(replace_mapping: Option<&HashMap<String, String>>) -> Result<Self, AuthStoreError> {
        let replacer = SqlTemplateReplacer::with_overrides(replace_mapping);

        let update_fields = replacer.apply(MYSQL_UPDATE_USER_FIELDS);
        // only the per-call token may be left over
        ensure_resolved(&update_fields.replacen(UPDATE_CONTENT, "", 1))?;

        Ok(Self {
            init: vec![replacer.apply_resolved(MYSQL_USERS_INIT)?],
            get_user: replacer.apply_resolved(MYSQL_QUERY_USER_ID)?,
            get_user_by_name: replacer.apply_resolved(MYSQL_QUERY_USERNAME)?,
            get_user_by_email: replacer.apply_resolved(MYSQL_QUERY_USER_EMAIL)?,
            insert_user: replacer.apply_resolved(MYSQL_INSERT_USER)?,
            update_user: replacer.apply_resolved(MYSQL_UPDATE_USER)?,
            delete_user: replacer.apply_resolved(MYSQL_DELETE_USER)?,
            update_fields,
            row_names: UserRowNames::default(),
        })
    }

    /// Drops the partial-update template so every update writes all columns.
    pub fn without_field_updates(mut self) -> Self {
        self.update_fields.clear();
        self
    }

    fn assignments(&self, fields: &[&str]) -> Result<Vec<String>, AuthStoreError> {
        fields
            .iter()
            .map(|field| {
                self.row_names
                    .column(field)
                    .map(|column| format!("{column}=?"))
                    .ok_or_else(|| AuthStoreError::InvalidField(field.to_string()))
            })
            .collect()
    }
}

impl UserSql for MySqlQueries {
    fn init_users(&self) -> &[String] {
        &self.init
    }

    fn get_user(&self) -> &str {
        &self.get_user
    }

    fn get_user_by_name(&self) -> &str {
        &self.get_user_by_name
    }

    fn get_user_by_email(&self) -> &str {
        &self.get_user_by_email
    }

    fn insert_user(&self) -> &str {
        &self.insert_user
    }

    fn update_user(&self, fields: &[&str]) -> Result<String, AuthStoreError> {
        let updates = self.assignments(fields)?;
        if updates.is_empty() || !self.supports_user_fields() {
            return Ok(self.update_user.clone());
        }
        let stmt = self
            .update_fields
            .replacen(UPDATE_CONTENT, &updates.join(","), 1);
        ensure_resolved(&stmt)?;
        Ok(stmt)
    }

    fn delete_user(&self) -> &str {
        &self.delete_user
    }

    fn supports_user_fields(&self) -> bool {
        !self.update_fields.is_empty() && self.update_fields.contains(UPDATE_CONTENT)
    }

    fn row_names(&self) -> &UserRowNames {
        &self.row_names
    }
}

/// Session statements for MySQL.
#[derive(Debug, Clone)]
pub struct MySqlSessionQueries {
    init: Vec<String>,
    insert: String,
    get: String,
    delete: String,
    clean_up: String,
    delete_for_user: String,
}

impl MySqlSessionQueries {
    pub fn new(replace_mapping: Option<&HashMap<String, String>>) -> Result<Self, AuthStoreError> {
        let replacer = SqlTemplateReplacer::with_overrides(replace_mapping);
        Ok(Self {
            init: vec![replacer.apply_resolved(MYSQL_SESSIONS_INIT)?],
            insert: replacer.apply_resolved(MYSQL_INSERT_SESSION)?,
            get: replacer.apply_resolved(MYSQL_GET_SESSION)?,
            delete: replacer.apply_resolved(MYSQL_DELETE_SESSION)?,
            clean_up: replacer.apply_resolved(MYSQL_CLEANUP_SESSIONS)?,
            delete_for_user: replacer.apply_resolved(MYSQL_DELETE_SESSIONS_FOR_USER)?,
        })
    }
}

impl SessionSql for MySqlSessionQueries {
    fn init_sessions(&self) -> &[String] {
        &self.init
    }

    fn insert_session(&self) -> &str {
        &self.insert
    }

    fn get_session(&self) -> &str {
        &self.get
    }

    fn delete_session(&self) -> &str {
        &self.delete
    }

    fn clean_up_sessions(&self) -> &str {
        &self.clean_up
    }

    fn delete_for_user_sessions(&self) -> &str {
        &self.delete_for_user
    }
}
