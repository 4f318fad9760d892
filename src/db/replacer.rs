use crate::error::AuthStoreError;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

pub const TABLE_NAME: &str = "$TABLE_NAME$";
pub const SESSION_TABLE_NAME: &str = "$SESSION_TABLE_NAME$";
pub const EMAIL_UNIQUE: &str = "$EMAIL_UNIQUE$";
pub const UPDATE_CONTENT: &str = "$UPDATE_CONTENT$";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[A-Z][A-Z0-9_]*\$").expect("valid placeholder regex"));

/// Substitutes `$NAME$` tokens in statement templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlTemplateReplacer {
    entries: HashMap<String, String>,
}

impl Default for SqlTemplateReplacer {
    fn default() -> Self {
        let entries = [
            (TABLE_NAME, "auth_user"),
            (EMAIL_UNIQUE, "UNIQUE"),
            (SESSION_TABLE_NAME, "auth_session"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self { entries }
    }
}

impl SqlTemplateReplacer {
    /// Default mapping overlaid with `overrides`.
    pub fn with_overrides(overrides: Option<&HashMap<String, String>>) -> Self {
        let mut replacer = Self::default();
        if let Some(mapping) = overrides {
            replacer.update(mapping);
        }
        replacer
    }

    pub fn update(&mut self, mapping: &HashMap<String, String>) {
        self.entries
            .extend(mapping.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    pub fn get(&self, placeholder: &str) -> Option<&str> {
        self.entries.get(placeholder).map(String::as_str)
    }

    /// Single pass over `template`; tokens without a mapping are left as they are.
    pub fn apply(&self, template: &str) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures<'_>| {
                self.entries
                    .get(&caps[0])
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    /// Like [`apply`](Self::apply) but rejects output that still holds a token.
    pub fn apply_resolved(&self, template: &str) -> Result<String, AuthStoreError> {
        let sql = self.apply(template);
        ensure_resolved(&sql)?;
        Ok(sql)
    }
}

pub fn ensure_resolved(sql: &str) -> Result<(), AuthStoreError> {
    match PLACEHOLDER.find(sql) {
        Some(m) => Err(AuthStoreError::UnresolvedPlaceholder {
            placeholder: m.as_str().to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::{MYSQL_UPDATE_USER_FIELDS, MYSQL_USERS_INIT};

    #[test]
    fn defaults_fill_user_ddl() {
        let sql = SqlTemplateReplacer::default()
            .apply_resolved(MYSQL_USERS_INIT)
            .unwrap();
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS auth_user ("));
        assert!(sql.contains("email VARCHAR(254) NOT NULL UNIQUE,"));
    }

    #[test]
    fn overrides_replace_defaults() {
        let overrides = HashMap::from([
            (TABLE_NAME.to_string(), "members".to_string()),
            (EMAIL_UNIQUE.to_string(), String::new()),
        ]);
        let replacer = SqlTemplateReplacer::with_overrides(Some(&overrides));
        assert_eq!(replacer.get(SESSION_TABLE_NAME), Some("auth_session"));

        let sql = replacer.apply_resolved(MYSQL_USERS_INIT).unwrap();
        assert!(sql.contains("EXISTS members ("));
        assert!(sql.contains("email VARCHAR(254) NOT NULL ,"));
        assert!(!sql.contains("auth_user"));
    }

    #[test]
    fn apply_is_idempotent() {
        let replacer = SqlTemplateReplacer::default();
        let once = replacer.apply(MYSQL_USERS_INIT);
        assert_eq!(once, replacer.apply(MYSQL_USERS_INIT));
        assert_eq!(once, replacer.apply(&once));
    }

    #[test]
    fn unknown_tokens_survive_apply_but_fail_resolution() {
        let replacer = SqlTemplateReplacer::default();
        let sql = replacer.apply(MYSQL_UPDATE_USER_FIELDS);
        assert!(sql.contains(UPDATE_CONTENT));
        assert!(sql.starts_with("UPDATE auth_user"));

        match replacer.apply_resolved(MYSQL_UPDATE_USER_FIELDS) {
            Err(AuthStoreError::UnresolvedPlaceholder { placeholder }) => {
                assert_eq!(placeholder, UPDATE_CONTENT)
            }
            other => panic!("expected unresolved placeholder, got {other:?}"),
        }
    }

    #[test]
    fn replacement_values_are_not_rescanned() {
        let overrides = HashMap::from([(TABLE_NAME.to_string(), EMAIL_UNIQUE.to_string())]);
        let replacer = SqlTemplateReplacer::with_overrides(Some(&overrides));
        assert_eq!(replacer.apply("FROM $TABLE_NAME$"), "FROM $EMAIL_UNIQUE$");
    }
}
