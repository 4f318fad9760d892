use crate::db::models::UserField;
use std::collections::HashMap;

/// Maps `UserModel` field names (e.g. `IsActive`) to column names (`is_active`).
/// Both the partial-update SQL and the value binding resolve fields through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRowNames {
    columns: HashMap<UserField, &'static str>,
}

impl Default for UserRowNames {
    fn default() -> Self {
        let columns = HashMap::from([
            (UserField::Id, "id"),
            (UserField::Username, "username"),
            (UserField::Password, "password"),
            (UserField::Email, "email"),
            (UserField::FirstName, "first_name"),
            (UserField::LastName, "last_name"),
            (UserField::IsSuperUser, "is_superuser"),
            (UserField::IsStaff, "is_staff"),
            (UserField::IsActive, "is_active"),
            (UserField::DateJoined, "date_joined"),
            (UserField::LastLogin, "last_login"),
        ]);
        Self { columns }
    }
}

impl UserRowNames {
    /// The field and its column, or `None` for a name that is not mapped.
    pub fn resolve(&self, name: &str) -> Option<(UserField, &'static str)> {
        let field = UserField::from_name(name)?;
        self.columns.get(&field).map(|column| (field, *column))
    }

    pub fn column(&self, name: &str) -> Option<&'static str> {
        self.resolve(name).map(|(_, column)| column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_model_field_has_a_column() {
        let names = UserRowNames::default();
        for field in UserField::ALL {
            assert_eq!(
                names.resolve(field.name()).map(|(f, _)| f),
                Some(field),
                "{} is unmapped",
                field.name()
            );
        }
        assert_eq!(names.column("IsActive"), Some("is_active"));
        assert_eq!(names.column("EMail"), Some("email"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let names = UserRowNames::default();
        assert_eq!(names.column("isactive"), None);
        assert_eq!(names.column("is_active"), None);
    }
}
