use crate::db::engine::SqlBridge;
use crate::error::AuthStoreError;
use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use sqlx::mysql::MySqlDatabaseError;

/// MySQL error number for a duplicate entry on a unique key (ER_DUP_ENTRY).
pub const MYSQL_KEY_EXISTS: u16 = 1062;

/// MySQL server errors the storage layer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MySqlErrorKind {
    DuplicateKey,
    Other(u16),
}

impl MySqlErrorKind {
    pub fn from_number(number: u16) -> Self {
        match number {
            MYSQL_KEY_EXISTS => MySqlErrorKind::DuplicateKey,
            other => MySqlErrorKind::Other(other),
        }
    }

    /// Classifies a sqlx error. Only `sqlx::Error::Database` values that came from the
    /// MySQL driver carry an error number; everything else yields `None`.
    pub fn of(err: &sqlx::Error) -> Option<Self> {
        match err {
            sqlx::Error::Database(db_err) => db_err
                .try_downcast_ref::<MySqlDatabaseError>()
                .map(|e| Self::from_number(e.number())),
            _ => None,
        }
    }
}

fn is_duplicate_key(err: &sqlx::Error) -> bool {
    MySqlErrorKind::of(err) == Some(MySqlErrorKind::DuplicateKey)
}

/// DATETIME columns scan into `Option<NaiveDateTime>` and are read back as UTC.
/// Bound timestamps drop sub-second precision, since the server would round it.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlBridge;

impl MySqlBridge {
    pub fn new() -> Self {
        MySqlBridge
    }
}

impl SqlBridge for MySqlBridge {
    type TimeScan = Option<NaiveDateTime>;
    type TimeBind = DateTime<Utc>;

    fn convert_time_scan(
        &self,
        column: &str,
        value: Option<NaiveDateTime>,
    ) -> Result<DateTime<Utc>, AuthStoreError> {
        value
            .map(|naive| naive.and_utc())
            .ok_or_else(|| AuthStoreError::NullTime(column.to_string()))
    }

    fn convert_time(&self, t: DateTime<Utc>) -> DateTime<Utc> {
        t.trunc_subsecs(0)
    }

    fn is_duplicate_insert(&self, err: &sqlx::Error) -> bool {
        is_duplicate_key(err)
    }

    fn is_duplicate_update(&self, err: &sqlx::Error) -> bool {
        is_duplicate_key(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::error::Error as StdError;

    /// A unique violation reported by some driver other than MySQL.
    #[derive(Debug, thiserror::Error)]
    #[error("duplicate key value violates unique constraint")]
    struct ForeignUniqueViolation;

    impl DatabaseError for ForeignUniqueViolation {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::UniqueViolation
        }
    }

    #[test]
    fn only_1062_is_a_duplicate() {
        assert_eq!(
            MySqlErrorKind::from_number(1062),
            MySqlErrorKind::DuplicateKey
        );
        for number in [1451, 1452, 1048, 1146] {
            assert_eq!(
                MySqlErrorKind::from_number(number),
                MySqlErrorKind::Other(number)
            );
        }
    }

    #[test]
    fn non_database_errors_are_not_duplicates() {
        let bridge = MySqlBridge::new();
        for err in [sqlx::Error::RowNotFound, sqlx::Error::PoolTimedOut] {
            assert_eq!(MySqlErrorKind::of(&err), None);
            assert!(!bridge.is_duplicate_insert(&err));
            assert!(!bridge.is_duplicate_update(&err));
        }
    }

    #[test]
    fn foreign_database_errors_are_not_classified() {
        let bridge = MySqlBridge::new();
        let err = sqlx::Error::Database(Box::new(ForeignUniqueViolation));
        assert_eq!(MySqlErrorKind::of(&err), None);
        assert!(!bridge.is_duplicate_insert(&err));
        assert!(!bridge.is_duplicate_update(&err));
    }

    #[test]
    fn null_datetime_is_rejected_with_column_name() {
        match MySqlBridge.convert_time_scan("last_login", None) {
            Err(AuthStoreError::NullTime(column)) => assert_eq!(column, "last_login"),
            other => panic!("expected NullTime, got {other:?}"),
        }
    }

    #[test]
    fn datetime_round_trips_through_scan() {
        let bridge = MySqlBridge::new();
        let t = Utc.with_ymd_and_hms(2019, 7, 14, 8, 30, 15).unwrap();
        let bound = bridge.convert_time(t);
        assert_eq!(bound, t);
        let scanned = bridge
            .convert_time_scan("date_joined", Some(bound.naive_utc()))
            .unwrap();
        assert_eq!(scanned, t);
    }

    #[test]
    fn bound_time_truncates_fractional_seconds() {
        let bridge = MySqlBridge::new();
        let whole = Utc.with_ymd_and_hms(2019, 7, 14, 8, 30, 15).unwrap();
        for nanos in [1, 499_999_999, 500_000_000, 999_999_999] {
            let t = whole + Duration::nanoseconds(nanos);
            assert_eq!(bridge.convert_time(t), whole, "{nanos}ns");
        }
    }
}
