use rusqlite::ErrorCode;

/// Failures surfaced by the standings and pairing core.
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error("tournament store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("standings could not be computed: {0}")]
    SchemaError(String),
    #[error("cannot pair an odd number of players ({0})")]
    OddPlayerCount(usize),
}

impl From<r2d2::Error> for TournamentError {
    fn from(err: r2d2::Error) -> Self {
        Self::StoreUnavailable(err.to_string())
    }
}

impl From<rusqlite::Error> for TournamentError {
    fn from(err: rusqlite::Error) -> Self {
        if is_transport_failure(&err) {
            Self::StoreUnavailable(err.to_string())
        } else {
            Self::SchemaError(err.to_string())
        }
    }
}

fn is_transport_failure(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(failure, _) => matches!(
            failure.code,
            ErrorCode::CannotOpen
                | ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::NotADatabase
                | ErrorCode::SystemIoFailure
                | ErrorCode::PermissionDenied
        ),
        _ => false,
    }
}

/// Add context to store errors
pub fn store_context(operation: &str) -> String {
    format!("Failed to {} in tournament store", operation)
}

/// Add context to output errors
pub fn render_context(data_type: &str) -> String {
    format!("Failed to render {}", data_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_failure(code: std::os::raw::c_int) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(rusqlite::ffi::Error::new(code), None)
    }

    #[test]
    fn test_busy_database_is_unavailable() {
        let err = TournamentError::from(sqlite_failure(rusqlite::ffi::SQLITE_BUSY));
        assert!(matches!(err, TournamentError::StoreUnavailable(_)));
    }

    #[test]
    fn test_cannot_open_is_unavailable() {
        let err = TournamentError::from(sqlite_failure(rusqlite::ffi::SQLITE_CANTOPEN));
        assert!(matches!(err, TournamentError::StoreUnavailable(_)));
    }

    #[test]
    fn test_query_errors_are_schema_errors() {
        let err = TournamentError::from(rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(err, TournamentError::SchemaError(_)));

        let err = TournamentError::from(sqlite_failure(rusqlite::ffi::SQLITE_ERROR));
        assert!(matches!(err, TournamentError::SchemaError(_)));
    }

    #[test]
    fn test_odd_player_count_message() {
        let err = TournamentError::OddPlayerCount(5);
        assert_eq!(err.to_string(), "cannot pair an odd number of players (5)");
    }
}
