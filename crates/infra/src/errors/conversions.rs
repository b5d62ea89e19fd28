//! Mapping of adapter errors onto `MindsetError`
//!
//! The SQLite store only runs key/value upserts and lookups against one
//! file, so the failures worth telling apart are about that file: in use by
//! another process, not writable, out of space, or not a database at all.
//! HTTP errors only surface from transport; status codes are handled by the
//! callers that read the response body.

use mindset_domain::MindsetError;
use rusqlite::ffi::ErrorCode;

/// Adapter-side wrapper so foreign error conversions stay in this crate.
#[derive(Debug)]
pub struct InfraError(pub MindsetError);

impl From<InfraError> for MindsetError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<rusqlite::Error> for InfraError {
    fn from(err: rusqlite::Error) -> Self {
        use rusqlite::Error as Sql;

        let mapped = match &err {
            Sql::SqliteFailure(failure, _) => match file_problem(failure.code) {
                Some(problem) => MindsetError::Storage(format!("{problem}: {err}")),
                None => MindsetError::Storage(format!("sqlite error: {err}")),
            },
            Sql::InvalidPath(path) => {
                MindsetError::Config(format!("invalid database path: {}", path.display()))
            }
            Sql::FromSqlConversionFailure(..) | Sql::InvalidColumnType(..) | Sql::Utf8Error(_) => {
                MindsetError::Serialization(format!("unreadable stored value: {err}"))
            }
            _ => MindsetError::Storage(err.to_string()),
        };
        Self(mapped)
    }
}

fn file_problem(code: ErrorCode) -> Option<&'static str> {
    match code {
        ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked => {
            Some("database is in use by another process")
        }
        ErrorCode::ReadOnly | ErrorCode::PermissionDenied => Some("database file is not writable"),
        ErrorCode::DiskFull => Some("disk is full"),
        ErrorCode::CannotOpen => Some("database file cannot be opened"),
        ErrorCode::NotADatabase | ErrorCode::DatabaseCorrupt => {
            Some("file is not a usable Mindset database")
        }
        _ => None,
    }
}

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        Self(MindsetError::Storage(format!("connection pool error: {value}")))
    }
}

impl From<reqwest::Error> for InfraError {
    fn from(err: reqwest::Error) -> Self {
        let mapped = if err.is_timeout() {
            MindsetError::Network(format!("request timed out: {err}"))
        } else if err.is_connect() {
            MindsetError::Network(format!("could not connect: {err}"))
        } else if err.is_decode() {
            MindsetError::Serialization(format!("failed to decode response: {err}"))
        } else if err.is_builder() {
            MindsetError::Config(format!("invalid HTTP client settings: {err}"))
        } else {
            MindsetError::Network(err.to_string())
        };
        Self(mapped)
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use std::path::PathBuf;

    use rusqlite::ffi::Error as FfiError;
    use rusqlite::Connection;
    use tempfile::TempDir;

    use super::*;

    fn map(err: impl Into<InfraError>) -> MindsetError {
        err.into().into()
    }

    #[test]
    fn locked_database_names_the_cause() {
        let err = rusqlite::Error::SqliteFailure(
            FfiError { code: ErrorCode::DatabaseBusy, extended_code: 5 },
            Some("database is locked".into()),
        );

        match map(err) {
            MindsetError::Storage(msg) => assert!(msg.contains("in use by another process")),
            other => panic!("expected storage error, got {other:?}"),
        }
    }

    #[test]
    fn opening_a_text_file_reports_not_a_database() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mindset.db");
        std::fs::write(&path, "this is a shopping list, not a database").unwrap();

        let conn = Connection::open(&path).unwrap();
        let err = conn
            .query_row("SELECT count(*) FROM sqlite_master", [], |row| row.get::<_, i64>(0))
            .unwrap_err();

        match map(err) {
            MindsetError::Storage(msg) => assert!(msg.contains("not a usable Mindset database")),
            other => panic!("expected storage error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_path_is_a_config_error() {
        let err = rusqlite::Error::InvalidPath(PathBuf::from("/no/such/dir/mindset.db"));
        assert!(matches!(map(err), MindsetError::Config(msg) if msg.contains("/no/such/dir")));
    }

    #[test]
    fn non_text_value_is_a_serialization_error() {
        let conn = Connection::open_in_memory().unwrap();
        let err = conn.query_row("SELECT 42", [], |row| row.get::<_, String>(0)).unwrap_err();
        assert!(matches!(map(err), MindsetError::Serialization(_)));
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_error() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = reqwest::Client::builder().no_proxy().build().unwrap();

        let err = client.get(format!("http://127.0.0.1:{port}/")).send().await.unwrap_err();

        match map(err) {
            MindsetError::Network(msg) => assert!(msg.contains("could not connect")),
            other => panic!("expected network error, got {other:?}"),
        }
    }
}
