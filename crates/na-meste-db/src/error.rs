use thiserror::Error;

/// Failure of a repository call.
///
/// Constraint violations are separated from other database failures so that
/// services can answer 400 for bad references and duplicates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,

    /// A unique constraint was violated. Holds the constraint name.
    #[error("unique constraint violated: {0}")]
    Conflict(String),

    /// A referenced row does not exist. Holds the constraint name.
    #[error("foreign key constraint violated: {0}")]
    ForeignKey(String),

    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::RowNotFound = err {
            return RepositoryError::NotFound;
        }

        if let Some(db_err) = err.as_database_error() {
            let constraint = db_err.constraint().unwrap_or_default().to_string();
            if db_err.is_unique_violation() {
                return RepositoryError::Conflict(constraint);
            }
            if db_err.is_foreign_key_violation() {
                return RepositoryError::ForeignKey(constraint);
            }
        }

        RepositoryError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        assert_eq!(
            RepositoryError::from(sqlx::Error::RowNotFound),
            RepositoryError::NotFound
        );
    }

    #[test]
    fn test_other_errors_map_to_database() {
        let err = RepositoryError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, RepositoryError::Database(_)));
    }
}
