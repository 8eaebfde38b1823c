//! Typed repository errors.

use thiserror::Error;

/// Outcomes of a repository call that callers must tell apart.
///
/// `NotFound` is the zero-row outcome of a point lookup. `NoRowsAffected` is
/// the zero-row outcome of an update or delete, which doubles as an existence
/// check without a prior read. Everything else the store can produce (lost
/// connection, constraint violation, cancellation) lands in `Db`.
#[derive(Error, Debug)]
pub enum RepoError {
    #[error("not found")]
    NotFound,
    #[error("no rows affected")]
    NoRowsAffected,
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}
