use crate::services::media::error::MediaError;
use sea_orm::DbErr;
use std::{error, fmt};

/// Wrapper for failures of operations that touch both the database and
/// the media storage, so photo handling code can propagate either side
/// with `?`.
#[derive(Debug)]
pub enum RepositoryError {
    Db(DbErr),
    Media(MediaError),
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        RepositoryError::Db(err)
    }
}

impl From<MediaError> for RepositoryError {
    fn from(err: MediaError) -> Self {
        RepositoryError::Media(err)
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::Db(err) => write!(f, "database error: {}", err),
            RepositoryError::Media(err) => write!(f, "media storage error: {}", err),
        }
    }
}

impl error::Error for RepositoryError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            RepositoryError::Db(err) => Some(err),
            RepositoryError::Media(err) => Some(err),
        }
    }
}
