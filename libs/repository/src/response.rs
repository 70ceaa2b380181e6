use sea_orm::DbErr;

use crate::RepositoryError;

pub(crate) type Response<T> = Result<T, RepositoryError>;

pub(crate) trait IntoResponse<T> {
    /// Attaches `message` to any database error.
    fn into_response(self, message: &str) -> Response<T>;

    /// Like `into_response`, but a write that matched no row becomes
    /// `Ok(None)` instead of an error.
    fn into_optional_response(self, message: &str) -> Response<Option<T>>;
}

fn in_sea_orm(message: &str, source: DbErr) -> RepositoryError {
    RepositoryError::InSeaOrmDbErr {
        message: message.to_string(),
        source,
    }
}

impl<T> IntoResponse<T> for Result<T, DbErr> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| in_sea_orm(message, e))
    }

    fn into_optional_response(self, message: &str) -> Response<Option<T>> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => Ok(None),
            Err(e) => Err(in_sea_orm(message, e)),
        }
    }
}
