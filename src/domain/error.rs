use thiserror::Error;

use crate::domain::entities::user::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("page size must be greater than zero")]
    InvalidPageSize,

    #[error("duplicate user id {0:?} in source")]
    DuplicateId(UserId),
}
