use thiserror::Error;

use crate::model::AmountError;
use crate::quiz::QuizError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Amount(#[from] AmountError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}
