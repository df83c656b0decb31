use thiserror::Error;

use crate::template::TemplateError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Spec(#[from] common::Error),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
