use thiserror::Error;

use crate::comments::StoreError;
use crate::config::ConfigError;
use crate::input::InputError;
use crate::report::ReportError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("no results to report: {0}")]
    EmptyResults(String),
}
