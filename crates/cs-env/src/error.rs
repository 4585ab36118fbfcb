use cs_core::CoreError;
use cs_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("environment reported no board")]
    MissingBoard,

    #[error("environment reported no agent position")]
    MissingPosition,

    #[error("bad board: {0}")]
    Grid(#[from] GridError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type EnvResult<T> = Result<T, EnvError>;
