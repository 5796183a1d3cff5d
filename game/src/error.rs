use thiserror::Error;

use catalog::CatalogError;
use pool::PoolError;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("level error: {0}")]
    Level(#[from] CatalogError),

    #[error("item pool error: {0}")]
    Pool(#[from] PoolError),

    #[error("game session has not been started")]
    NotStarted,

    #[error("game session already started")]
    AlreadyStarted,
}
