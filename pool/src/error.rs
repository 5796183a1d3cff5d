use thiserror::Error;

/// Reasons a pool cannot be built from the given level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("max_concurrent must be greater than zero")]
    ZeroMaxConcurrent,

    #[error("catalog is empty")]
    EmptyCatalog,

    #[error("no enabled item matches the level order")]
    EmptyPool,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("invalid pool configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("item pool used before initialize")]
    NotInitialized,
}
