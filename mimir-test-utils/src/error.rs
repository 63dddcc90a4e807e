use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    EsiError(#[from] eve_esi::Error),
    #[error(transparent)]
    MimirError(#[from] mimir::Error),
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
}
