use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error aggregation")]
    Aggregate(Vec<AppError>),
    #[error("File operation failed")]
    FileOperationFailed(#[from] std::io::Error),
    #[error("Task execution failed")]
    TaskJoinFailed(#[from] tokio::task::JoinError),
    #[error("Terminal not initialized")]
    TerminalNotInitialized,
}
