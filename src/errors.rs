use thiserror::Error;

/// Failures raised while establishing a session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Wrong account or password")]
    InvalidCredentials,
}

/// Failures raised by operations that require an active session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("No active session")]
    NoActiveSession,
    #[error("Account for the active session no longer exists")]
    AccountMissing,
}

/// Failures raised while validating a transfer.
#[derive(Debug, Error, PartialEq)]
pub enum TransferError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("Transfer amount must be positive")]
    InvalidAmount,
    #[error("Insufficient funds: balance is {balance:.2}, requested {requested:.2}")]
    InsufficientFunds { balance: f64, requested: f64 },
    #[error("Unknown recipient '{0}'")]
    UnknownRecipient(String),
    #[error("Cannot transfer to the active account")]
    SelfTransfer,
}

/// Failures raised while validating a loan request.
#[derive(Debug, Error, PartialEq)]
pub enum LoanError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("Loan amount must be positive")]
    InvalidAmount,
    #[error("No deposit large enough to secure a loan of {requested:.2}")]
    NotEligible { requested: f64 },
}

/// Failures raised while loading or persisting configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("No usable configuration directory")]
    NoConfigDir,
}

/// Failures raised while closing the active account.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CloseError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("Confirmation credentials do not match the active account")]
    ConfirmationMismatch,
}
