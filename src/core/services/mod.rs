pub mod session_service;
pub mod summary_service;
pub mod transaction_service;

pub use session_service::{SessionService, SessionView};
pub use summary_service::{AccountSummary, SummaryService};
pub use transaction_service::TransactionService;
