pub mod actions;
pub mod dashboard;
pub mod query;

pub use actions::{FormOutcome, InvoiceActions};
pub use dashboard::DashboardService;
