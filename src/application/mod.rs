pub mod dashboard;

pub use dashboard::{DashboardService, bootstrap_panels};
