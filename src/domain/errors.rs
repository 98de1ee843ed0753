/// Simplified error system - one failure kind per flow, logged and never
/// surfaced in the UI.
#[derive(Debug, Clone)]
pub enum DashboardError {
    Network(String),
    Parse(String),
    Dom(String),
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::Network(msg) => write!(f, "Network Error: {}", msg),
            DashboardError::Parse(msg) => write!(f, "Parse Error: {}", msg),
            DashboardError::Dom(msg) => write!(f, "DOM Error: {}", msg),
        }
    }
}

impl std::error::Error for DashboardError {}

// Simple convenience type alias
pub type FetchResult<T> = Result<T, DashboardError>;
