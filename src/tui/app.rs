use chrono::{DateTime, Utc};

use crate::data::{Deltas, Metrics, Observation};

/// View state for one drawn frame of the dashboard.
pub struct DashboardApp {
    pub symbol: String,
    pub table_rows: usize,
    pub rows: Vec<Observation>,
    pub latest: Metrics,
    pub deltas: Deltas,
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl DashboardApp {
    pub fn new(symbol: String, table_rows: usize) -> Self {
        Self {
            symbol,
            table_rows,
            rows: Vec::new(),
            latest: Metrics::default(),
            deltas: Deltas::default(),
            refreshed_at: None,
        }
    }
}
