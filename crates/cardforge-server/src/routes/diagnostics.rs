//! Best-effort service and database diagnostics

use crate::AppState;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Collections reported at most
const MAX_COLLECTIONS: usize = 10;

/// Error messages are cut to this many characters
const MAX_ERROR_CHARS: usize = 80;

/// Diagnostic report returned by `GET /test`
#[derive(Debug, Serialize, Deserialize)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl Default for DiagnosticsReport {
    fn default() -> Self {
        Self {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: None,
            database_name: None,
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        }
    }
}

fn truncate(msg: &str) -> String {
    msg.chars().take(MAX_ERROR_CHARS).collect()
}

/// Report service status and, best effort, database connectivity
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    let mut report = DiagnosticsReport::default();

    let Some(store) = state.store.as_deref() else {
        report.database = "⚠️  Available but not initialized".to_string();
        return Json(report);
    };

    report.database = "✅ Available".to_string();
    report.database_url = Some(
        if state.config.database_url.is_some() {
            "✅ Set"
        } else {
            "❌ Not Set"
        }
        .to_string(),
    );
    report.database_name = Some(store.name().to_string());
    report.connection_status = "Connected".to_string();

    match store.list_collection_names().await {
        Ok(mut collections) => {
            collections.truncate(MAX_COLLECTIONS);
            report.collections = collections;
            report.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            warn!("Diagnostics could not list collections: {}", e);
            report.database = format!("⚠️  Connected but Error: {}", truncate(&e.to_string()));
        }
    }

    Json(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_characters() {
        let long = "é".repeat(100);
        assert_eq!(truncate(&long).chars().count(), MAX_ERROR_CHARS);
        assert_eq!(truncate("short"), "short");
    }
}
