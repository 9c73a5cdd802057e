use tracing::{error, info};

use crate::notification::types::NotificationEvent;

use super::types::ReportSubmission;

/// Accepts a pollution report. There is no backend yet: the payload is only
/// logged, the local counter is bumped and the reporter gets a confirmation.
pub fn submit(report: &ReportSubmission, total_reports: &mut u32) -> NotificationEvent {
    *total_reports += 1;

    match serde_json::to_string(report) {
        Ok(payload) => info!(category = %report.category, %payload, "pollution report"),
        Err(err) => error!("report serialization error: {err}"),
    }

    NotificationEvent::success(
        "Report submitted!",
        format!(
            "Thank you for reporting pollution at {}. Our team will follow up shortly.",
            report.location
        ),
    )
}
