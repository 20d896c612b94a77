use chrono::NaiveDate;
use serde::Serialize;

/// Status of a single-day vacation request.
///
/// State machine: `Pending -> Approved` and `Pending -> Rejected` are the
/// only transitions; deletion is allowed from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VacationStatus {
    Pending,
    Approved,
    Rejected,
}

impl VacationStatus {
    pub fn to_db_str(self) -> &'static str {
        match self {
            VacationStatus::Pending => "pending",
            VacationStatus::Approved => "approved",
            VacationStatus::Rejected => "rejected",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(VacationStatus::Pending),
            "approved" => Some(VacationStatus::Approved),
            "rejected" => Some(VacationStatus::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for VacationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_db_str())
    }
}

/// One vacation request, covering exactly one calendar day.
/// At most one request may exist per (worker, date).
#[derive(Debug, Clone, Serialize)]
pub struct VacationRequest {
    pub id: i64,
    pub worker_id: i64,
    pub date: NaiveDate,
    pub status: VacationStatus,
    pub created_at: String, // ISO 8601
}

/// Which requests count against the annual allowance.
///
/// The official balance counts approved requests only; admission checks
/// (new requests, range-copy quota seeding) also reserve pending ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountPolicy {
    ApprovedOnly,
    PendingAndApproved,
}
