use lf_store::Outcome;
use serde::Serialize;

/// Result of an admin action, as printed to stdout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse<T> {
    pub action: &'static str,
    pub id: String,
    /// `applied`, `missing`, `declined`, or `ignored`.
    pub outcome: &'static str,
    pub record: Option<T>,
}

impl<T> ActionResponse<T> {
    pub fn new(action: &'static str, id: &str, outcome: Outcome<T>) -> Self {
        let label = outcome.as_str();
        Self {
            action,
            id: id.to_string(),
            outcome: label,
            record: outcome.applied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use lf_store::Outcome;
    use pretty_assertions::assert_eq;

    use super::ActionResponse;

    #[test]
    fn applied_outcome_carries_record() {
        let response = ActionResponse::new("approve", "7", Outcome::Applied(42));
        assert_eq!(response.outcome, "applied");
        assert_eq!(response.record, Some(42));
    }

    #[test]
    fn missing_outcome_serializes_null_record() {
        let response = ActionResponse::<u8>::new("delete", "9", Outcome::Missing);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["outcome"], "missing");
        assert!(json["record"].is_null());
    }
}
