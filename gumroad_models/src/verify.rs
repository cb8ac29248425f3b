use serde::{Deserialize, Serialize};

use super::purchase::Purchase;

/// Body returned by `POST /v2/licenses/verify`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct VerificationResponse {
    pub success: bool,
    #[serde(default)]
    pub purchase: Option<Purchase>,
    #[serde(default)]
    pub uses: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_without_purchase() {
        let res: VerificationResponse = serde_json::from_str(
            r#"{"success": false, "message": "That license does not exist for the provided product."}"#,
        )
        .unwrap();
        assert!(!res.success);
        assert!(res.purchase.is_none());
        assert!(res.message.is_some());
    }

    #[test]
    fn success_is_required() {
        assert!(serde_json::from_str::<VerificationResponse>(r#"{"uses": 3}"#).is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let res: VerificationResponse = serde_json::from_str(
            r#"{"success": true, "uses": 3, "purchase": {"license_key": "X", "refunded": false, "custom_fields": []}}"#,
        )
        .unwrap();
        assert_eq!(res.uses, Some(3));
        let purchase = res.purchase.unwrap();
        assert_eq!(purchase.license_key.as_deref(), Some("X"));
    }
}
