use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The purchase a license key belongs to, as echoed back by the verify endpoint.
///
/// Every field is optional: Gumroad omits fields that do not apply to the
/// purchase, and validation treats a missing `license_key` or `refunded` as a
/// failed check rather than a decode error.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Purchase {
    #[serde(default)]
    pub license_key: Option<String>,
    #[serde(default)]
    pub refunded: Option<bool>,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub sale_id: Option<String>,
    #[serde(default)]
    pub sale_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub disputed: Option<bool>,
    #[serde(default)]
    pub dispute_won: Option<bool>,
    #[serde(default)]
    pub chargebacked: Option<bool>,
    #[serde(default)]
    pub subscription_ended_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub subscription_cancelled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub subscription_failed_at: Option<DateTime<Utc>>,
}

impl Purchase {
    /// Whether the payment is under an open dispute or was charged back.
    #[must_use]
    pub fn is_disputed(&self) -> bool {
        let open_dispute = self.disputed == Some(true) && self.dispute_won != Some(true);
        open_dispute || self.chargebacked == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn dates_are_iso8601() {
        let purchase: Purchase = serde_json::from_str(
            r#"{
                "license_key": "85DB562A-C11D4B06-A2335A6B-8C079166",
                "refunded": false,
                "sale_timestamp": "2021-01-05T19:38:56Z",
                "subscription_ended_at": null,
                "variants": "",
                "quantity": 1
            }"#,
        )
        .unwrap();

        assert_eq!(
            purchase.sale_timestamp,
            Some(Utc.with_ymd_and_hms(2021, 1, 5, 19, 38, 56).unwrap())
        );
        assert!(purchase.subscription_ended_at.is_none());
        assert_eq!(purchase.refunded, Some(false));
    }

    #[test]
    fn bad_date_fails_decode() {
        let res = serde_json::from_str::<Purchase>(r#"{"sale_timestamp": "yesterday"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn dispute_state() {
        let mut purchase = Purchase {
            disputed: Some(true),
            ..Purchase::default()
        };
        assert!(purchase.is_disputed());

        purchase.dispute_won = Some(true);
        assert!(!purchase.is_disputed());

        purchase.chargebacked = Some(true);
        assert!(purchase.is_disputed());

        assert!(!Purchase::default().is_disputed());
    }
}
