//! Mock API fixtures
//!
//! Canned JSON bodies for the demo's API paths. Defined once as process-wide
//! constants, never mutated. The values mirror what the real backend would
//! report for the demo data set.

/// Fixture endpoints, relative to the configured API prefix.
pub const HEALTH_ENDPOINT: &str = "health";
pub const DASHBOARD_ENDPOINT: &str = "dashboard";

pub const HEALTH_BODY: &str =
    r#"{"status": "OK", "timestamp": "2024-12-01T10:00:00Z", "version": "1.0.0"}"#;

pub const DASHBOARD_BODY: &str = r#"{
  "stats": {
    "totalCertificates": 1247,
    "validCertificates": 1156,
    "expiringCertificates": 23,
    "expiredCertificates": 68,
    "totalCustomers": 247,
    "totalInstruments": 189,
    "monthlyRevenue": 43630,
    "growthRate": 15.2
  },
  "recentActivity": [
    {"id": 1, "type": "certificate", "message": "Certificate JIC-20241201-001 created", "timestamp": "2024-12-01T10:30:00Z"},
    {"id": 2, "type": "customer", "message": "New customer ABC Industries added", "timestamp": "2024-12-01T09:15:00Z"},
    {"id": 3, "type": "instrument", "message": "Digital Multimeter calibrated", "timestamp": "2024-12-01T08:45:00Z"}
  ],
  "upcomingRenewals": [
    {"id": 1, "certificate": "JIC-20241115-089", "customer": "XYZ Corp", "expiryDate": "2024-12-15"},
    {"id": 2, "certificate": "JIC-20241120-134", "customer": "DEF Ltd", "expiryDate": "2024-12-20"}
  ]
}"#;

/// Body for API paths with no fixture. Served with status 200, matching the
/// hosted demo's observed behavior.
pub const NOT_FOUND_BODY: &str = r#"{"error": "Not found"}"#;

/// Look up the fixture body for an endpoint, i.e. the request path with the
/// API prefix already stripped. Matching is exact.
pub fn lookup(endpoint: &str) -> Option<&'static str> {
    match endpoint {
        HEALTH_ENDPOINT => Some(HEALTH_BODY),
        DASHBOARD_ENDPOINT => Some(DASHBOARD_BODY),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_lookup_known_endpoints() {
        assert_eq!(lookup("health"), Some(HEALTH_BODY));
        assert_eq!(lookup("dashboard"), Some(DASHBOARD_BODY));
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(lookup("health/"), None);
        assert_eq!(lookup("healthcheck"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_health_body_shape() {
        let v: Value = serde_json::from_str(HEALTH_BODY).unwrap();
        assert_eq!(v["status"], "OK");
        assert_eq!(v["timestamp"], "2024-12-01T10:00:00Z");
        assert_eq!(v["version"], "1.0.0");
    }

    #[test]
    fn test_dashboard_body_shape() {
        let v: Value = serde_json::from_str(DASHBOARD_BODY).unwrap();

        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("stats"));
        assert!(obj.contains_key("recentActivity"));
        assert!(obj.contains_key("upcomingRenewals"));

        let stats = v["stats"].as_object().unwrap();
        for field in [
            "totalCertificates",
            "validCertificates",
            "expiringCertificates",
            "expiredCertificates",
            "totalCustomers",
            "totalInstruments",
            "monthlyRevenue",
            "growthRate",
        ] {
            assert!(stats[field].is_number(), "stats.{field} should be numeric");
        }

        assert_eq!(v["recentActivity"].as_array().unwrap().len(), 3);
        assert_eq!(v["upcomingRenewals"].as_array().unwrap().len(), 2);
        assert_eq!(v["recentActivity"][0]["type"], "certificate");
        assert_eq!(v["upcomingRenewals"][0]["customer"], "XYZ Corp");
    }

    #[test]
    fn test_not_found_body_is_literal() {
        assert_eq!(NOT_FOUND_BODY, r#"{"error": "Not found"}"#);
    }
}
