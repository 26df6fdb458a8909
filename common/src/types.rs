use serde::{Deserialize, Serialize};

/// Body returned by the `/health` route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    /// The only state a running listener reports
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
            message: "Service is healthy".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_up_serialization() {
        let json = serde_json::to_string(&HealthStatus::up()).unwrap();
        assert_eq!(json, r#"{"status":"UP","message":"Service is healthy"}"#);
    }

    #[test]
    fn test_health_status_deserialization() {
        let status: HealthStatus =
            serde_json::from_str(r#"{"message":"Service is healthy","status":"UP"}"#).unwrap();

        assert_eq!(status, HealthStatus::up());
    }

    #[test]
    fn test_health_status_missing_field() {
        let result = serde_json::from_str::<HealthStatus>(r#"{"status":"UP"}"#);
        assert!(result.is_err());
    }
}
