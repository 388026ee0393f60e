//! Domain types shared across the workspace.

use serde::{Deserialize, Serialize};

/// A stored route watch: one origin/destination pair, the wall-clock times
/// at which it should be evaluated, and where to send the alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteWatch {
    /// Database-assigned identifier.
    pub id: i64,
    /// Free-text origin, used both as a routing query parameter and a label.
    pub source: String,
    /// Free-text destination, used both as a routing query parameter and a label.
    pub destination: String,
    /// `HH:MM` 24-hour wall-clock strings. Unique, unordered. An empty set
    /// means the watch never fires.
    pub alert_times: Vec<String>,
    /// Travel-time threshold in minutes; durations at or below it count as
    /// "no traffic".
    pub expected_minutes: i32,
    /// Recipient address for rendered alerts.
    pub notify_email: String,
}

/// Request body for creating a watch; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRouteWatch {
    pub source: String,
    pub destination: String,
    pub alert_times: Vec<String>,
    pub expected_minutes: i32,
    pub notify_email: String,
}

impl NewRouteWatch {
    /// Promote to a stored watch with the given id.
    pub fn into_watch(self, id: i64) -> RouteWatch {
        RouteWatch {
            id,
            source: self.source,
            destination: self.destination,
            alert_times: self.alert_times,
            expected_minutes: self.expected_minutes,
            notify_email: self.notify_email,
        }
    }
}

/// The two mutually exclusive alert outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertVariant {
    Clear,
    Congested,
}

impl AlertVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertVariant::Clear => "clear",
            AlertVariant::Congested => "congested",
        }
    }
}

/// Normalized routing-service result for one origin/destination pair.
///
/// Lives for a single evaluation of a single watch; nothing is carried
/// across ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationResult {
    /// Free-flow travel time in seconds, used for the threshold comparison.
    pub duration_seconds: i64,
    /// Human-readable free-flow travel time (e.g. "1 hour 23 mins").
    pub duration_text: String,
    /// Human-readable distance (e.g. "148 km").
    pub distance_text: String,
    /// Human-readable congestion-adjusted travel time.
    pub duration_in_traffic_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_json_uses_camel_case() {
        let watch = RouteWatch {
            id: 1,
            source: "Pune".to_string(),
            destination: "Mumbai".to_string(),
            alert_times: vec!["09:00".to_string()],
            expected_minutes: 120,
            notify_email: "a@x.com".to_string(),
        };
        let json = serde_json::to_value(&watch).unwrap();
        assert_eq!(json["alertTimes"][0], "09:00");
        assert_eq!(json["expectedMinutes"], 120);
        assert_eq!(json["notifyEmail"], "a@x.com");
    }

    #[test]
    fn new_watch_round_trips_through_json() {
        let body = r#"{
            "source": "Pune",
            "destination": "Mumbai",
            "alertTimes": ["09:00", "18:30"],
            "expectedMinutes": 90,
            "notifyEmail": "a@x.com"
        }"#;
        let new: NewRouteWatch = serde_json::from_str(body).unwrap();
        assert_eq!(new.alert_times.len(), 2);
        let watch = new.into_watch(7);
        assert_eq!(watch.id, 7);
        assert_eq!(watch.expected_minutes, 90);
    }

    #[test]
    fn variant_labels() {
        assert_eq!(AlertVariant::Clear.as_str(), "clear");
        assert_eq!(AlertVariant::Congested.as_str(), "congested");
    }
}
