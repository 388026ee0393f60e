//! Alert notification composer.
//!
//! Renders one of two fixed HTML templates (clear vs. congested) by literal
//! placeholder substitution. Each placeholder appears exactly once in its
//! template, so a single `replace` pass per field is exact. Pure; no I/O.

use routewatch_core::{AlertVariant, DurationResult, RouteWatch};

/// A rendered notification, ready for the delivery channel. No further
/// mutation happens after composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub recipient: String,
    pub subject: String,
    pub html_body: String,
}

const CLEAR_SUBJECT: &str = "Good News! No Traffic 🚗";
const CONGESTED_SUBJECT: &str = "Traffic Alert 🚦";

const CLEAR_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta name="viewport" content="width=device-width">
    <meta http-equiv="Content-Type" content="text/html; charset=UTF-8">
    <title>No Traffic Alert</title>
    <style type="text/css">
        body { font-family: Arial, sans-serif; background-color: #f6f6f6; margin: 0; padding: 20px; }
        .container { max-width: 600px; margin: auto; background: white; padding: 20px; border-radius: 5px; box-shadow: 0px 0px 10px rgba(0, 0, 0, 0.1); }
        .header { background-color: #28A745; color: white; text-align: center; padding: 10px; font-size: 18px; font-weight: bold; border-radius: 5px 5px 0 0; }
        .content { padding: 20px; font-size: 14px; color: #333; }
        .button { display: inline-block; padding: 10px 15px; margin-top: 10px; background-color: #348eda; color: white; text-decoration: none; border-radius: 5px; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">Good News! No Traffic 🚗</div>
        <div class="content">
            <p>Your route from <strong>[SOURCE]</strong> to <strong>[DESTINATION]</strong> is clear.</p>
            <p><strong>Distance:</strong> [DISTANCE]</p>
            <p><strong>Expected Travel Time:</strong> [AVG_DURATION]</p>
            <p>Enjoy a smooth and hassle-free journey.</p>
            <a href="[MAP_LINK]" class="button">Check Route</a>
        </div>
    </div>
</body>
</html>"#;

const CONGESTED_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta name="viewport" content="width=device-width">
    <meta http-equiv="Content-Type" content="text/html; charset=UTF-8">
    <title>Traffic Alert</title>
    <style type="text/css">
        body { font-family: Arial, sans-serif; background-color: #f6f6f6; margin: 0; padding: 20px; }
        .container { max-width: 600px; margin: auto; background: white; padding: 20px; border-radius: 5px; box-shadow: 0px 0px 10px rgba(0, 0, 0, 0.1); }
        .header { background-color: #FF4C4C; color: white; text-align: center; padding: 10px; font-size: 18px; font-weight: bold; border-radius: 5px 5px 0 0; }
        .content { padding: 20px; font-size: 14px; color: #333; }
        .button { display: inline-block; padding: 10px 15px; margin-top: 10px; background-color: #348eda; color: white; text-decoration: none; border-radius: 5px; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">Traffic Alert 🚦</div>
        <div class="content">
            <p>There is traffic on your route from <strong>[SOURCE]</strong> to <strong>[DESTINATION]</strong>.</p>
            <p><strong>Distance:</strong> [DISTANCE]</p>
            <p><strong>Average Travel Time:</strong> [AVG_DURATION]</p>
            <p><strong>Current Traffic Time:</strong> [TRAFFIC_DURATION]</p>
            <p>We recommend leaving early or choosing an alternate route.</p>
            <a href="[MAP_LINK]" class="button">Check Route</a>
        </div>
    </div>
</body>
</html>"#;

/// Render the notification for `variant`, substituting the watch's route
/// labels and the routing result's human-readable texts.
///
/// The recipient is copied verbatim from `watch.notify_email`. The traffic
/// duration only appears in the congested template; replacing it in the
/// clear template is a no-op.
pub fn compose(
    variant: AlertVariant,
    watch: &RouteWatch,
    result: &DurationResult,
) -> NotificationContent {
    let (subject, template) = match variant {
        AlertVariant::Clear => (CLEAR_SUBJECT, CLEAR_TEMPLATE),
        AlertVariant::Congested => (CONGESTED_SUBJECT, CONGESTED_TEMPLATE),
    };

    let map_link = format!(
        "https://www.google.com/maps/dir/{}/{}",
        watch.source, watch.destination
    );

    let html_body = template
        .replace("[SOURCE]", &watch.source)
        .replace("[DESTINATION]", &watch.destination)
        .replace("[DISTANCE]", &result.distance_text)
        .replace("[AVG_DURATION]", &result.duration_text)
        .replace("[TRAFFIC_DURATION]", &result.duration_in_traffic_text)
        .replace("[MAP_LINK]", &map_link);

    NotificationContent {
        recipient: watch.notify_email.clone(),
        subject: subject.to_string(),
        html_body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACEHOLDERS: &[&str] = &[
        "[SOURCE]",
        "[DESTINATION]",
        "[DISTANCE]",
        "[AVG_DURATION]",
        "[TRAFFIC_DURATION]",
        "[MAP_LINK]",
    ];

    fn sample_watch() -> RouteWatch {
        RouteWatch {
            id: 1,
            source: "Pune".to_string(),
            destination: "Mumbai".to_string(),
            alert_times: vec!["09:00".to_string()],
            expected_minutes: 120,
            notify_email: "a@x.com".to_string(),
        }
    }

    fn sample_result() -> DurationResult {
        DurationResult {
            duration_seconds: 5000,
            duration_text: "1 hour 23 mins".to_string(),
            distance_text: "148 km".to_string(),
            duration_in_traffic_text: "1 hour 40 mins".to_string(),
        }
    }

    fn occurrences(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn templates_carry_each_placeholder_at_most_once() {
        for &placeholder in PLACEHOLDERS {
            assert!(
                occurrences(CLEAR_TEMPLATE, placeholder) <= 1,
                "{placeholder} duplicated in clear template"
            );
            assert!(
                occurrences(CONGESTED_TEMPLATE, placeholder) <= 1,
                "{placeholder} duplicated in congested template"
            );
        }
        // The traffic duration is the one variant-specific field.
        assert_eq!(occurrences(CLEAR_TEMPLATE, "[TRAFFIC_DURATION]"), 0);
        assert_eq!(occurrences(CONGESTED_TEMPLATE, "[TRAFFIC_DURATION]"), 1);
    }

    #[test]
    fn no_unresolved_placeholders_in_either_variant() {
        for variant in [AlertVariant::Clear, AlertVariant::Congested] {
            let content = compose(variant, &sample_watch(), &sample_result());
            for &placeholder in PLACEHOLDERS {
                assert!(
                    !content.html_body.contains(placeholder),
                    "{placeholder} left unresolved in {variant:?}"
                );
            }
        }
    }

    #[test]
    fn clear_variant_substitutes_each_value_once() {
        let content = compose(AlertVariant::Clear, &sample_watch(), &sample_result());
        assert!(content.subject.contains("No Traffic"));
        assert_eq!(occurrences(&content.html_body, "<strong>Pune</strong>"), 1);
        assert_eq!(occurrences(&content.html_body, "<strong>Mumbai</strong>"), 1);
        assert_eq!(occurrences(&content.html_body, "148 km"), 1);
        assert_eq!(occurrences(&content.html_body, "1 hour 23 mins"), 1);
        assert_eq!(
            occurrences(&content.html_body, "https://www.google.com/maps/dir/Pune/Mumbai"),
            1
        );
        // Clear variant never mentions the live traffic time.
        assert_eq!(occurrences(&content.html_body, "1 hour 40 mins"), 0);
    }

    #[test]
    fn congested_variant_includes_traffic_duration() {
        let content = compose(AlertVariant::Congested, &sample_watch(), &sample_result());
        assert!(content.subject.contains("Traffic Alert"));
        assert_eq!(occurrences(&content.html_body, "1 hour 40 mins"), 1);
        assert_eq!(occurrences(&content.html_body, "1 hour 23 mins"), 1);
    }

    #[test]
    fn recipient_is_copied_verbatim() {
        let content = compose(AlertVariant::Clear, &sample_watch(), &sample_result());
        assert_eq!(content.recipient, "a@x.com");
    }
}
