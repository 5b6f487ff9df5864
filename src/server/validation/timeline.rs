use crate::{
    model::timeline::EventLocationType,
    server::{
        model::timeline::{CreateTimelineParams, TimelineEventDetails},
        validation::{is_valid_url, Validate, Violations},
    },
};

impl Validate for TimelineEventDetails {
    fn check(&self, v: &mut Violations) {
        v.require("title", &self.title);
        v.require("description", &self.description);

        v.check(
            self.start_time < self.end_time,
            "Event end time must be after start time",
        );

        let has_venue = self.venue.as_deref().is_some_and(|s| !s.trim().is_empty());
        let has_platform = self
            .online_platform
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty());
        if matches!(
            self.location_type,
            EventLocationType::Offline | EventLocationType::Both
        ) {
            v.check(has_venue, "Venue is required for offline events");
        }
        if matches!(
            self.location_type,
            EventLocationType::Online | EventLocationType::Both
        ) {
            v.check(has_platform, "Online platform is required for online events");
        }

        v.check(
            self.speakers.iter().all(|s| !s.name.is_empty()),
            "Each speaker must have a name",
        );
        for resource in &self.resources {
            v.check(
                !resource.title.is_empty() && is_valid_url(&resource.url),
                format!("Invalid resource '{}'", resource.title),
            );
        }
    }
}

/// Rejects schedules where an event ends after the next one starts.
///
/// Events are compared in start-time order regardless of input order.
pub fn check_schedule(events: &[TimelineEventDetails], v: &mut Violations) {
    let mut ordered: Vec<&TimelineEventDetails> = events.iter().collect();
    ordered.sort_by_key(|e| e.start_time);

    for pair in ordered.windows(2) {
        if pair[0].end_time > pair[1].start_time {
            v.check(
                false,
                format!("Events \"{}\" and \"{}\" overlap", pair[0].title, pair[1].title),
            );
        }
    }
}

impl Validate for CreateTimelineParams {
    fn check(&self, v: &mut Violations) {
        v.require("timezone", &self.timezone);
        for event in &self.events {
            event.check(v);
        }
        check_schedule(&self.events, v);
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use super::*;
    use crate::{
        model::timeline::TimelineEventType, server::error::validation::ValidationError,
    };

    fn at(hour: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 3, 1, 0, 0, 0).unwrap() + Duration::hours(hour)
    }

    fn event(title: &str, start: i64, end: i64) -> TimelineEventDetails {
        TimelineEventDetails {
            title: title.to_string(),
            description: "desc".to_string(),
            start_time: at(start),
            end_time: at(end),
            event_type: TimelineEventType::Workshop,
            location_type: EventLocationType::Online,
            venue: None,
            online_platform: Some("Zoom".to_string()),
            speakers: Vec::new(),
            resources: Vec::new(),
            is_mandatory: false,
        }
    }

    fn timeline(events: Vec<TimelineEventDetails>) -> CreateTimelineParams {
        CreateTimelineParams {
            hackathon_id: 1,
            timezone: "UTC".to_string(),
            events,
        }
    }

    #[test]
    fn back_to_back_events_pass() {
        let params = timeline(vec![event("Kickoff", 0, 1), event("Build", 1, 5)]);
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn overlap_detected_after_sorting() {
        let params = timeline(vec![event("Build", 1, 5), event("Kickoff", 0, 2)]);
        assert_eq!(
            params.validate(),
            Err(ValidationError::Invalid(
                "Events \"Kickoff\" and \"Build\" overlap".to_string()
            ))
        );
    }

    #[test]
    fn both_location_needs_venue_and_platform() {
        let mut e = event("Demo", 0, 1);
        e.location_type = EventLocationType::Both;
        assert_eq!(
            e.validate(),
            Err(ValidationError::Invalid(
                "Venue is required for offline events".to_string()
            ))
        );
    }

    #[test]
    fn end_before_start_rejected() {
        let e = event("Demo", 3, 2);
        assert_eq!(
            e.validate(),
            Err(ValidationError::Invalid(
                "Event end time must be after start time".to_string()
            ))
        );
    }
}
