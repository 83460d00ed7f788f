//! iCalendar parsing.
//!
//! This module parses iCalendar (RFC 5545) text and converts its VEVENT
//! components to [`RawEvent`]s.

use chrono::{TimeZone, Utc};
use icalendar::{
    Calendar, CalendarComponent, CalendarDateTime, Component, DatePerhapsTime, Event,
};
use tracing::debug;

use nextdue_core::event::{DueTime, RawEvent};

use crate::error::{LoaderError, LoaderResult};

/// Parses iCalendar text and extracts its events.
///
/// Only VEVENT components are considered; other component kinds (timezones,
/// todos) are ignored. Content that is not valid iCalendar data is a
/// [`LoaderError::Parse`].
pub fn parse_ics(content: &str) -> LoaderResult<Vec<RawEvent>> {
    let calendar = content
        .parse::<Calendar>()
        .map_err(|message| LoaderError::Parse { message })?;

    Ok(calendar
        .iter()
        .filter_map(|component| match component {
            CalendarComponent::Event(event) => parse_event(event),
            _ => None,
        })
        .collect())
}

/// Parses a single VEVENT component into a RawEvent.
///
/// Components without a UID or DTSTART are skipped: an entry with no start
/// cannot carry a due date.
fn parse_event(event: &Event) -> Option<RawEvent> {
    let Some(uid) = event.get_uid() else {
        debug!("skipping VEVENT without UID");
        return None;
    };
    let Some(start) = event.get_start() else {
        debug!(uid, "skipping VEVENT without DTSTART");
        return None;
    };

    let mut raw = RawEvent::new(uid, convert_date_time(start));

    if let Some(summary) = event.get_summary() {
        raw = raw.with_summary(summary);
    }

    if let Some(description) = event.get_description() {
        raw = raw.with_description(description);
    }

    if let Some(categories) = event.multi_properties().get("CATEGORIES") {
        let tokens: Vec<String> = categories
            .iter()
            .flat_map(|property| property.value().split(','))
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .collect();
        raw = raw.with_categories(tokens);
    }

    if let Some(status) = event.get_status() {
        raw = raw.with_status(format!("{:?}", status));
    }

    debug!(
        uid = %raw.uid,
        summary = ?raw.summary,
        start = ?raw.start,
        "Parsed event from ICS"
    );

    Some(raw)
}

/// Converts icalendar DatePerhapsTime to DueTime.
fn convert_date_time(dt: DatePerhapsTime) -> DueTime {
    match dt {
        DatePerhapsTime::Date(date) => DueTime::from_date(date),
        DatePerhapsTime::DateTime(cdt) => {
            let utc_dt = match cdt {
                CalendarDateTime::Utc(dt) => dt,
                CalendarDateTime::Floating(naive) => Utc.from_utc_datetime(&naive),
                // Treat zoned times as UTC; the export's own encoding is
                // all the timezone handling this tool does.
                CalendarDateTime::WithTimezone { date_time, tzid: _ } => {
                    Utc.from_utc_datetime(&date_time)
                }
            };
            DueTime::from_utc(utc_dt)
        }
    }
}
