//! Family calendar items: death anniversaries, birthdays, events.
//!
//! The repository selects who appears (deceased members with a recorded
//! anniversary, living members with a birth date, all events); this module
//! turns those rows into uniform display items with their labels.

use serde::Serialize;

use crate::member::{CALENDAR_LUNAR, CALENDAR_SOLAR};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Item kinds and calendar defaults
// ---------------------------------------------------------------------------

pub const ITEM_ANNIVERSARY: &str = "anniversary";
pub const ITEM_BIRTHDAY: &str = "birthday";
pub const ITEM_EVENT: &str = "event";

/// Birth dates default to the solar calendar.
pub const DEFAULT_BIRTH_CALENDAR: &str = CALENDAR_SOLAR;

/// Death anniversaries are traditionally observed by the lunar calendar.
pub const DEFAULT_ANNIVERSARY_CALENDAR: &str = CALENDAR_LUNAR;

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// One entry in the family calendar, ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarItem {
    pub kind: &'static str,
    pub member_id: DbId,
    pub member_name: String,
    pub generation: i32,
    pub date: Option<String>,
    pub calendar_type: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A deceased member's death-anniversary entry.
pub fn anniversary_item(
    member_id: DbId,
    member_name: &str,
    generation: i32,
    date: &str,
    calendar_type: &str,
) -> CalendarItem {
    CalendarItem {
        kind: ITEM_ANNIVERSARY,
        member_id,
        member_name: member_name.to_string(),
        generation,
        date: Some(date.to_string()),
        calendar_type: calendar_type.to_string(),
        label: format!("Death anniversary of {member_name}"),
        description: None,
    }
}

/// A living member's birthday entry.
pub fn birthday_item(
    member_id: DbId,
    member_name: &str,
    generation: i32,
    date: &str,
    calendar_type: &str,
) -> CalendarItem {
    CalendarItem {
        kind: ITEM_BIRTHDAY,
        member_id,
        member_name: member_name.to_string(),
        generation,
        date: Some(date.to_string()),
        calendar_type: calendar_type.to_string(),
        label: format!("Birthday of {member_name}"),
        description: None,
    }
}

/// A family event entry; the event title is the label.
pub fn event_item(
    member_id: DbId,
    member_name: &str,
    generation: i32,
    title: &str,
    date: Option<&str>,
    calendar_type: &str,
    description: Option<&str>,
) -> CalendarItem {
    CalendarItem {
        kind: ITEM_EVENT,
        member_id,
        member_name: member_name.to_string(),
        generation,
        date: date.map(str::to_string),
        calendar_type: calendar_type.to_string(),
        label: title.to_string(),
        description: description.map(str::to_string),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
