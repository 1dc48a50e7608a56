//! Tests for the meeting query: mandatory windows, optional-attendee
//! accommodation and the short-circuit cases.

use meeting_engine::range::minutes_of_day;
use meeting_engine::{
    find_meeting_times, window_intersections, Event, MeetingQuery, MeetingRequest, TimeRange,
    DAY_MINUTES,
};

const PERSON_A: &str = "Person A";
const PERSON_B: &str = "Person B";
const PERSON_C: &str = "Person C";

const DURATION_30_MINUTES: i32 = 30;
const DURATION_60_MINUTES: i32 = 60;
const DURATION_90_MINUTES: i32 = 90;
const DURATION_1_HOUR: i32 = 60;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn at(hours: i32, minutes: i32) -> i32 {
    minutes_of_day(hours, minutes)
}

fn range(start: i32, end: i32) -> TimeRange {
    TimeRange::from_start_end(start, end, false).unwrap()
}

fn event(title: &str, when: TimeRange, attendees: &[&str]) -> Event {
    Event::new(title, when, attendees.iter().copied())
}

fn request(attendees: &[&str], duration: i32) -> MeetingRequest {
    MeetingRequest::new(attendees.iter().copied(), duration).unwrap()
}

fn request_with_optional(attendees: &[&str], optional: &[&str], duration: i32) -> MeetingRequest {
    optional
        .iter()
        .fold(request(attendees, duration), |req, name| {
            req.add_optional_attendee(*name)
        })
}

/// A busy at 08:00-08:30, B busy at 09:00-09:30.
fn two_people_with_gaps() -> Vec<Event> {
    vec![
        event("Event 1", range(at(8, 0), at(8, 30)), &[PERSON_A]),
        event("Event 2", range(at(9, 0), at(9, 30)), &[PERSON_B]),
    ]
}

// ── Short circuits ──────────────────────────────────────────────────────────

#[test]
fn options_for_no_attendees() {
    let events = two_people_with_gaps();
    let req = request(&[], DURATION_1_HOUR);

    assert_eq!(find_meeting_times(&events, &req), vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn no_options_for_too_long_of_a_request() {
    // One minute longer than the day, even with nothing on the calendar.
    let req = request(&[PERSON_A], DAY_MINUTES + 1);

    assert!(find_meeting_times(&[], &req).is_empty());
}

#[test]
fn whole_day_request_fits_empty_calendar() {
    let req = request(&[PERSON_A], DAY_MINUTES);

    assert_eq!(find_meeting_times(&[], &req), vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn no_conflicts() {
    let req = request(&[PERSON_A, PERSON_B], DURATION_30_MINUTES);

    assert_eq!(find_meeting_times(&[], &req), vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn no_mandatory_attendees_ignores_optional_ones() {
    let events = vec![event("Busy", TimeRange::WHOLE_DAY, &[PERSON_C])];
    let req = request_with_optional(&[], &[PERSON_C], DURATION_30_MINUTES);

    assert_eq!(find_meeting_times(&events, &req), vec![TimeRange::WHOLE_DAY]);
}

// ── Mandatory attendees ─────────────────────────────────────────────────────

#[test]
fn event_splits_rest_of_day() {
    // A busy 09:00-10:00 → 00:00-09:00 and 10:00-24:00
    let events = vec![event("Event 1", range(540, 600), &[PERSON_A])];
    let req = request(&[PERSON_A], DURATION_30_MINUTES);

    assert_eq!(
        find_meeting_times(&events, &req),
        vec![range(0, 540), range(600, 1440)]
    );
}

#[test]
fn every_attendee_is_considered() {
    // Day  : |--------------------------|
    // A    :     |--|
    // B    :             |--|
    // Free : |---|  |----|  |-----------|
    let events = two_people_with_gaps();
    let req = request(&[PERSON_A, PERSON_B], DURATION_30_MINUTES);

    assert_eq!(
        find_meeting_times(&events, &req),
        vec![
            range(0, at(8, 0)),
            range(at(8, 30), at(9, 0)),
            range(at(9, 30), DAY_MINUTES),
        ]
    );
}

#[test]
fn overlapping_events() {
    // A 08:30-09:30, B 09:00-10:30
    let events = vec![
        event("Event 1", range(at(8, 30), at(9, 30)), &[PERSON_A]),
        event("Event 2", range(at(9, 0), at(10, 30)), &[PERSON_B]),
    ];
    let req = request(&[PERSON_A, PERSON_B], DURATION_30_MINUTES);

    assert_eq!(
        find_meeting_times(&events, &req),
        vec![range(0, at(8, 30)), range(at(10, 30), DAY_MINUTES)]
    );
}

#[test]
fn busy_union_merges_overlapping_attendees() {
    let events = vec![
        event("Event 1", range(0, 600), &[PERSON_A]),
        event("Event 2", range(300, 900), &[PERSON_B]),
    ];
    let req = request(&[PERSON_A, PERSON_B], DURATION_60_MINUTES);

    assert_eq!(find_meeting_times(&events, &req), vec![range(900, 1440)]);
}

#[test]
fn nested_events() {
    // A 08:30-10:00 contains B 09:00-09:30
    let events = vec![
        event("Event 1", range(at(8, 30), at(10, 0)), &[PERSON_A]),
        event("Event 2", range(at(9, 0), at(9, 30)), &[PERSON_B]),
    ];
    let req = request(&[PERSON_A, PERSON_B], DURATION_30_MINUTES);

    assert_eq!(
        find_meeting_times(&events, &req),
        vec![range(0, at(8, 30)), range(at(10, 0), DAY_MINUTES)]
    );
}

#[test]
fn double_booked_people() {
    let events = vec![
        event("Event 1", range(at(8, 30), at(9, 30)), &[PERSON_A]),
        event("Event 2", range(at(9, 0), at(9, 30)), &[PERSON_A]),
    ];
    let req = request(&[PERSON_A], DURATION_30_MINUTES);

    assert_eq!(
        find_meeting_times(&events, &req),
        vec![range(0, at(8, 30)), range(at(9, 30), DAY_MINUTES)]
    );
}

#[test]
fn just_enough_room() {
    let events = vec![
        event("Event 1", range(0, at(8, 30)), &[PERSON_A]),
        event("Event 2", range(at(9, 0), DAY_MINUTES), &[PERSON_A]),
    ];
    let req = request(&[PERSON_A], DURATION_30_MINUTES);

    assert_eq!(
        find_meeting_times(&events, &req),
        vec![range(at(8, 30), at(9, 0))]
    );
}

#[test]
fn ignores_people_not_attending() {
    let events = vec![event("Event 1", range(at(8, 0), at(8, 30)), &[PERSON_A])];
    let req = request(&[PERSON_B], DURATION_30_MINUTES);

    assert_eq!(find_meeting_times(&events, &req), vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn not_enough_room() {
    let events = vec![
        event("Event 1", range(0, at(8, 30)), &[PERSON_A]),
        event("Event 2", range(at(9, 0), DAY_MINUTES), &[PERSON_A]),
    ];
    let req = request(&[PERSON_A], DURATION_60_MINUTES);

    assert!(find_meeting_times(&events, &req).is_empty());
}

// ── Optional attendees ──────────────────────────────────────────────────────

#[test]
fn optional_attendee_busy_all_day_is_dropped() {
    let mut events = two_people_with_gaps();
    events.push(event("Event 3", TimeRange::WHOLE_DAY, &[PERSON_C]));
    let req = request_with_optional(&[PERSON_A, PERSON_B], &[PERSON_C], DURATION_30_MINUTES);

    assert_eq!(
        find_meeting_times(&events, &req),
        vec![
            range(0, at(8, 0)),
            range(at(8, 30), at(9, 0)),
            range(at(9, 30), DAY_MINUTES),
        ]
    );
}

#[test]
fn optional_attendee_narrows_windows() {
    // C busy 08:30-09:00 removes the middle window.
    let mut events = two_people_with_gaps();
    events.push(event("Event 3", range(at(8, 30), at(9, 0)), &[PERSON_C]));
    let req = request_with_optional(&[PERSON_A, PERSON_B], &[PERSON_C], DURATION_30_MINUTES);

    assert_eq!(
        find_meeting_times(&events, &req),
        vec![range(0, at(8, 0)), range(at(9, 30), DAY_MINUTES)]
    );
}

#[test]
fn optional_attendee_that_removes_only_slot_is_dropped() {
    let events = vec![
        event("Event 1", range(0, at(8, 30)), &[PERSON_A]),
        event("Event 2", range(at(9, 0), DAY_MINUTES), &[PERSON_A]),
        event("Event 3", range(at(8, 30), at(9, 0)), &[PERSON_B]),
    ];
    let req = request_with_optional(&[PERSON_A], &[PERSON_B], DURATION_30_MINUTES);

    assert_eq!(
        find_meeting_times(&events, &req),
        vec![range(at(8, 30), at(9, 0))]
    );
}

#[test]
fn optional_intersection_too_short_falls_back_to_mandatory() {
    // Mandatory window 08:30-10:00; C is only free 09:30-10:00, too short for 60.
    let events = vec![
        event("Event 1", range(0, at(8, 30)), &[PERSON_A]),
        event("Event 2", range(at(10, 0), DAY_MINUTES), &[PERSON_A]),
        event("Event 3", range(0, at(9, 30)), &[PERSON_C]),
        event("Event 4", range(at(10, 0), DAY_MINUTES), &[PERSON_C]),
    ];
    let req = request_with_optional(&[PERSON_A], &[PERSON_C], DURATION_60_MINUTES);

    assert_eq!(
        find_meeting_times(&events, &req),
        vec![range(at(8, 30), at(10, 0))]
    );
}

#[test]
fn no_mandatory_window_reports_optional_availability() {
    let events = vec![
        event("Event 1", TimeRange::WHOLE_DAY, &[PERSON_A]),
        event("Event 2", range(at(8, 0), at(8, 30)), &[PERSON_B]),
    ];
    let req = request_with_optional(&[PERSON_A], &[PERSON_B], DURATION_30_MINUTES);

    assert_eq!(
        find_meeting_times(&events, &req),
        vec![range(0, at(8, 0)), range(at(8, 30), DAY_MINUTES)]
    );
}

#[test]
fn free_mandatory_attendee_with_fully_busy_optional() {
    let events = vec![event("Busy", TimeRange::WHOLE_DAY, &[PERSON_C])];
    let req = request_with_optional(&[PERSON_A], &[PERSON_C], DURATION_60_MINUTES);

    assert_eq!(find_meeting_times(&events, &req), vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn attendee_in_both_sets_constrains_both() {
    let events = vec![event("Event 1", range(at(9, 0), at(10, 0)), &[PERSON_A])];
    let req = request_with_optional(&[PERSON_A], &[PERSON_A], DURATION_90_MINUTES);

    assert_eq!(
        find_meeting_times(&events, &req),
        vec![range(0, at(9, 0)), range(at(10, 0), DAY_MINUTES)]
    );
}

// ── Entry points and helpers ────────────────────────────────────────────────

#[test]
fn service_struct_matches_free_function() {
    let events = two_people_with_gaps();
    let req = request_with_optional(&[PERSON_A], &[PERSON_B], DURATION_30_MINUTES);

    assert_eq!(
        MeetingQuery::new().query(&events, &req),
        find_meeting_times(&events, &req)
    );
}

#[test]
fn repeated_queries_are_identical() {
    let events = two_people_with_gaps();
    let req = request(&[PERSON_A, PERSON_B], DURATION_30_MINUTES);

    let first = find_meeting_times(&events, &req);
    let second = find_meeting_times(&events, &req);
    assert_eq!(first, second);
}

#[test]
fn window_intersections_drops_short_overlaps() {
    let a = vec![range(0, 100), range(200, 400)];
    let b = vec![range(80, 250), range(300, 1440)];

    // [80,100) is 20 min, [200,250) is 50, [300,400) is 100.
    assert_eq!(
        window_intersections(&a, &b, 50),
        vec![range(200, 250), range(300, 400)]
    );
}

#[test]
fn window_intersections_of_disjoint_lists_is_empty() {
    let a = vec![range(0, 100)];
    let b = vec![range(100, 200)];

    assert!(window_intersections(&a, &b, 0).is_empty());
}
