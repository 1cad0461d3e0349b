use super::*;

// =============================================================
// Ticket decoding
// =============================================================

#[test]
fn ticket_decodes_numeric_id_as_text() {
    let ticket: Ticket = serde_json::from_value(serde_json::json!({
        "id": 42,
        "title": "Login broken",
        "description": "Cannot log in since today",
        "category": "account",
        "priority": "high",
        "status": "in_progress",
        "created_at": "2026-10-01T09:30:00Z"
    }))
    .unwrap();
    assert_eq!(ticket.id, "42");
    assert_eq!(ticket.category, Category::Account);
    assert_eq!(ticket.priority, Priority::High);
    assert_eq!(ticket.status, TicketStatus::InProgress);
}

#[test]
fn ticket_keeps_string_id() {
    let ticket: Ticket = serde_json::from_value(serde_json::json!({
        "id": "t-7",
        "title": "x"
    }))
    .unwrap();
    assert_eq!(ticket.id, "t-7");
    assert_eq!(ticket.description, "");
    assert_eq!(ticket.category, Category::General);
    assert_eq!(ticket.priority, Priority::Low);
    assert_eq!(ticket.status, TicketStatus::Open);
}

#[test]
fn ticket_rejects_missing_or_empty_id() {
    assert!(serde_json::from_value::<Ticket>(serde_json::json!({ "title": "x" })).is_err());
    assert!(serde_json::from_value::<Ticket>(serde_json::json!({ "id": "", "title": "x" })).is_err());
    assert!(serde_json::from_value::<Ticket>(serde_json::json!({ "id": true, "title": "x" })).is_err());
}

#[test]
fn unknown_enum_values_fall_into_unknown_bucket() {
    let ticket: Ticket = serde_json::from_value(serde_json::json!({
        "id": 1,
        "title": "x",
        "category": "hardware",
        "priority": "urgent",
        "status": "waiting_on_customer"
    }))
    .unwrap();
    assert_eq!(ticket.category, Category::Unknown);
    assert_eq!(ticket.priority, Priority::Unknown);
    assert_eq!(ticket.status, TicketStatus::Unknown);
}

#[test]
fn null_enum_fields_read_as_defaults() {
    let ticket: Ticket = serde_json::from_value(serde_json::json!({
        "id": 3,
        "title": "x",
        "category": null,
        "priority": null,
        "status": null
    }))
    .unwrap();
    assert_eq!(ticket.category, Category::General);
    assert_eq!(ticket.priority, Priority::Low);
    assert_eq!(ticket.status, TicketStatus::Open);
}

#[test]
fn wrongly_typed_enum_fields_fall_into_unknown_bucket() {
    let ticket: Ticket = serde_json::from_value(serde_json::json!({
        "id": 4,
        "title": "x",
        "category": 7,
        "priority": { "level": "high" },
        "status": false
    }))
    .unwrap();
    assert_eq!(ticket.category, Category::Unknown);
    assert_eq!(ticket.priority, Priority::Unknown);
    assert_eq!(ticket.status, TicketStatus::Unknown);
}

#[test]
fn one_null_priority_does_not_drop_the_list() {
    let tickets: Vec<Ticket> = serde_json::from_value(serde_json::json!([
        {
            "id": 1,
            "title": "VPN down",
            "description": "No tunnel since 9am",
            "category": "technical",
            "priority": "high",
            "status": "open",
            "created_at": "2026-10-01T09:30:00Z"
        },
        {
            "id": 2,
            "title": "odd",
            "description": "",
            "category": "general",
            "priority": null,
            "status": "open",
            "created_at": "2026-10-01T10:00:00Z"
        },
        { "id": 3, "title": "Refund", "priority": "medium" }
    ]))
    .unwrap();
    assert_eq!(tickets.len(), 3);
    assert_eq!(tickets[0].priority, Priority::High);
    assert_eq!(tickets[1].priority, Priority::Low);
    assert_eq!(tickets[2].priority, Priority::Medium);
}

#[test]
fn hyphenated_in_progress_is_accepted() {
    let status: TicketStatus = serde_json::from_value(serde_json::json!("in-progress")).unwrap();
    assert_eq!(status, TicketStatus::InProgress);
    assert_eq!(serde_json::to_value(status).unwrap(), serde_json::json!("in_progress"));
}

#[test]
fn ticket_list_decodes_empty_array() {
    let tickets: Vec<Ticket> = serde_json::from_str("[]").unwrap();
    assert!(tickets.is_empty());
}

// =============================================================
// Payloads
// =============================================================

#[test]
fn new_ticket_applies_defaults_and_open_status() {
    let body = NewTicket::new("Login broken", "Cannot log in since today", None, None);
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "title": "Login broken",
            "description": "Cannot log in since today",
            "category": "general",
            "priority": "low",
            "status": "open"
        })
    );
}

#[test]
fn new_ticket_trims_text_and_keeps_explicit_choices() {
    let body = NewTicket::new("  Refund  ", " charged twice ", Some(Category::Billing), Some(Priority::Critical));
    assert_eq!(body.title, "Refund");
    assert_eq!(body.description, "charged twice");
    assert_eq!(body.category, Category::Billing);
    assert_eq!(body.priority, Priority::Critical);
}

#[test]
fn status_patch_serializes_snake_case() {
    let patch = StatusPatch { status: TicketStatus::Closed };
    assert_eq!(serde_json::to_value(patch).unwrap(), serde_json::json!({ "status": "closed" }));
}

// =============================================================
// Classification
// =============================================================

#[test]
fn classification_resolves_known_values() {
    let c: Classification = serde_json::from_value(serde_json::json!({
        "suggested_category": "billing",
        "suggested_priority": "High"
    }))
    .unwrap();
    assert_eq!(c.resolve(), (Category::Billing, Priority::High));
}

#[test]
fn classification_falls_back_for_missing_or_unknown_values() {
    let c: Classification = serde_json::from_value(serde_json::json!({
        "suggested_category": "",
        "suggested_priority": "whenever"
    }))
    .unwrap();
    assert_eq!(c.resolve(), (Category::General, Priority::Low));
    assert_eq!(Classification::default().resolve(), (Category::General, Priority::Low));
}

// =============================================================
// Stats
// =============================================================

#[test]
fn stats_snapshot_defaults_missing_fields_to_zero() {
    let stats: StatsSnapshot = serde_json::from_value(serde_json::json!({ "total_tickets": 9 })).unwrap();
    assert_eq!(stats.total_tickets, 9);
    assert_eq!(stats.open_tickets, 0);
    assert!(stats.avg_tickets_per_day.abs() < f64::EPSILON);
    assert!(!stats.has_breakdown());
}

#[test]
fn stats_snapshot_zeroes_only_null_fields() {
    let stats: StatsSnapshot = serde_json::from_value(serde_json::json!({
        "total_tickets": 12,
        "open_tickets": 5,
        "avg_tickets_per_day": null,
        "by_status": null
    }))
    .unwrap();
    assert_eq!(stats.total_tickets, 12);
    assert_eq!(stats.open_tickets, 5);
    assert!(stats.avg_tickets_per_day.abs() < f64::EPSILON);
    assert!(stats.by_status.is_empty());

    let stats: StatsSnapshot = serde_json::from_value(serde_json::json!({
        "total_tickets": null,
        "open_tickets": 2,
        "avg_tickets_per_day": 1.5
    }))
    .unwrap();
    assert_eq!(stats.total_tickets, 0);
    assert_eq!(stats.open_tickets, 2);
    assert!((stats.avg_tickets_per_day - 1.5).abs() < f64::EPSILON);
}

#[test]
fn stats_snapshot_reads_breakdowns() {
    let stats: StatsSnapshot = serde_json::from_value(serde_json::json!({
        "by_status": { "open": 3, "closed": 1 }
    }))
    .unwrap();
    assert!(stats.has_breakdown());
    assert_eq!(stats.by_status.get("open"), Some(&3));
}

// =============================================================
// Enum helpers
// =============================================================

#[test]
fn parse_accepts_only_pickable_values() {
    assert_eq!(Category::parse("Feature"), Some(Category::Feature));
    assert_eq!(Category::parse("unknown"), None);
    assert_eq!(Category::parse(""), None);
    assert_eq!(Priority::parse(" medium "), Some(Priority::Medium));
    assert_eq!(Priority::parse("unknown"), None);
    assert_eq!(TicketStatus::parse("in-progress"), Some(TicketStatus::InProgress));
    assert_eq!(TicketStatus::parse("resolved"), Some(TicketStatus::Resolved));
    assert_eq!(TicketStatus::parse("unknown"), None);
}

// =============================================================
// Filter
// =============================================================

#[test]
fn empty_filter_has_no_query() {
    let filter = TicketFilter { search: "   ".to_owned(), ..TicketFilter::default() };
    assert!(filter.query_pairs().is_empty());
    assert!(filter.is_empty());
}

#[test]
fn filter_query_lists_set_fields_in_order() {
    let filter = TicketFilter {
        category: Some(Category::Bug),
        priority: None,
        status: Some(TicketStatus::InProgress),
        search: " crash ".to_owned(),
    };
    assert_eq!(
        filter.query_pairs(),
        vec![
            ("category", "bug".to_owned()),
            ("status", "in_progress".to_owned()),
            ("search", "crash".to_owned()),
        ]
    );
}
