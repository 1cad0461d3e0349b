//! Wire DTOs for the ticket REST API.
//!
//! DESIGN
//! ======
//! Enumerated fields decode leniently: values outside the canonical sets land
//! in an `Unknown` variant, and `null` reads as the field default, so one odd
//! row from the backend renders in a neutral bucket instead of failing the
//! whole list. Stats counters read `null` as zero for the same reason.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Ticket category. Unset form values default to [`Category::General`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    General,
    Billing,
    Technical,
    Account,
    Feature,
    Bug,
    #[serde(other)]
    Unknown,
}

impl Category {
    /// Categories a user can pick when composing or filtering.
    pub const ALL: [Self; 6] = [
        Self::General,
        Self::Billing,
        Self::Technical,
        Self::Account,
        Self::Feature,
        Self::Bug,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Billing => "billing",
            Self::Technical => "technical",
            Self::Account => "account",
            Self::Feature => "feature",
            Self::Bug => "bug",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Billing => "Billing",
            Self::Technical => "Technical",
            Self::Account => "Account",
            Self::Feature => "Feature",
            Self::Bug => "Bug",
            Self::Unknown => "Other",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::General => "📋",
            Self::Billing => "💳",
            Self::Technical => "⚙️",
            Self::Account => "👤",
            Self::Feature => "✨",
            Self::Bug => "🐛",
            Self::Unknown => "•",
        }
    }

    /// Parse a pickable category; empty and unrecognized input yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|c| c.as_str().eq_ignore_ascii_case(raw))
    }
}

/// Ticket priority. Unset form values default to [`Priority::Low`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

impl Priority {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
            Self::Unknown => "Unrated",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|p| p.as_str().eq_ignore_ascii_case(raw))
    }
}

/// Ticket lifecycle status.
///
/// `in-progress` is accepted on input because older backends spelled it
/// with a hyphen; output always uses `in_progress`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    #[serde(alias = "in-progress")]
    InProgress,
    Resolved,
    Closed,
    #[serde(other)]
    Unknown,
}

impl TicketStatus {
    /// Targets offered to admins in the status-transition controls.
    pub const ALL: [Self; 4] = [Self::Open, Self::InProgress, Self::Resolved, Self::Closed];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
            Self::Unknown => "Unknown",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "in-progress" => Some(Self::InProgress),
            other => Self::ALL.into_iter().find(|s| s.as_str() == other),
        }
    }
}

/// A ticket as returned by `GET tickets/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Server-assigned identifier; numeric ids are kept as their decimal text.
    #[serde(deserialize_with = "deserialize_opaque_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub category: Category,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub priority: Priority,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub status: TicketStatus,
    /// Server timestamp (ISO 8601), rendered but never parsed for ordering.
    #[serde(default)]
    pub created_at: String,
}

/// Body of `POST tickets/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub status: TicketStatus,
}

impl NewTicket {
    /// Build a create payload, applying the `general`/`low` defaults.
    #[must_use]
    pub fn new(title: &str, description: &str, category: Option<Category>, priority: Option<Priority>) -> Self {
        Self {
            title: title.trim().to_owned(),
            description: description.trim().to_owned(),
            category: category.unwrap_or_default(),
            priority: priority.unwrap_or_default(),
            status: TicketStatus::Open,
        }
    }
}

/// Body of `POST tickets/classify/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassifyRequest {
    pub description: String,
}

/// Response of `POST tickets/classify/`.
///
/// Both fields are free text from the classifier and may be missing or
/// outside the canonical sets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Classification {
    #[serde(default)]
    pub suggested_category: Option<String>,
    #[serde(default)]
    pub suggested_priority: Option<String>,
}

impl Classification {
    /// Resolve the suggestion to canonical values, falling back to
    /// `general`/`low` for anything unusable.
    #[must_use]
    pub fn resolve(&self) -> (Category, Priority) {
        let category = self
            .suggested_category
            .as_deref()
            .and_then(Category::parse)
            .unwrap_or_default();
        let priority = self
            .suggested_priority
            .as_deref()
            .and_then(Priority::parse)
            .unwrap_or_default();
        (category, priority)
    }
}

/// Body of `PATCH tickets/{id}/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatusPatch {
    pub status: TicketStatus,
}

/// Aggregate counters from `GET tickets/stats/`. Missing or `null` fields
/// read as zero, each on its own.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_tickets: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub open_tickets: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_tickets_per_day: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub by_status: BTreeMap<String, u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub by_priority: BTreeMap<String, u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub by_category: BTreeMap<String, u64>,
}

impl StatsSnapshot {
    #[must_use]
    pub fn has_breakdown(&self) -> bool {
        !(self.by_status.is_empty() && self.by_priority.is_empty() && self.by_category.is_empty())
    }
}

/// Optional narrowing applied to `GET tickets/`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketFilter {
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub status: Option<TicketStatus>,
    pub search: String,
}

impl TicketFilter {
    /// Query parameters for the list request. Unset fields are omitted.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_owned()));
        }
        if let Some(priority) = self.priority {
            pairs.push(("priority", priority.as_str().to_owned()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_owned()));
        }
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_owned()));
        }
        pairs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

fn deserialize_opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) if !s.is_empty() => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("invalid ticket id: {other}"))),
    }
}

/// Enumerations with a catch-all bucket for malformed wire values.
trait Lenient: Default + DeserializeOwned {
    const UNKNOWN: Self;
}

impl Lenient for Category {
    const UNKNOWN: Self = Self::Unknown;
}

impl Lenient for Priority {
    const UNKNOWN: Self = Self::Unknown;
}

impl Lenient for TicketStatus {
    const UNKNOWN: Self = Self::Unknown;
}

/// `null` yields the default; anything that is not a recognized value
/// (wrong type included) yields the `Unknown` bucket.
fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Lenient,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        None => T::default(),
        Some(value) => serde_json::from_value(value).unwrap_or(T::UNKNOWN),
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
