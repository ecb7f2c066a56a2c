use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Longest prose shell built for one trip; a longer date range still gets its
/// raw text, only the empty day list stops here.
pub const MAX_SHELL_DAYS: u32 = 366;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Activity,
    Meal,
    Transport,
    Evening,
}

impl ActivityType {
    pub const ALL: [ActivityType; 4] = [
        ActivityType::Activity,
        ActivityType::Meal,
        ActivityType::Transport,
        ActivityType::Evening,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Activity => "activity",
            ActivityType::Meal => "meal",
            ActivityType::Transport => "transport",
            ActivityType::Evening => "evening",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Activity => "Activity",
            ActivityType::Meal => "Meal",
            ActivityType::Transport => "Transport",
            ActivityType::Evening => "Evening",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ActivityType::Activity => "✨",
            ActivityType::Meal => "🍽️",
            ActivityType::Transport => "🚗",
            ActivityType::Evening => "🌙",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub time_start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_end: Option<String>,
    pub location: String,
    /// Free text such as "$25" or "€40-60"; never parsed here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DayPlan {
    pub day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Chronological order as written by the model.
    pub items: Vec<ActivityItem>,
}

impl DayPlan {
    pub fn empty(day: u32) -> Self {
        Self {
            day,
            date: None,
            summary: None,
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ItineraryDocument {
    pub destination: String,
    pub days: Vec<DayPlan>,
    /// Unparsed model text, set only when no structured itinerary could be read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl ItineraryDocument {
    /// Shell used when the model answered in prose: one empty day per trip day and
    /// the original text kept in `raw`.
    pub fn raw_text(destination: &str, trip_length_days: u32, text: &str) -> Self {
        Self {
            destination: destination.to_string(),
            days: (1..=trip_length_days.clamp(1, MAX_SHELL_DAYS))
                .map(DayPlan::empty)
                .collect(),
            raw: Some(text.to_string()),
        }
    }

    /// Checks the day numbering: every day positive and no number used twice.
    pub fn check_days(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for plan in &self.days {
            if plan.day == 0 {
                return Err("day numbers start at 1".to_string());
            }
            if !seen.insert(plan.day) {
                return Err(format!("day {} appears more than once", plan.day));
            }
        }
        Ok(())
    }
}

/// Itinerary JSON handed back to the client exactly as it was accepted.
///
/// Model output only becomes one after it has been read as an [`ItineraryDocument`]
/// and its day numbers checked; the typed reading is then thrown away so fields the
/// model added or left out reach the client untouched.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct ItineraryJson(Value);

impl ItineraryJson {
    pub fn checked(value: Value) -> Result<Self, String> {
        let document: ItineraryDocument =
            serde_json::from_value(value.clone()).map_err(|e| e.to_string())?;
        document.check_days()?;
        Ok(Self(value))
    }

    pub fn from_document(document: &ItineraryDocument) -> Result<Self, serde_json::Error> {
        serde_json::to_value(document).map(Self)
    }

    pub fn day_count(&self) -> usize {
        self.0
            .get("days")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

#[derive(Debug, Serialize)]
pub struct GeneratedItinerary {
    pub itinerary_json: ItineraryJson,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_text_shell() {
        let doc = ItineraryDocument::raw_text("Kyoto", 3, "Day 1: temples");
        assert_eq!(doc.destination, "Kyoto");
        assert_eq!(
            doc.days.iter().map(|d| d.day).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(doc.days.iter().all(|d| d.items.is_empty() && d.summary.is_none()));
        assert_eq!(doc.raw.as_deref(), Some("Day 1: temples"));
    }

    #[test]
    fn test_raw_text_shell_is_capped() {
        let doc = ItineraryDocument::raw_text("Anywhere", 3_652_059, "A very long trip");
        assert_eq!(doc.days.len(), MAX_SHELL_DAYS as usize);
        assert_eq!(doc.days.last().map(|d| d.day), Some(MAX_SHELL_DAYS));
        assert_eq!(doc.raw.as_deref(), Some("A very long trip"));
    }

    #[test]
    fn test_checked_json_is_kept_verbatim() {
        let value = json!({
            "destination": "Paris",
            "tips": "Buy a museum pass",
            "days": [{
                "day": 1,
                "date": null,
                "items": [{
                    "title": "Louvre",
                    "type": "activity",
                    "timeStart": "09:00",
                    "location": "Rue de Rivoli",
                    "description": "Arrive at opening"
                }]
            }]
        });
        let itinerary = ItineraryJson::checked(value.clone()).unwrap();
        assert_eq!(itinerary.as_value(), &value);
        assert_eq!(serde_json::to_value(&itinerary).unwrap(), value);
        assert_eq!(itinerary.day_count(), 1);
    }

    #[test]
    fn test_checked_json_rejects_bad_days() {
        let duplicate = json!({
            "destination": "Paris",
            "days": [{ "day": 2, "items": [] }, { "day": 2, "items": [] }]
        });
        assert!(ItineraryJson::checked(duplicate).is_err());
        assert!(ItineraryJson::checked(json!({ "destination": "Paris" })).is_err());
    }

    #[test]
    fn test_item_requires_all_fields() {
        let partial = json!({
            "title": "Louvre",
            "type": "activity",
            "timeStart": "09:00"
        });
        assert!(serde_json::from_value::<ActivityItem>(partial).is_err());
    }

    #[test]
    fn test_missing_highlights_reads_as_empty() {
        let item: ActivityItem = serde_json::from_value(json!({
            "title": "Lunch at Chez Janou",
            "type": "meal",
            "timeStart": "12:30",
            "location": "Le Marais",
            "description": "Provençal bistro"
        }))
        .unwrap();
        assert_eq!(item.kind, ActivityType::Meal);
        assert!(item.highlights.is_empty());
        assert_eq!(item.cost, None);
    }

    #[test]
    fn test_serialized_field_names() {
        let doc = ItineraryDocument {
            destination: "Paris".to_string(),
            days: vec![DayPlan {
                day: 1,
                date: Some("2025-05-01".to_string()),
                summary: None,
                items: vec![ActivityItem {
                    title: "Seine cruise".to_string(),
                    kind: ActivityType::Evening,
                    time_start: "19:00".to_string(),
                    time_end: Some("20:30".to_string()),
                    location: "Pont Neuf".to_string(),
                    cost: Some("€18".to_string()),
                    description: "Sunset on the river".to_string(),
                    highlights: vec!["views".to_string()],
                }],
            }],
            raw: None,
        };
        let value = serde_json::to_value(&doc).unwrap();
        let item = &value["days"][0]["items"][0];
        assert_eq!(item["type"], "evening");
        assert_eq!(item["timeStart"], "19:00");
        assert_eq!(item["timeEnd"], "20:30");
        assert!(value.get("raw").is_none());
        assert!(value["days"][0].get("summary").is_none());
    }

    #[test]
    fn test_check_days() {
        let mut doc = ItineraryDocument::raw_text("Oslo", 2, "text");
        assert!(doc.check_days().is_ok());

        doc.days.push(DayPlan::empty(2));
        assert!(doc.check_days().is_err());

        doc.days = vec![DayPlan::empty(0)];
        assert!(doc.check_days().is_err());
    }

    #[test]
    fn test_every_kind_has_a_distinct_icon() {
        let icons: HashSet<_> = ActivityType::ALL.iter().map(|k| k.icon()).collect();
        assert_eq!(icons.len(), ActivityType::ALL.len());
    }
}
