use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Карточка события в списках: upcoming, past и фильтрация `/api/events`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: i64,
    pub name: String,
    pub short_description: Option<String>,
    pub event_date: NaiveDateTime,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub category: String,
    pub status: String,
    pub goal_amount: Option<f64>,
    pub raised_amount: Option<f64>,
}

/// Результат `/api/search`: без статуса и сумм сбора.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: i64,
    pub name: String,
    pub short_description: Option<String>,
    pub event_date: NaiveDateTime,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub category: String,
}

/// Карточка для главной страницы.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct HomeCard {
    pub id: i64,
    pub name: String,
    pub short_description: Option<String>,
    pub event_date: NaiveDateTime,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub category: String,
    pub goal_amount: Option<f64>,
    pub raised_amount: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeSummary {
    pub upcoming: Vec<HomeCard>,
    pub popular: Vec<HomeCard>,
}

/// Полная строка события вместе с категорией и организатором.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: i64,
    pub name: String,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub event_date: NaiveDateTime,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub status: String,
    pub goal_amount: Option<f64>,
    pub raised_amount: Option<f64>,
    pub category_id: i64,
    pub org_id: i64,
    pub category: String,
    pub organization: String,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct EventImage {
    pub url: String,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TicketType {
    #[serde(rename = "type")]
    pub ticket_type: String,
    pub price: f64,
    pub quantity: i32,
}

/// Ответ `/api/events/{id}`: поля события на верхнем уровне плюс вложенные коллекции.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: EventRecord,
    pub images: Vec<EventImage>,
    pub tickets: Vec<TicketType>,
    pub progress: f64,
}

impl EventDetail {
    pub fn new(event: EventRecord, images: Vec<EventImage>, tickets: Vec<TicketType>) -> Self {
        let progress = funding_progress(event.raised_amount, event.goal_amount);
        Self {
            event,
            images,
            tickets,
            progress,
        }
    }
}

/// Процент собранных средств, всегда в диапазоне [0, 100].
/// Без цели (NULL или 0) прогресс равен 0 независимо от собранной суммы.
pub fn funding_progress(raised_amount: Option<f64>, goal_amount: Option<f64>) -> f64 {
    match goal_amount {
        Some(goal) if goal > 0.0 => {
            let raised = raised_amount.unwrap_or(0.0);
            (raised / goal * 100.0).clamp(0.0, 100.0)
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn record(goal_amount: Option<f64>, raised_amount: Option<f64>) -> EventRecord {
        EventRecord {
            id: 7,
            name: "Harbour Lights Gala".to_string(),
            short_description: Some("Charity night".to_string()),
            description: None,
            event_date: NaiveDate::from_ymd_opt(2026, 11, 20)
                .unwrap()
                .and_hms_opt(19, 0, 0)
                .unwrap(),
            location: Some("Austin, TX".to_string()),
            price: Some(45.0),
            image_url: None,
            status: "active".to_string(),
            goal_amount,
            raised_amount,
            category_id: 2,
            org_id: 3,
            category: "Gala".to_string(),
            organization: "Harbour Trust".to_string(),
            contact_email: Some("hello@harbour.org".to_string()),
            phone: None,
        }
    }

    #[test]
    fn progress_is_ratio_of_raised_to_goal() {
        assert_eq!(funding_progress(Some(150.0), Some(200.0)), 75.0);
    }

    #[test]
    fn progress_is_capped_at_one_hundred() {
        assert_eq!(funding_progress(Some(500.0), Some(200.0)), 100.0);
    }

    #[test]
    fn progress_is_zero_without_goal() {
        assert_eq!(funding_progress(Some(150.0), Some(0.0)), 0.0);
        assert_eq!(funding_progress(Some(150.0), None), 0.0);
        assert_eq!(funding_progress(None, Some(200.0)), 0.0);
    }

    #[test]
    fn detail_serializes_flat_with_nested_collections() {
        let detail = EventDetail::new(
            record(Some(200.0), Some(150.0)),
            vec![EventImage {
                url: "/img/gala-1.jpg".to_string(),
                caption: Some("Main hall".to_string()),
            }],
            vec![TicketType {
                ticket_type: "VIP".to_string(),
                price: 120.0,
                quantity: 40,
            }],
        );

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["category"], "Gala");
        assert_eq!(json["organization"], "Harbour Trust");
        assert_eq!(json["event_date"], "2026-11-20T19:00:00");
        assert_eq!(json["images"][0]["caption"], "Main hall");
        assert_eq!(json["tickets"][0]["type"], "VIP");
        assert_eq!(json["tickets"][0]["quantity"], 40);
        assert_eq!(json["progress"].as_f64(), Some(75.0));
        assert!(json.get("event").is_none());
    }

    proptest! {
        #[test]
        fn progress_stays_within_bounds(
            raised in proptest::option::of(0.0f64..1e9),
            goal in proptest::option::of(-1e6f64..1e9),
        ) {
            let progress = funding_progress(raised, goal);
            prop_assert!((0.0..=100.0).contains(&progress));
            if goal.map_or(true, |g| g <= 0.0) {
                prop_assert_eq!(progress, 0.0);
            }
        }
    }
}
