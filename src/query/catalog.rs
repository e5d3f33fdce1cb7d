//! Запросы каталога событий: базовые SELECT и сборка фильтров из query string.

use serde::Deserialize;

use super::FilterQuery;

/// Поля карточки события для списков (upcoming, past, `/api/events`).
pub const SUMMARY_SELECT: &str = "SELECT e.id, e.name, e.short_description, e.event_date, \
     e.location, e.price::float8 AS price, e.image_url, c.name AS category, e.status, \
     e.goal_amount::float8 AS goal_amount, e.raised_amount::float8 AS raised_amount \
     FROM events e JOIN categories c ON e.category_id = c.id \
     WHERE e.status = 'active'";

/// Узкая проекция для `/api/search`.
pub const SEARCH_SELECT: &str = "SELECT e.id, e.name, e.short_description, e.event_date, \
     e.location, e.price::float8 AS price, e.image_url, c.name AS category \
     FROM events e JOIN categories c ON e.category_id = c.id \
     WHERE e.status = 'active'";

/// Карточки главной страницы.
pub const HOME_SELECT: &str = "SELECT e.id, e.name, e.short_description, e.event_date, \
     e.location, e.price::float8 AS price, e.image_url, c.name AS category, \
     e.goal_amount::float8 AS goal_amount, e.raised_amount::float8 AS raised_amount \
     FROM events e JOIN categories c ON e.category_id = c.id \
     WHERE e.status = 'active'";

pub const DETAIL_SELECT: &str = "SELECT e.id, e.name, e.short_description, e.description, \
     e.event_date, e.location, e.price::float8 AS price, e.image_url, e.status, \
     e.goal_amount::float8 AS goal_amount, e.raised_amount::float8 AS raised_amount, \
     e.category_id, e.org_id, c.name AS category, o.name AS organization, \
     o.contact_email, o.phone \
     FROM events e \
     JOIN categories c ON e.category_id = c.id \
     JOIN organizations o ON e.org_id = o.id \
     WHERE e.id = $1 AND e.status = 'active'";

pub const IMAGES_SELECT: &str = "SELECT url, caption FROM event_images WHERE event_id = $1";

pub const TICKETS_SELECT: &str =
    "SELECT type AS ticket_type, price::float8 AS price, quantity FROM tickets WHERE event_id = $1";

const UPCOMING: &str = "e.event_date::date >= CURRENT_DATE";
const PAST: &str = "e.event_date::date < CURRENT_DATE";

pub const HOME_UPCOMING_LIMIT: u32 = 8;
pub const HOME_POPULAR_LIMIT: u32 = 4;

/// Параметры `GET /api/events`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct EventFilters {
    pub category: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub q: Option<String>,
}

impl EventFilters {
    pub fn to_query(&self) -> FilterQuery {
        FilterQuery::new_where(SUMMARY_SELECT)
            .and_eq("e.category_id = CAST(? AS BIGINT)", self.category.as_deref())
            .and_contains("e.location ILIKE ?", self.location.as_deref())
            .and_eq(
                "e.event_date::date >= CAST(? AS DATE)",
                self.start_date.as_deref(),
            )
            .and_eq("e.event_date::date <= CAST(? AS DATE)", self.end_date.as_deref())
            .and_contains(
                "(e.name ILIKE ? OR e.short_description ILIKE ? OR e.description ILIKE ?)",
                self.q.as_deref(),
            )
            .order_by("e.event_date ASC")
    }
}

/// Параметры `GET /api/search`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SearchFilters {
    pub date: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
}

impl SearchFilters {
    pub fn to_query(&self) -> FilterQuery {
        FilterQuery::new_where(SEARCH_SELECT)
            .and_eq("e.event_date::date = CAST(? AS DATE)", self.date.as_deref())
            .and_contains("e.location ILIKE ?", self.location.as_deref())
            .and_eq("e.category_id = CAST(? AS BIGINT)", self.category.as_deref())
            .order_by("e.event_date ASC")
    }
}

pub fn upcoming() -> FilterQuery {
    FilterQuery::new_where(SUMMARY_SELECT)
        .and(UPCOMING, [])
        .order_by("e.event_date ASC")
}

pub fn past() -> FilterQuery {
    FilterQuery::new_where(SUMMARY_SELECT)
        .and(PAST, [])
        .order_by("e.event_date DESC")
}

pub fn home_upcoming() -> FilterQuery {
    FilterQuery::new_where(HOME_SELECT)
        .and(UPCOMING, [])
        .order_by("e.event_date ASC")
        .limit(HOME_UPCOMING_LIMIT)
}

pub fn home_popular() -> FilterQuery {
    FilterQuery::new_where(HOME_SELECT)
        .order_by("e.raised_amount DESC NULLS LAST")
        .limit(HOME_POPULAR_LIMIT)
}
