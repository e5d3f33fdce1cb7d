use sqlx::PgPool;
use tracing::debug;

use crate::models::{
    EventDetail, EventImage, EventRecord, EventSummary, HomeCard, HomeSummary, SearchHit,
    TicketType,
};
use crate::query::catalog::{
    self as queries, EventFilters, SearchFilters, DETAIL_SELECT, IMAGES_SELECT, TICKETS_SELECT,
};

/// Доступ к событиям каталога. Только чтение.
#[derive(Clone)]
pub struct CatalogStore {
    pool: PgPool,
}

impl CatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn upcoming_events(&self) -> Result<Vec<EventSummary>, sqlx::Error> {
        queries::upcoming().fetch_all(&self.pool).await
    }

    pub async fn past_events(&self) -> Result<Vec<EventSummary>, sqlx::Error> {
        queries::past().fetch_all(&self.pool).await
    }

    pub async fn filter_events(
        &self,
        filters: &EventFilters,
    ) -> Result<Vec<EventSummary>, sqlx::Error> {
        let query = filters.to_query();
        debug!(predicates = query.predicate_count(), "filtering events");
        query.fetch_all(&self.pool).await
    }

    pub async fn search_events(
        &self,
        filters: &SearchFilters,
    ) -> Result<Vec<SearchHit>, sqlx::Error> {
        let query = filters.to_query();
        debug!(predicates = query.predicate_count(), "searching events");
        query.fetch_all(&self.pool).await
    }

    /// Событие с картинками и билетами. `None`, если активного события с таким id нет.
    ///
    /// Три чтения идут последовательно и без транзакции.
    pub async fn event_detail(&self, id: i64) -> Result<Option<EventDetail>, sqlx::Error> {
        let event = sqlx::query_as::<_, EventRecord>(DETAIL_SELECT)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(event) = event else {
            return Ok(None);
        };

        let images = sqlx::query_as::<_, EventImage>(IMAGES_SELECT)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

        let tickets = sqlx::query_as::<_, TicketType>(TICKETS_SELECT)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

        Ok(Some(EventDetail::new(event, images, tickets)))
    }

    pub async fn home_summary(&self) -> Result<HomeSummary, sqlx::Error> {
        let upcoming_query = queries::home_upcoming();
        let popular_query = queries::home_popular();

        let (upcoming, popular) = tokio::try_join!(
            upcoming_query.fetch_all::<HomeCard>(&self.pool),
            popular_query.fetch_all::<HomeCard>(&self.pool),
        )?;

        Ok(HomeSummary { upcoming, popular })
    }
}
