use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
}

impl Organization {
    pub async fn list_all(db: &crate::database::Database) -> Result<Vec<Organization>, sqlx::Error> {
        sqlx::query_as::<_, Organization>(
            "SELECT id, name, description, contact_email, phone FROM organizations",
        )
        .fetch_all(&db.pool)
        .await
    }
}
