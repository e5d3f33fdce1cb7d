//! Сборка параметризованных SELECT-запросов с необязательными фильтрами.
//!
//! SQL-текст запроса и каждого предиката - только `&'static str`, а значения из запроса
//! пользователя попадают в выражение исключительно как связанные параметры (`$1`, `$2`, ...).
//! В тексте предиката параметр обозначается `?`, нумерация проставляется при рендеринге.

pub mod catalog;

use sqlx::{postgres::PgRow, FromRow, PgPool};

#[derive(Debug, Clone)]
struct Predicate {
    sql: &'static str,
    values: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FilterQuery {
    select: &'static str,
    /// `select` уже содержит WHERE, и первый предикат присоединяется через AND.
    has_where: bool,
    predicates: Vec<Predicate>,
    order_by: Option<&'static str>,
    limit: Option<u32>,
}

impl FilterQuery {
    /// `select` без WHERE: первый предикат откроет секцию WHERE.
    pub fn new(select: &'static str) -> Self {
        Self {
            select,
            has_where: false,
            predicates: Vec::new(),
            order_by: None,
            limit: None,
        }
    }

    /// `select` заканчивается собственным WHERE-условием.
    pub fn new_where(select: &'static str) -> Self {
        Self {
            has_where: true,
            ..Self::new(select)
        }
    }

    /// Добавляет предикат через AND. Число `?` в `sql` должно совпадать с числом значений.
    pub fn and<I>(mut self, sql: &'static str, values: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let values: Vec<String> = values.into_iter().collect();
        debug_assert_eq!(
            placeholder_count(sql),
            values.len(),
            "placeholder/value mismatch in `{sql}`"
        );
        self.predicates.push(Predicate { sql, values });
        self
    }

    /// Точное сравнение; пустой или отсутствующий фильтр пропускается.
    pub fn and_eq(self, sql: &'static str, value: Option<&str>) -> Self {
        match non_empty(value) {
            Some(value) => self.and(sql, [value.to_string()]),
            None => self,
        }
    }

    /// Поиск подстроки: значение оборачивается в `%...%` и связывается с каждым `?` в `sql`.
    pub fn and_contains(self, sql: &'static str, value: Option<&str>) -> Self {
        match non_empty(value) {
            Some(value) => {
                let pattern = format!("%{value}%");
                let values = vec![pattern; placeholder_count(sql)];
                self.and(sql, values)
            }
            None => self,
        }
    }

    pub fn order_by(mut self, clause: &'static str) -> Self {
        self.order_by = Some(clause);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }

    /// Связанные значения в порядке номеров параметров.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.predicates
            .iter()
            .flat_map(|p| p.values.iter().map(String::as_str))
    }

    pub fn sql(&self) -> String {
        let mut sql = String::from(self.select);
        let mut next_param = 1;
        let mut has_where = self.has_where;

        for predicate in &self.predicates {
            sql.push_str(if has_where { " AND " } else { " WHERE " });
            has_where = true;

            for ch in predicate.sql.chars() {
                if ch == '?' {
                    sql.push('$');
                    sql.push_str(&next_param.to_string());
                    next_param += 1;
                } else {
                    sql.push(ch);
                }
            }
        }

        if let Some(order_by) = self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order_by);
        }
        if let Some(limit) = self.limit {
            sql.push_str(" LIMIT ");
            sql.push_str(&limit.to_string());
        }
        sql
    }

    pub async fn fetch_all<T>(&self, pool: &PgPool) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let sql = self.sql();
        let mut query = sqlx::query_as::<_, T>(&sql);
        for value in self.values() {
            query = query.bind(value);
        }
        query.fetch_all(pool).await
    }
}

fn placeholder_count(sql: &str) -> usize {
    sql.matches('?').count()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
