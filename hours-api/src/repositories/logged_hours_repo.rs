use async_trait::async_trait;
use sqlx::PgPool;
use time::PrimitiveDateTime;

use super::repo_error::RepositoryError;

#[async_trait]
pub trait LoggedHoursRepository {
    async fn get_by_user(&self, user_id: &str) -> Result<Vec<DatabaseLoggedHour>, RepositoryError>;
    async fn get_by_user_between(
        &self,
        user_id: &str,
        from: &PrimitiveDateTime,
        until: &PrimitiveDateTime,
    ) -> Result<Vec<DatabaseLoggedHour>, RepositoryError>;
    async fn create(&self, logged_hour: &NewDatabaseLoggedHour) -> Result<i32, RepositoryError>;
    async fn get_unapproved(&self) -> Result<Vec<DatabaseLoggedHour>, RepositoryError>;
    async fn approve(&self, id: i32) -> Result<u64, RepositoryError>;
    async fn distinct_users(&self) -> Result<Vec<DatabaseWorker>, RepositoryError>;
}

pub struct LoggedHoursRepositoryImpl {
    pool: PgPool,
}

impl LoggedHoursRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DatabaseLoggedHour {
    pub id: i32,
    pub user_id: String,
    pub user_name: String,
    pub description: String,
    pub hours: i32,
    pub date: PrimitiveDateTime,
    pub approved: bool,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DatabaseWorker {
    pub user_id: String,
    pub user_name: String,
}

pub struct NewDatabaseLoggedHour {
    pub user_id: String,
    pub user_name: String,
    pub description: String,
    pub hours: i32,
    pub date: PrimitiveDateTime,
}

#[async_trait]
impl LoggedHoursRepository for LoggedHoursRepositoryImpl {
    async fn get_by_user(&self, user_id: &str) -> Result<Vec<DatabaseLoggedHour>, RepositoryError> {
        let rows = sqlx::query_as::<_, DatabaseLoggedHour>(
            r#"
            SELECT id, user_id, user_name, description, hours, date, approved
            FROM logged_hours
            WHERE user_id = $1
            ORDER BY date ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get_by_user_between(
        &self,
        user_id: &str,
        from: &PrimitiveDateTime,
        until: &PrimitiveDateTime,
    ) -> Result<Vec<DatabaseLoggedHour>, RepositoryError> {
        let rows = sqlx::query_as::<_, DatabaseLoggedHour>(
            r#"
            SELECT id, user_id, user_name, description, hours, date, approved
            FROM logged_hours
            WHERE user_id = $1 AND date >= $2 AND date < $3
            ORDER BY date ASC, id ASC
            "#,
        )
        .bind(user_id)
        .bind(*from)
        .bind(*until)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn create(&self, logged_hour: &NewDatabaseLoggedHour) -> Result<i32, RepositoryError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO logged_hours (user_id, user_name, description, hours, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&logged_hour.user_id)
        .bind(&logged_hour.user_name)
        .bind(&logged_hour.description)
        .bind(logged_hour.hours)
        .bind(logged_hour.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get_unapproved(&self) -> Result<Vec<DatabaseLoggedHour>, RepositoryError> {
        let rows = sqlx::query_as::<_, DatabaseLoggedHour>(
            r#"
            SELECT id, user_id, user_name, description, hours, date, approved
            FROM logged_hours
            WHERE approved = FALSE
            ORDER BY date ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn approve(&self, id: i32) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE logged_hours
            SET approved = TRUE
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn distinct_users(&self) -> Result<Vec<DatabaseWorker>, RepositoryError> {
        let workers = sqlx::query_as::<_, DatabaseWorker>(
            r#"
            SELECT DISTINCT user_id, user_name
            FROM logged_hours
            ORDER BY user_name ASC, user_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(workers)
    }
}
