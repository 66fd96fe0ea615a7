//! Postgres-backed job queue.
//!
//! Enqueue-only: jobs are inserted into the `jobs` table and picked up by
//! external workers. Nothing here waits for execution.

use crate::error::StoreError;
use crate::models::Job;
use crate::stores::JobQueue;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Job submission backed by the `jobs` table.
#[derive(Clone)]
pub struct PgJobQueue {
    pool: PgPool,
}

impl PgJobQueue {
    /// Create a new job queue.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobQueue for PgJobQueue {
    async fn queue(&self, job: Job) -> Result<(), StoreError> {
        let data = job.data()?;

        sqlx::query(
            r"
            INSERT INTO jobs (id, name, data, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(Uuid::new_v4())
        .bind(job.name())
        .bind(&data)
        .execute(&self.pool)
        .await?;

        tracing::info!(job = job.name(), "Queued job");
        Ok(())
    }
}
