use sqlx::PgConnection;

use super::{
    JOB_COLUMNS,
    error::{JobError, JobResult},
    spec::{JobEntry, JobUpdate, NewJob},
};

pub struct JobMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobMutator { pool }
    }

    pub async fn create(&mut self, job: &NewJob) -> JobResult<JobEntry> {
        let row = sqlx::query_as::<_, JobEntry>(&format!(
            r#"
            INSERT INTO jobs (title, salary, equity, company_handle)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            JOB_COLUMNS
        ))
        .bind(&job.title)
        .bind(job.salary)
        .bind(&job.equity)
        .bind(&job.company_handle)
        .fetch_one(&mut *self.pool)
        .await?;
        tracing::debug!("created job {} for {}", row.id, row.company_handle);
        Ok(row)
    }

    /// Replaces title, salary and equity together. Absent salary or equity
    /// are cleared; the company handle is never touched.
    pub async fn update(&mut self, id: i32, changes: &JobUpdate) -> JobResult<JobEntry> {
        if changes.is_empty() {
            return Err(JobError::BadRequest("no data provided".into()));
        }
        let title = changes
            .title
            .as_deref()
            .ok_or_else(|| JobError::BadRequest("title is required".into()))?;

        sqlx::query_as::<_, JobEntry>(&format!(
            r#"
            UPDATE jobs
            SET title = $2, salary = $3, equity = $4
            WHERE id = $1
            RETURNING {}
            "#,
            JOB_COLUMNS
        ))
        .bind(id)
        .bind(title)
        .bind(changes.salary)
        .bind(&changes.equity)
        .fetch_optional(&mut *self.pool)
        .await?
        .ok_or(JobError::NotFound(id))
    }

    pub async fn delete(&mut self, id: i32) -> JobResult<()> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(JobError::NotFound(id));
        }
        Ok(())
    }
}
