use sqlx::PgConnection;

use super::{
    JOB_COLUMNS,
    error::{JobError, JobResult},
    filter::select_jobs,
    spec::{JobEntry, JobFilter},
};

pub struct JobSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobSelector { pool }
    }

    pub async fn get(&mut self, id: i32) -> JobResult<JobEntry> {
        sqlx::query_as::<_, JobEntry>(&format!("SELECT {} FROM jobs WHERE id = $1", JOB_COLUMNS))
            .bind(id)
            .fetch_optional(&mut *self.pool)
            .await?
            .ok_or(JobError::NotFound(id))
    }

    pub async fn find_all(&mut self, filter: &JobFilter) -> JobResult<Vec<JobEntry>> {
        let mut qb = select_jobs(filter);
        let rows = qb
            .build_query_as::<JobEntry>()
            .fetch_all(&mut *self.pool)
            .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use super::*;
    use crate::pkg::internal::adaptors::jobs::{
        fixtures::{decimal, seed},
        mutators::JobMutator,
        spec::NewJob,
    };

    fn titles(jobs: &[JobEntry]) -> Vec<&str> {
        jobs.iter().map(|j| j.title.as_str()).collect()
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_get_returns_full_entity(pool: PgPool) -> JobResult<()> {
        let mut conn = pool.acquire().await?;
        let seeded = seed(&mut conn).await?;
        let job = JobSelector::new(&mut conn).get(seeded[0].id).await?;
        assert_eq!(job.id, seeded[0].id);
        assert_eq!(job.title, "Job1");
        assert_eq!(job.salary, Some(100));
        assert_eq!(job.equity, Some(decimal("0.1")));
        assert_eq!(job.company_handle, "c1");
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_get_missing_is_not_found(pool: PgPool) -> JobResult<()> {
        let mut conn = pool.acquire().await?;
        seed(&mut conn).await?;
        let err = JobSelector::new(&mut conn).get(0).await.unwrap_err();
        assert!(matches!(err, JobError::NotFound(0)));
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_find_all_without_filter(pool: PgPool) -> JobResult<()> {
        let mut conn = pool.acquire().await?;
        seed(&mut conn).await?;
        let jobs = JobSelector::new(&mut conn)
            .find_all(&JobFilter::default())
            .await?;
        assert_eq!(titles(&jobs), vec!["Job3", "Job2", "Job1"]);
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_find_all_null_salary_sorts_first(pool: PgPool) -> JobResult<()> {
        let mut conn = pool.acquire().await?;
        seed(&mut conn).await?;
        JobMutator::new(&mut conn)
            .create(&NewJob {
                title: "Intern".into(),
                salary: None,
                equity: None,
                company_handle: "c1".into(),
            })
            .await?;
        let mut selector = JobSelector::new(&mut conn);

        let jobs = selector.find_all(&JobFilter::default()).await?;
        assert_eq!(titles(&jobs), vec!["Intern", "Job3", "Job2", "Job1"]);

        let jobs = selector
            .find_all(&JobFilter {
                min_salary: Some(0),
                ..Default::default()
            })
            .await?;
        assert_eq!(titles(&jobs), vec!["Job3", "Job2", "Job1"]);
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_find_all_min_salary(pool: PgPool) -> JobResult<()> {
        let mut conn = pool.acquire().await?;
        seed(&mut conn).await?;
        let jobs = JobSelector::new(&mut conn)
            .find_all(&JobFilter {
                min_salary: Some(200),
                ..Default::default()
            })
            .await?;
        assert_eq!(titles(&jobs), vec!["Job3", "Job2"]);
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_find_all_has_equity(pool: PgPool) -> JobResult<()> {
        let mut conn = pool.acquire().await?;
        seed(&mut conn).await?;
        let mut selector = JobSelector::new(&mut conn);

        let with_equity = selector
            .find_all(&JobFilter {
                has_equity: Some(true),
                ..Default::default()
            })
            .await?;
        assert_eq!(titles(&with_equity), vec!["Job2", "Job1"]);

        let unconstrained = selector
            .find_all(&JobFilter {
                has_equity: Some(false),
                ..Default::default()
            })
            .await?;
        assert_eq!(titles(&unconstrained), vec!["Job3", "Job2", "Job1"]);
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_find_all_combined_filters(pool: PgPool) -> JobResult<()> {
        let mut conn = pool.acquire().await?;
        seed(&mut conn).await?;
        let mut selector = JobSelector::new(&mut conn);

        let jobs = selector
            .find_all(&JobFilter {
                min_salary: Some(201),
                has_equity: Some(false),
                ..Default::default()
            })
            .await?;
        assert_eq!(titles(&jobs), vec!["Job3"]);

        let jobs = selector
            .find_all(&JobFilter {
                min_salary: Some(150),
                has_equity: Some(true),
                ..Default::default()
            })
            .await?;
        assert_eq!(titles(&jobs), vec!["Job2"]);
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_find_all_title_is_case_insensitive(pool: PgPool) -> JobResult<()> {
        let mut conn = pool.acquire().await?;
        seed(&mut conn).await?;
        let mut selector = JobSelector::new(&mut conn);

        let jobs = selector
            .find_all(&JobFilter {
                title: Some("ob".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(jobs.len(), 3);

        let jobs = selector
            .find_all(&JobFilter {
                title: Some("JOB2".into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(titles(&jobs), vec!["Job2"]);

        let jobs = selector
            .find_all(&JobFilter {
                title: Some("%".into()),
                ..Default::default()
            })
            .await?;
        assert!(jobs.is_empty());
        Ok(())
    }
}
