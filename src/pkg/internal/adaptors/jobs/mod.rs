pub mod error;
pub mod filter;
pub mod mutators;
pub mod selectors;
pub mod spec;

/// Columns returned for every job read or written.
pub(crate) const JOB_COLUMNS: &str = "id, title, salary, equity, company_handle";

#[cfg(test)]
pub(crate) mod fixtures {
    use std::str::FromStr;

    use sqlx::{PgConnection, types::BigDecimal};

    use super::{
        error::JobResult,
        mutators::JobMutator,
        spec::{JobEntry, NewJob},
    };

    pub fn decimal(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).expect("valid decimal literal")
    }

    /// Seeds three companies and three jobs, returned in insertion order.
    pub async fn seed(conn: &mut PgConnection) -> JobResult<Vec<JobEntry>> {
        sqlx::query(
            "INSERT INTO companies (handle, name, num_employees, description)
             VALUES ('c1', 'C1', 1, 'Desc1'), ('c2', 'C2', 2, 'Desc2'), ('c3', 'C3', 3, 'Desc3')",
        )
        .execute(&mut *conn)
        .await?;

        let mut mutator = JobMutator::new(conn);
        let mut jobs = Vec::new();
        for (title, salary, equity, handle) in [
            ("Job1", 100, "0.1", "c1"),
            ("Job2", 200, "0.2", "c2"),
            ("Job3", 300, "0", "c3"),
        ] {
            let job = mutator
                .create(&NewJob {
                    title: title.into(),
                    salary: Some(salary),
                    equity: Some(decimal(equity)),
                    company_handle: handle.into(),
                })
                .await?;
            jobs.push(job);
        }
        Ok(jobs)
    }
}
