use std::thread;

use thiserror::Error;
use tracing::{info, warn};

use stockcast_core::EngineError;

use crate::job::Job;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JobError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("job '{0}' panicked")]
    Panicked(String),
}

/// Result of one job in a batch, tagged with the job key.
#[derive(Debug, Clone, PartialEq)]
pub struct JobOutcome<O> {
    pub key: String,
    pub result: Result<O, JobError>,
}

/// Executor for forecast jobs.
///
/// Runs never share mutable state, so batching is purely a throughput concern.
pub trait Scheduler: Send + Sync {
    /// Upper bound on jobs executing at the same time.
    fn max_parallel(&self) -> usize;

    fn run<J: Job>(&self, job: &J) -> Result<J::Output, JobError> {
        job.run().map_err(|err| {
            warn!(job = job.key(), error = %err, "job failed");
            JobError::from(err)
        })
    }

    /// Run independent jobs concurrently; outcomes keep submission order.
    fn run_batch<J: Job>(&self, jobs: &[J]) -> Vec<JobOutcome<J::Output>> {
        let width = self.max_parallel().max(1);
        let mut outcomes = Vec::with_capacity(jobs.len());

        for chunk in jobs.chunks(width) {
            thread::scope(|scope| {
                let handles: Vec<_> = chunk
                    .iter()
                    .map(|job| (job, scope.spawn(move || self.run(job))))
                    .collect();

                for (job, handle) in handles {
                    let result = handle
                        .join()
                        .unwrap_or_else(|_| Err(JobError::Panicked(job.key().to_string())));
                    outcomes.push(JobOutcome {
                        key: job.key().to_string(),
                        result,
                    });
                }
            });
        }

        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        info!(jobs = jobs.len(), failed, "batch complete");
        outcomes
    }
}

/// Runs jobs in-process on scoped threads.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LocalScheduler {
    max_parallel: usize,
}

impl Default for LocalScheduler {
    fn default() -> Self {
        Self::new(4)
    }
}

impl LocalScheduler {
    pub fn new(max_parallel: usize) -> Self {
        Self {
            max_parallel: max_parallel.max(1),
        }
    }

    /// One job at a time, on the calling thread's scope.
    pub fn sequential() -> Self {
        Self::new(1)
    }
}

impl Scheduler for LocalScheduler {
    fn max_parallel(&self) -> usize {
        self.max_parallel
    }
}
