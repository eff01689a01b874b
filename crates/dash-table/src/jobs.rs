//! Per-row simulated jobs.
//!
//! Each row can run one job that moves `Idle -> Running -> Done`. Progress
//! advances by a fixed step on each tick of a fixed-interval timer owned by
//! the view. There is no way back: starting a running or finished job is a
//! no-op.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use dash_model::RecordId;

/// Timer parameters for row jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobSchedule {
    /// Time between progress steps.
    pub interval: Duration,
    /// Percent added per step.
    pub step: u8,
}

impl Default for JobSchedule {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(200),
            step: 10,
        }
    }
}

/// State of one row's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobState {
    #[default]
    Idle,
    Running {
        /// Percent complete, `0..100`.
        progress: u8,
    },
    Done,
}

impl JobState {
    /// Completion as a fraction for progress bars.
    pub fn fraction(&self) -> f32 {
        match self {
            Self::Idle => 0.0,
            Self::Running { progress } => f32::from(*progress) / 100.0,
            Self::Done => 1.0,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }
}

/// Job table keyed by row identifier.
#[derive(Debug, Clone, Default)]
pub struct RowJobs {
    schedule: JobSchedule,
    jobs: HashMap<RecordId, JobState>,
}

impl RowJobs {
    pub fn new(schedule: JobSchedule) -> Self {
        Self {
            schedule,
            jobs: HashMap::new(),
        }
    }

    /// Current state of a row's job.
    pub fn state(&self, id: &RecordId) -> JobState {
        self.jobs.get(id).copied().unwrap_or_default()
    }

    /// Whether any job needs the timer.
    pub fn has_running(&self) -> bool {
        self.jobs.values().any(JobState::is_running)
    }

    /// Start a row's job. Returns `false` (and changes nothing) if the job
    /// is already running or done.
    pub fn start(&mut self, id: &RecordId) -> bool {
        match self.state(id) {
            JobState::Idle => {
                tracing::debug!(row = %id, "Row job started");
                self.jobs
                    .insert(id.clone(), JobState::Running { progress: 0 });
                true
            }
            JobState::Running { .. } | JobState::Done => false,
        }
    }

    /// Advance every running job by one step.
    ///
    /// Returns the rows whose jobs finished on this tick.
    pub fn tick(&mut self) -> Vec<RecordId> {
        let step = self.schedule.step;
        let mut finished = Vec::new();

        for (id, state) in &mut self.jobs {
            if let JobState::Running { progress } = *state {
                let next = progress.saturating_add(step);
                if next >= 100 {
                    *state = JobState::Done;
                    finished.push(id.clone());
                } else {
                    *state = JobState::Running { progress: next };
                }
            }
        }

        for id in &finished {
            tracing::debug!(row = %id, "Row job finished");
        }
        finished
    }

    /// Forget the jobs of rows that are no longer present, running or not.
    ///
    /// Rows that remain keep their state, so finished rows stay marked done.
    pub fn retain_rows<'a>(&mut self, present: impl IntoIterator<Item = &'a RecordId>) {
        let present: HashSet<&RecordId> = present.into_iter().collect();
        self.jobs.retain(|id, _| present.contains(id));
    }

    /// Tear down: drop every running job.
    pub fn cancel_all(&mut self) {
        let before = self.jobs.len();
        self.jobs.retain(|_, state| !state.is_running());
        if before != self.jobs.len() {
            tracing::debug!(cancelled = before - self.jobs.len(), "Cancelled row jobs");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> RecordId {
        RecordId::from(n)
    }

    #[test]
    fn test_idle_running_done() {
        let mut jobs = RowJobs::new(JobSchedule {
            interval: Duration::from_millis(10),
            step: 25,
        });
        assert_eq!(jobs.state(&id(1)), JobState::Idle);

        assert!(jobs.start(&id(1)));
        assert_eq!(jobs.state(&id(1)), JobState::Running { progress: 0 });
        assert!(jobs.has_running());

        assert!(jobs.tick().is_empty());
        assert!(jobs.tick().is_empty());
        assert!(jobs.tick().is_empty());
        assert_eq!(jobs.state(&id(1)), JobState::Running { progress: 75 });

        assert_eq!(jobs.tick(), vec![id(1)]);
        assert_eq!(jobs.state(&id(1)), JobState::Done);
        assert!(!jobs.has_running());
    }

    #[test]
    fn test_start_while_running_does_not_reset() {
        let mut jobs = RowJobs::new(JobSchedule::default());
        jobs.start(&id(1));
        jobs.tick();
        jobs.tick();

        assert!(!jobs.start(&id(1)));
        assert_eq!(jobs.state(&id(1)), JobState::Running { progress: 20 });
    }

    #[test]
    fn test_start_when_done_is_noop() {
        let mut jobs = RowJobs::new(JobSchedule {
            interval: Duration::from_millis(10),
            step: 100,
        });
        jobs.start(&id(1));
        jobs.tick();
        assert_eq!(jobs.state(&id(1)), JobState::Done);

        assert!(!jobs.start(&id(1)));
        assert_eq!(jobs.state(&id(1)), JobState::Done);
    }

    #[test]
    fn test_jobs_are_independent() {
        let mut jobs = RowJobs::new(JobSchedule::default());
        jobs.start(&id(1));
        jobs.tick();
        jobs.start(&id(2));
        jobs.tick();

        assert_eq!(jobs.state(&id(1)), JobState::Running { progress: 20 });
        assert_eq!(jobs.state(&id(2)), JobState::Running { progress: 10 });
    }

    #[test]
    fn test_cancel_all_keeps_done() {
        let mut jobs = RowJobs::new(JobSchedule {
            interval: Duration::from_millis(10),
            step: 100,
        });
        jobs.start(&id(1));
        jobs.tick();
        jobs.start(&id(2));

        jobs.cancel_all();
        assert_eq!(jobs.state(&id(1)), JobState::Done);
        assert_eq!(jobs.state(&id(2)), JobState::Idle);
        assert!(!jobs.has_running());
    }

    #[test]
    fn test_retain_rows_cancels_missing() {
        let mut jobs = RowJobs::new(JobSchedule::default());
        jobs.start(&id(1));
        jobs.start(&id(2));

        let present = [id(2)];
        jobs.retain_rows(&present);
        assert_eq!(jobs.state(&id(1)), JobState::Idle);
        assert!(jobs.state(&id(2)).is_running());
    }

    #[test]
    fn test_retain_rows_drops_finished_missing() {
        let mut jobs = RowJobs::new(JobSchedule {
            interval: Duration::from_millis(10),
            step: 100,
        });
        jobs.start(&id(1));
        jobs.start(&id(2));
        jobs.tick();

        let present = [id(2)];
        jobs.retain_rows(&present);
        assert_eq!(jobs.jobs.len(), 1);
        assert_eq!(jobs.state(&id(1)), JobState::Idle);
        assert_eq!(jobs.state(&id(2)), JobState::Done);
    }

    #[test]
    fn test_fraction() {
        assert_eq!(JobState::Idle.fraction(), 0.0);
        assert_eq!(JobState::Running { progress: 50 }.fraction(), 0.5);
        assert_eq!(JobState::Done.fraction(), 1.0);
    }
}
