//! Iteration-count sweep.
//!
//! Runs the initialize -> relax -> sample chain once per iteration count in an
//! arithmetic sequence. Steps share nothing but the growing record; each one
//! restarts from the uniform guess.

use std::fmt;

use crate::error::{SolverError, SolverResult};
use crate::field::Field;
use crate::problem::DiffusionProblem;
use crate::relax::relax;
use crate::sample::Samples;

/// Inclusive arithmetic sequence of iteration counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepDefinition {
    start: usize,
    end: usize,
    step: usize,
}

impl SweepDefinition {
    pub fn new(start: usize, end: usize, step: usize) -> SolverResult<Self> {
        if end < start {
            return Err(SolverError::InvalidSweep {
                start,
                end,
                step,
                reason: "end is before start",
            });
        }
        if step == 0 && end > start {
            return Err(SolverError::InvalidSweep {
                start,
                end,
                step,
                reason: "step must be positive",
            });
        }
        Ok(Self { start, end, step })
    }

    /// A sweep with a single iteration count.
    pub fn single(count: usize) -> Self {
        Self {
            start: count,
            end: count,
            step: 0,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Iteration counts in sweep order, `start` through `end` inclusive.
    pub fn counts(&self) -> Vec<usize> {
        if self.step == 0 {
            return vec![self.start];
        }
        (self.start..=self.end).step_by(self.step).collect()
    }

    pub fn len(&self) -> usize {
        if self.step == 0 {
            1
        } else {
            (self.end - self.start) / self.step + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for SweepDefinition {
    /// 0, 20, ..., 500
    fn default() -> Self {
        Self {
            start: 0,
            end: 500,
            step: 20,
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {}..={} step {} ({} steps)",
            self.start,
            self.end,
            self.step,
            self.len()
        )
    }
}

/// One sweep step's result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepEntry {
    pub iterations: usize,
    pub samples: Samples,
}

/// Sweep results in sweep order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepRecord {
    entries: Vec<SweepEntry>,
}

impl SweepRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: SweepEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[SweepEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&SweepEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SweepEntry> {
        self.entries.iter()
    }
}

/// Run the whole sweep and collect the samples.
pub fn execute_sweep(
    problem: &DiffusionProblem,
    sweep: &SweepDefinition,
) -> SolverResult<SweepRecord> {
    execute_sweep_with(problem, sweep, |_, _| {})
}

/// Run the whole sweep, handing each step's relaxed field and entry to
/// `observer` before the field is dropped.
pub fn execute_sweep_with<F>(
    problem: &DiffusionProblem,
    sweep: &SweepDefinition,
    mut observer: F,
) -> SolverResult<SweepRecord>
where
    F: FnMut(&SweepEntry, &Field),
{
    let mut record = SweepRecord::new();
    let total = sweep.len();

    for (index, iterations) in sweep.counts().into_iter().enumerate() {
        let mut field = problem.initial_field()?;
        relax(&mut field, iterations);
        let samples = problem.sample_points().read(&field)?;

        let [a, b, c, d] = *samples.values();
        tracing::info!(
            step = index + 1,
            total,
            iterations,
            a,
            b,
            c,
            d,
            "sweep step finished"
        );

        let entry = SweepEntry {
            iterations,
            samples,
        };
        observer(&entry, &field);
        record.push(entry);
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_counts() {
        let sweep = SweepDefinition::default();
        let counts = sweep.counts();
        assert_eq!(counts.len(), 26);
        assert_eq!(sweep.len(), 26);
        assert_eq!(counts[0], 0);
        assert_eq!(counts[1], 20);
        assert_eq!(*counts.last().unwrap(), 500);
    }

    #[test]
    fn end_not_on_step_is_excluded() {
        let sweep = SweepDefinition::new(0, 45, 20).unwrap();
        assert_eq!(sweep.counts(), vec![0, 20, 40]);
        assert_eq!(sweep.len(), 3);
    }

    #[test]
    fn degenerate_sweeps() {
        assert_eq!(SweepDefinition::new(7, 7, 0).unwrap().counts(), vec![7]);
        assert_eq!(SweepDefinition::new(7, 7, 5).unwrap().counts(), vec![7]);
        assert_eq!(SweepDefinition::single(3).counts(), vec![3]);
    }

    #[test]
    fn inconsistent_bounds_rejected() {
        assert!(matches!(
            SweepDefinition::new(10, 5, 1),
            Err(SolverError::InvalidSweep { .. })
        ));
        assert!(matches!(
            SweepDefinition::new(0, 5, 0),
            Err(SolverError::InvalidSweep { .. })
        ));
    }

    #[test]
    fn observer_sees_every_step_in_order() {
        let problem = DiffusionProblem::new(12, 0.0, Default::default(), 0.4).unwrap();
        let sweep = SweepDefinition::new(0, 30, 10).unwrap();
        let mut seen = Vec::new();
        let record = execute_sweep_with(&problem, &sweep, |entry, field| {
            assert_eq!(field.size(), 12);
            seen.push(entry.iterations);
        })
        .unwrap();
        assert_eq!(seen, vec![0, 10, 20, 30]);
        let counts: Vec<usize> = record.iter().map(|e| e.iterations).collect();
        assert_eq!(counts, seen);
    }

    #[test]
    fn steps_do_not_share_state() {
        let problem = DiffusionProblem::new(12, 0.0, Default::default(), 0.4).unwrap();
        let sweep = SweepDefinition::new(5, 15, 10).unwrap();
        let record = execute_sweep(&problem, &sweep).unwrap();
        let (_, direct) = problem.solve(15).unwrap();
        assert_eq!(record.entries()[1].samples, direct);
    }
}
