//! Query helpers for sweep records.

use gf_core::Real;
use gf_solver::{SampleLabel, Samples, SweepEntry, SweepRecord};

use crate::error::{AppError, AppResult};

/// Summary of a finished sweep.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub step_count: usize,
    pub iteration_range: (usize, usize),
    pub final_samples: Samples,
    /// Point with the lowest reading at the last step.
    pub weakest_point: SampleLabel,
}

pub fn get_run_summary(record: &SweepRecord) -> AppResult<RunSummary> {
    let (Some(first), Some(last)) = (record.entries().first(), record.last()) else {
        return Err(AppError::InvalidInput("No steps in sweep record".to_string()));
    };

    let weakest_point = SampleLabel::ALL
        .iter()
        .copied()
        .min_by(|a, b| last.samples.get(*a).total_cmp(&last.samples.get(*b)))
        .unwrap_or(SampleLabel::A);

    Ok(RunSummary {
        step_count: record.len(),
        iteration_range: (first.iterations, last.iterations),
        final_samples: last.samples,
        weakest_point,
    })
}

/// `(iterations, value)` pairs for one measurement point, in sweep order.
pub fn sample_series(record: &SweepRecord, label: SampleLabel) -> Vec<(usize, Real)> {
    record
        .iter()
        .map(|e| (e.iterations, e.samples.get(label)))
        .collect()
}

/// First step at which every point has reached `level`.
pub fn first_step_reaching(record: &SweepRecord, level: Real) -> Option<&SweepEntry> {
    record.iter().find(|e| e.samples.min() >= level)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SweepRecord {
        let mut r = SweepRecord::new();
        for (n, vals) in [
            (0, [0.0, 0.0, 0.0, 0.0]),
            (20, [40.0, 50.0, 45.0, 10.0]),
            (40, [86.0, 90.0, 87.0, 85.5]),
        ] {
            r.push(SweepEntry {
                iterations: n,
                samples: Samples(vals),
            });
        }
        r
    }

    #[test]
    fn summary() {
        let s = get_run_summary(&record()).unwrap();
        assert_eq!(s.step_count, 3);
        assert_eq!(s.iteration_range, (0, 40));
        assert_eq!(s.weakest_point, SampleLabel::D);
    }

    #[test]
    fn empty_summary_rejected() {
        assert!(get_run_summary(&SweepRecord::new()).is_err());
    }

    #[test]
    fn series_for_point() {
        let series = sample_series(&record(), SampleLabel::B);
        assert_eq!(series, vec![(0, 0.0), (20, 50.0), (40, 90.0)]);
    }

    #[test]
    fn target_level() {
        let r = record();
        assert_eq!(first_step_reaching(&r, 85.0).map(|e| e.iterations), Some(40));
        assert_eq!(first_step_reaching(&r, 0.0).map(|e| e.iterations), Some(0));
        assert!(first_step_reaching(&r, 95.0).is_none());
    }
}
