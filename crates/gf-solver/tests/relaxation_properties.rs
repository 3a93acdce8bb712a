use gf_solver::*;
use proptest::prelude::*;

fn edges(field: &Field) -> Vec<f64> {
    let n = field.size();
    let mut out = field.row(0);
    out.extend(field.row(n - 1));
    out.extend(field.column(0));
    out.extend(field.column(n - 1));
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn edges_never_change(
        size in 3usize..16,
        passes in 0usize..40,
        top in -100.0f64..100.0,
        bottom in -100.0f64..100.0,
        left in -100.0f64..100.0,
        right in -100.0f64..100.0,
        guess in -100.0f64..100.0,
    ) {
        let boundary = BoundarySpec::new(top, bottom, left, right);
        let mut field = Field::initialize(size, guess, &boundary).unwrap();
        let before = edges(&field);
        relax(&mut field, passes);
        prop_assert_eq!(edges(&field), before);
    }

    #[test]
    fn zero_passes_reads_guess(
        size in 12usize..64,
        guess in -50.0f64..50.0,
        top in 0.0f64..100.0,
    ) {
        let boundary = BoundarySpec::new(top, 0.0, 100.0, 100.0);
        let problem = DiffusionProblem::new(size, guess, boundary, DEFAULT_RADIUS_FRACTION).unwrap();
        let (_, samples) = problem.solve(0).unwrap();
        prop_assert_eq!(samples.values(), &[guess; 4]);
    }

    #[test]
    fn interior_stays_within_boundary_range(
        size in 3usize..14,
        passes in 1usize..60,
        top in 0.0f64..100.0,
        bottom in 0.0f64..100.0,
        left in 0.0f64..100.0,
        right in 0.0f64..100.0,
    ) {
        // Interior guess inside the edge range, so the maximum principle applies.
        let boundary = BoundarySpec::new(top, bottom, left, right);
        let guess = 0.5 * (boundary.min() + boundary.max());
        let mut field = Field::initialize(size, guess, &boundary).unwrap();
        relax(&mut field, passes);
        let (lo, hi) = field.min_max();
        prop_assert!(lo >= boundary.min() - 1e-9);
        prop_assert!(hi <= boundary.max() + 1e-9);
    }
}

#[test]
fn samples_rise_monotonically_toward_steady_state() {
    let problem = DiffusionProblem::new(30, 0.0, BoundarySpec::default(), DEFAULT_RADIUS_FRACTION)
        .unwrap();
    let sweep = SweepDefinition::new(0, 600, 25).unwrap();
    let record = execute_sweep(&problem, &sweep).unwrap();

    for pair in record.entries().windows(2) {
        for label in SampleLabel::ALL {
            let earlier = pair[0].samples.get(label);
            let later = pair[1].samples.get(label);
            assert!(
                later >= earlier,
                "{label} dropped from {earlier} to {later} between {} and {} passes",
                pair[0].iterations,
                pair[1].iterations
            );
            assert!(later <= 100.0);
        }
    }

    // Long run settles: another thousand passes barely moves anything.
    let (_, settled) = problem.solve(3_000).unwrap();
    let (_, later) = problem.solve(4_000).unwrap();
    for label in SampleLabel::ALL {
        assert!((settled.get(label) - later.get(label)).abs() < 1e-6);
        assert!(record.last().unwrap().samples.get(label) <= settled.get(label));
    }
}

#[test]
fn uniform_edges_give_mirrored_samples() {
    let problem =
        DiffusionProblem::new(60, 0.0, BoundarySpec::uniform(50.0), DEFAULT_RADIUS_FRACTION)
            .unwrap();

    let (_, at_zero) = problem.solve(0).unwrap();
    assert_eq!(at_zero.values(), &[0.0; 4]);

    // Lexicographic Gauss-Seidel commutes with transposition, so the left/bottom
    // and top/right pairs agree at every pass count.
    for passes in [1, 7, 40, 200] {
        let (_, s) = problem.solve(passes).unwrap();
        let a = s.get(SampleLabel::A);
        let b = s.get(SampleLabel::B);
        let c = s.get(SampleLabel::C);
        let d = s.get(SampleLabel::D);
        assert!((a - d).abs() <= 1e-9 * a.abs().max(1.0), "A={a} D={d}");
        assert!((b - c).abs() <= 1e-9 * b.abs().max(1.0), "B={b} C={c}");
    }

    let (_, settled) = problem.solve(5_000).unwrap();
    for label in SampleLabel::ALL {
        assert!((settled.get(label) - 50.0).abs() < 1e-4);
    }
}

#[test]
fn repeated_sweeps_are_bit_identical() {
    let problem = DiffusionProblem::reference().unwrap();
    let sweep = SweepDefinition::new(0, 120, 40).unwrap();
    let first = execute_sweep(&problem, &sweep).unwrap();
    let second = execute_sweep(&problem, &sweep).unwrap();
    assert_eq!(first, second);
    for (x, y) in first.iter().zip(second.iter()) {
        for (p, q) in x.samples.values().iter().zip(y.samples.values()) {
            assert_eq!(p.to_bits(), q.to_bits());
        }
    }
}
