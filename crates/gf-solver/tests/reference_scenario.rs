use gf_solver::*;

#[test]
fn sixty_cell_channel_after_five_hundred_passes() {
    let problem = DiffusionProblem::reference().unwrap();

    let points = problem.sample_points();
    let coords: Vec<(usize, usize)> = points.points().iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(coords, vec![(5, 30), (30, 54), (54, 30), (30, 5)]);

    let (field, samples) = problem.solve(500).unwrap();
    for label in SampleLabel::ALL {
        let v = samples.get(label);
        assert!(v > 0.0 && v < 100.0, "{label} = {v}");
    }

    // A/C are the horizontal pair, B/D the vertical pair. D sits next to the
    // sealed bottom face and stays far below the others.
    assert!(samples.get(SampleLabel::D) < 20.0);
    assert!(samples.get(SampleLabel::B) > samples.get(SampleLabel::A));
    assert!(samples.get(SampleLabel::B) > samples.get(SampleLabel::C));

    let expected = [
        85.198_547_508_999_35,
        88.939_699_900_885_77,
        85.534_990_245_193_82,
        9.349_218_972_766_051,
    ];
    for (got, want) in samples.values().iter().zip(expected) {
        assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
    }

    assert_eq!(field.get(30, 5), samples.get(SampleLabel::A));
    assert_eq!(field.get(5, 30), samples.get(SampleLabel::D));
}

#[test]
fn full_reference_sweep_shape() {
    let problem = DiffusionProblem::reference().unwrap();
    let record = execute_sweep(&problem, &SweepDefinition::default()).unwrap();
    assert_eq!(record.len(), 26);
    assert_eq!(record.entries()[0].samples.values(), &[0.0; 4]);
    assert_eq!(record.last().unwrap().iterations, 500);
}
