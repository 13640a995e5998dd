use super::*;
use approx::assert_relative_eq;

fn toy_samples() -> Vec<Sample> {
    vec![
        Sample::new(vec![2.0, 3.0, -1.0], 1.0),
        Sample::new(vec![3.0, -1.0, 0.5], -1.0),
        Sample::new(vec![0.5, 1.0, 1.0], -1.0),
        Sample::new(vec![1.0, 1.0, -1.0], 1.0),
    ]
}

fn toy_config() -> TrainConfig {
    TrainConfig::new()
        .with_layer_sizes(vec![4, 4, 1])
        .with_learning_rate(-0.05)
        .with_iterations(30)
        .with_seed(42)
}

#[test]
fn test_trainer_reduces_loss() -> Result<()> {
    let mut trainer = Trainer::new(3, toy_config())?;
    let reports = trainer.fit(&toy_samples())?;

    assert_eq!(reports.len(), 30);
    assert_eq!(trainer.iteration(), 30);
    let first = reports[0].loss;
    let last = reports[reports.len() - 1].loss;
    assert!(last < first, "loss did not decrease: {} -> {}", first, last);
    Ok(())
}

#[test]
fn test_iteration_report_contents() -> Result<()> {
    let samples = toy_samples();
    let mut trainer = Trainer::new(3, toy_config())?;
    let report = trainer.run_iteration(&samples)?;

    assert_eq!(report.iteration, 0);
    assert_eq!(report.predictions.len(), samples.len());
    let expected: f64 = report
        .predictions
        .iter()
        .zip(samples.iter())
        .map(|(p, s)| (p - s.target).powi(2))
        .sum();
    // every intermediate node is rounded to 4 decimals
    assert_relative_eq!(report.loss, expected, epsilon = 1e-2);
    Ok(())
}

#[test]
fn test_graph_is_rewound_between_iterations() -> Result<()> {
    let samples = toy_samples();
    let mut trainer = Trainer::new(3, toy_config())?;
    let parameter_count = trainer.model().parameters().len();

    trainer.run_iteration(&samples)?;
    let after_first = trainer.graph().len();
    trainer.run_iteration(&samples)?;

    assert!(after_first > parameter_count);
    assert_eq!(trainer.graph().len(), after_first);
    Ok(())
}

#[test]
fn test_step_moves_parameters_against_gradient() -> Result<()> {
    let samples = toy_samples();
    let mut trainer = Trainer::new(3, toy_config())?;
    let before = trainer.parameter_values();
    trainer.run_iteration(&samples)?;
    let after = trainer.parameter_values();

    let params = trainer.model().parameters();
    for (i, &p) in params.iter().enumerate() {
        let expected = before[i] + -0.05 * trainer.graph().grad(p);
        assert_relative_eq!(after[i], expected, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_same_seed_same_run() -> Result<()> {
    let mut a = Trainer::new(3, toy_config().with_iterations(3))?;
    let mut b = Trainer::new(3, toy_config().with_iterations(3))?;
    assert_eq!(a.fit(&toy_samples())?, b.fit(&toy_samples())?);
    Ok(())
}

#[test]
fn test_predict_leaves_graph_unchanged() -> Result<()> {
    let mut trainer = Trainer::new(3, toy_config())?;
    let len = trainer.graph().len();
    let y = trainer.predict(&[2.0, 3.0, -1.0])?;
    assert!(y > -1.0 && y <= 1.0);
    assert_eq!(trainer.graph().len(), len);

    let report = trainer.run_iteration(&toy_samples()[..1])?;
    // predictions are read before the update
    assert_eq!(report.predictions[0], y);
    Ok(())
}

#[test]
fn test_rejects_empty_batch_and_wrong_width() -> Result<()> {
    let mut trainer = Trainer::new(3, toy_config())?;
    assert_eq!(trainer.run_iteration(&[]), Err(ScalarGradError::EmptyBatch));

    let bad = vec![Sample::new(vec![1.0, 2.0], 1.0)];
    assert!(matches!(
        trainer.run_iteration(&bad),
        Err(ScalarGradError::DimensionMismatch {
            expected: 3,
            actual: 2,
            ..
        })
    ));
    assert!(trainer.predict(&[1.0]).is_err());
    assert_eq!(trainer.iteration(), 0);
    Ok(())
}

#[test]
fn test_rejects_invalid_config() {
    let config = TrainConfig::new().with_layer_sizes(vec![3, 2]);
    assert!(matches!(
        Trainer::new(3, config),
        Err(ScalarGradError::InvalidConfig(_))
    ));
    assert!(matches!(
        Trainer::new(0, TrainConfig::default()),
        Err(ScalarGradError::InvalidConfig(_))
    ));
}
