use scalargrad_core::Sample;

// Each integration test binary includes this file; not all of them use every helper.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Four-sample toy problem: three features, targets of +1/-1.
#[allow(dead_code)]
pub fn toy_samples() -> Vec<Sample> {
    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];
    xs.iter()
        .zip(ys.iter())
        .map(|(x, &y)| Sample::new(x.to_vec(), y))
        .collect()
}
