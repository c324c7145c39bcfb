use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Initializes `env_logger` once for the test binary; later calls are no-ops.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Seeded generator so failures are reproducible.
#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random non-empty vector of length `1..=max_len` drawn from N(0, std_dev).
#[allow(dead_code)]
pub fn randn_vec(rng: &mut StdRng, max_len: usize, std_dev: f64) -> Vec<f64> {
    let len = rng.gen_range(1..=max_len);
    let normal = Normal::new(0.0, std_dev).expect("Invalid normal distribution parameters");
    (0..len).map(|_| normal.sample(rng)).collect()
}
