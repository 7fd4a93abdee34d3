use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};

/// Damped oscillation `A0·e^(−γt)·cos(2πf·t)` with additive Gaussian noise.
fn displacement(t: f64, a0: f64, gamma: f64, freq: f64, noise: f64, rng: &mut ChaCha8Rng) -> f64 {
    let clean = a0 * (-gamma * t).exp() * (2.0 * std::f64::consts::PI * freq * t).cos();
    let z: f64 = StandardNormal.sample(rng);
    clean + noise * z
}

fn main() {
    // Fixed seed so the generated dataset is reproducible.
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    // 10 seconds at 50 Hz: enough cycles for a dozen envelope peaks.
    let sample_rate = 50.0;
    let n_samples = 501;
    let a0 = 1.0;
    let gamma = 0.4;
    let freq = 1.5;
    let noise = 0.002;

    let output_path = "sample_data.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["time", "displacement"])
        .expect("Failed to write header");

    for i in 0..n_samples {
        let t = i as f64 / sample_rate;
        let y = displacement(t, a0, gamma, freq, noise, &mut rng);
        writer
            .write_record([format!("{t:.3}"), format!("{y:.6}")])
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush output");

    println!("Wrote {n_samples} samples ({sample_rate} Hz) to {output_path}");
}
