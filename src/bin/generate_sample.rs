use std::fs;
use std::io::Write;

use affect_grid::data::model::EMOTIONS;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // Cluster centres (valence, arousal) per emotion, in category-index order.
    let centres = [(-3.0, 3.0), (2.5, 3.2), (3.2, 1.5), (2.5, -2.5), (-3.0, -2.0)];
    let repeats = 8;

    let out_dir = "dat";
    fs::create_dir_all(out_dir).expect("Failed to create output directory");

    let mut total = 0usize;
    for subject in 1..=3 {
        let path = format!("{out_dir}/s{subject:02}.tsv");
        let mut file = fs::File::create(&path).expect("Failed to create output file");
        writeln!(file, "emotion\tcondition1\tcondition2\tx\ty").expect("Failed to write header");

        for (emotion_index, _emotion) in EMOTIONS.iter().enumerate() {
            let (cv, ca) = centres[emotion_index];
            for condition2 in 0..=1 {
                for _ in 0..repeats {
                    let x = rng.gauss(cv, 0.8).clamp(-4.5, 4.5);
                    let y = rng.gauss(ca, 0.8).clamp(-4.5, 4.5);
                    let condition1 = (rng.next_u64() % 3) as i64;
                    writeln!(
                        file,
                        "{emotion_index}\t{condition1}\t{condition2}\t{x:.3}\t{y:.3}"
                    )
                    .expect("Failed to write row");
                    total += 1;
                }
            }
        }
        println!("wrote {path}");
    }

    println!("{total} trials across 3 subject files in ./{out_dir}");
}
