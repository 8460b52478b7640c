//! Write a synthetic `catalog.dat` in the NGC 5139 byte-by-byte layout.
//!
//! Produces a cluster sequence with small proper motions, a sprinkling of
//! fast-moving field stars, and some stars lacking B, V or Rc photometry.

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use omega_cen_cmd::data::schema::{ColumnSpec, COLUMNS, COLUMN_COUNT, MISSING_MAGNITUDE};

const N_STARS: usize = 20_000;
const FIELD_FRACTION: f64 = 0.15;
const MISSING_FRACTION: f64 = 0.08;
const OUTPUT_PATH: &str = "catalog.dat";

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

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One synthetic star, values in `COLUMNS` order.
fn generate_star(seq: usize, rng: &mut SimpleRng) -> [f64; COLUMN_COUNT] {
    let field = rng.next_f64() < FIELD_FRACTION;

    let (pm_ra, pm_de) = if field {
        (rng.gauss(-4.0, 6.0), rng.gauss(3.0, 6.0))
    } else {
        (rng.gauss(0.0, 1.2), rng.gauss(0.0, 1.2))
    };

    // Rough cluster main sequence / giant branch in V vs B−V.
    let v = rng.uniform(12.0, 22.0);
    let bv = if field {
        rng.uniform(0.2, 1.6)
    } else if v < 16.0 {
        1.3 - 0.12 * (v - 12.0) + rng.gauss(0.0, 0.05)
    } else {
        0.55 + 0.06 * (v - 17.5) + rng.gauss(0.0, 0.05)
    };
    let b = v + bv;
    let rc = v - 0.55 * bv + rng.gauss(0.0, 0.02);
    let ic = rc - 0.5 * bv + rng.gauss(0.0, 0.02);
    let u = b + 0.4 * bv - 0.1 + rng.gauss(0.0, 0.05);
    let ha = rc - 0.25 + rng.gauss(0.0, 0.03);

    let mut photometry = [
        (u, mag_error(rng, u)),
        (b, mag_error(rng, b)),
        (v, mag_error(rng, v)),
        (rc, mag_error(rng, rc)),
        (ic, mag_error(rng, ic)),
        (ha, mag_error(rng, ha)),
    ];
    for band in &mut photometry {
        if rng.next_f64() < MISSING_FRACTION / 3.0 {
            *band = (MISSING_MAGNITUDE, MISSING_MAGNITUDE);
        }
    }

    let membership = if field {
        rng.uniform(0.0, 30.0).round()
    } else {
        rng.uniform(70.0, 100.0).round()
    };
    let membership_alt = if rng.next_f64() < 0.3 {
        -1.0
    } else {
        (membership + rng.gauss(0.0, 5.0)).round().clamp(0.0, 100.0)
    };

    let [(u, e_u), (b, e_b), (v, e_v), (rc, e_rc), (ic, e_ic), (ha, e_ha)] = photometry;
    [
        seq as f64,
        201.696_550 + rng.gauss(0.0, 0.25),
        -47.479_472 + rng.gauss(0.0, 0.17),
        rng.uniform(0.0, 8000.0),
        rng.uniform(0.0, 8000.0),
        pm_ra,
        rng.uniform(0.2, 2.0),
        pm_de,
        rng.uniform(0.2, 2.0),
        u,
        e_u,
        b,
        e_b,
        v,
        e_v,
        rc,
        e_rc,
        ic,
        e_ic,
        ha,
        e_ha,
        membership,
        membership_alt,
    ]
}

/// Photometric rms growing with magnitude, capped to fit `F6.3`.
fn mag_error(rng: &mut SimpleRng, mag: f64) -> f64 {
    (0.004 * ((mag - 14.0) / 2.5).exp() + rng.uniform(0.0, 0.003)).min(0.999)
}

/// Right-align `value` in the field's byte range using its edit descriptor.
fn format_field(spec: &ColumnSpec, value: f64) -> String {
    let width = spec.width();
    let decimals = spec
        .format
        .split_once('.')
        .and_then(|(_, d)| d.parse::<usize>().ok());
    match decimals {
        Some(d) => format!("{value:>width$.d$}"),
        None => format!("{:>width$}", value.round() as i64),
    }
}

fn format_record(values: &[f64; COLUMN_COUNT]) -> String {
    let mut line = String::new();
    for (spec, &value) in COLUMNS.iter().zip(values) {
        let mut pad = (spec.start - 1).saturating_sub(line.len());
        if !line.is_empty() {
            // an over-wide value must still leave a separator
            pad = pad.max(1);
        }
        line.push_str(&" ".repeat(pad));
        line.push_str(&format_field(spec, value));
    }
    line
}

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = SimpleRng::new(5139);

    let file = File::create(OUTPUT_PATH).with_context(|| format!("creating {OUTPUT_PATH}"))?;
    let mut out = BufWriter::new(file);

    for seq in 1..=N_STARS {
        let star = generate_star(seq, &mut rng);
        writeln!(out, "{}", format_record(&star)).context("writing record")?;
    }
    out.flush().context("flushing output")?;

    log::info!("Generated {N_STARS} synthetic stars");
    println!("Wrote {N_STARS} stars ({COLUMN_COUNT} columns each) to {OUTPUT_PATH}");
    Ok(())
}
