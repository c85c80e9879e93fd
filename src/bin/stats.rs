use anyhow::Context;
use rattle_frames::{Collector, MatrixCollector, ReplayDocument, DEFAULT_MATRIX_HEADERS};

use std::env;

fn main() -> anyhow::Result<()> {
    let path = env::args()
        .nth(1)
        .context("usage: rattle-stats <decoded-replay.json>")?;
    let data = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
    let document: ReplayDocument =
        serde_json::from_str(&data).with_context(|| format!("decoding {}", path))?;

    let collector = MatrixCollector::<f32>::default().process_replay(&document)?;
    let matrix = collector.into_matrix()?;

    for i in 0..matrix.shape()[1] {
        println!(
            "{}: {:?}",
            DEFAULT_MATRIX_HEADERS[i],
            matrix
                .slice(::ndarray::s![.., i])
                .iter()
                .cloned()
                .map(float_ord::FloatOrd)
                .max()
        );
    }
    println!("Matrix shape is {:?}", matrix.shape());
    Ok(())
}
