use anyhow::Context;
use rattle_frames::{CsvCollector, ReplayDocument};

use std::env;

fn main() -> anyhow::Result<()> {
    let path = env::args()
        .nth(1)
        .context("usage: rattle-csv <decoded-replay.json>")?;
    let data = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
    let document: ReplayDocument =
        serde_json::from_str(&data).with_context(|| format!("decoding {}", path))?;
    let table = CsvCollector::process_document(&document)?;
    print!("{}", table);
    Ok(())
}
