//! tokens — hash a small embedded record set and print the tokens as JSON.
//!
//! The configuration is read from a JSON document the way an application
//! would load it from disk; the records come from the neutral CSV shape
//! understood by `sth-input`.  Set `RUST_LOG=debug` to see per-record
//! quantization sizes.

use std::io::Cursor;
use std::time::Instant;

use anyhow::Result;
use serde::Serialize;

use sth_core::{HashConfig, SpacetimeRecord};
use sth_hash::HashToken;
use sth_input::hash_csv_reader;

// ── Inputs ────────────────────────────────────────────────────────────────────

// Demo-only key.  Real deployments distribute a shared secret out of band.
const CONFIG_JSON: &str = r#"{
    "key": "abc",
    "time_step_minutes": 10,
    "latlng_precision": -3,
    "spread_out": 1
}"#;

const RECORDS_CSV: &str = "\
begin,end,latlng
100,700,\"25.123456,122.123\"
1583020800,1583024400,\"25.033964,121.564468\"
1583022600,1583026200,\"25.034102 121.564981\"
";

// ── Output ────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct HashedRecord {
    record: SpacetimeRecord,
    tokens: Vec<HashToken>,
}

fn main() -> Result<()> {
    env_logger::init();

    let config: HashConfig = serde_json::from_str(CONFIG_JSON)?;
    log::info!(
        "step {} min, precision {}, spread {}",
        config.time_step_minutes,
        config.latlng_precision,
        config.spread_out,
    );

    let start = Instant::now();
    let hashed: Vec<HashedRecord> = hash_csv_reader(Cursor::new(RECORDS_CSV), config)?
        .into_iter()
        .map(|(record, tokens)| HashedRecord { record, tokens })
        .collect();
    log::info!("hashed {} records in {:.3} ms", hashed.len(), start.elapsed().as_secs_f64() * 1e3);

    println!("{}", serde_json::to_string_pretty(&hashed)?);
    Ok(())
}
