//! Hash many records under one configuration.

use std::io::Read;

use sth_core::{HashConfig, SpacetimeRecord};
use sth_hash::{HashToken, SpacetimeHasher};

use crate::{InputError, InputResult, load_records_reader};

/// Hash each record in order, returning one token vector per record.
///
/// Stops at the first invalid record; the error carries its index.
pub fn hash_records(
    hasher:  &SpacetimeHasher,
    records: &[SpacetimeRecord],
) -> InputResult<Vec<Vec<HashToken>>> {
    let out = records
        .iter()
        .enumerate()
        .map(|(index, r)| hasher.hash(r).map_err(|source| InputError::Hash { index, source }))
        .collect::<InputResult<Vec<_>>>()?;

    log::debug!(
        "hashed {} records into {} tokens",
        out.len(),
        out.iter().map(Vec::len).sum::<usize>(),
    );
    Ok(out)
}

/// Load records from CSV and hash them with `config`.
///
/// The configuration is validated before any row is read.
pub fn hash_csv_reader<R: Read>(
    reader: R,
    config: HashConfig,
) -> InputResult<Vec<(SpacetimeRecord, Vec<HashToken>)>> {
    let hasher = SpacetimeHasher::new(config)?;
    let records = load_records_reader(reader)?;
    let tokens = hash_records(&hasher, &records)?;
    Ok(records.into_iter().zip(tokens).collect())
}
