use std::collections::HashSet;

use crate::types::{TxHash, TxRecord};

/// Collect every transaction hash a document references: the funding
/// transaction of each input (`prev_hash`) and the spending transaction of
/// each output (`spent_by`). Entries lacking the field are skipped.
/// Duplicates within one document collapse to a single occurrence.
pub fn referenced_hashes(record: &TxRecord) -> HashSet<TxHash> {
    record
        .inputs
        .iter()
        .filter_map(|input| input.prev_hash.clone())
        .chain(
            record
                .outputs
                .iter()
                .filter_map(|output| output.spent_by.clone()),
        )
        .collect()
}
