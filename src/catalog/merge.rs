use crate::catalog::types::ProductRecord;

/// Numbers records 1..=K in their current order
///
/// Ids are positional and recomputed on every run.
pub fn assign_ids(records: &mut [ProductRecord]) {
    for (index, record) in records.iter_mut().enumerate() {
        record.id = index as u32 + 1;
    }
}
