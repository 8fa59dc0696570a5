//! Order translation: grid order entries to an ordered path -> direction map.

use tracing::trace;

use crate::request::{ColumnSpec, OrderSpec};
use crate::resolve::PathResolver;
use crate::respond::{RespondError, RespondResult};
use crate::sql::SortDir;

/// Translate the request's order entries into an ordered
/// `(path, direction)` mapping.
///
/// Entries are visited in request order. An entry is skipped when its
/// column is not orderable, has no data path, or the path does not
/// resolve; skipping never shifts the relative order of the remaining
/// entries. A path named by several entries keeps its first-seen position
/// but takes its last-seen direction.
///
/// An order entry whose index falls outside the column list is a caller
/// contract violation and fails the whole request.
pub fn transmute_order(
    resolver: &PathResolver<'_>,
    base: &str,
    order: &[OrderSpec],
    columns: &[ColumnSpec],
) -> RespondResult<Vec<(String, SortDir)>> {
    let mut mapping: Vec<(String, SortDir)> = Vec::new();

    for (index, entry) in order.iter().enumerate() {
        let Some(spec) = columns.get(entry.column) else {
            return Err(RespondError::OrderColumnOutOfRange {
                index,
                column: entry.column,
                count: columns.len(),
            });
        };

        if !spec.orderable {
            trace!(column = entry.column, "skipping non-orderable order entry");
            continue;
        }
        let Some(path) = spec.data() else {
            trace!(column = entry.column, "skipping order entry with no data path");
            continue;
        };
        if !resolver.resolve(base, path).is_resolved() {
            trace!(column = entry.column, path, "skipping unresolvable order entry");
            continue;
        }

        let dir = SortDir::from(entry.dir);
        match mapping.iter_mut().find(|(seen, _)| seen.as_str() == path) {
            // first occurrence fixes the position, the last one the direction
            Some((_, existing)) => *existing = dir,
            None => mapping.push((path.to_string(), dir)),
        }
    }

    Ok(mapping)
}
