//! Join accumulation and deduplication.

use crate::resolve::Hop;
use crate::sql::expr::{table_col, ExprExt};
use crate::sql::{Join, JoinType, TableRef};

/// Accumulates the relationship joins one request needs.
///
/// Deduplicated by relationship-path prefix and kept in insertion order,
/// so a parent join always precedes the joins that hang off it, and two
/// columns sharing a prefix share the join. One `JoinSet` is threaded
/// through the filter and order phases of a single request.
#[derive(Debug, Default)]
pub struct JoinSet {
    hops: Vec<Hop>,
}

impl JoinSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a resolved reference's join path into the set.
    pub fn merge(&mut self, join_path: &[Hop]) {
        for hop in join_path {
            if !self.hops.iter().any(|seen| seen.path == hop.path) {
                self.hops.push(hop.clone());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Render the accumulated hops as INNER JOIN clauses.
    pub fn into_joins(self) -> Vec<Join> {
        self.hops
            .into_iter()
            .map(|hop| Join {
                join_type: JoinType::Inner,
                table: TableRef::new(&hop.table),
                on: table_col(&hop.on_left.table, &hop.on_left.column)
                    .eq(table_col(&hop.on_right.table, &hop.on_right.column)),
            })
            .collect()
    }
}
