//! Case-insensitive contains predicates for searchable columns.

use crate::request::ColumnSpec;
use crate::resolve::ResolvedRef;
use crate::sql::expr::{lit_str, table_col, Expr, ExprExt};

/// Build the filter predicate for a column's own search box.
///
/// Returns `None` when the column is not searchable or its term is empty;
/// unresolved columns never reach this point.
pub fn search_predicate(reference: &ResolvedRef, spec: &ColumnSpec) -> Option<Expr> {
    if !spec.searchable {
        return None;
    }
    let term = spec.search.term()?;
    Some(contains_predicate(reference, term))
}

/// `("table"."column" ILIKE '%term%')` - the parenthesized contains test
/// shared by per-column and global search. The term travels as a string
/// literal through the dialect's quoting, never as raw SQL.
pub fn contains_predicate(reference: &ResolvedRef, term: &str) -> Expr {
    table_col(&reference.table, &reference.column)
        .ilike(lit_str(&format!("%{}%", term)))
        .paren()
}
