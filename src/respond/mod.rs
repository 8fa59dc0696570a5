//! Query assembly: drive the resolver, predicate builder, and order
//! translator over a grid request and compose the final query.
//!
//! [`Responder::respond`] is the single entry point. It is a pure,
//! single-pass translation: no I/O happens until the caller takes the
//! rendered SQL to its executor.

pub mod joins;
pub mod order;
pub mod predicate;

pub use joins::JoinSet;
pub use order::transmute_order;
pub use predicate::{contains_predicate, search_predicate};

use thiserror::Error;
use tracing::debug;

use crate::request::SearchRequest;
use crate::resolve::{PathResolver, Resolution};
use crate::schema::Schema;
use crate::sql::expr::{count_star, table_col, table_star, Expr, ExprExt};
use crate::sql::{Dialect, OrderByExpr, Query, TableRef};

/// Errors that can occur while responding to a grid request.
///
/// Client-supplied *column metadata* never errors - stale or invalid
/// columns degrade silently. These variants are caller contract
/// violations.
#[derive(Debug, Error)]
pub enum RespondError {
    #[error(
        "order entry {index} references column {column}, but the request only has {count} columns"
    )]
    OrderColumnOutOfRange {
        index: usize,
        column: usize,
        count: usize,
    },

    #[error("unknown entity: {0}")]
    UnknownEntity(String),
}

pub type RespondResult<T> = Result<T, RespondError>;

/// The base queryable collection for an entity: `SELECT "t".* FROM "t"`.
///
/// Owned by the caller; the responder only reads its entity name and
/// composes on top of its query.
#[derive(Debug, Clone)]
pub struct Selection {
    pub entity: String,
    pub query: Query,
}

impl Selection {
    /// Select all rows of a registered entity.
    pub fn all(schema: &Schema, entity: &str) -> RespondResult<Self> {
        let Some(meta) = schema.entity(entity) else {
            return Err(RespondError::UnknownEntity(entity.to_string()));
        };
        Ok(Self {
            entity: meta.name.clone(),
            query: Query::new()
                .select(vec![table_star(&meta.table)])
                .from(TableRef::new(&meta.table)),
        })
    }
}

/// The assembled result of one grid request.
///
/// Holds a query description only; rendering and execution are the
/// caller's concern.
#[derive(Debug, Clone)]
pub struct GridQuery {
    /// Echo token from the request, passed through for grid metadata.
    pub draw: u64,
    query: Query,
}

impl GridQuery {
    /// The composed page query: filters, joins, ordering, pagination.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Render the page query.
    pub fn to_sql(&self, dialect: Dialect) -> String {
        self.query.to_sql(dialect)
    }

    /// The count variant: same filters and joins, but no ordering, no
    /// pagination, and a `COUNT(*)` select list. Executing it yields the
    /// total matching row count independent of the page window.
    pub fn count_query(&self) -> Query {
        let mut query = self.query.clone();
        query.select = vec![count_star().into()];
        query.order_by.clear();
        query.limit_offset = None;
        query
    }

    /// Render the count query.
    pub fn count_sql(&self, dialect: Dialect) -> String {
        self.count_query().to_sql(dialect)
    }
}

/// Translates grid requests against one schema registry.
pub struct Responder<'a> {
    schema: &'a Schema,
}

impl<'a> Responder<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Translate `request` over `base` into an executable query description.
    ///
    /// Pagination always applies (`LIMIT length OFFSET start`); filters
    /// and ordering apply only for columns whose data paths resolve.
    pub fn respond(&self, base: Selection, request: &SearchRequest) -> RespondResult<GridQuery> {
        let resolver = PathResolver::new(self.schema);
        let mut joins = JoinSet::new();
        let mut filter: Option<Expr> = None;

        // Per-column search: each present, non-empty, searchable term
        // narrows the result set independently.
        for spec in &request.columns {
            let Some(path) = spec.data() else { continue };
            let Resolution::Resolved(reference) = resolver.resolve(&base.entity, path) else {
                debug!(entity = %base.entity, path, "dropping unresolvable column");
                continue;
            };
            if let Some(predicate) = predicate::search_predicate(&reference, spec) {
                joins.merge(&reference.join_path);
                filter = Some(match filter {
                    Some(existing) => existing.and(predicate),
                    None => predicate,
                });
            }
        }

        // Global search: one OR-disjunction across every searchable column
        // that resolves, ANDed with the per-column predicates.
        if let Some(term) = request.search.term() {
            let mut any_match: Option<Expr> = None;
            for spec in request.columns.iter().filter(|spec| spec.searchable) {
                let Some(path) = spec.data() else { continue };
                let Resolution::Resolved(reference) = resolver.resolve(&base.entity, path) else {
                    continue;
                };
                joins.merge(&reference.join_path);
                let predicate = predicate::contains_predicate(&reference, term);
                any_match = Some(match any_match {
                    Some(existing) => existing.or(predicate),
                    None => predicate,
                });
            }
            if let Some(disjunction) = any_match {
                let disjunction = disjunction.paren();
                filter = Some(match filter {
                    Some(existing) => existing.and(disjunction),
                    None => disjunction,
                });
            }
        }

        // Ordering, in mapping order; a path's joins may already be in
        // the set from the filter phase.
        let mut order_exprs = Vec::new();
        let mapping =
            order::transmute_order(&resolver, &base.entity, &request.order, &request.columns)?;
        for (path, dir) in mapping {
            let Resolution::Resolved(reference) = resolver.resolve(&base.entity, &path) else {
                continue; // transmute_order only emits resolvable paths
            };
            joins.merge(&reference.join_path);
            order_exprs.push(OrderByExpr::with_dir(
                table_col(&reference.table, &reference.column),
                dir,
            ));
        }

        let mut query = base.query;
        query.joins.extend(joins.into_joins());
        if let Some(filter) = filter {
            query = query.filter(filter);
        }
        query = query
            .order_by(order_exprs)
            .limit(request.length)
            .offset(request.start);

        Ok(GridQuery {
            draw: request.draw,
            query,
        })
    }
}
