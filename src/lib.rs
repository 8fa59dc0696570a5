//! # Gridline
//!
//! Translate tabular grid requests into multi-dialect SQL.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │              Grid Request (decoded wire shape)           │
//! │  (columns, per-column + global search, order, paging)    │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [resolve]
//! ┌─────────────────────────────────────────────────────────┐
//! │      Resolved References (terminal column + join path)   │
//! │      against the Schema registry; failures are inert     │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [respond]
//! ┌─────────────────────────────────────────────────────────┐
//! │   Predicates + deduplicated joins + order + pagination   │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [sql]
//! ┌─────────────────────────────────────────────────────────┐
//! │                    SQL Query                             │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Translation is a pure, single-pass computation; executing the rendered
//! SQL (and its count variant) is the caller's concern.

pub mod request;
pub mod resolve;
pub mod respond;
pub mod schema;
pub mod sql;

// Re-export SQL submodules at crate level for convenient paths
pub use sql::dialect;
pub use sql::expr;
pub use sql::query;
pub use sql::token;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::dialect::{Dialect, SqlDialect};
    pub use crate::expr::{
        // Constructors
        col,
        count,
        count_star,
        func,
        lit_bool,
        lit_int,
        lit_str,
        star,
        table_col,
        table_star,
        // Types
        BinaryOperator,
        Expr,
        ExprExt,
        Literal,
    };
    pub use crate::query::{
        Join, JoinType, LimitOffset, NullsOrder, OrderByExpr, Query, SelectExpr, SortDir, TableRef,
    };
    pub use crate::request::{ColumnSpec, OrderSpec, SearchRequest, SearchTerm, SortOrder};
    pub use crate::resolve::{PathResolver, Resolution, ResolvedRef};
    pub use crate::respond::{GridQuery, RespondError, Responder, Selection};
    pub use crate::schema::{Entity, Relationship, Schema};
    pub use crate::token::{Token, TokenStream};
}

// Also export at crate root for convenience
pub use dialect::Dialect;
pub use respond::{GridQuery, RespondError, Responder, Selection};
pub use schema::{Entity, Relationship, Schema};
