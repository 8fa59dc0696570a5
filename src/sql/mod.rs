//! SQL generation layer.
//!
//! A strongly-typed SQL AST rendered through a dialect-agnostic token
//! stream:
//!
//! - [`token`]: atomic SQL output units ([`token::Token`], [`token::TokenStream`])
//! - [`expr`]: expression AST with fluent combinators ([`expr::Expr`], [`expr::ExprExt`])
//! - [`query`]: SELECT query builder ([`query::Query`])
//! - [`dialect`]: per-database formatting rules ([`dialect::Dialect`], [`dialect::SqlDialect`])
//!
//! Queries are descriptions only; nothing here touches a database.

pub mod dialect;
pub mod expr;
pub mod query;
pub mod token;

pub use dialect::{Dialect, SqlDialect};
pub use expr::{col, table_col, table_star, Expr, ExprExt};
pub use query::{Join, JoinType, OrderByExpr, Query, SelectExpr, SortDir, TableRef};
pub use token::{Token, TokenStream};
