//! Dotted data-path resolution against the schema registry.
//!
//! A data path like `post.user.email` names a chain of relationship hops
//! ending in a column. Resolution validates every hop against the
//! registry and either produces a [`ResolvedRef`] - terminal table,
//! column, and the ordered join path - or fails as a whole. Failure is a
//! value, never an error: stale or invalid client column metadata must
//! not break the request, so every call site treats [`Resolution::Unresolved`]
//! as "this column does not exist".

use tracing::debug;

use crate::schema::{RelationKind, Schema};

/// A table-qualified column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub table: String,
    pub column: String,
}

impl ColumnRef {
    pub fn new(table: &str, column: &str) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }
}

/// One relationship traversal in a resolved path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    /// Relationship-name prefix from the base entity up to and including
    /// this hop. Two paths sharing a prefix share the join, so this is
    /// the deduplication key.
    pub path: Vec<String>,
    /// Table joined by this hop.
    pub table: String,
    /// Left side of the ON equality (the foreign-key column).
    pub on_left: ColumnRef,
    /// Right side of the ON equality (the referenced key).
    pub on_right: ColumnRef,
}

/// A fully validated data path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRef {
    /// Terminal entity name.
    pub entity: String,
    /// Terminal entity's table.
    pub table: String,
    /// Terminal column name.
    pub column: String,
    /// Joins required to reach the terminal entity, base-first.
    pub join_path: Vec<Hop>,
}

/// Outcome of resolving a data path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(ResolvedRef),
    /// Unknown relationship or column, unregistered target, or an
    /// empty path. Not an error - the column is simply absent.
    Unresolved,
}

impl Resolution {
    /// The reference, if resolution succeeded.
    pub fn resolved(self) -> Option<ResolvedRef> {
        match self {
            Resolution::Resolved(reference) => Some(reference),
            Resolution::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// Resolves dotted data paths against one schema registry.
pub struct PathResolver<'a> {
    schema: &'a Schema,
}

impl<'a> PathResolver<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Resolve `path` starting from the entity named `base`.
    ///
    /// The last `.`-separated segment is the column name; every preceding
    /// segment must name a declared relationship on the entity reached so
    /// far. Any unknown segment fails the whole path - no partial joins
    /// are ever produced.
    pub fn resolve(&self, base: &str, path: &str) -> Resolution {
        if path.is_empty() {
            return Resolution::Unresolved;
        }

        let Some(mut entity) = self.schema.entity(base) else {
            debug!(base, "base entity not registered");
            return Resolution::Unresolved;
        };

        let segments: Vec<&str> = path.split('.').collect();
        let Some((&column, hops)) = segments.split_last() else {
            return Resolution::Unresolved;
        };

        let mut join_path = Vec::with_capacity(hops.len());
        let mut prefix = Vec::with_capacity(hops.len());

        for &hop_name in hops {
            let Some(rel) = entity.relationship_named(hop_name) else {
                debug!(entity = %entity.name, hop = hop_name, path, "unknown relationship");
                return Resolution::Unresolved;
            };
            let Some(target) = self.schema.entity(&rel.target) else {
                debug!(
                    entity = %entity.name,
                    hop = hop_name,
                    target = %rel.target,
                    "relationship target not registered"
                );
                return Resolution::Unresolved;
            };

            prefix.push(rel.name.clone());
            let (on_left, on_right) = match rel.kind {
                // The foreign key lives on whichever side declares it;
                // emit it first so the ON clause reads fk = key.
                RelationKind::BelongsTo => (
                    ColumnRef::new(&entity.table, &rel.foreign_key),
                    ColumnRef::new(&target.table, &target.primary_key),
                ),
                RelationKind::HasMany => (
                    ColumnRef::new(&target.table, &rel.foreign_key),
                    ColumnRef::new(&entity.table, &entity.primary_key),
                ),
            };
            join_path.push(Hop {
                path: prefix.clone(),
                table: target.table.clone(),
                on_left,
                on_right,
            });
            entity = target;
        }

        if !entity.has_column(column) {
            debug!(entity = %entity.name, column, path, "unknown column");
            return Resolution::Unresolved;
        }

        Resolution::Resolved(ResolvedRef {
            entity: entity.name.clone(),
            table: entity.table.clone(),
            column: column.to_string(),
            join_path,
        })
    }
}
