//! Schema registry - entities, their columns, and their relationships.
//!
//! The registry is constructed by the host application at startup and
//! queried by name during resolution; there is no reflection anywhere.
//! Conventional table and foreign-key names are derived by inflection at
//! registration time and can be overridden per entity or relationship.

pub mod inflection;

pub use inflection::{foreign_key, pluralize, singularize};

use std::collections::HashMap;

/// Relationship cardinality, as declared on the owning entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// The owning entity holds the foreign key (`comments.post_id`).
    BelongsTo,
    /// The target entity holds the foreign key back to the owner.
    HasMany,
}

/// A named relationship from one entity to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub name: String,
    pub kind: RelationKind,
    /// Target entity name in the registry.
    pub target: String,
    /// Foreign-key column. For `BelongsTo` it lives on the owning entity's
    /// table; for `HasMany` on the target's. Empty means "derive the
    /// conventional default at registration".
    pub foreign_key: String,
}

impl Relationship {
    /// A to-one relationship: `belongs_to("user")` targets entity `user`
    /// with foreign key `user_id` on the owning table.
    pub fn belongs_to(name: &str) -> Self {
        Self {
            name: name.into(),
            kind: RelationKind::BelongsTo,
            target: inflection::singularize(name),
            foreign_key: inflection::foreign_key(name),
        }
    }

    /// A to-many relationship: `has_many("comments")` targets entity
    /// `comment`; the foreign key defaults to `<owner>_id` on the target
    /// table and is filled in when the relationship is registered.
    pub fn has_many(name: &str) -> Self {
        Self {
            name: name.into(),
            kind: RelationKind::HasMany,
            target: inflection::singularize(name),
            foreign_key: String::new(),
        }
    }

    /// Override the target entity name.
    pub fn target(mut self, entity: &str) -> Self {
        self.target = entity.into();
        self
    }

    /// Override the foreign-key column.
    pub fn foreign_key(mut self, column: &str) -> Self {
        self.foreign_key = column.into();
        self
    }
}

/// One entity: a table, its primary key, columns, and relationships.
#[derive(Debug, Clone)]
pub struct Entity {
    pub name: String,
    pub table: String,
    pub primary_key: String,
    columns: Vec<String>,
    relationships: HashMap<String, Relationship>,
}

impl Entity {
    /// Create an entity; the table name defaults to the pluralized entity
    /// name, the primary key to `id`.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            table: inflection::pluralize(name),
            primary_key: "id".into(),
            columns: Vec::new(),
            relationships: HashMap::new(),
        }
    }

    /// Override the table name.
    pub fn table(mut self, table: &str) -> Self {
        self.table = table.into();
        self
    }

    /// Override the primary-key column.
    pub fn primary_key(mut self, column: &str) -> Self {
        self.primary_key = column.into();
        self
    }

    /// Declare one column.
    pub fn column(mut self, name: &str) -> Self {
        self.columns.push(name.into());
        self
    }

    /// Declare several columns.
    pub fn columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(names.into_iter().map(Into::into));
        self
    }

    /// Declare a conventional to-one relationship.
    pub fn belongs_to(self, name: &str) -> Self {
        self.relationship(Relationship::belongs_to(name))
    }

    /// Declare a conventional to-many relationship.
    pub fn has_many(self, name: &str) -> Self {
        self.relationship(Relationship::has_many(name))
    }

    /// Declare a relationship, filling in the conventional `HasMany`
    /// foreign key (`<owner>_id`) when none was given.
    pub fn relationship(mut self, mut rel: Relationship) -> Self {
        if rel.foreign_key.is_empty() && rel.kind == RelationKind::HasMany {
            rel.foreign_key = inflection::foreign_key(&self.name);
        }
        self.relationships.insert(rel.name.clone(), rel);
        self
    }

    /// Whether the entity declares a column with this name.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    /// Look up a declared relationship by name.
    pub fn relationship_named(&self, name: &str) -> Option<&Relationship> {
        self.relationships.get(name)
    }

    /// Declared column names, in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }
}

/// The registry: entity name -> entity metadata. Built once at startup,
/// read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    entities: HashMap<String, Entity>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity under its name. Re-registering replaces the
    /// previous definition.
    pub fn register(&mut self, entity: Entity) -> &mut Self {
        self.entities.insert(entity.name.clone(), entity);
        self
    }

    /// Look up an entity by name.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    /// Whether an entity is registered under this name.
    pub fn contains(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
