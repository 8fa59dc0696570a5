use gridline::prelude::*;
use gridline::schema::{foreign_key, pluralize, singularize, RelationKind};

#[test]
fn entity_derives_table_and_primary_key() {
    let entity = Entity::new("comment");
    assert_eq!(entity.table, "comments");
    assert_eq!(entity.primary_key, "id");

    let entity = Entity::new("category");
    assert_eq!(entity.table, "categories");
}

#[test]
fn irregular_plural_table_names() {
    let entity = Entity::new("person");
    assert_eq!(entity.table, "people");
}

#[test]
fn table_and_primary_key_overrides() {
    let entity = Entity::new("user")
        .table("accounts")
        .primary_key("account_id");
    assert_eq!(entity.table, "accounts");
    assert_eq!(entity.primary_key, "account_id");
}

#[test]
fn belongs_to_derives_target_and_foreign_key() {
    let entity = Entity::new("comment").belongs_to("post");
    let rel = entity.relationship_named("post").unwrap();
    assert_eq!(rel.kind, RelationKind::BelongsTo);
    assert_eq!(rel.target, "post");
    assert_eq!(rel.foreign_key, "post_id");
}

#[test]
fn has_many_derives_owner_side_foreign_key() {
    let entity = Entity::new("user").has_many("posts");
    let rel = entity.relationship_named("posts").unwrap();
    assert_eq!(rel.kind, RelationKind::HasMany);
    assert_eq!(rel.target, "post");
    assert_eq!(rel.foreign_key, "user_id");
}

#[test]
fn custom_relationship_keeps_explicit_keys() {
    let entity = Entity::new("post").relationship(
        Relationship::belongs_to("author")
            .target("user")
            .foreign_key("author_id"),
    );
    let rel = entity.relationship_named("author").unwrap();
    assert_eq!(rel.target, "user");
    assert_eq!(rel.foreign_key, "author_id");
}

#[test]
fn schema_lookup_by_name() {
    let mut schema = Schema::new();
    schema
        .register(Entity::new("post").columns(["id", "title"]))
        .register(Entity::new("user").columns(["id", "email"]));

    assert_eq!(schema.len(), 2);
    assert!(schema.contains("post"));
    assert!(schema.entity("user").unwrap().has_column("email"));
    assert!(schema.entity("widget").is_none());
}

#[test]
fn reregistering_replaces_the_entity() {
    let mut schema = Schema::new();
    schema.register(Entity::new("post").columns(["id"]));
    schema.register(Entity::new("post").columns(["id", "title"]));

    assert_eq!(schema.len(), 1);
    assert!(schema.entity("post").unwrap().has_column("title"));
}

#[test]
fn inflection_helpers() {
    assert_eq!(pluralize("post"), "posts");
    assert_eq!(singularize("posts"), "post");
    assert_eq!(foreign_key("user"), "user_id");
    assert_eq!(foreign_key("comments"), "comment_id");
}
