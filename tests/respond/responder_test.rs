use gridline::prelude::*;

fn blog_schema() -> Schema {
    let mut schema = Schema::new();
    schema.register(
        Entity::new("comment")
            .columns(["id", "body"])
            .belongs_to("post")
            .belongs_to("user"),
    );
    schema.register(
        Entity::new("post")
            .columns(["id", "title"])
            .belongs_to("user")
            .has_many("comments"),
    );
    schema.register(
        Entity::new("user")
            .columns(["id", "email"])
            .has_many("posts")
            .has_many("comments"),
    );
    schema
}

fn data_column(path: &str, term: &str) -> ColumnSpec {
    ColumnSpec {
        data: Some(path.into()),
        name: String::new(),
        orderable: true,
        searchable: true,
        search: SearchTerm::new(term),
    }
}

fn action_column() -> ColumnSpec {
    ColumnSpec {
        data: None,
        orderable: false,
        searchable: true,
        ..ColumnSpec::default()
    }
}

fn request(columns: Vec<ColumnSpec>, order: Vec<OrderSpec>) -> SearchRequest {
    SearchRequest {
        draw: 3,
        start: 0,
        length: 10,
        search: SearchTerm::default(),
        order,
        columns,
    }
}

#[test]
fn simple_request_filters_orders_and_paginates() {
    let schema = blog_schema();
    let responder = Responder::new(&schema);

    let req = request(
        vec![
            data_column("id", ""),
            data_column("title", "foo"),
            action_column(),
        ],
        vec![OrderSpec::new(1, SortOrder::Asc)],
    );

    let grid = responder
        .respond(Selection::all(&schema, "post").unwrap(), &req)
        .unwrap();
    let sql = grid.to_sql(Dialect::Postgres);

    assert!(sql.contains("\"posts\".* FROM \"posts\""));
    assert!(sql.contains("WHERE (\"posts\".\"title\" ILIKE '%foo%')"));
    assert!(sql.contains("ORDER BY \"posts\".\"title\" ASC"));
    assert!(sql.contains("LIMIT 10 OFFSET 0"));
}

#[test]
fn unknown_column_degrades_to_unfiltered_page() {
    let schema = blog_schema();
    let responder = Responder::new(&schema);

    let req = request(
        vec![
            data_column("id", ""),
            data_column("missing_column", "foo"),
            action_column(),
        ],
        vec![OrderSpec::new(1, SortOrder::Asc)],
    );

    let grid = responder
        .respond(Selection::all(&schema, "post").unwrap(), &req)
        .unwrap();
    let sql = grid.to_sql(Dialect::Postgres);

    assert!(sql.contains("\"posts\".* FROM \"posts\""));
    assert!(!sql.contains("WHERE"));
    assert!(!sql.contains("missing_column"));
    assert!(!sql.contains("ORDER BY"));
    assert!(sql.contains("LIMIT 10 OFFSET 0"));
}

#[test]
fn nested_request_joins_and_filters_terminal_entity() {
    let schema = blog_schema();
    let responder = Responder::new(&schema);

    let req = request(
        vec![
            data_column("id", ""),
            data_column("post.user.email", "foo@bar.baz"),
            action_column(),
        ],
        vec![OrderSpec::new(1, SortOrder::Asc)],
    );

    let grid = responder
        .respond(Selection::all(&schema, "comment").unwrap(), &req)
        .unwrap();
    let sql = grid.to_sql(Dialect::Postgres);

    assert!(sql.contains("INNER JOIN \"posts\" ON \"comments\".\"post_id\" = \"posts\".\"id\""));
    assert!(sql.contains("INNER JOIN \"users\" ON \"posts\".\"user_id\" = \"users\".\"id\""));
    assert!(sql.contains("WHERE (\"users\".\"email\" ILIKE '%foo@bar.baz%')"));
    assert!(sql.contains("ORDER BY \"users\".\"email\" ASC"));
    assert!(sql.contains("LIMIT 10 OFFSET 0"));
}

#[test]
fn nested_request_with_bad_middle_hop_adds_nothing() {
    let schema = blog_schema();
    let responder = Responder::new(&schema);

    let req = request(
        vec![
            data_column("id", ""),
            data_column("post.foo.email", "foo@bar.baz"),
            action_column(),
        ],
        vec![OrderSpec::new(1, SortOrder::Asc)],
    );

    let grid = responder
        .respond(Selection::all(&schema, "comment").unwrap(), &req)
        .unwrap();
    let sql = grid.to_sql(Dialect::Postgres);

    assert!(sql.contains("\"comments\".* FROM \"comments\""));
    assert!(!sql.contains("JOIN"));
    assert!(!sql.contains("WHERE"));
    assert!(sql.contains("LIMIT 10 OFFSET 0"));
}

#[test]
fn ordering_applies_without_any_search_term() {
    let schema = blog_schema();
    let responder = Responder::new(&schema);

    let req = request(
        vec![
            data_column("id", ""),
            data_column("post.user.email", ""),
            action_column(),
        ],
        vec![OrderSpec::new(1, SortOrder::Asc)],
    );

    let grid = responder
        .respond(Selection::all(&schema, "comment").unwrap(), &req)
        .unwrap();
    let sql = grid.to_sql(Dialect::Postgres);

    // joins exist purely for the ORDER BY target
    assert!(sql.contains("INNER JOIN \"posts\""));
    assert!(sql.contains("INNER JOIN \"users\""));
    assert!(!sql.contains("WHERE"));
    assert!(sql.contains("ORDER BY \"users\".\"email\" ASC"));
    assert!(sql.contains("LIMIT 10 OFFSET 0"));
}

#[test]
fn shared_path_prefix_joins_once() {
    let schema = blog_schema();
    let responder = Responder::new(&schema);

    // both columns traverse the same `post` relationship
    let req = request(
        vec![
            data_column("post.title", "foo"),
            data_column("post.user.email", "bar"),
        ],
        vec![],
    );

    let grid = responder
        .respond(Selection::all(&schema, "comment").unwrap(), &req)
        .unwrap();
    let sql = grid.to_sql(Dialect::Postgres);

    assert_eq!(sql.matches("INNER JOIN \"posts\"").count(), 1);
    assert_eq!(sql.matches("INNER JOIN \"users\"").count(), 1);
    assert!(sql.contains("(\"posts\".\"title\" ILIKE '%foo%')"));
    assert!(sql.contains("AND"));
    assert!(sql.contains("(\"users\".\"email\" ILIKE '%bar%')"));
}

#[test]
fn global_search_ors_across_searchable_columns() {
    let schema = blog_schema();
    let responder = Responder::new(&schema);

    let mut req = request(
        vec![
            data_column("title", ""),
            data_column("user.email", ""),
            action_column(),
        ],
        vec![],
    );
    req.search = SearchTerm::new("foo");

    let grid = responder
        .respond(Selection::all(&schema, "post").unwrap(), &req)
        .unwrap();
    let sql = grid.to_sql(Dialect::Postgres);

    assert!(sql.contains(
        "WHERE ((\"posts\".\"title\" ILIKE '%foo%') OR (\"users\".\"email\" ILIKE '%foo%'))"
    ));
    assert_eq!(sql.matches("INNER JOIN \"users\"").count(), 1);
}

#[test]
fn global_search_composes_with_per_column_search() {
    let schema = blog_schema();
    let responder = Responder::new(&schema);

    let mut req = request(vec![data_column("title", "draft")], vec![]);
    req.search = SearchTerm::new("foo");

    let grid = responder
        .respond(Selection::all(&schema, "post").unwrap(), &req)
        .unwrap();
    let sql = grid.to_sql(Dialect::Postgres);

    // per-column predicate ANDed with the global disjunction
    assert!(sql.contains("(\"posts\".\"title\" ILIKE '%draft%') AND"));
    assert!(sql.contains("((\"posts\".\"title\" ILIKE '%foo%'))"));
}

#[test]
fn pagination_always_applies() {
    let schema = blog_schema();
    let responder = Responder::new(&schema);

    let mut req = request(vec![data_column("nope", "foo"), action_column()], vec![]);
    req.start = 25;
    req.length = 50;

    let grid = responder
        .respond(Selection::all(&schema, "post").unwrap(), &req)
        .unwrap();
    let sql = grid.to_sql(Dialect::Postgres);

    assert!(!sql.contains("WHERE"));
    assert!(sql.contains("LIMIT 50 OFFSET 25"));
}

#[test]
fn count_query_keeps_filters_and_joins_but_not_paging() {
    let schema = blog_schema();
    let responder = Responder::new(&schema);

    let req = request(
        vec![data_column("post.user.email", "foo@bar.baz")],
        vec![OrderSpec::new(0, SortOrder::Desc)],
    );

    let grid = responder
        .respond(Selection::all(&schema, "comment").unwrap(), &req)
        .unwrap();
    let count_sql = grid.count_sql(Dialect::Postgres);

    assert!(count_sql.starts_with("SELECT COUNT(*) FROM \"comments\""));
    assert!(count_sql.contains("INNER JOIN \"posts\""));
    assert!(count_sql.contains("INNER JOIN \"users\""));
    assert!(count_sql.contains("(\"users\".\"email\" ILIKE '%foo@bar.baz%')"));
    assert!(!count_sql.contains("ORDER BY"));
    assert!(!count_sql.contains("LIMIT"));
    assert!(!count_sql.contains("OFFSET"));

    // the page query itself is untouched
    let page_sql = grid.to_sql(Dialect::Postgres);
    assert!(page_sql.contains("ORDER BY"));
    assert!(page_sql.contains("LIMIT 10 OFFSET 0"));
}

#[test]
fn order_entry_out_of_range_is_fatal() {
    let schema = blog_schema();
    let responder = Responder::new(&schema);

    let req = request(
        vec![data_column("title", "")],
        vec![OrderSpec::new(7, SortOrder::Asc)],
    );

    let err = responder
        .respond(Selection::all(&schema, "post").unwrap(), &req)
        .unwrap_err();
    assert!(matches!(
        err,
        RespondError::OrderColumnOutOfRange {
            index: 0,
            column: 7,
            count: 1
        }
    ));
}

#[test]
fn unknown_base_entity_is_fatal() {
    let schema = blog_schema();

    let err = Selection::all(&schema, "widget").unwrap_err();
    assert!(matches!(err, RespondError::UnknownEntity(name) if name == "widget"));
}

#[test]
fn draw_token_is_echoed() {
    let schema = blog_schema();
    let responder = Responder::new(&schema);

    let mut req = request(vec![data_column("id", "")], vec![]);
    req.draw = 42;

    let grid = responder
        .respond(Selection::all(&schema, "post").unwrap(), &req)
        .unwrap();
    assert_eq!(grid.draw, 42);
}

#[test]
fn mysql_rendering_lowers_ilike_and_backticks() {
    let schema = blog_schema();
    let responder = Responder::new(&schema);

    let req = request(vec![data_column("title", "foo")], vec![]);

    let grid = responder
        .respond(Selection::all(&schema, "post").unwrap(), &req)
        .unwrap();
    let sql = grid.to_sql(Dialect::MySql);

    assert!(sql.contains("`posts`.*"));
    assert!(sql.contains("LOWER(`posts`.`title`) LIKE LOWER('%foo%')"));
    assert!(sql.contains("LIMIT 10 OFFSET 0"));
}

#[test]
fn tsql_rendering_uses_offset_fetch() {
    let schema = blog_schema();
    let responder = Responder::new(&schema);

    let req = request(
        vec![data_column("title", "")],
        vec![OrderSpec::new(0, SortOrder::Desc)],
    );

    let grid = responder
        .respond(Selection::all(&schema, "post").unwrap(), &req)
        .unwrap();
    let sql = grid.to_sql(Dialect::TSql);

    assert!(sql.contains("ORDER BY [posts].[title] DESC"));
    assert!(sql.contains("OFFSET 0 ROWS FETCH NEXT 10 ROWS ONLY"));
}

#[test]
fn repeated_requests_translate_identically() {
    let schema = blog_schema();
    let responder = Responder::new(&schema);

    let req = request(
        vec![data_column("post.user.email", "foo")],
        vec![OrderSpec::new(0, SortOrder::Asc)],
    );

    let first = responder
        .respond(Selection::all(&schema, "comment").unwrap(), &req)
        .unwrap()
        .to_sql(Dialect::Postgres);
    let second = responder
        .respond(Selection::all(&schema, "comment").unwrap(), &req)
        .unwrap()
        .to_sql(Dialect::Postgres);

    assert_eq!(first, second);
}
