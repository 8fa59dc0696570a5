use gridline::prelude::*;
use gridline::resolve::PathResolver;
use gridline::respond::transmute_order;

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

fn column(data: Option<&str>, orderable: bool) -> ColumnSpec {
    ColumnSpec {
        data: data.map(String::from),
        orderable,
        searchable: true,
        ..ColumnSpec::default()
    }
}

#[test]
fn translates_dotted_path_order() {
    let schema = blog_schema();
    let resolver = PathResolver::new(&schema);

    let columns = vec![
        column(Some("id"), true),
        column(Some("post.user.email"), true),
        column(None, false),
    ];
    let order = vec![OrderSpec::new(1, SortOrder::Asc)];

    let mapping = transmute_order(&resolver, "comment", &order, &columns).unwrap();
    assert_eq!(mapping, vec![("post.user.email".to_string(), SortDir::Asc)]);
}

#[test]
fn preserves_request_sequence_precedence() {
    let schema = blog_schema();
    let resolver = PathResolver::new(&schema);

    let columns = vec![column(Some("id"), true), column(Some("title"), true)];
    let order = vec![
        OrderSpec::new(1, SortOrder::Desc),
        OrderSpec::new(0, SortOrder::Asc),
    ];

    let mapping = transmute_order(&resolver, "post", &order, &columns).unwrap();
    assert_eq!(
        mapping,
        vec![
            ("title".to_string(), SortDir::Desc),
            ("id".to_string(), SortDir::Asc),
        ]
    );
}

#[test]
fn skipped_entries_do_not_shift_the_rest() {
    let schema = blog_schema();
    let resolver = PathResolver::new(&schema);

    let columns = vec![
        column(Some("id"), true),
        column(Some("title"), false),   // not orderable
        column(None, true),             // no data
        column(Some("missing"), true),  // unresolvable
        column(Some("user.email"), true),
    ];
    let order = vec![
        OrderSpec::new(1, SortOrder::Asc),
        OrderSpec::new(0, SortOrder::Desc),
        OrderSpec::new(2, SortOrder::Asc),
        OrderSpec::new(3, SortOrder::Asc),
        OrderSpec::new(4, SortOrder::Asc),
    ];

    let mapping = transmute_order(&resolver, "post", &order, &columns).unwrap();
    assert_eq!(
        mapping,
        vec![
            ("id".to_string(), SortDir::Desc),
            ("user.email".to_string(), SortDir::Asc),
        ]
    );
}

#[test]
fn repeated_path_keeps_first_position_and_last_direction() {
    let schema = blog_schema();
    let resolver = PathResolver::new(&schema);

    let columns = vec![column(Some("id"), true), column(Some("title"), true)];
    let order = vec![
        OrderSpec::new(0, SortOrder::Asc),
        OrderSpec::new(1, SortOrder::Asc),
        OrderSpec::new(0, SortOrder::Desc),
    ];

    let mapping = transmute_order(&resolver, "post", &order, &columns).unwrap();
    assert_eq!(
        mapping,
        vec![
            ("id".to_string(), SortDir::Desc),
            ("title".to_string(), SortDir::Asc),
        ]
    );
}

#[test]
fn out_of_range_index_is_an_error() {
    let schema = blog_schema();
    let resolver = PathResolver::new(&schema);

    let columns = vec![column(Some("id"), true)];
    let order = vec![
        OrderSpec::new(0, SortOrder::Asc),
        OrderSpec::new(3, SortOrder::Asc),
    ];

    let err = transmute_order(&resolver, "post", &order, &columns).unwrap_err();
    assert!(matches!(
        err,
        RespondError::OrderColumnOutOfRange {
            index: 1,
            column: 3,
            count: 1
        }
    ));
}

#[test]
fn empty_order_yields_empty_mapping() {
    let schema = blog_schema();
    let resolver = PathResolver::new(&schema);

    let columns = vec![column(Some("id"), true)];
    let mapping = transmute_order(&resolver, "post", &[], &columns).unwrap();
    assert!(mapping.is_empty());
}
