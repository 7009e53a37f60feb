//! Integration tests for filter processing through the public API.
//!
//! These tests go through the JSON decode path, the processor and statement
//! assembly, the same way a request handler would.

use aql_filter::prelude::*;
use aql_filter::query::{CompareOp, escape};
use pretty_assertions::assert_eq;

fn processor() -> FilterProcessor {
    FilterProcessor::with_variable("").expect("default variable is valid")
}

fn where_of(json: &str) -> QueryResult<String> {
    processor().process_json(json).map(|f| f.where_clause)
}

fn sorted_clauses(fragment: &str) -> Vec<&str> {
    let mut parts: Vec<_> = fragment.split(" && ").collect();
    parts.sort_unstable();
    parts
}

// ============== Offset / limit ==============

#[test]
fn test_offset_limit_fragments() {
    let cases = [
        (r#"{"offset": 1}"#, "1"),
        (r#"{"limit": 2}"#, "2"),
        (r#"{"offset": 3, "limit": 4}"#, "3, 4"),
        ("{}", ""),
    ];
    for (json, expected) in cases {
        let filter = processor().process_json(json).unwrap();
        assert_eq!(filter.offset_limit, expected, "{json}");
    }
}

#[test]
fn test_negative_offset_limit_are_accepted() {
    assert!(processor().process_json(r#"{"offset": -1}"#).is_ok());
    assert!(processor().process_json(r#"{"limit": -1}"#).is_ok());
}

// ============== Sort ==============

#[test]
fn test_sort_fragment() {
    let filter = processor()
        .process_json(r#"{"sort": ["firstName ASC", "lastName dESc", "age"]}"#)
        .unwrap();
    assert_eq!(
        filter.sort,
        "var.firstName ASC, var.lastName DESC, var.age ASC"
    );

    let empty = processor().process_json(r#"{"sort": []}"#).unwrap();
    assert_eq!(empty.sort, "");
}

#[test]
fn test_sort_rejections() {
    let err = processor()
        .process_json(r#"{"sort": ["foo, bar"]}"#)
        .unwrap_err();
    assert!(err.is_sort_error() || err.is_identifier_error());

    let err = processor()
        .process_json(r#"{"sort": ["INSeRT ASC"]}"#)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ReservedIdentifier);
}

// ============== Where ==============

#[test]
fn test_where_basic_fields() {
    let aql = where_of(
        r#"{"where": [{
            "password": "qwertyuiop",
            "age": 22,
            "money": 3000.55,
            "awesome": true,
            "notAwesome": false,
            "graduated": [2010, 2015],
            "avg": [15.5, 13.24],
            "birthPlace": ["Chalon", "Macon"],
            "bools": [true, false],
            "strWithQuote": "O'Hare"
        }]}"#,
    )
    .unwrap();

    let mut expected = vec![
        "var.password == 'qwertyuiop'",
        "var.age == 22",
        "var.money == 3000.55",
        "var.awesome == true",
        "var.notAwesome == false",
        "var.graduated IN [2010, 2015]",
        "var.avg IN [15.5, 13.24]",
        "var.birthPlace IN ['Chalon', 'Macon']",
        "var.bools IN [true, false]",
        r"var.strWithQuote == 'O\'Hare'",
    ];
    expected.sort_unstable();
    assert_eq!(sorted_clauses(&aql), expected);
}

#[test]
fn test_where_or() {
    let aql = where_of(
        r#"{"where": [{"oR": [
            {"lastName": {"eq": "O'Connor"}},
            {"age": {"gt": 23}},
            {"age": {"lt": 26}}
        ]}]}"#,
    )
    .unwrap();
    assert_eq!(
        aql,
        r"(var.lastName == 'O\'Connor' || var.age > 23 || var.age < 26)"
    );
}

#[test]
fn test_where_and() {
    let aql = where_of(
        r#"{"where": [{"and": [
            {"firstName": {"neq": "Toto"}},
            {"money": 200.5}
        ]}]}"#,
    )
    .unwrap();
    assert_eq!(aql, "(var.firstName != 'Toto' && var.money == 200.5)");
}

#[test]
fn test_where_not() {
    let aql = where_of(
        r#"{"where": [
            {"not": {"firstName": "D'Arcy"}},
            {"nOt": {"or": [
                {"lastName": "Herfray"},
                {"money": {"gte": 0}},
                {"money": {"lte": 1000.5}}
            ]}}
        ]}"#,
    )
    .unwrap();

    let mut expected = vec![
        r"!(var.firstName == 'D\'Arcy')",
        "!((var.lastName == 'Herfray' || var.money >= 0 || var.money <= 1000.5))",
    ];
    expected.sort_unstable();
    assert_eq!(sorted_clauses(&aql), expected);
}

#[test]
fn test_where_like() {
    let aql = where_of(
        r#"{"where": [
            {"like": {"text": "firstName", "search": "fab%", "case_insensitive": true}},
            {"like": {"text": "lastName", "search": "Her%", "case_insensitive": false}}
        ]}"#,
    )
    .unwrap();

    let mut expected = vec![
        "LIKE(var.firstName, 'fab%', true)",
        "LIKE(var.lastName, 'Her%')",
    ];
    expected.sort_unstable();
    assert_eq!(sorted_clauses(&aql), expected);
}

#[test]
fn test_where_shape_rejections() {
    for json in [
        r#"{"where": [{"var.firstName": ["foo", {"foo": "bar"}]}]}"#,
        r#"{"where": [{"and": ["foo", "bar"]}]}"#,
        r#"{"where": [{"or": ["foo", "bar"]}]}"#,
        r#"{"where": [{"and": {"firstName": "Fabien", "foo": "bar"}}]}"#,
        r#"{"where": [{"and": ["INSeRT"]}]}"#,
        r#"{"where": [{"not": 1}]}"#,
    ] {
        let err = where_of(json).unwrap_err();
        assert!(err.is_where_error(), "{json}: {err}");
    }
}

#[test]
fn test_where_integer_operands_rejected() {
    for op in CompareOp::ALL {
        let spec = FilterSpec::new().where_eq("money", Value::map([(op.key(), 1i64)]));
        let err = processor().process(Some(&spec)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidWhereType, "{}", op.key());
    }
}

#[test]
fn test_json_integers_are_floats() {
    let aql = where_of(r#"{"where": [{"money": {"eq": 1}}]}"#).unwrap();
    assert_eq!(aql, "var.money == 1");
}

#[test]
fn test_process_none() {
    let filter = processor().process(None).unwrap();
    assert_eq!(filter, ProcessedFilter::default());
}

#[test]
fn test_escape() {
    assert_eq!(escape("O'Hare"), r"O\'Hare");
}

#[test]
fn test_options_are_passed_through() {
    let spec = FilterSpec::from_json(r#"{"options": ["count", "DROP x"]}"#).unwrap();
    assert_eq!(spec.options(), ["count", "DROP x"]);
    assert!(processor().process(Some(&spec)).unwrap().is_empty());
}

#[test]
fn test_error_report() {
    let err = where_of(r#"{"where": [{"or": [{"age": {"between": 1}}]}]}"#).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidWhereShape);
    assert_eq!(err.context.location.as_deref(), Some("where[0].or[0].age"));

    let report = err.display_full();
    assert!(report.starts_with("Error [F3001]"));
    assert!(report.contains("where[0].or[0].age"));
}

#[test]
fn test_processor_is_shareable_across_threads() {
    let processor = std::sync::Arc::new(FilterProcessor::with_variable("doc").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let processor = processor.clone();
            std::thread::spawn(move || {
                let json = format!(r#"{{"where": [{{"n": {}}}]}}"#, i);
                processor.process_json(&json).unwrap().where_clause
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        vec!["doc.n == 0", "doc.n == 1", "doc.n == 2", "doc.n == 3"]
    );
}

// ============== Statements ==============

#[test]
fn test_statement_snapshot() {
    let processor = processor();
    let filter = processor
        .process_json(
            r#"{
                "offset": 20,
                "limit": 10,
                "sort": ["lastName desc", "firstName"],
                "where": [
                    {"active": true, "role": ["admin", "editor"]},
                    {"or": [{"age": {"gte": 18}}, {"guardian": {"neq": "none"}}]},
                    {"like": {"text": "email", "search": "%@example.com", "case_insensitive": true}}
                ]
            }"#,
        )
        .unwrap();

    let statement = QueryTemplate::new("users", processor.variable())
        .unwrap()
        .render(&filter);

    insta::assert_snapshot!(statement, @r"
FOR var IN users
  FILTER var.active == true && var.role IN ['admin', 'editor'] && (var.age >= 18 || var.guardian != 'none') && LIKE(var.email, '%@example.com', true)
  SORT var.lastName DESC, var.firstName ASC
  LIMIT 20, 10
  RETURN var
");
}

#[test]
fn test_statement_snapshot_without_clauses() {
    let filter = processor().process(None).unwrap();
    let statement = QueryTemplate::new("users", "u").unwrap().render(&filter);

    insta::assert_snapshot!(statement, @r"
FOR u IN users
  RETURN u
");
}

#[test]
fn test_statement_snapshot_with_escaped_quotes() {
    let processor = FilterProcessor::with_variable("p").unwrap();
    let filter = processor
        .process_json(r#"{"where": [{"not": {"city": "L'Aquila"}}]}"#)
        .unwrap();
    let statement = QueryTemplate::new("places", "p").unwrap().render(&filter);

    insta::assert_snapshot!(statement, @r"
FOR p IN places
  FILTER !(p.city == 'L\'Aquila')
  RETURN p
");
}
