use crate::Argument;
use crate::ArgumentValue;
use crate::QueryBuildError;
use crate::QueryText;
use crate::ScalarList;
use serde_json::json;

// =============================================================================
// Scalar encoding
// =============================================================================

#[test]
fn bool_encodes_lower_case() {
    assert_eq!(Argument::bool("blocked", true).to_query_text(), "blocked:true");
    assert_eq!(Argument::bool("blocked", false).to_query_text(), "blocked:false");
}

#[test]
fn int_encodes_as_decimal() {
    assert_eq!(Argument::int("x", -5).to_query_text(), "x:-5");
    assert_eq!(Argument::int("x", 0).to_query_text(), "x:0");
    assert_eq!(Argument::int("uid", 123).to_query_text(), "uid:123");
    assert_eq!(
        Argument::int("max", i64::MAX).to_query_text(),
        "max:9223372036854775807",
    );
}

/// Verifies that string contents are written verbatim between the quotes,
/// with no escaping of embedded quotes at this layer.
#[test]
fn string_is_quoted_but_not_escaped() {
    assert_eq!(Argument::string("x", "a\"b").to_query_text(), r#"x:"a"b""#);
    assert_eq!(Argument::string("s", "").to_query_text(), r#"s:"""#);
    assert_eq!(Argument::string("p", r"C:\dir").to_query_text(), r#"p:"C:\dir""#);
}

#[test]
fn block_string_uses_triple_quotes() {
    assert_eq!(
        Argument::block_string("body", "line one\nline \"two\"").to_query_text(),
        "body:\"\"\"line one\nline \"two\"\"\"\"",
    );
}

#[test]
fn enum_value_is_a_bare_word() {
    assert_eq!(Argument::enum_value("order", "DESC").to_query_text(), "order:DESC");
}

// =============================================================================
// List encoding
// =============================================================================

#[test]
fn scalar_lists_are_comma_separated_without_spaces() {
    assert_eq!(
        Argument::bool_list("b", [true, false]).to_query_text(),
        "b:[true,false]",
    );
    assert_eq!(
        Argument::int_list("i", [1, -1, 0]).to_query_text(),
        "i:[1,-1,0]",
    );
    assert_eq!(
        Argument::string_list("blocked_nds", ["nd013", "nd014"]).to_query_text(),
        r#"blocked_nds:["nd013","nd014"]"#,
    );
    assert_eq!(
        Argument::enum_list("roles", ["ADMIN", "USER"]).to_query_text(),
        "roles:[ADMIN,USER]",
    );
    assert_eq!(
        Argument::block_string_list("docs", ["a", "b"]).to_query_text(),
        r#"docs:["""a""","""b"""]"#,
    );
}

#[test]
fn string_list_keeps_empty_and_blank_elements() {
    assert_eq!(
        Argument::string_list("blocked", ["a", "b", "", " ", "d"]).to_query_text(),
        r#"blocked:["a","b",""," ","d"]"#,
    );
}

#[test]
fn empty_lists_encode_as_empty_brackets() {
    assert_eq!(Argument::string_list("tagIds", Vec::<String>::new()).to_query_text(), "tagIds:[]");
    assert_eq!(Argument::int_list("ids", Vec::<i64>::new()).to_query_text(), "ids:[]");
    assert_eq!(Argument::object_list("objs", Vec::<Vec<Argument>>::new()).to_query_text(), "objs:[]");
}

// =============================================================================
// Nested object encoding
// =============================================================================

#[test]
fn object_encodes_fields_in_order() {
    let arg = Argument::object("input", [
        Argument::string("title", "what"),
        Argument::string("content", "what"),
        Argument::string_list("tagIds", Vec::<String>::new()),
    ]);
    assert_eq!(
        arg.to_query_text(),
        r#"input:{title:"what",content:"what",tagIds:[]}"#,
    );
}

#[test]
fn objects_nest_recursively() {
    let arg = Argument::object("where", [
        Argument::object("author", [
            Argument::object("name", [Argument::string("eq", "Ada")]),
        ]),
        Argument::bool("published", true),
    ]);
    assert_eq!(
        arg.to_query_text(),
        r#"where:{author:{name:{eq:"Ada"}},published:true}"#,
    );
}

#[test]
fn object_list_encodes_each_object() {
    let arg = Argument::object_list("mapArray", [
        vec![Argument::string("foo", "bar"), Argument::int("fizzbuzz", 15)],
        vec![Argument::string("foo", "baz"), Argument::int("fizzbuzz", 45)],
    ]);
    assert_eq!(
        arg.to_query_text(),
        r#"mapArray:[{foo:"bar",fizzbuzz:15},{foo:"baz",fizzbuzz:45}]"#,
    );
}

#[test]
fn empty_object_encodes_as_empty_braces() {
    assert_eq!(Argument::object("input", Vec::<Argument>::new()).to_query_text(), "input:{}");
}

#[test]
fn nested_arguments_lists_direct_children_only() {
    let inner = Argument::object("inner", [Argument::int("deep", 1)]);
    let value = ArgumentValue::Object(vec![inner.clone(), Argument::int("b", 2)]);
    let nested: Vec<&str> = value.nested_arguments().into_iter().map(Argument::name).collect();
    assert_eq!(nested, vec!["inner", "b"]);

    let list = ArgumentValue::ObjectList(vec![
        vec![Argument::int("a", 1)],
        vec![Argument::int("c", 3), inner],
    ]);
    let nested: Vec<&str> = list.nested_arguments().into_iter().map(Argument::name).collect();
    assert_eq!(nested, vec!["a", "c", "inner"]);

    assert!(ArgumentValue::Int(1).nested_arguments().is_empty());
}

// =============================================================================
// Dynamic conversion
// =============================================================================

#[test]
fn from_json_accepts_scalars() {
    assert_eq!(Argument::from_json("arg", &json!(1)), Ok(Argument::int("arg", 1)));
    assert_eq!(Argument::from_json("arg", &json!(-7)), Ok(Argument::int("arg", -7)));
    assert_eq!(Argument::from_json("arg", &json!(true)), Ok(Argument::bool("arg", true)));
    assert_eq!(Argument::from_json("arg", &json!("str")), Ok(Argument::string("arg", "str")));
}

#[test]
fn from_json_accepts_homogeneous_arrays() {
    assert_eq!(
        Argument::from_json("arg", &json!(["str", "slice"])),
        Ok(Argument::string_list("arg", ["str", "slice"])),
    );
    assert_eq!(
        Argument::from_json("arg", &json!([true, false])),
        Ok(Argument::bool_list("arg", [true, false])),
    );
    assert_eq!(
        Argument::from_json("arg", &json!([1, 2])),
        Ok(Argument::int_list("arg", [1, 2])),
    );
}

#[test]
fn from_json_empty_array_is_an_empty_list() {
    let arg = Argument::from_json("arg", &json!([])).unwrap();
    assert_eq!(arg.value(), &ArgumentValue::List(ScalarList::String(vec![])));
    assert_eq!(arg.to_query_text(), "arg:[]");
}

#[test]
fn from_json_rejects_float() {
    let err = Argument::from_json("arg", &json!(1.1)).unwrap_err();
    assert_eq!(err, QueryBuildError::UnsupportedArgumentType {
        type_name: "float",
        value: "1.1".to_string(),
    });
    assert_eq!(err.to_string(), "Argument 1.1 of type float is not supported");
}

#[test]
fn from_json_rejects_other_shapes() {
    let cases = [
        (json!(null), "null", "null"),
        (json!({"a": 1}), "object", r#"{"a":1}"#),
        (json!([1, "two"]), "array", r#"[1,"two"]"#),
        (json!([[1]]), "array", "[[1]]"),
        (json!([1.5, 2.5]), "array", "[1.5,2.5]"),
        (json!(u64::MAX), "u64", "18446744073709551615"),
    ];
    for (input, expected_type, expected_value) in cases {
        assert_eq!(
            Argument::from_json("arg", &input),
            Err(QueryBuildError::UnsupportedArgumentType {
                type_name: expected_type,
                value: expected_value.to_string(),
            }),
            "input: {input}",
        );
    }
}

#[test]
fn from_json_integer_bounds() {
    assert_eq!(
        Argument::from_json("arg", &json!(i64::MIN)),
        Ok(Argument::int("arg", i64::MIN)),
    );
    assert_eq!(
        Argument::from_json("arg", &json!(i64::MAX)),
        Ok(Argument::int("arg", i64::MAX)),
    );

    let just_over = i64::MAX as u64 + 1;
    let err = Argument::from_json("arg", &json!(just_over)).unwrap_err();
    assert_eq!(err, QueryBuildError::UnsupportedArgumentType {
        type_name: "u64",
        value: "9223372036854775808".to_string(),
    });
    assert_eq!(
        err.to_string(),
        "Argument 9223372036854775808 of type u64 is not supported",
    );
}
