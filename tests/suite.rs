use json_pointer::{Error, Json, JsonPointer, ValueKind, NIL};
use serde_json::{json, Value};
use test_case::test_case;

fn document() -> Json {
    Json::from(json!({
        "foo": ["bar", "baz"],
        "": 0,
        "a/b": 1,
        "c%d": 2,
        "e^f": 3,
        "g|h": 4,
        "i\\j": 5,
        "k\"l": 6,
        " ": 7,
        "m~n": 8,
        "~0": 9,
        "~1": 10,
        "/0": 11,
        "/1": 12,
        "aaa": null,
        "bbb": {"-": {"ccc": 13}}
    }))
}

#[test_case("/foo", Some(json!(["bar", "baz"])))]
#[test_case("/foo/0", Some(json!("bar")))]
#[test_case("/", Some(json!(0)))]
#[test_case("/a~1b", Some(json!(1)))]
#[test_case("/c%d", Some(json!(2)))]
#[test_case("/e^f", Some(json!(3)))]
#[test_case("/g|h", Some(json!(4)))]
#[test_case("/i\\j", Some(json!(5)))]
#[test_case("/k\"l", Some(json!(6)))]
#[test_case("/ ", Some(json!(7)))]
#[test_case("/m~0n", Some(json!(8)))]
#[test_case("/~00", Some(json!(9)))]
#[test_case("/~01", Some(json!(10)))]
#[test_case("/~10", Some(json!(11)))]
#[test_case("/~11", Some(json!(12)))]
#[test_case("/bbb/-/ccc", Some(json!(13)))]
#[test_case("/bbb/-", Some(json!({"ccc": 13})))]
#[test_case("/bar", None)]
#[test_case("/foo/2", None)]
#[test_case("/foo/-", None)]
#[test_case("/0", None)]
fn rfc6901_examples(pointer: &str, expected: Option<Value>) {
    let subject = document();
    let compiled = JsonPointer::new(pointer).expect("Valid pointer");
    let result = compiled.get(&subject).expect("Should resolve");
    assert_eq!(result.map(Value::from), expected);
    // Reading has no side effects
    assert_eq!(compiled.get(&subject).expect("Should resolve"), result);
}

#[test]
fn nil_pointer_is_the_whole_document() {
    let subject = document();
    let result = json_pointer::get(NIL, &subject).expect("Should resolve");
    assert!(result.expect("Root").ptr_eq(&subject));
    for scalar in [json!(1), json!("x"), json!(null)] {
        let scalar = Json::from(scalar);
        assert_eq!(json_pointer::get(NIL, &scalar).expect("Should resolve"), Some(&scalar));
    }
}

#[test_case("//foo", "Value at '/' is a number and does not have property 'foo'")]
#[test_case("/foo/0/0", "Value at '/foo/0' is a string and does not have property '0'")]
#[test_case("/aaa/0", "Value at '/aaa' is null and does not have property '0'")]
#[test_case("/bar/0", "Value at '/bar' is undefined and does not have property '0'")]
fn error_messages(pointer: &str, expected: &str) {
    let error = json_pointer::get(pointer, &document()).expect_err("Should fail");
    assert_eq!(error.to_string(), expected);
}

#[test_case(json!(42), ValueKind::Number)]
#[test_case(json!("str"), ValueKind::String)]
#[test_case(json!(null), ValueKind::Null)]
#[test_case(json!(false), ValueKind::Boolean)]
fn scalars_can_not_be_indexed(subject: Value, kind: ValueKind) {
    let mut subject = Json::from(subject);
    let expected = Error::Traversal {
        cursor: String::new(),
        kind,
        token: "0".to_string(),
    };
    assert_eq!(json_pointer::get("/0", &subject).expect_err("Should fail"), expected);
    assert_eq!(
        json_pointer::set("/0", &subject, Json::Null).expect_err("Should fail"),
        expected
    );
    assert_eq!(json_pointer::unset("/0", &subject).expect_err("Should fail"), expected);
    assert_eq!(
        json_pointer::assign("/0", &mut subject, Json::Null).expect_err("Should fail"),
        expected
    );
    assert_eq!(
        json_pointer::remove("/0", &mut subject).expect_err("Should fail"),
        expected
    );
}

#[test]
fn invalid_pointer() {
    assert!(matches!(
        json_pointer::compile("foo"),
        Err(Error::InvalidPointer { pointer }) if pointer == "foo"
    ));
}

#[test]
fn nested_set_preserves_siblings() {
    let subject = Json::from(json!({
        "aaa": {"ccc": 333, "ddd": {"eee": 444}},
        "bbb": {"fff": 222}
    }));
    let result = json_pointer::set("/aaa/ccc", &subject, Json::from("foo")).expect("Should set");
    let at = |value: &Json, pointer: &str| {
        json_pointer::get(pointer, value)
            .expect("Should resolve")
            .expect("Should exist")
            .clone()
    };
    assert!(at(&result, "/bbb").ptr_eq(&at(&subject, "/bbb")));
    assert!(at(&result, "/aaa/ddd").ptr_eq(&at(&subject, "/aaa/ddd")));
    assert_eq!(at(&result, "/aaa/ccc"), Json::from("foo"));
    assert_eq!(at(&subject, "/aaa/ccc"), Json::from(333_i64));
}

#[test]
fn array_end_append() {
    let result =
        json_pointer::set("/-", &Json::from(json!([])), Json::from("x")).expect("Should set");
    assert_eq!(Value::from(result), json!(["x"]));

    let mut subject = Json::from(json!(["a"]));
    json_pointer::assign("/-", &mut subject, Json::from("x")).expect("Should assign");
    assert_eq!(Value::from(subject), json!(["a", "x"]));
}

#[test]
fn array_holes() {
    let result = json_pointer::unset("/0", &Json::from(json!([1, 2]))).expect("Should unset");
    assert_eq!(result.as_array().expect("Is an array").len(), 2);
    assert_eq!(json_pointer::get("/0", &result).expect("Should resolve"), None);
    assert_eq!(
        json_pointer::get("/1", &result).expect("Should resolve"),
        Some(&Json::from(2_i64))
    );
}

#[test]
fn unset_missing_parent_fails() {
    let subject = Json::from(json!({"aaa": {"bbb": {}}}));
    let error = json_pointer::unset("/aaa/ccc/bbb", &subject).expect_err("Should fail");
    assert_eq!(
        error.to_string(),
        "Value at '/aaa/ccc' is undefined and does not have property 'bbb'"
    );
}

#[test]
fn writes_past_the_end_are_rejected() {
    let subject = Json::from(json!({"list": [1]}));
    let error = json_pointer::set("/list/3", &subject, Json::from("x")).expect_err("Should fail");
    assert_eq!(
        error.to_string(),
        "Value at '/list' is an array and '3' is not a valid array index"
    );
    let mut subject = subject;
    let pointer = "/list/18446744073709551615";
    let error = json_pointer::assign(pointer, &mut subject, Json::Null).expect_err("Should fail");
    assert_eq!(
        error,
        Error::InvalidIndex {
            cursor: "/list".to_string(),
            token: "18446744073709551615".to_string(),
        }
    );
    assert_eq!(Value::from(subject), json!({"list": [1]}));
}

#[test]
fn remove_missing_leaf_is_a_no_op() {
    let mut subject = Json::from(json!({"aaa": {"bbb": 1}, "list": []}));
    json_pointer::remove("/aaa/ccc", &mut subject).expect("Should remove");
    json_pointer::remove("/list/0", &mut subject).expect("Should remove");
    json_pointer::remove("/list/-", &mut subject).expect("Should remove");
    json_pointer::remove(NIL, &mut subject).expect("Should remove");
    assert_eq!(Value::from(subject), json!({"aaa": {"bbb": 1}, "list": []}));
}

#[test]
fn append_escapes() {
    assert_eq!(json_pointer::append("/foo", "b~a/r"), "/foo/b~0a~1r");
    assert_eq!(json_pointer::append(NIL, "bar"), "/bar");
}

#[test_case("a/b")]
#[test_case("m~n")]
#[test_case("~1~0")]
#[test_case("/~/~")]
fn escape_round_trip(token: &str) {
    assert_eq!(json_pointer::unescape(&json_pointer::escape(token)), token);
    // A composed pointer resolves back to the same key
    let pointer = json_pointer::append(NIL, token);
    let mut subject = Json::from(json!({}));
    json_pointer::assign(&pointer, &mut subject, Json::from(1_i64)).expect("Should assign");
    assert!(subject.as_object().expect("Is an object").contains_key(token));
}

#[test]
fn copy_on_write_results_are_shareable_across_threads() {
    let subject = Json::from(json!({"counter": 0, "shared": {"x": 1}}));
    let pointer = JsonPointer::new("/counter").expect("Valid pointer");
    let results: Vec<Json> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4_i64)
            .map(|idx| {
                let pointer = &pointer;
                let subject = &subject;
                scope.spawn(move || pointer.set(subject, Json::from(idx)).expect("Should set"))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("Thread panicked"))
            .collect()
    });
    for (idx, result) in results.iter().enumerate() {
        assert_eq!(result.as_object().expect("Is an object")["counter"], Json::from(idx as i64));
        assert!(result.as_object().expect("Is an object")["shared"]
            .ptr_eq(&subject.as_object().expect("Is an object")["shared"]));
    }
    assert_eq!(Value::from(&subject), json!({"counter": 0, "shared": {"x": 1}}));
}
