use std::sync::Arc;

use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase};
use varcase::casing::{to_lower, to_title_lower};
use varcase::*;

#[test]
fn readme_examples() {
    assert_eq!(convert(&*LOWER_SNAKE_CASE, &LOWER_CAMEL_CASE, "foo_bar_baz"), "fooBarBaz");
    assert_eq!(convert(&*LOWER_CAMEL_CASE, &LOWER_SNAKE_CASE, "fooBarBaz"), "foo_bar_baz");
    assert_eq!(convert(&*LOWER_CAMEL_CASE, &SCREAMING_SNAKE_CASE, "userID"), "USER_ID");
    assert_eq!(convert(&*UPPER_CAMEL_CASE, &KEBAB_CASE, "HTTPServer"), "http-server");
    assert_eq!(convert(&*SCREAMING_SNAKE_CASE, &UPPER_CAMEL_CASE, "HTTP_SERVER"), "HTTPServer");
}

#[test]
fn acronym_restoration_starts_with_initialism() {
    let joined = JoinStyle::camel().join(&["HTTP", "Server"]);
    assert!(joined.starts_with("HTTP"));
    let joined = UPPER_CAMEL_CASE.join_words(&["HTTP", "Server"]);
    assert!(joined.starts_with("HTTP"));
}

#[test]
fn http_header_names() {
    let caser = Caser::new(&KEBAB_CASE, &HTTP_HEADER_CASE);
    assert_eq!(caser.convert("content-type"), "Content-Type");
    assert_eq!(caser.convert("www-authenticate"), "WWW-Authenticate");
    assert_eq!(caser.convert("x-ua-compatible"), "X-UA-Compatible");
    assert_eq!(caser.convert("dnt"), "DNT");
    assert_eq!(http_title("content-type"), "Content-Type");
}

fn assert_idempotent(convention: &CaseConvention, names: &[&str]) {
    for name in names {
        assert_eq!(convert(convention, convention, name), *name, "{}", convention);
    }
}

#[test]
fn same_convention_is_idempotent() {
    assert_idempotent(&LOWER_CAMEL_CASE, &["fooBarBaz", "userID", "serveHTTP", "x"]);
    assert_idempotent(&UPPER_CAMEL_CASE, &["HTTPServer", "FooBar", "UserID"]);
    assert_idempotent(&UPPER_CAMEL_CASE_KEEP_CAPS, &["IOStream", "FooBar"]);
    assert_idempotent(&LOWER_SNAKE_CASE, &["foo_bar_baz", "user_id", "a"]);
    assert_idempotent(&SCREAMING_SNAKE_CASE, &["USER_ID", "MAX_VALUE"]);
    assert_idempotent(&KEBAB_CASE, &["content-type", "foo-bar"]);
    assert_idempotent(&SCREAMING_KEBAB_CASE, &["CONTENT-TYPE"]);
    assert_idempotent(
        &HTTP_HEADER_CASE,
        &["Content-Type", "WWW-Authenticate", "X-Forwarded-For"],
    );
}

#[test]
fn word_endings_matching_initialisms_are_uppercased() {
    // the suffix pass cannot tell an ordinary word ending from an acronym
    let camel = Caser::new(&LOWER_CAMEL_CASE, &LOWER_CAMEL_CASE);
    assert_eq!(camel.convert("valid"), "valID");
    assert_eq!(camel.convert("relationship"), "relationshIP");
    assert_eq!(camel.convert("paid"), "paID");
    assert_eq!(convert(&*LOWER_SNAKE_CASE, &LOWER_CAMEL_CASE, "friend_ship"), "friendShIP");

    let joined = LOWER_CAMEL_CASE.join_words(&["valid"]);
    assert_eq!(joined, "valID");
    assert_eq!(LOWER_CAMEL_CASE.split_words(&joined), vec!["val", "ID"]);
}

#[test]
fn words_survive_casing_and_joining() {
    let words = ["foo", "bar", "baz"];
    for convention in Convention::ALL {
        let convention = convention.case_convention();
        let joined = convention.join_words(&words);
        let split = convention.split_words(&joined);
        assert_eq!(split.len(), words.len(), "{}", convention);
        for (a, b) in split.iter().zip(words) {
            assert!(a.eq_ignore_ascii_case(b), "{} {:?}", convention, split);
        }
    }
}

#[test]
fn splitting_ignores_case_differences() {
    let pairs = [
        (&*LOWER_CAMEL_CASE, "fooBarBaz", "FooBarBaz"),
        (&*LOWER_SNAKE_CASE, "foo_bar", "FOO_BAR"),
        (&*KEBAB_CASE, "content-type", "Content-TYPE"),
    ];
    for (convention, a, b) in pairs {
        let a = convention.split_words(a);
        let b = convention.split_words(b);
        assert_eq!(a.len(), b.len());
        assert!(a.iter().zip(&b).all(|(a, b)| a.eq_ignore_ascii_case(b)));
    }
}

#[test]
fn agrees_with_heck_without_acronyms() {
    let camel = ["fooBarBaz", "helloWorld", "simple", "someLongIdentifierName"];
    for name in camel {
        assert_eq!(convert(&*LOWER_CAMEL_CASE, &LOWER_SNAKE_CASE, name), name.to_snake_case());
        assert_eq!(convert(&*LOWER_CAMEL_CASE, &KEBAB_CASE, name), name.to_kebab_case());
    }
    let snake = ["foo_bar_baz", "hello_world", "some_long_identifier_name"];
    for name in snake {
        assert_eq!(
            convert(&*LOWER_SNAKE_CASE, &LOWER_CAMEL_CASE, name),
            name.to_lower_camel_case()
        );
    }
}

#[test]
fn custom_initialisms() {
    let registry = initialism::COMMON.with(["K8S"]).unwrap();
    let camel = CaseConvention::new(
        JoinStyle::camel_with(Arc::new(registry)),
        to_lower,
        to_title_lower,
        "lowerCamelCase",
    );
    assert_eq!(convert(&*LOWER_SNAKE_CASE, &camel, "k8s_client"), "K8SClient");
    assert_eq!(convert(&*LOWER_SNAKE_CASE, &camel, "new_k8s"), "newK8S");
    assert_eq!(convert(&*LOWER_SNAKE_CASE, &camel, "user_id"), "userID");
    assert_eq!(convert(&*LOWER_SNAKE_CASE, &LOWER_CAMEL_CASE, "new_k8s"), "newK8s");
}

#[test]
fn conventions_by_name() {
    let caser = Caser::by_names("SCREAMING_SNAKE_CASE", "lowerCamelCase").unwrap();
    assert_eq!(caser.convert("REQUEST_ID"), "requestID");
    assert_eq!(
        Caser::by_names("snake", "Hungarian").unwrap_err(),
        Error::UnknownConvention("Hungarian".to_owned())
    );
}

#[test]
fn conventions_are_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let name = format!("value_{i}_id");
                convert(&*LOWER_SNAKE_CASE, &UPPER_CAMEL_CASE, &name)
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("Value{i}ID"));
    }
}
