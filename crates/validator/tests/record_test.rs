//! Record validation through the global registry.

use pretty_assertions::assert_eq;
use tagcheck_validator::prelude::*;
use tagcheck_validator::Error;

#[derive(Record)]
struct Profile {
    #[tag(valid = "required|min:2|alpha")]
    name: String,
    #[tag(valid = "email")]
    email: String,
    #[tag(valid = "in:admin,user", strict = "required")]
    role: Option<String>,
    #[tag(skip)]
    #[allow(dead_code)]
    cache: Vec<u8>,
}

fn profile() -> Profile {
    Profile {
        name: "ann".into(),
        email: "ann@example.com".into(),
        role: Some("user".into()),
        cache: Vec::new(),
    }
}

#[test]
fn valid_record_has_no_failures() {
    let errors = validate_record(&profile(), &[] as &[&str]).unwrap();
    assert!(errors.is_empty());
    assert_eq!(errors.to_json(), "{}");
}

#[test]
fn one_failing_field_gives_one_entry() {
    let record = Profile {
        email: "not an email".into(),
        ..profile()
    };
    let errors = validate_record(&record, &["valid"]).unwrap();

    assert_eq!(errors.len(), 1);
    let email = errors.get("email").unwrap();
    assert_eq!(email.len(), 1);
    assert_eq!(email[0].code, "email");
    assert_eq!(email[0].field.as_deref(), Some("email"));
}

#[test]
fn failures_render_as_object_of_arrays() {
    let record = Profile {
        name: "A".into(),
        email: "nope".into(),
        ..profile()
    };
    let errors = validate_record(&record, &["valid"]).unwrap();
    insta::assert_snapshot!(
        errors.to_json(),
        @r#"{"name":["must be greater or equal of 2"],"email":["must be a valid email address"]}"#
    );
}

#[test]
fn tags_are_combined_in_request_order() {
    let record = Profile {
        role: None,
        ..profile()
    };
    assert!(validate_record(&record, &["valid"]).unwrap().is_empty());

    let errors = validate_record(&record, &["strict", "valid"]).unwrap();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["role"]);
    assert_eq!(errors.get("role").unwrap()[0].code, "in");
}

#[test]
fn fatal_error_aborts_the_record() {
    #[derive(Record)]
    struct Broken {
        #[tag(valid = "required")]
        ok: String,
        #[tag(valid = "maxx:3")]
        bad: String,
    }

    let record = Broken {
        ok: "x".into(),
        bad: "y".into(),
    };
    let err = validate_record(&record, &[] as &[&str]).unwrap_err();
    assert_eq!(err, Error::UnknownRule("maxx".into()));
}

#[test]
fn hand_written_records_work_too() {
    struct Pair(i64, i64);

    impl Record for Pair {
        fn fields(&self) -> Vec<Field> {
            vec![
                Field::new("left", self.0.to_value()).with_tag("valid", "max:10"),
                Field::new("right", self.1.to_value()).with_tag("valid", "max:10"),
            ]
        }
    }

    let errors = validate_record(&Pair(3, 30), &["valid"]).unwrap();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["right"]);
}
