//! Field descriptors produced by `#[derive(Record)]`.

use pretty_assertions::assert_eq;
use tagcheck_validator::Record;
use tagcheck_validator::record::Field;
use tagcheck_validator::value::Value;

#[derive(Record)]
struct Account {
    #[tag(valid = "required|min:3", admin = "alpha_numeric")]
    login: String,
    #[tag(valid = "email")]
    email: Option<String>,
    age: u32,
    #[tag(skip)]
    #[allow(dead_code)]
    token: Vec<u8>,
}

fn account() -> Account {
    Account {
        login: "root".into(),
        email: None,
        age: 40,
        token: vec![1, 2],
    }
}

#[test]
fn lists_fields_in_declaration_order() {
    let fields = account().fields();
    let names: Vec<_> = fields.iter().map(|f| f.name.as_ref()).collect();
    assert_eq!(names, vec!["login", "email", "age"]);
}

#[test]
fn carries_tags_and_values() {
    let fields = account().fields();
    assert_eq!(
        fields[0],
        Field::new("login", Value::Text("root".into()))
            .with_tag("valid", "required|min:3")
            .with_tag("admin", "alpha_numeric")
    );
    assert_eq!(fields[1].value, Value::Optional(None));
    assert!(fields[2].tags.is_empty());
    assert_eq!(fields[2].value, Value::Uint(40));
}

#[test]
fn derived_records_validate() {
    let errors = tagcheck_validator::validate_record(&account(), &["admin", "valid"]).unwrap();
    assert!(errors.is_empty());

    let short = Account {
        login: "r!".into(),
        ..account()
    };
    let errors = tagcheck_validator::validate_record(&short, &["admin", "valid"]).unwrap();
    let codes: Vec<_> = errors.get("login").unwrap().iter().map(|e| e.code.as_ref()).collect();
    assert_eq!(codes, vec!["alpha_numeric", "min"]);
}
