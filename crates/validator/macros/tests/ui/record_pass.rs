//! `#[derive(Record)]` on plain, generic and partially tagged structs.

use std::collections::HashMap;

use tagcheck_validator::Record;

#[derive(Record)]
pub struct Signup {
    #[tag(valid = "required|min:2", strict = "alpha")]
    name: String,
    #[tag(valid = "email")]
    email: Option<String>,
    #[tag(valid = "has_keys:id")]
    meta: HashMap<String, String>,
    age: u8,
    #[tag(skip)]
    session: Session,
}

pub struct Session;

#[derive(Record)]
pub struct Wrapper<T> {
    #[tag(valid = "required")]
    #[tag(other = "min:1")]
    inner: T,
    r#type: &'static str,
}

#[derive(Record)]
pub struct OnlySkipped {
    #[tag(skip)]
    _hidden: Session,
}

fn main() {
    let signup = Signup {
        name: "ann".into(),
        email: None,
        meta: HashMap::new(),
        age: 3,
        session: Session,
    };
    assert_eq!(signup.fields().len(), 4);

    let wrapper = Wrapper { inner: 5_i32, r#type: "x" };
    assert_eq!(wrapper.fields()[1].name, "type");

    assert!(OnlySkipped { _hidden: Session }.fields().is_empty());
}
