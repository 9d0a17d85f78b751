use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_default_is_nil() {
    assert!(Value::default().is_nil());
    assert_eq!(Value::default(), Value::Nil);
}

#[test]
fn test_truthiness() {
    assert!(!Value::Nil.is_truthy());
    assert!(!Value::Boolean(false).is_truthy());
    assert!(Value::Boolean(true).is_truthy());
    // Zero and the empty string are truthy
    assert!(Value::Number(0.0).is_truthy());
    assert!(Value::string("").is_truthy());
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Nil.type_name(), "nil");
    assert_eq!(Value::Boolean(true).type_name(), "boolean");
    assert_eq!(Value::Number(1.5).type_name(), "number");
    assert_eq!(Value::string("a").type_name(), "string");
}

#[test]
fn test_display() {
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(Value::Boolean(false).to_string(), "false");
    assert_eq!(Value::Number(3.0).to_string(), "3");
    assert_eq!(Value::Number(2.5).to_string(), "2.5");
    assert_eq!(Value::string("hi").to_string(), "hi");
}

#[test]
fn test_debug() {
    assert_eq!(format!("{:?}", Value::string("hi")), "String(\"hi\")");
    assert_eq!(format!("{:?}", Value::Nil), "Nil");
}

#[test]
fn test_accessors() {
    assert_eq!(Value::Number(4.0).as_number(), Some(4.0));
    assert_eq!(Value::Nil.as_number(), None);
    assert_eq!(Value::string("x").as_str(), Some("x"));
    assert_eq!(Value::Boolean(true).as_str(), None);
}

#[test]
fn test_host_conversions() {
    assert_eq!(Value::from(()), Value::Nil);
    assert_eq!(Value::from(true), Value::Boolean(true));
    assert_eq!(Value::from(7), Value::Number(7.0));
    assert_eq!(Value::from(7_u32), Value::Number(7.0));
    assert_eq!(Value::from(0.5), Value::Number(0.5));
    assert_eq!(Value::from("abc"), Value::string("abc"));
    assert_eq!(Value::from(String::from("abc")), Value::string("abc"));
}

#[test]
fn test_option_conversion() {
    assert_eq!(Value::from(None::<bool>), Value::Nil);
    assert_eq!(Value::from(Some("x")), Value::string("x"));
}

#[test]
fn test_string_clone_shares_allocation() {
    let a = Value::string("shared");
    let b = a.clone();
    match (&a, &b) {
        (Value::String(x), Value::String(y)) => assert!(Rc::ptr_eq(x, y)),
        _ => panic!("expected strings"),
    }
}
