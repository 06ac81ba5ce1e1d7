//! Constructors and the truthy rule.

use optval::{Opt, absent, from_value, present};
use serde_json::json;
use similar_asserts::assert_eq;

#[test]
fn blank_string_goes_to_absent() {
    assert_eq!(from_value(""), absent());
    assert_eq!(from_value(String::new()), absent());
}

#[test]
fn false_goes_to_absent() {
    assert_eq!(from_value(false), absent());
}

#[test]
fn zero_goes_to_absent() {
    assert_eq!(from_value(0), absent());
    assert_eq!(from_value(0u64), absent());
    assert_eq!(from_value(-0.0), absent());
}

#[test]
fn null_like_goes_to_absent() {
    assert_eq!(from_value(()), absent());
    assert_eq!(from_value(None::<i32>), absent());
    assert_eq!(from_value(json!(null)), absent());
}

#[test]
fn truthy_values_go_to_present() {
    assert_eq!(from_value("Hello World!"), present("Hello World!"));
    assert_eq!(from_value(true), present(true));
    assert_eq!(from_value(1), present(1));
    assert_eq!(from_value(-1.5), present(-1.5));
    assert_eq!(from_value(vec![0]), present(vec![0]));
    assert_eq!(from_value(json!({})), present(json!({})));
}

#[test]
fn nan_is_present() {
    let nan = from_value(f64::NAN);
    assert!(nan.is_defined());
    assert!(nan.get().unwrap().is_nan());
}

#[test]
fn present_wraps_falsy_values() {
    assert_eq!(present(0).get_or_null(), Some(0));
    assert_eq!(present(false).get_or_null(), Some(false));
    assert_eq!(present("").get_or_null(), Some(""));
}

#[test]
fn associated_constructors_match_free_ones() {
    assert_eq!(Opt::present(3), present(3));
    assert_eq!(Opt::<u8>::absent(), absent());
    assert_eq!(Opt::from_value("x"), from_value("x"));
}

#[test]
fn equality_is_structural() {
    assert_eq!(present(String::from("a")), present("a".to_string()));
    assert_ne!(present(1), present(2));
    assert_ne!(present(0), absent());
    assert_eq!(absent::<u8>(), absent());
}
