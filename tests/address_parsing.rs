//! End-to-end coverage of the parser facade across the documented address shapes, plus the
//! universal invariants the facade promises regardless of shape.

use ar_address_parser::{AddressType, Parser, StructureCache};
use std::rc::Rc;

fn parser() -> Parser {
    Parser::new().expect("the embedded grammar is valid")
}

#[test]
fn simple_street_without_door_number() {
    let data = parser().parse("Tucuman").expect("should parse");
    assert_eq!(data.r#type, AddressType::Simple);
    assert_eq!(data.street_names, vec!["Tucuman"]);
    assert_eq!(data.door_number_value, None);
}

#[test]
fn simple_street_with_door_number() {
    let data = parser().parse("Tucuman 1300").expect("should parse");
    assert_eq!(data.r#type, AddressType::Simple);
    assert_eq!(data.street_names, vec!["Tucuman"]);
    assert_eq!(data.door_number_value.as_deref(), Some("1300"));
}

#[test]
fn intersection_without_door_number() {
    let data = parser().parse("Corrientes y Salta").expect("should parse");
    assert_eq!(data.r#type, AddressType::Intersection);
    assert_eq!(data.street_names, vec!["Corrientes", "Salta"]);
}

#[test]
fn intersection_with_door_number_on_first_street() {
    let data = parser().parse("Tucuman 1300 y Salta").expect("should parse");
    assert_eq!(data.r#type, AddressType::Intersection);
    assert_eq!(data.street_names, vec!["Tucuman", "Salta"]);
    assert_eq!(data.door_number_value.as_deref(), Some("1300"));
}

#[test]
fn intersection_with_door_number_on_second_street() {
    let data = parser().parse("Tucuman y Salta 1300").expect("should parse");
    assert_eq!(data.r#type, AddressType::Intersection);
    assert_eq!(data.street_names, vec!["Tucuman", "Salta"]);
    assert_eq!(data.door_number_value.as_deref(), Some("1300"));
}

#[test]
fn between_two_streets_without_door_number() {
    let data = parser()
        .parse("Corrientes entre Salta y Jujuy")
        .expect("should parse");
    assert_eq!(data.r#type, AddressType::Between);
    assert_eq!(data.street_names, vec!["Corrientes", "Salta", "Jujuy"]);
    assert_eq!(data.door_number_value, None);
}

#[test]
fn between_two_streets_with_door_number() {
    let data = parser()
        .parse("Corrientes 1200 entre Salta y Jujuy")
        .expect("should parse");
    assert_eq!(data.r#type, AddressType::Between);
    assert_eq!(data.street_names, vec!["Corrientes", "Salta", "Jujuy"]);
    assert_eq!(data.door_number_value.as_deref(), Some("1200"));
}

#[test]
fn between_with_leading_street_before_btwn_sep() {
    let data = parser()
        .parse("Tucumán e/ Corrientes y Salta 1000")
        .expect("should parse");
    assert_eq!(data.r#type, AddressType::Between);
    assert_eq!(data.street_names, vec!["Tucumán", "Corrientes", "Salta"]);
    assert_eq!(data.door_number_value.as_deref(), Some("1000"));
}

#[test]
fn floor_as_a_bare_number_or_ordinal_plus_letter() {
    let data = parser().parse("Tucumán 1300 1° A").expect("should parse");
    assert_eq!(data.r#type, AddressType::Simple);
    assert_eq!(data.street_names, vec!["Tucumán"]);
    assert_eq!(data.door_number_value.as_deref(), Some("1300"));
    assert_eq!(data.floor.as_deref(), Some("1° A"));
}

#[test]
fn door_number_with_n_label() {
    let data = parser().parse("Callao N 1231").expect("should parse");
    assert_eq!(data.r#type, AddressType::Simple);
    assert_eq!(data.street_names, vec!["Callao"]);
    assert_eq!(data.door_number_value.as_deref(), Some("1231"));
}

#[test]
fn empty_and_blank_input_never_parses() {
    let parser = parser();
    assert_eq!(parser.parse(""), None);
    assert_eq!(parser.parse("    "), None);
}

#[test]
fn a_bare_number_with_no_street_does_not_parse() {
    assert_eq!(parser().parse("1200"), None);
}

#[test]
fn parsing_is_deterministic() {
    let parser = parser();
    let first = parser.parse("Mitre 1200");
    let second = parser.parse("Mitre 1200");
    assert_eq!(first, second);
}

#[test]
fn surrounding_and_repeated_whitespace_does_not_change_the_result() {
    let parser = parser();
    let canonical = parser.parse("Tucuman 1300").expect("should parse");
    let padded = parser
        .parse("   Tucuman    1300   ")
        .expect("should still parse");
    assert_eq!(canonical, padded);
}

#[test]
fn a_cached_parser_agrees_with_an_uncached_one() {
    let uncached = parser().parse("Tucuman 1300 y Salta");
    let cached_parser = Parser::new_with_cache(Rc::new(StructureCache::new())).unwrap();
    let cached = cached_parser.parse("Tucuman 1300 y Salta");
    assert_eq!(uncached, cached);
}

#[test]
fn the_original_address_text_is_preserved_verbatim() {
    let data = parser().parse("  Tucuman   1300  ").expect("should parse");
    assert_eq!(data.address, "Tucuman   1300");
}
