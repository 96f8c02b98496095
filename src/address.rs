//! The result model: [AddressData] and its two normalizing accessors, grounded directly in
//! `AddressData.to_dict()` / `normalized_door_number_value()` / `normalized_door_number_unit()`
//! from the original implementation.
//!
//! Unlike the original, a failed parse is never represented as an `AddressData` with
//! `type: "none"` — the facade returns `Option<AddressData>` instead, so every value of this
//! type describes a real, successfully disambiguated address.

use crate::error::AddressDataError;
use fancy_regex::Regex;
use once_cell::sync::Lazy;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// The three address shapes the grammar recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressType {
    Simple,
    Intersection,
    Between,
}

impl AddressType {
    pub fn as_str(self) -> &'static str {
        match self {
            AddressType::Simple => "simple",
            AddressType::Intersection => "intersection",
            AddressType::Between => "between",
        }
    }

    pub fn parse(label: &str) -> Result<Self, AddressDataError> {
        match label {
            "simple" => Ok(AddressType::Simple),
            "intersection" => Ok(AddressType::Intersection),
            "between" => Ok(AddressType::Between),
            other => Err(AddressDataError(other.to_string())),
        }
    }
}

impl Serialize for AddressType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The door number's numeric value, normalized to either an integer or a decimal. Serializes
/// as a bare JSON number, matching the original's untyped numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DoorNumberValue {
    Int(i64),
    Float(f64),
}

impl Serialize for DoorNumberValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DoorNumberValue::Int(value) => serializer.serialize_i64(*value),
            DoorNumberValue::Float(value) => serializer.serialize_f64(*value),
        }
    }
}

static DECIMAL_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+[,.]\d+").expect("decimal door-number pattern is valid"));
static INT_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("integer door-number pattern is valid"));
static KM_UNIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)km|kil(o|ó)metro").expect("km unit pattern is valid"));

/// Extracted components of a successfully parsed and disambiguated address.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressData {
    pub address: String,
    pub street_names: Vec<String>,
    pub door_number_value: Option<String>,
    pub door_number_unit: Option<String>,
    pub floor: Option<String>,
    pub r#type: AddressType,
}

impl AddressData {
    pub fn new(
        address: impl Into<String>,
        street_names: Vec<String>,
        door_number_value: Option<String>,
        door_number_unit: Option<String>,
        floor: Option<String>,
        r#type: &str,
    ) -> Result<Self, AddressDataError> {
        Ok(Self {
            address: address.into(),
            street_names,
            door_number_value,
            door_number_unit,
            floor,
            r#type: AddressType::parse(r#type)?,
        })
    }

    /// The door number's value as a typed number, or `None` if there is no door number or its
    /// text doesn't contain a recognizable one (e.g. it's "s/n").
    pub fn normalized_door_number_value(&self) -> Option<DoorNumberValue> {
        let raw = self.door_number_value.as_deref()?;

        if let Ok(Some(m)) = DECIMAL_VALUE.find(raw) {
            let as_dot = m.as_str().replace(',', ".");
            return as_dot.parse().ok().map(DoorNumberValue::Float);
        }

        if let Ok(Some(m)) = INT_VALUE.find(raw) {
            return m.as_str().parse().ok().map(DoorNumberValue::Int);
        }

        None
    }

    /// `Some("km")` when the door number is expressed as a route kilometer marker, `None`
    /// otherwise (there is only one recognized unit, so this is effectively a boolean test).
    pub fn normalized_door_number_unit(&self) -> Option<String> {
        let raw = self.door_number_unit.as_deref()?;
        KM_UNIT
            .is_match(raw)
            .ok()
            .filter(|&matched| matched)
            .map(|_| "km".to_string())
    }
}

impl Serialize for AddressData {
    /// Serializes `street_names`, `door_number`, `floor` and `type` only — `address` is the
    /// caller-supplied input, not an extracted component, and is never part of this shape.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct DoorNumber<'a> {
            value: Option<&'a str>,
            unit: Option<&'a str>,
        }

        let mut state = serializer.serialize_struct("AddressData", 4)?;
        state.serialize_field("street_names", &self.street_names)?;
        state.serialize_field(
            "door_number",
            &DoorNumber {
                value: self.door_number_value.as_deref(),
                unit: self.door_number_unit.as_deref(),
            },
        )?;
        state.serialize_field("floor", &self.floor)?;
        state.serialize_field("type", &self.r#type)?;
        state.end()
    }
}

#[cfg(test)]
mod __tests__ {
    use super::*;

    #[test]
    fn rejects_unknown_type() {
        let err = AddressData::new("x", vec![], None, None, None, "bogus").unwrap_err();
        assert_eq!(err.0, "bogus");
    }

    #[test]
    fn normalizes_plain_integer_value() {
        let data = AddressData::new("x", vec![], Some("1300".into()), None, None, "simple").unwrap();
        assert_eq!(data.normalized_door_number_value(), Some(DoorNumberValue::Int(1300)));
    }

    #[test]
    fn normalizes_decimal_value_with_comma() {
        let data =
            AddressData::new("x", vec![], Some("1,5".into()), None, None, "simple").unwrap();
        assert_eq!(data.normalized_door_number_value(), Some(DoorNumberValue::Float(1.5)));
    }

    #[test]
    fn non_numeric_value_normalizes_to_none() {
        let data = AddressData::new("x", vec![], Some("s/n".into()), None, None, "simple").unwrap();
        assert_eq!(data.normalized_door_number_value(), None);
    }

    #[test]
    fn km_unit_normalizes_to_km() {
        let data =
            AddressData::new("x", vec![], None, Some("kilometro".into()), None, "simple").unwrap();
        assert_eq!(data.normalized_door_number_unit(), Some("km".to_string()));
    }

    #[test]
    fn non_km_unit_normalizes_to_none() {
        let data = AddressData::new("x", vec![], None, Some("nope".into()), None, "simple").unwrap();
        assert_eq!(data.normalized_door_number_unit(), None);
    }

    #[test]
    fn serializes_to_the_expected_nested_shape() {
        let data = AddressData::new(
            "Tucuman 1300",
            vec!["Tucuman".into()],
            Some("1300".into()),
            None,
            None,
            "simple",
        )
        .unwrap();
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["address"], serde_json::Value::Null, "address is not part of the serialized shape");
        assert_eq!(value["street_names"][0], "Tucuman");
        assert_eq!(value["door_number"]["value"], "1300");
        assert_eq!(value["door_number"]["unit"], serde_json::Value::Null);
        assert_eq!(value["type"], "simple");
    }
}
