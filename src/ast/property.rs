use super::Spanned;
use crate::span::Span;

/// A polymorphic property value: one variant per token kind it was lexed
/// from. The validator pattern-matches this; it never inspects a runtime
/// type string, and the parser never coerces between variants.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PropertyValue {
    String(String),
    Number(f64),
    Percent(f64),
    Duration(String),
    Boolean(bool),
    Identifier(String),
    Hex(String),
    Array(Vec<String>),
}

impl PropertyValue {
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            PropertyValue::Identifier(s) | PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) | PropertyValue::Percent(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_hex(&self) -> Option<&str> {
        match self {
            PropertyValue::Hex(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[String]> {
        match self {
            PropertyValue::Array(items) => Some(items),
            _ => None,
        }
    }
}

/// A `key: value` assignment inside a declaration body.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
    pub span: Span,
}

impl Spanned for Property {
    fn span(&self) -> Span {
        self.span
    }
}

/// Find the first property named `key` whose value is an `Identifier` or
/// `String`. Duplicate keys are not coalesced — the first match wins.
pub fn get_identifier<'a>(properties: &'a [Property], key: &str) -> Option<&'a str> {
    properties
        .iter()
        .find(|p| p.key == key && p.value.as_identifier().is_some())
        .and_then(|p| p.value.as_identifier())
}

/// Find the first property named `key`, regardless of its value's variant.
pub fn get<'a>(properties: &'a [Property], key: &str) -> Option<&'a Property> {
    properties.iter().find(|p| p.key == key)
}

/// All properties named `key`, in source order.
pub fn get_all<'a>(properties: &'a [Property], key: &str) -> Vec<&'a Property> {
    properties.iter().filter(|p| p.key == key).collect()
}
