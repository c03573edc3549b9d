//! Ordered HTML attribute maps.
//!
//! Attribute order is the order attributes were first set, so rendered
//! markup is reproducible. Values are plain strings, space-joined lists
//! (the `class` convention), or booleans.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single attribute value.
///
/// Serializes untagged: `"main"`, `["nav", "active"]`, and `true` all map
/// directly to and from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Plain value, rendered as `name="value"`.
    Text(String),
    /// Multi-valued attribute (e.g. CSS classes), rendered space-joined.
    /// An empty list counts as absent and renders nothing.
    List(Vec<String>),
    /// Boolean-valued attribute. Tracked but never rendered.
    Flag(bool),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(values: Vec<String>) -> Self {
        AttrValue::List(values)
    }
}

/// Insertion-ordered attribute map for an HTML element.
///
/// Setting an existing attribute updates it in place without changing its
/// position, so output stays deterministic under reconfiguration. No value
/// is escaped; this crate composes markup from caller-trusted strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any existing value for the same name.
    pub fn set(&mut self, name: &str, value: impl Into<AttrValue>) {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
    }

    /// Append a class to the `class` attribute, creating it if absent.
    ///
    /// A plain-text `class` value is converted to a list first, keeping the
    /// existing text as the leading entry.
    pub fn add_class(&mut self, class: &str) {
        match self.entries.iter_mut().find(|(n, _)| n == "class") {
            Some((_, AttrValue::List(classes))) => classes.push(class.to_string()),
            Some(entry) => {
                let mut classes = match &entry.1 {
                    AttrValue::Text(existing) if !existing.is_empty() => vec![existing.clone()],
                    _ => Vec::new(),
                };
                classes.push(class.to_string());
                entry.1 = AttrValue::List(classes);
            }
            None => self
                .entries
                .push(("class".to_string(), AttrValue::List(vec![class.to_string()]))),
        }
    }

    /// Look up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Number of attributes set, including ones that never render.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the attribute list with one leading space per attribute,
    /// e.g. `` id="main" class="nav active"``.
    ///
    /// Boolean-valued and absent attributes are omitted from output.
    /// Returns an empty string when nothing renders.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.entries {
            match value {
                AttrValue::Text(text) => {
                    out.push_str(&format!(" {name}=\"{text}\""));
                }
                AttrValue::List(values) if !values.is_empty() => {
                    let joined = values.join(" ");
                    out.push_str(&format!(" {name}=\"{joined}\""));
                }
                AttrValue::List(_) | AttrValue::Flag(_) => {}
            }
        }
        out
    }
}

impl Serialize for Attributes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AttributesVisitor;

        impl<'de> Visitor<'de> for AttributesVisitor {
            type Value = Attributes;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of attribute names to values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, value)) = access.next_entry::<String, AttrValue>()? {
                    entries.push((name, value));
                }
                Ok(Attributes { entries })
            }
        }

        deserializer.deserialize_map(AttributesVisitor)
    }
}
