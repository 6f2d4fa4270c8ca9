//! Configuration sinks: where resolved properties are written.

use std::collections::{BTreeMap, HashMap};

use base64::Engine;
use serde::Serialize;

use crate::config::VALUE_ENCODING;
use crate::types::ConfigProperty;

/// A key/value store receiving resolved properties.
pub trait ConfigSink {
    /// Store `value` under `name`, replacing any earlier value.
    fn set(&mut self, name: &str, value: &str);
}

impl ConfigSink for HashMap<String, String> {
    fn set(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

impl ConfigSink for BTreeMap<String, String> {
    fn set(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

impl ConfigSink for Vec<ConfigProperty> {
    fn set(&mut self, name: &str, value: &str) {
        self.push(ConfigProperty::new(name, value));
    }
}

impl<S: ConfigSink + ?Sized> ConfigSink for &mut S {
    fn set(&mut self, name: &str, value: &str) {
        (**self).set(name, value);
    }
}

/// Ordered in-memory configuration store.
///
/// Keys keep the order in which they were first set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Configuration {
    entries: Vec<ConfigProperty>,
}

impl Configuration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Decode an object-valued property back into its serialized bytes.
    ///
    /// Returns `None` if the property is missing or not valid base64.
    #[must_use]
    pub fn get_bytes(&self, name: &str) -> Option<Vec<u8>> {
        let value = self.get(name)?;
        match VALUE_ENCODING.decode(value) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                tracing::debug!(property = %name, error = %err, "Property is not base64");
                None
            }
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigProperty> {
        self.entries.iter()
    }

    #[must_use]
    pub fn into_properties(self) -> Vec<ConfigProperty> {
        self.entries
    }
}

impl ConfigSink for Configuration {
    fn set(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.value = value.to_string(),
            None => self.entries.push(ConfigProperty::new(name, value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_configuration_set_and_get() {
        let mut conf = Configuration::new();
        conf.set("a", "1");
        conf.set("b", "2");
        conf.set("a", "3");

        assert_eq!(conf.get("a"), Some("3"));
        assert_eq!(conf.get("b"), Some("2"));
        assert_eq!(conf.get("c"), None);
        assert_eq!(conf.len(), 2);

        let names: Vec<_> = conf.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_configuration_get_bytes() {
        let mut conf = Configuration::new();
        conf.set("obj", "AAAAKg==");
        conf.set("plain", "not base64!");

        assert_eq!(conf.get_bytes("obj"), Some(vec![0, 0, 0, 42]));
        assert_eq!(conf.get_bytes("plain"), None);
        assert_eq!(conf.get_bytes("missing"), None);
    }

    #[test]
    fn test_configuration_serializes_as_list() {
        let mut conf = Configuration::new();
        conf.set("k", "v");
        let json = serde_json::to_string(&conf).unwrap();
        assert_eq!(json, r#"[{"name":"k","value":"v"}]"#);
    }

    #[test]
    fn test_map_sinks() {
        let mut map: HashMap<String, String> = HashMap::new();
        ConfigSink::set(&mut map, "k", "v");
        assert_eq!(map.get("k").map(String::as_str), Some("v"));

        let mut sorted: BTreeMap<String, String> = BTreeMap::new();
        sorted.set("x", "y");
        assert_eq!(sorted.get("x").map(String::as_str), Some("y"));
    }
}
