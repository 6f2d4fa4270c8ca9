//! Class registry mapping class names to descriptors.

use std::collections::{HashMap, HashSet};

use super::class::ClassDescriptor;
use crate::config::validate_class_name;
use crate::error::{ConfigParserError, Result};

/// Registry of the classes an `<object>` element may instantiate.
///
/// Only registered classes can be built; there is no loading by name
/// beyond this table.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: HashMap<String, ClassDescriptor>,
}

impl ClassRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    /// Register a class, replacing any earlier class of the same name.
    pub fn register(&mut self, class: ClassDescriptor) {
        tracing::trace!(class = %class.name(), "Registering class");
        self.classes.insert(class.name().to_string(), class);
    }

    /// Resolve a class by name.
    ///
    /// # Errors
    /// Returns `ClassResolution` if the name is malformed or not registered.
    pub fn resolve(&self, class_name: &str) -> Result<&ClassDescriptor> {
        validate_class_name(class_name)?;
        self.classes
            .get(class_name)
            .ok_or_else(|| ConfigParserError::ClassResolution {
                class_name: class_name.to_string(),
            })
    }

    /// Check if a class is registered.
    #[must_use]
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes.contains_key(class_name)
    }

    /// Return set of all registered class names.
    #[must_use]
    pub fn registered_classes(&self) -> HashSet<&str> {
        self.classes.keys().map(|s| s.as_str()).collect()
    }

    /// Registered classes sorted by name.
    #[must_use]
    pub fn classes(&self) -> Vec<&ClassDescriptor> {
        let mut classes: Vec<_> = self.classes.values().collect();
        classes.sort_by(|a, b| a.name().cmp(b.name()));
        classes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::class::boxed;
    use crate::registry::builtins::IntWritable;

    #[test]
    fn test_registry_register_and_resolve() {
        let mut registry = ClassRegistry::new();
        registry.register(ClassDescriptor::new("org.example.A").constructor(&[], |_| {
            boxed(IntWritable::default())
        }));

        assert!(registry.has_class("org.example.A"));
        assert_eq!(registry.resolve("org.example.A").unwrap().name(), "org.example.A");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_unknown_class() {
        let registry = ClassRegistry::new();
        assert!(matches!(
            registry.resolve("org.example.Missing"),
            Err(ConfigParserError::ClassResolution { .. })
        ));
    }

    #[test]
    fn test_registry_rejects_malformed_name() {
        let mut registry = ClassRegistry::new();
        registry.register(ClassDescriptor::new("bad name"));
        assert!(registry.has_class("bad name"));
        assert!(registry.resolve("bad name").is_err());
        assert!(registry.resolve("").is_err());
    }

    #[test]
    fn test_classes_sorted() {
        let mut registry = ClassRegistry::new();
        registry.register(ClassDescriptor::new("b.B"));
        registry.register(ClassDescriptor::new("a.A"));
        let names: Vec<_> = registry.classes().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["a.A", "b.B"]);
        assert_eq!(registry.registered_classes().len(), 2);
    }
}
