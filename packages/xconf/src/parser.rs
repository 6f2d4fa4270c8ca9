//! Document and property walkers.
//!
//! Walks a `<configuration>` document, resolves each `<property>` to a
//! name and value, and writes the results into a [`ConfigSink`].

use std::path::Path;

use roxmltree::{Document, Node};

use crate::builder::ObjectBuilder;
use crate::config::{
    CommitMode, ParserOptions, CLASS_ATTRIBUTE, CONFIGURATION_TAG, NAME_TAG, OBJECT_TAG,
    PROPERTY_TAG, VALUE_TAG,
};
use crate::error::{ConfigParserError, Result};
use crate::registry::ClassRegistry;
use crate::sink::ConfigSink;
use crate::types::ConfigProperty;
use crate::xml::{element_children, first_text, get_attribute, get_tag_name, has_child_nodes};

/// Parser for XML configuration documents.
#[derive(Debug, Clone)]
pub struct ConfigurationParser<'r> {
    builder: ObjectBuilder<'r>,
    options: ParserOptions,
}

impl<'r> ConfigurationParser<'r> {
    /// Create a parser that builds objects from `registry`.
    #[must_use]
    pub fn new(registry: &'r ClassRegistry) -> Self {
        Self {
            builder: ObjectBuilder::new(registry),
            options: ParserOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    /// `Io` if the file cannot be read, otherwise as [`Self::parse_str`].
    pub fn parse_file(
        &self,
        path: impl AsRef<Path>,
        sink: &mut impl ConfigSink,
    ) -> Result<usize> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Reading configuration file");
        let xml = std::fs::read_to_string(path)?;
        self.parse_str(&xml, sink)
    }

    /// Parse configuration XML text.
    ///
    /// # Errors
    /// `Xml` if the text is not well-formed, otherwise as
    /// [`Self::parse_document`].
    pub fn parse_str(&self, xml: &str, sink: &mut impl ConfigSink) -> Result<usize> {
        let doc = Document::parse(xml)?;
        self.parse_document(&doc, sink)
    }

    /// Walk a document and write every resolved property into `sink`.
    ///
    /// In [`CommitMode::Atomic`] nothing is written unless the whole
    /// document resolves. In [`CommitMode::Incremental`] properties are
    /// written as they resolve.
    ///
    /// # Returns
    /// The number of properties written.
    ///
    /// # Errors
    /// `MalformedDocument` if the root is not `<configuration>` or a child
    /// is not `<property>`, plus any object building failure.
    pub fn parse_document(
        &self,
        doc: &Document<'_>,
        sink: &mut impl ConfigSink,
    ) -> Result<usize> {
        let root = doc.root_element();
        check_tag(root, CONFIGURATION_TAG)?;

        match self.options.commit_mode {
            CommitMode::Atomic => {
                let properties = self.parse_properties(root)?;
                for property in &properties {
                    sink.set(&property.name, &property.value);
                }
                tracing::debug!(count = properties.len(), "Committed configuration");
                Ok(properties.len())
            }
            CommitMode::Incremental => {
                let mut count = 0;
                for node in element_children(root) {
                    if let Some(property) = self.parse_property(node)? {
                        sink.set(&property.name, &property.value);
                        count += 1;
                    }
                }
                Ok(count)
            }
        }
    }

    /// Resolve all `<property>` children of a `<configuration>` element
    /// without writing them anywhere.
    ///
    /// # Errors
    /// As [`Self::parse_property`], for the first failing property.
    pub fn parse_properties(&self, configuration: Node<'_, '_>) -> Result<Vec<ConfigProperty>> {
        let mut properties = Vec::new();
        for node in element_children(configuration) {
            if let Some(property) = self.parse_property(node)? {
                properties.push(property);
            }
        }
        Ok(properties)
    }

    /// Resolve one `<property>` element.
    ///
    /// Returns `Ok(None)` when the property has no name or no value. A
    /// `<name>` holding only whitespace is present and yields the empty key.
    /// Later `<value>`/`<object>` children overwrite earlier ones.
    ///
    /// # Errors
    /// `MalformedDocument` if the element is not `<property>`, plus any
    /// object building failure.
    pub fn parse_property(&self, element: Node<'_, '_>) -> Result<Option<ConfigProperty>> {
        check_tag(element, PROPERTY_TAG)?;

        let mut name: Option<String> = None;
        let mut value: Option<String> = None;

        for field in element_children(element) {
            match get_tag_name(field) {
                NAME_TAG => {
                    if let Some(text) = first_text(field) {
                        name = Some(text.trim().to_string());
                    }
                }
                VALUE_TAG => {
                    if let Some(text) = first_text(field) {
                        value = Some(text.to_string());
                    }
                }
                OBJECT_TAG if has_child_nodes(field) => {
                    let class_name = get_attribute(field, CLASS_ATTRIBUTE).unwrap_or_default();
                    value = Some(self.builder.build(class_name, field)?);
                }
                _ => {}
            }
        }

        match (name, value) {
            (Some(name), Some(value)) => {
                tracing::trace!(property = %name, "Resolved property");
                Ok(Some(ConfigProperty { name, value }))
            }
            (name, _) => {
                tracing::debug!(property = ?name, "Skipping property without name or value");
                Ok(None)
            }
        }
    }
}

fn check_tag(node: Node<'_, '_>, expected: &str) -> Result<()> {
    let found = get_tag_name(node);
    if found == expected {
        Ok(())
    } else {
        Err(ConfigParserError::MalformedDocument {
            expected: expected.to_string(),
            found: found.to_string(),
        })
    }
}
