//! Object builder: turns an `<object class="...">` element into a value.
//!
//! ```xml
//! <object class="org.apache.hadoop.io.IntWritable">
//!   <constructor>
//!     <arg type="int">42</arg>
//!   </constructor>
//! </object>
//! ```

use roxmltree::Node;

use crate::arguments::ArgumentList;
use crate::cast::cast_to;
use crate::config::{ARG_TAG, CONSTRUCTOR_TAG, TYPE_ATTRIBUTE};
use crate::error::Result;
use crate::registry::{ClassDescriptor, ClassRegistry};
use crate::writable::{to_base64, Writable};
use crate::xml::{element_children, get_attribute, get_tag_name, has_child_nodes, text_content};

/// Builds objects from registered classes and serializes them.
#[derive(Debug, Clone, Copy)]
pub struct ObjectBuilder<'r> {
    registry: &'r ClassRegistry,
}

impl<'r> ObjectBuilder<'r> {
    /// Create a builder over the given registry.
    #[must_use]
    pub fn new(registry: &'r ClassRegistry) -> Self {
        Self { registry }
    }

    /// Build the object described by `object` and return it as base64.
    ///
    /// # Arguments
    /// * `class_name` - Value of the element's `class` attribute
    /// * `object` - The `<object>` element
    ///
    /// # Errors
    /// Any class, constructor, cast or instantiation failure.
    pub fn build(&self, class_name: &str, object: Node<'_, '_>) -> Result<String> {
        let instance = self.instantiate(class_name, object)?;
        let encoded = to_base64(instance.as_ref());
        tracing::debug!(class = %class_name, encoded_len = encoded.len(), "Built object value");
        Ok(encoded)
    }

    /// Instantiate the object described by `object` without serializing it.
    ///
    /// Every element child produces an object and the last one wins. A
    /// non-empty `<constructor>` child selects the constructor matching
    /// its argument types; any other child, or no element child at all,
    /// uses the no-argument constructor.
    ///
    /// # Errors
    /// Any class, constructor, cast or instantiation failure.
    pub fn instantiate(
        &self,
        class_name: &str,
        object: Node<'_, '_>,
    ) -> Result<Box<dyn Writable>> {
        let class = self.registry.resolve(class_name)?;

        let mut instance: Option<Box<dyn Writable>> = None;
        for child in element_children(object) {
            if instance.is_some() {
                tracing::debug!(
                    class = %class_name,
                    tag = %get_tag_name(child),
                    "Multiple object definitions, later one wins"
                );
            }
            instance = Some(self.instantiate_from(class, child)?);
        }

        match instance {
            Some(instance) => Ok(instance),
            None => class.instantiate(&ArgumentList::new()),
        }
    }

    fn instantiate_from(
        &self,
        class: &ClassDescriptor,
        child: Node<'_, '_>,
    ) -> Result<Box<dyn Writable>> {
        if get_tag_name(child) == CONSTRUCTOR_TAG && has_child_nodes(child) {
            let args = self.parse_args(child)?;
            tracing::trace!(class = %class.name(), types = ?args.types(), "Using typed constructor");
            class.instantiate(&args)
        } else {
            class.instantiate(&ArgumentList::new())
        }
    }

    /// Parse the `<arg>` children of a `<constructor>` element.
    ///
    /// Arguments without a `type` attribute (or with an empty one) are
    /// skipped. Elements other than `<arg>` are ignored.
    ///
    /// # Errors
    /// * `UnsupportedType` for an unknown `type`
    /// * `ValueFormat` for text that does not parse as the declared type
    pub fn parse_args(&self, constructor: Node<'_, '_>) -> Result<ArgumentList> {
        let mut args = ArgumentList::new();

        for arg in element_children(constructor) {
            let tag = get_tag_name(arg);
            if tag != ARG_TAG {
                tracing::warn!(tag = %tag, "Ignoring unexpected element in <constructor>");
                continue;
            }

            let type_name = get_attribute(arg, TYPE_ATTRIBUTE).unwrap_or_default();
            if type_name.is_empty() {
                tracing::debug!(position = args.len(), "Skipping <arg> without a type");
                continue;
            }

            args.push(cast_to(&text_content(arg), type_name)?);
        }

        Ok(args)
    }
}
