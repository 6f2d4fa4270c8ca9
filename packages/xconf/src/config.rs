//! Configuration constants, parser options and validation functions.

use std::sync::LazyLock;

use base64::engine::general_purpose::STANDARD;
use base64::engine::GeneralPurpose;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigParserError, Result};

/// Root element of a configuration document.
pub const CONFIGURATION_TAG: &str = "configuration";

/// Element holding one property.
pub const PROPERTY_TAG: &str = "property";

/// Property key element.
pub const NAME_TAG: &str = "name";

/// Literal property value element.
pub const VALUE_TAG: &str = "value";

/// Object-valued property element.
pub const OBJECT_TAG: &str = "object";

/// Attribute on `<object>` naming the class to build.
pub const CLASS_ATTRIBUTE: &str = "class";

/// Element listing constructor arguments.
pub const CONSTRUCTOR_TAG: &str = "constructor";

/// Single constructor argument element.
pub const ARG_TAG: &str = "arg";

/// Attribute on `<arg>` declaring its type.
pub const TYPE_ATTRIBUTE: &str = "type";

/// Base64 flavour used for object-valued properties (standard alphabet, padded).
pub const VALUE_ENCODING: GeneralPurpose = STANDARD;

/// Java-style qualified class name: dot-separated identifiers, `$` allowed
/// for nested classes.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CLASS_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$").expect("valid regex")
});

/// Validate a class name before looking it up.
///
/// # Returns
/// * `Ok(())` if the name is a well-formed qualified name
/// * `Err(ConfigParserError::ClassResolution)` otherwise, including for an
///   empty or missing `class` attribute
///
/// # Examples
/// ```
/// use xconf_parser::config::validate_class_name;
///
/// assert!(validate_class_name("org.apache.hadoop.io.Text").is_ok());
/// assert!(validate_class_name("Outer$Inner").is_ok());
/// assert!(validate_class_name("").is_err());
/// assert!(validate_class_name("org..Text").is_err());
/// ```
pub fn validate_class_name(class_name: &str) -> Result<()> {
    if CLASS_NAME_PATTERN.is_match(class_name) {
        Ok(())
    } else {
        Err(ConfigParserError::ClassResolution {
            class_name: class_name.to_string(),
        })
    }
}

/// When resolved properties are written into the sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitMode {
    /// Collect all properties and write them only after the whole document
    /// parsed successfully. A failing document leaves the sink untouched.
    #[default]
    Atomic,

    /// Write each property as soon as it resolves. A failure part-way
    /// leaves the properties before it in the sink.
    Incremental,
}

/// Options controlling a parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    pub commit_mode: CommitMode,
}

impl ParserOptions {
    #[must_use]
    pub fn with_commit_mode(mut self, commit_mode: CommitMode) -> Self {
        self.commit_mode = commit_mode;
        self
    }
}
