//! Error types for the configuration parser.
//!
//! Every failure aborts the current parse and carries enough context
//! (element, class name, attempted types) to locate the offending input.

use thiserror::Error;

use crate::types::TypeTag;

/// Render a constructor signature such as `(int, String)`.
pub(crate) fn format_signature(types: &[TypeTag]) -> String {
    let names: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
    format!("({})", names.join(", "))
}

/// Main error type for the parser library.
#[derive(Debug, Error)]
pub enum ConfigParserError {
    /// Root or property element has the wrong tag.
    #[error("bad conf file: expected <{expected}>, found <{found}>")]
    MalformedDocument { expected: String, found: String },

    /// Type attribute names a type outside the permitted set.
    #[error("bad conf file: '{type_name}' is not a permitted type")]
    UnsupportedType { type_name: String },

    /// Text could not be parsed as the declared type.
    #[error("bad conf file: cannot read '{value}' as {type_tag}: {reason}")]
    ValueFormat {
        value: String,
        type_tag: TypeTag,
        reason: String,
    },

    /// Class name is not registered (or is not a valid class name).
    #[error("bad conf file: class '{class_name}' not found")]
    ClassResolution { class_name: String },

    /// No constructor with the exact ordered parameter types.
    #[error("bad conf file: constructor for {class_name} does not exist with types {}", format_signature(.types))]
    ConstructorResolution {
        class_name: String,
        types: Vec<TypeTag>,
    },

    /// Matched constructor is not public.
    #[error("bad conf file: compatible constructor for {class_name}{} is not public", format_signature(.types))]
    Access {
        class_name: String,
        types: Vec<TypeTag>,
    },

    /// Class is abstract or its constructor failed.
    #[error("bad conf file: failed to instantiate {class_name}: {reason}")]
    Instantiation { class_name: String, reason: String },

    /// Argument list index out of range.
    #[error("argument index {index} out of range for length {len}")]
    ArgumentIndex { index: usize, len: usize },

    /// XML tree could not be built or traversed.
    #[error("XML parsing failed: {0}")]
    Xml(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering parsed properties failed.
    #[error("Output serialization failed: {0}")]
    OutputSerialization(String),
}

impl From<serde_json::Error> for ConfigParserError {
    fn from(err: serde_json::Error) -> Self {
        Self::OutputSerialization(err.to_string())
    }
}

impl From<serde_yaml_ng::Error> for ConfigParserError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::OutputSerialization(err.to_string())
    }
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ConfigParserError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_malformed_document_display() {
        let err = ConfigParserError::MalformedDocument {
            expected: "configuration".to_string(),
            found: "config".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "bad conf file: expected <configuration>, found <config>"
        );
    }

    #[test]
    fn test_constructor_resolution_lists_types() {
        let err = ConfigParserError::ConstructorResolution {
            class_name: "org.example.Point".to_string(),
            types: vec![TypeTag::Int, TypeTag::String],
        };
        assert_eq!(
            err.to_string(),
            "bad conf file: constructor for org.example.Point does not exist with types (int, String)"
        );
    }

    #[test]
    fn test_access_display_empty_signature() {
        let err = ConfigParserError::Access {
            class_name: "org.example.Hidden".to_string(),
            types: vec![],
        };
        assert_eq!(
            err.to_string(),
            "bad conf file: compatible constructor for org.example.Hidden() is not public"
        );
    }

    #[test]
    fn test_unsupported_type_display() {
        let err = ConfigParserError::UnsupportedType {
            type_name: "Integer".to_string(),
        };
        assert!(err.to_string().contains("'Integer' is not a permitted type"));
    }
}
