//! xconf-parser - Parse XML configuration documents into a key/value store.
//!
//! A property's value is either literal text or an object built from a
//! registered class and typed constructor arguments, serialized to bytes
//! and base64-encoded.
//!
//! # Example
//!
//! ```
//! use xconf_parser::{create_default_registry, Configuration, ConfigurationParser};
//!
//! let xml = r#"
//! <configuration>
//!   <property><name>greeting</name><value>hello</value></property>
//!   <property>
//!     <name>answer</name>
//!     <object class="org.apache.hadoop.io.IntWritable">
//!       <constructor><arg type="int">42</arg></constructor>
//!     </object>
//!   </property>
//! </configuration>"#;
//!
//! let registry = create_default_registry();
//! let mut conf = Configuration::new();
//! ConfigurationParser::new(&registry).parse_str(xml, &mut conf).unwrap();
//!
//! assert_eq!(conf.get("greeting"), Some("hello"));
//! assert_eq!(conf.get("answer"), Some("AAAAKg=="));
//! ```
//!
//! # Architecture
//!
//! - [`cast`]: text to typed value conversion
//! - [`arguments`]: typed constructor argument list
//! - [`writable`]: binary serialization contract and base64 encoding
//! - [`registry`]: classes, constructor signatures and built-in writables
//! - [`builder`]: `<object>` element to serialized value
//! - [`parser`]: document and property walkers
//! - [`sink`]: configuration stores receiving the properties
//! - [`config`]: tag names, options and validation
//! - [`types`]: core data types
//! - [`error`]: error types and Result alias
//! - [`xml`]: XML utilities
//! - [`cli`]: command-line interface

pub mod arguments;
pub mod builder;
pub mod cast;
pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod registry;
pub mod sink;
pub mod types;
pub mod writable;
pub mod xml;

// Re-export main entry points
pub use builder::ObjectBuilder;
pub use parser::ConfigurationParser;
pub use registry::{create_default_registry, ClassDescriptor, ClassRegistry};

// Re-export commonly used items
pub use arguments::{ArgumentList, TypedArgument};
pub use cast::cast_to;
pub use config::{CommitMode, ParserOptions};
pub use error::{ConfigParserError, Result};
pub use sink::{ConfigSink, Configuration};
pub use types::{ArgValue, ConfigProperty, TypeTag};
pub use writable::Writable;
