//! End-to-end tests for parsing configuration documents.
//!
//! Uses fixture files from `tests/fixtures` and a custom class registry
//! alongside the built-in writables.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use bytes::{BufMut, BytesMut};
use pretty_assertions::assert_eq;
use xconf_parser::registry::{boxed, missing_argument};
use xconf_parser::{
    create_default_registry, ClassDescriptor, ClassRegistry, CommitMode, ConfigParserError,
    ConfigProperty, Configuration, ConfigurationParser, ParserOptions, TypeTag, Writable,
};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

#[test]
fn test_core_site_fixture() {
    let registry = create_default_registry();
    let mut conf = Configuration::new();
    let count = ConfigurationParser::new(&registry)
        .parse_file(fixture_path("core-site.xml"), &mut conf)
        .expect("fixture should parse");

    assert_eq!(count, 7);
    assert_eq!(
        conf.into_properties(),
        vec![
            ConfigProperty::new("fs.default.name", "hdfs://namenode:8020"),
            ConfigProperty::new("io.file.buffer.size", "4096"),
            ConfigProperty::new("oozie.job.retries", "AAAAAw=="),
            ConfigProperty::new("oozie.job.label", "BWhlbGxv"),
            ConfigProperty::new("oozie.job.enabled", "AQ=="),
            ConfigProperty::new("oozie.job.payload", "AAAAAmFi"),
            ConfigProperty::new("oozie.job.empty", "AA=="),
        ]
    );
}

#[test]
fn test_object_value_decodes_to_written_bytes() {
    let registry = create_default_registry();
    let mut conf = Configuration::new();
    ConfigurationParser::new(&registry)
        .parse_str(&load_fixture("core-site.xml"), &mut conf)
        .expect("fixture should parse");

    assert_eq!(conf.get_bytes("oozie.job.retries"), Some(vec![0, 0, 0, 3]));
    assert_eq!(
        conf.get_bytes("oozie.job.label"),
        Some(vec![5, b'h', b'e', b'l', b'l', b'o'])
    );
}

#[test]
fn test_bad_root_fails_before_any_write() {
    let registry = create_default_registry();
    let mut sink: HashMap<String, String> = HashMap::new();
    let err = ConfigurationParser::new(&registry)
        .with_options(ParserOptions::default().with_commit_mode(CommitMode::Incremental))
        .parse_file(fixture_path("bad-root.xml"), &mut sink)
        .unwrap_err();

    assert!(matches!(err, ConfigParserError::MalformedDocument { .. }));
    assert!(sink.is_empty());
}

#[test]
fn test_missing_constructor_atomic_vs_incremental() {
    let registry = create_default_registry();
    let xml = load_fixture("missing-constructor.xml");

    let mut atomic = Configuration::new();
    let err = ConfigurationParser::new(&registry)
        .parse_str(&xml, &mut atomic)
        .unwrap_err();
    match err {
        ConfigParserError::ConstructorResolution { class_name, types } => {
            assert_eq!(class_name, "org.apache.hadoop.io.LongWritable");
            assert_eq!(types, vec![TypeTag::Int]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(atomic.is_empty());

    let mut incremental = Configuration::new();
    let result = ConfigurationParser::new(&registry)
        .with_options(ParserOptions::default().with_commit_mode(CommitMode::Incremental))
        .parse_str(&xml, &mut incremental);
    assert!(result.is_err());
    assert_eq!(incremental.get("first"), Some("applied only incrementally"));
    assert_eq!(incremental.get("second"), None);
}

#[test]
fn test_missing_file_is_io_error() {
    let registry = create_default_registry();
    let mut conf = Configuration::new();
    let err = ConfigurationParser::new(&registry)
        .parse_file(fixture_path("does-not-exist.xml"), &mut conf)
        .unwrap_err();
    assert!(matches!(err, ConfigParserError::Io(_)));
}

/// A two-coordinate point written as two big-endian ints.
struct Point {
    x: i32,
    y: i32,
}

impl Writable for Point {
    fn write(&self, out: &mut BytesMut) {
        out.put_i32(self.x);
        out.put_i32(self.y);
    }
}

fn point_registry() -> ClassRegistry {
    let mut registry = create_default_registry();
    registry.register(
        ClassDescriptor::new("com.example.geo.Point")
            .constructor(&[], |_| boxed(Point { x: 0, y: 0 }))
            .constructor(&[TypeTag::Int, TypeTag::Int], |args| {
                let x = args
                    .int_at(0)
                    .ok_or_else(|| missing_argument(0, TypeTag::Int))?;
                let y = args
                    .int_at(1)
                    .ok_or_else(|| missing_argument(1, TypeTag::Int))?;
                boxed(Point { x, y })
            })
            .constructor(&[TypeTag::String], |args| {
                let text = args
                    .string_at(0)
                    .ok_or_else(|| missing_argument(0, TypeTag::String))?;
                let (x, y) = text
                    .split_once(',')
                    .ok_or_else(|| format!("expected 'x,y', got '{text}'"))?;
                let x = x.trim().parse::<i32>().map_err(|e| format!("bad x: {e}"))?;
                let y = y.trim().parse::<i32>().map_err(|e| format!("bad y: {e}"))?;
                boxed(Point { x, y })
            }),
    );
    registry.register(
        ClassDescriptor::abstract_class("com.example.geo.Shape").constructor(&[], |_| {
            boxed(Point { x: 0, y: 0 })
        }),
    );
    registry
}

#[test]
fn test_custom_class_with_two_arguments() {
    let registry = point_registry();
    let xml = r#"<configuration>
        <property>
            <name>origin</name>
            <object class="com.example.geo.Point"/>
        </property>
        <property>
            <name>corner</name>
            <object class="com.example.geo.Point">
                <constructor>
                    <arg type="int">1</arg>
                    <!-- y coordinate -->
                    <arg type="int">2</arg>
                </constructor>
            </object>
        </property>
        <property>
            <name>parsed</name>
            <object class="com.example.geo.Point">
                <constructor><arg type="String">3, 4</arg></constructor>
            </object>
        </property>
    </configuration>"#;

    let mut conf = Configuration::new();
    ConfigurationParser::new(&registry)
        .parse_str(xml, &mut conf)
        .expect("document should parse");

    // An <object/> without children is ignored, so "origin" has no value.
    assert_eq!(conf.get("origin"), None);
    assert_eq!(conf.get_bytes("corner"), Some(vec![0, 0, 0, 1, 0, 0, 0, 2]));
    assert_eq!(conf.get_bytes("parsed"), Some(vec![0, 0, 0, 3, 0, 0, 0, 4]));
}

#[test]
fn test_custom_constructor_failure_is_instantiation_error() {
    let registry = point_registry();
    let xml = r#"<configuration><property><name>p</name>
        <object class="com.example.geo.Point"><constructor><arg type="String">nope</arg></constructor></object>
    </property></configuration>"#;

    let mut conf = Configuration::new();
    let err = ConfigurationParser::new(&registry)
        .parse_str(xml, &mut conf)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "bad conf file: failed to instantiate com.example.geo.Point: expected 'x,y', got 'nope'"
    );
}

#[test]
fn test_abstract_class_cannot_be_built() {
    let registry = point_registry();
    let xml = r#"<configuration><property><name>s</name>
        <object class="com.example.geo.Shape"><constructor/></object>
    </property></configuration>"#;

    let mut conf = Configuration::new();
    let err = ConfigurationParser::new(&registry)
        .parse_str(xml, &mut conf)
        .unwrap_err();
    assert!(matches!(err, ConfigParserError::Instantiation { .. }));
}

#[test]
fn test_unregistered_class_is_rejected() {
    let registry = ClassRegistry::new();
    let xml = r#"<configuration><property><name>p</name>
        <object class="org.apache.hadoop.io.IntWritable"><constructor/></object>
    </property></configuration>"#;

    let mut conf = Configuration::new();
    let err = ConfigurationParser::new(&registry)
        .parse_str(xml, &mut conf)
        .unwrap_err();
    assert!(matches!(err, ConfigParserError::ClassResolution { .. }));
}
