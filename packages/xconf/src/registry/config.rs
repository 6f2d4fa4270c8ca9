//! Registry configuration for the built-in Hadoop writables.

use super::builtins::{
    BooleanWritable, BytesWritable, DoubleWritable, FloatWritable, IntWritable, LongWritable,
    NullWritable, ShortWritable, Text, VIntWritable, VLongWritable, BOOLEAN_WRITABLE_CLASS,
    BYTES_WRITABLE_CLASS, DOUBLE_WRITABLE_CLASS, FLOAT_WRITABLE_CLASS, INT_WRITABLE_CLASS,
    LONG_WRITABLE_CLASS, NULL_WRITABLE_CLASS, SHORT_WRITABLE_CLASS, TEXT_CLASS,
    VINT_WRITABLE_CLASS, VLONG_WRITABLE_CLASS,
};
use super::class::{boxed, missing_argument, ClassDescriptor};
use super::core::ClassRegistry;
use crate::types::TypeTag;

/// Create a class registry with the built-in writables.
///
/// Each class offers its no-argument constructor plus the single-value
/// constructor of its Hadoop counterpart. `NullWritable` is a singleton
/// whose constructor is private, so building it fails with an access error.
#[must_use]
pub fn create_default_registry() -> ClassRegistry {
    let mut registry = ClassRegistry::new();

    // Text
    registry.register(
        ClassDescriptor::new(TEXT_CLASS)
            .constructor(&[], |_| boxed(Text::default()))
            .constructor(&[TypeTag::String], |args| {
                let text = args
                    .string_at(0)
                    .ok_or_else(|| missing_argument(0, TypeTag::String))?;
                boxed(Text::new(text))
            })
            .constructor(&[TypeTag::ByteArray], |args| {
                let bytes = args
                    .bytes_at(0)
                    .ok_or_else(|| missing_argument(0, TypeTag::ByteArray))?;
                boxed(Text::from_bytes(bytes))
            }),
    );

    registry.register(
        ClassDescriptor::new(BYTES_WRITABLE_CLASS)
            .constructor(&[], |_| boxed(BytesWritable::default()))
            .constructor(&[TypeTag::ByteArray], |args| {
                let bytes = args
                    .bytes_at(0)
                    .ok_or_else(|| missing_argument(0, TypeTag::ByteArray))?;
                boxed(BytesWritable::new(bytes))
            }),
    );

    // Fixed and variable width numbers
    registry.register(
        ClassDescriptor::new(INT_WRITABLE_CLASS)
            .constructor(&[], |_| boxed(IntWritable::default()))
            .constructor(&[TypeTag::Int], |args| {
                let value = args
                    .int_at(0)
                    .ok_or_else(|| missing_argument(0, TypeTag::Int))?;
                boxed(IntWritable::new(value))
            }),
    );
    registry.register(
        ClassDescriptor::new(LONG_WRITABLE_CLASS)
            .constructor(&[], |_| boxed(LongWritable::default()))
            .constructor(&[TypeTag::Long], |args| {
                let value = args
                    .long_at(0)
                    .ok_or_else(|| missing_argument(0, TypeTag::Long))?;
                boxed(LongWritable::new(value))
            }),
    );
    registry.register(
        ClassDescriptor::new(SHORT_WRITABLE_CLASS)
            .constructor(&[], |_| boxed(ShortWritable::default()))
            .constructor(&[TypeTag::Short], |args| {
                let value = args
                    .short_at(0)
                    .ok_or_else(|| missing_argument(0, TypeTag::Short))?;
                boxed(ShortWritable::new(value))
            }),
    );
    registry.register(
        ClassDescriptor::new(FLOAT_WRITABLE_CLASS)
            .constructor(&[], |_| boxed(FloatWritable::default()))
            .constructor(&[TypeTag::Float], |args| {
                let value = args
                    .float_at(0)
                    .ok_or_else(|| missing_argument(0, TypeTag::Float))?;
                boxed(FloatWritable::new(value))
            }),
    );
    registry.register(
        ClassDescriptor::new(DOUBLE_WRITABLE_CLASS)
            .constructor(&[], |_| boxed(DoubleWritable::default()))
            .constructor(&[TypeTag::Double], |args| {
                let value = args
                    .double_at(0)
                    .ok_or_else(|| missing_argument(0, TypeTag::Double))?;
                boxed(DoubleWritable::new(value))
            }),
    );
    registry.register(
        ClassDescriptor::new(BOOLEAN_WRITABLE_CLASS)
            .constructor(&[], |_| boxed(BooleanWritable::default()))
            .constructor(&[TypeTag::Boolean], |args| {
                let value = args
                    .bool_at(0)
                    .ok_or_else(|| missing_argument(0, TypeTag::Boolean))?;
                boxed(BooleanWritable::new(value))
            }),
    );
    registry.register(
        ClassDescriptor::new(VINT_WRITABLE_CLASS)
            .constructor(&[], |_| boxed(VIntWritable::default()))
            .constructor(&[TypeTag::Int], |args| {
                let value = args
                    .int_at(0)
                    .ok_or_else(|| missing_argument(0, TypeTag::Int))?;
                boxed(VIntWritable::new(value))
            }),
    );
    registry.register(
        ClassDescriptor::new(VLONG_WRITABLE_CLASS)
            .constructor(&[], |_| boxed(VLongWritable::default()))
            .constructor(&[TypeTag::Long], |args| {
                let value = args
                    .long_at(0)
                    .ok_or_else(|| missing_argument(0, TypeTag::Long))?;
                boxed(VLongWritable::new(value))
            }),
    );

    // Singleton, not constructible from configuration
    registry.register(
        ClassDescriptor::new(NULL_WRITABLE_CLASS).private_constructor(&[], |_| boxed(NullWritable)),
    );

    registry
}
