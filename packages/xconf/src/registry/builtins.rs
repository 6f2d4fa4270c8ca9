//! Built-in writables with Hadoop-compatible binary layouts.
//!
//! Each type writes exactly what its `org.apache.hadoop.io` counterpart
//! writes, so values produced here can be read back by Hadoop.

use bytes::{BufMut, BytesMut};

use crate::writable::{write_vint, write_vlong, Writable};

pub const TEXT_CLASS: &str = "org.apache.hadoop.io.Text";
pub const INT_WRITABLE_CLASS: &str = "org.apache.hadoop.io.IntWritable";
pub const LONG_WRITABLE_CLASS: &str = "org.apache.hadoop.io.LongWritable";
pub const SHORT_WRITABLE_CLASS: &str = "org.apache.hadoop.io.ShortWritable";
pub const FLOAT_WRITABLE_CLASS: &str = "org.apache.hadoop.io.FloatWritable";
pub const DOUBLE_WRITABLE_CLASS: &str = "org.apache.hadoop.io.DoubleWritable";
pub const BOOLEAN_WRITABLE_CLASS: &str = "org.apache.hadoop.io.BooleanWritable";
pub const BYTES_WRITABLE_CLASS: &str = "org.apache.hadoop.io.BytesWritable";
pub const VINT_WRITABLE_CLASS: &str = "org.apache.hadoop.io.VIntWritable";
pub const VLONG_WRITABLE_CLASS: &str = "org.apache.hadoop.io.VLongWritable";
pub const NULL_WRITABLE_CLASS: &str = "org.apache.hadoop.io.NullWritable";

/// UTF-8 text: vint byte length, then the bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    bytes: Vec<u8>,
}

impl Text {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            bytes: text.as_bytes().to_vec(),
        }
    }

    /// Wrap raw bytes without validating them as UTF-8.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Writable for Text {
    fn write(&self, out: &mut BytesMut) {
        // Lengths past i32::MAX cannot be represented by the format.
        let len = i32::try_from(self.bytes.len()).unwrap_or(i32::MAX);
        write_vint(out, len);
        out.put_slice(&self.bytes[..len as usize]);
    }
}

/// Byte buffer: `i32` length, then the bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BytesWritable {
    bytes: Vec<u8>,
}

impl BytesWritable {
    #[must_use]
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }
}

impl Writable for BytesWritable {
    fn write(&self, out: &mut BytesMut) {
        let len = i32::try_from(self.bytes.len()).unwrap_or(i32::MAX);
        out.put_i32(len);
        out.put_slice(&self.bytes[..len as usize]);
    }
}

/// Declares a writable wrapping a single scalar value.
macro_rules! scalar_writable {
    ($(#[$meta:meta])* $name:ident, $ty:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq)]
        pub struct $name {
            value: $ty,
        }

        impl $name {
            #[must_use]
            pub fn new(value: $ty) -> Self {
                Self { value }
            }

            #[must_use]
            pub fn get(&self) -> $ty {
                self.value
            }
        }
    };
}

scalar_writable!(
    /// Big-endian `i32`.
    IntWritable,
    i32
);
scalar_writable!(
    /// Big-endian `i64`.
    LongWritable,
    i64
);
scalar_writable!(
    /// Big-endian `i16`.
    ShortWritable,
    i16
);
scalar_writable!(
    /// IEEE 754 `f32`, big-endian.
    FloatWritable,
    f32
);
scalar_writable!(
    /// IEEE 754 `f64`, big-endian.
    DoubleWritable,
    f64
);
scalar_writable!(
    /// One byte, 0 or 1.
    BooleanWritable,
    bool
);
scalar_writable!(
    /// Variable-length `i32`.
    VIntWritable,
    i32
);
scalar_writable!(
    /// Variable-length `i64`.
    VLongWritable,
    i64
);

impl Writable for IntWritable {
    fn write(&self, out: &mut BytesMut) {
        out.put_i32(self.value);
    }
}

impl Writable for LongWritable {
    fn write(&self, out: &mut BytesMut) {
        out.put_i64(self.value);
    }
}

impl Writable for ShortWritable {
    fn write(&self, out: &mut BytesMut) {
        out.put_i16(self.value);
    }
}

impl Writable for FloatWritable {
    fn write(&self, out: &mut BytesMut) {
        out.put_f32(self.value);
    }
}

impl Writable for DoubleWritable {
    fn write(&self, out: &mut BytesMut) {
        out.put_f64(self.value);
    }
}

impl Writable for BooleanWritable {
    fn write(&self, out: &mut BytesMut) {
        out.put_u8(u8::from(self.value));
    }
}

impl Writable for VIntWritable {
    fn write(&self, out: &mut BytesMut) {
        write_vint(out, self.value);
    }
}

impl Writable for VLongWritable {
    fn write(&self, out: &mut BytesMut) {
        write_vlong(out, self.value);
    }
}

/// Writes nothing. Only reachable through its private constructor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullWritable;

impl Writable for NullWritable {
    fn write(&self, _out: &mut BytesMut) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writable::{to_base64, to_bytes};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_layout() {
        assert_eq!(to_bytes(&Text::new("hi")), vec![2, b'h', b'i']);
        assert_eq!(to_base64(&Text::new("hello")), "BWhlbGxv");
        assert_eq!(to_bytes(&Text::default()), vec![0]);
    }

    #[test]
    fn test_text_long_length_prefix() {
        let text = Text::new(&"x".repeat(200));
        let bytes = to_bytes(&text);
        assert_eq!(&bytes[..2], &[0x8F, 200]);
        assert_eq!(bytes.len(), 202);
    }

    #[test]
    fn test_fixed_width_layouts() {
        assert_eq!(to_bytes(&IntWritable::new(42)), vec![0, 0, 0, 42]);
        assert_eq!(to_bytes(&ShortWritable::new(-2)), vec![0xFF, 0xFE]);
        assert_eq!(to_bytes(&LongWritable::new(1)), vec![0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(to_bytes(&FloatWritable::new(1.0)), vec![0x3F, 0x80, 0, 0]);
        assert_eq!(
            to_bytes(&DoubleWritable::new(2.0)),
            vec![0x40, 0, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(to_bytes(&BooleanWritable::new(true)), vec![1]);
    }

    #[test]
    fn test_variable_width_layouts() {
        assert_eq!(to_bytes(&VIntWritable::new(5)), vec![5]);
        assert_eq!(to_bytes(&VLongWritable::new(300)), vec![0x8E, 0x01, 0x2C]);
    }

    #[test]
    fn test_bytes_writable_layout() {
        assert_eq!(
            to_bytes(&BytesWritable::new(b"ab")),
            vec![0, 0, 0, 2, b'a', b'b']
        );
    }

    #[test]
    fn test_null_writable_is_empty() {
        assert!(to_bytes(&NullWritable).is_empty());
        assert_eq!(to_base64(&NullWritable), "");
    }
}
