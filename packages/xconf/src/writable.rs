//! The "write self to a byte stream" contract of constructed objects.
//!
//! Objects serialize into a [`BytesMut`] using big-endian layout, the same
//! byte order as Hadoop's `DataOutput`. The bytes are then base64-encoded
//! to become a configuration value.

use base64::Engine;
use bytes::{BufMut, BytesMut};

use crate::config::VALUE_ENCODING;

/// An object that can serialize itself.
pub trait Writable: Send {
    /// Append this object's binary form to `out`.
    fn write(&self, out: &mut BytesMut);
}

/// Serialize an object to raw bytes.
#[must_use]
pub fn to_bytes(object: &dyn Writable) -> Vec<u8> {
    let mut out = BytesMut::new();
    object.write(&mut out);
    out.to_vec()
}

/// Serialize an object and base64-encode the bytes.
///
/// # Examples
/// ```
/// use xconf_parser::registry::builtins::IntWritable;
/// use xconf_parser::writable::to_base64;
///
/// assert_eq!(to_base64(&IntWritable::new(1)), "AAAAAQ==");
/// ```
#[must_use]
pub fn to_base64(object: &dyn Writable) -> String {
    VALUE_ENCODING.encode(to_bytes(object))
}

/// Write an `i32` with Hadoop's variable-length encoding.
pub fn write_vint(out: &mut BytesMut, value: i32) {
    write_vlong(out, i64::from(value));
}

/// Write an `i64` with Hadoop's variable-length encoding.
///
/// Values in `-112..=127` take a single byte. Larger values write a
/// marker byte carrying sign and length, followed by the big-endian
/// magnitude bytes.
pub fn write_vlong(out: &mut BytesMut, value: i64) {
    if (-112..=127).contains(&value) {
        // Range checked above.
        out.put_i8(value as i8);
        return;
    }

    let (magnitude, marker_base) = if value < 0 { (!value, -120i8) } else { (value, -112i8) };
    let byte_len = 8 - (magnitude.leading_zeros() / 8) as i8;
    out.put_i8(marker_base - byte_len);

    for idx in (0..byte_len).rev() {
        let shift = u32::from(idx as u8) * 8;
        out.put_u8(((magnitude >> shift) & 0xFF) as u8);
    }
}
