//! Reader and writer wrappers.
//!
//! Decoding reads the whole source into memory first; nothing is decoded
//! incrementally.

use alloc::vec::Vec;
use std::io::{Read, Write};

use crate::codec::FormCodec;
use crate::error::StreamError;
use crate::ops::Form;

/// Decodes form bodies read from `R`.
///
/// ```
/// use vc_form::Value;
/// use vc_form::stream::FormDecoder;
///
/// let body: &[u8] = b"user[name]=ann";
/// let mut value = Value::default();
/// FormDecoder::new(body).decode(&mut value).unwrap();
/// assert_eq!(value["user"]["name"], "ann");
/// ```
pub struct FormDecoder<'c, R> {
    reader: R,
    codec: &'c FormCodec,
}

impl<R: Read> FormDecoder<'static, R> {
    /// Decoder using [`FormCodec::global`].
    pub fn new(reader: R) -> Self {
        Self::with_codec(reader, FormCodec::global())
    }
}

impl<'c, R: Read> FormDecoder<'c, R> {
    pub fn with_codec(reader: R, codec: &'c FormCodec) -> Self {
        Self { reader, codec }
    }

    /// Read the rest of the source and decode it into `target`.
    pub fn decode<T: Form + ?Sized>(&mut self, target: &mut T) -> Result<(), StreamError> {
        let mut body = Vec::new();
        self.reader
            .read_to_end(&mut body)
            .map_err(StreamError::Read)?;
        self.codec.decode_bytes(&body, target)?;
        Ok(())
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Encodes values as form bodies written to `W`.
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_form::stream::FormEncoder;
///
/// let mut map = BTreeMap::new();
/// map.insert(String::from("q"), String::from("a b"));
///
/// let mut out = Vec::new();
/// FormEncoder::new(&mut out).encode(&map).unwrap();
/// assert_eq!(out, b"q=a+b");
/// ```
pub struct FormEncoder<'c, W> {
    writer: W,
    codec: &'c FormCodec,
}

impl<W: Write> FormEncoder<'static, W> {
    /// Encoder using [`FormCodec::global`].
    pub fn new(writer: W) -> Self {
        Self::with_codec(writer, FormCodec::global())
    }
}

impl<'c, W: Write> FormEncoder<'c, W> {
    pub fn with_codec(writer: W, codec: &'c FormCodec) -> Self {
        Self { writer, codec }
    }

    /// Encode `value` and write it in full. Nothing is written if encoding fails.
    pub fn encode<T: Form + ?Sized>(&mut self, value: &T) -> Result<(), StreamError> {
        let body = self.codec.encode_string(value)?;
        self.writer
            .write_all(body.as_bytes())
            .map_err(StreamError::Write)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::Value;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("connection reset"))
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn read_failure() {
        let mut value = Value::default();
        let err = FormDecoder::new(FailingReader).decode(&mut value).unwrap_err();
        assert!(matches!(err, StreamError::Read(_)));
    }

    #[test]
    fn write_failure() {
        let value: Value = [("a", "1")].into_iter().collect();
        let err = FormEncoder::new(FailingWriter).encode(&value).unwrap_err();
        assert!(matches!(err, StreamError::Write(_)));
    }

    #[test]
    fn decode_failure_is_forwarded() {
        let mut value = Value::default();
        let err = FormDecoder::new(&b"a[=1"[..]).decode(&mut value).unwrap_err();
        assert!(matches!(err, StreamError::Decode(_)));

        let err = FormDecoder::new(io::empty()).decode(&mut value).unwrap_err();
        assert!(matches!(err, StreamError::Decode(crate::DecodeError::EmptyInput)));
    }

    #[test]
    fn encode_round_trip() {
        let value: Value = crate::from_str("list[]=a&list[]=b&x=1").unwrap();
        let mut out = Vec::new();
        FormEncoder::new(&mut out).encode(&value).unwrap();

        let mut back = Value::default();
        FormDecoder::new(out.as_slice()).decode(&mut back).unwrap();
        assert_eq!(back, value);
    }
}
