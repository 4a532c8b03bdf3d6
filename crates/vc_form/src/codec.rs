use alloc::string::String;
use std::sync::OnceLock;

use crate::de;
use crate::error::{DecodeError, EncodeError};
use crate::multimap::Multimap;
use crate::ops::Form;
use crate::schema::SchemaCache;
use crate::ser;

// -----------------------------------------------------------------------------
// CodecOptions

/// Run-time settings of a [`FormCodec`].
///
/// ```
/// use vc_form::{CodecOptions, FormCodec};
///
/// let codec = FormCodec::with_options(CodecOptions::new().max_pairs(Some(64)));
/// assert_eq!(codec.options().max_pairs, Some(64));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Trim surrounding ASCII whitespace before parsing input. Default `true`.
    pub trim_input: bool,
    /// Reject input with more pairs than this. Default `None`.
    pub max_pairs: Option<usize>,
    /// Sort encoded pairs by key. Default `true`.
    pub sort_output: bool,
}

impl CodecOptions {
    pub const fn new() -> Self {
        Self {
            trim_input: true,
            max_pairs: None,
            sort_output: true,
        }
    }

    #[inline]
    pub const fn trim_input(mut self, trim_input: bool) -> Self {
        self.trim_input = trim_input;
        self
    }

    #[inline]
    pub const fn max_pairs(mut self, max_pairs: Option<usize>) -> Self {
        self.max_pairs = max_pairs;
        self
    }

    #[inline]
    pub const fn sort_output(mut self, sort_output: bool) -> Self {
        self.sort_output = sort_output;
        self
    }
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// FormCodec

/// Decodes form data into values and encodes values back.
///
/// A codec owns its [`SchemaCache`], so record tags are parsed once per
/// codec. It is `Sync` and meant to be shared; [`FormCodec::global`] is the
/// instance behind the crate-level functions.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use vc_form::FormCodec;
///
/// let codec = FormCodec::new();
///
/// let mut map: HashMap<String, String> = HashMap::new();
/// codec.decode_str("name=john&name=jane", &mut map).unwrap();
/// assert_eq!(map["name"], "jane");
///
/// assert_eq!(codec.encode_string(&map).unwrap(), "name=jane");
/// ```
#[derive(Debug, Default)]
pub struct FormCodec {
    schema: SchemaCache,
    options: CodecOptions,
}

impl FormCodec {
    pub const fn new() -> Self {
        Self::with_options(CodecOptions::new())
    }

    pub const fn with_options(options: CodecOptions) -> Self {
        Self {
            schema: SchemaCache::new(),
            options,
        }
    }

    /// The process-wide codec with default options.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<FormCodec> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    #[inline]
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    #[inline]
    pub fn schema(&self) -> &SchemaCache {
        &self.schema
    }

    /// Decode urlencoded text into `target`.
    #[inline]
    pub fn decode_str<T: Form + ?Sized>(&self, input: &str, target: &mut T) -> Result<(), DecodeError> {
        self.decode_bytes(input.as_bytes(), target)
    }

    /// Decode urlencoded bytes into `target`.
    ///
    /// Empty input, or input that is only whitespace when trimming is on, is
    /// rejected before anything is assigned.
    pub fn decode_bytes<T: Form + ?Sized>(&self, input: &[u8], target: &mut T) -> Result<(), DecodeError> {
        let input = if self.options.trim_input {
            input.trim_ascii()
        } else {
            input
        };
        if input.is_empty() {
            return Err(DecodeError::EmptyInput);
        }

        let pairs = Multimap::parse(input);
        self.decode_pairs(&pairs, target)
    }

    /// Decode already parsed pairs into `target`, in pair order.
    pub fn decode_pairs<T: Form + ?Sized>(&self, pairs: &Multimap, target: &mut T) -> Result<(), DecodeError> {
        if let Some(limit) = self.options.max_pairs
            && pairs.len() > limit
        {
            return Err(DecodeError::TooManyPairs {
                count: pairs.len(),
                limit,
            });
        }
        de::decode(&self.schema, target.as_form_mut(), pairs)
    }

    /// Encode `value` into pairs, sorted by key unless disabled in the options.
    pub fn encode_pairs<T: Form + ?Sized>(&self, value: &T) -> Result<Multimap, EncodeError> {
        let mut pairs = ser::encode(&self.schema, value.as_form())?;
        if self.options.sort_output {
            pairs.sort_keys();
        }
        Ok(pairs)
    }

    /// Encode `value` into urlencoded text.
    #[inline]
    pub fn encode_string<T: Form + ?Sized>(&self, value: &T) -> Result<String, EncodeError> {
        Ok(self.encode_pairs(value)?.to_urlencoded())
    }
}
