use alloc::string::String;
use alloc::vec::{self, Vec};
use core::slice;

use url::form_urlencoded;

/// Ordered `(key, value)` pairs in which a key may repeat.
///
/// The decode input and the encode output. Keys are raw bracket paths such as
/// `user[tags][]`; values are unescaped text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Multimap {
    pairs: Vec<(String, String)>,
}

impl Multimap {
    #[inline]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parse `application/x-www-form-urlencoded` bytes.
    ///
    /// `+` becomes a space and percent escapes are decoded; invalid UTF-8 is
    /// replaced. Empty segments between `&` are skipped.
    ///
    /// ```
    /// use vc_form::Multimap;
    ///
    /// let pairs = Multimap::parse(b"a%5B%5D=1&a[]=two+words&b");
    /// let collected: Vec<(&str, &str)> = pairs.iter().collect();
    /// assert_eq!(collected, [("a[]", "1"), ("a[]", "two words"), ("b", "")]);
    /// ```
    pub fn parse(input: &[u8]) -> Self {
        form_urlencoded::parse(input)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    /// Serialize to `application/x-www-form-urlencoded`, keeping pair order.
    ///
    /// Brackets in keys are escaped like any other reserved byte.
    pub fn to_urlencoded(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    #[inline]
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in order, as string slices.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.pairs.iter(),
        }
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Every value stored under `key`, in order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.iter().filter(move |(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Stable sort by key: pairs sharing a key keep their relative order.
    pub fn sort_keys(&mut self) {
        self.pairs.sort_by(|a, b| a.0.cmp(&b.0));
    }

    #[inline]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Multimap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Multimap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.pairs.extend(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
    }
}

impl IntoIterator for Multimap {
    type Item = (String, String);
    type IntoIter = vec::IntoIter<(String, String)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Multimap {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the pairs of a [`Multimap`].
pub struct Iter<'a> {
    inner: slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
