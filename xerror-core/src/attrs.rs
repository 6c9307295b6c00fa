use serde::{Serialize, Serializer, ser::SerializeMap};
use std::{collections::BTreeMap, fmt};

/// A value that can be attached as attribute to an [`Error`].
///
/// Implemented for anything that is [`Serialize`] and [`Debug`].
/// Values are only encoded when the error is serialized, which is
/// also the only moment the encoding can fail. Besides values `serde_json`
/// rejects itself (e.g. maps with non-string keys) that includes `NaN` and
/// infinite floats, which JSON has no representation for.
///
/// [`Error`]: crate::Error
/// [`Debug`]: fmt::Debug
pub trait AttrValue: fmt::Debug + Send + Sync + 'static {
    /// Encode the value as a JSON value.
    fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error>;
}

impl<T> AttrValue for T
where
    T: Serialize + fmt::Debug + Send + Sync + 'static,
{
    fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        crate::finite::check(self)?;
        serde_json::to_value(self)
    }
}

/// The attributes attached to an [`Error`].
///
/// Keys are unique and kept sorted. Attributes can only be added
/// (or overwritten) through the error itself, never removed.
///
/// [`Error`]: crate::Error
#[derive(Debug, Default)]
pub struct Attrs {
    map: BTreeMap<String, Box<dyn AttrValue>>,
}

impl Attrs {
    /// Create a new, empty, [`Attrs`]. This does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, key: String, value: Box<dyn AttrValue>) {
        self.map.insert(key, value);
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no attribute was attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns `true` if an attribute exists for the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Get the attribute value for the given key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&dyn AttrValue> {
        self.map.get(key).map(|value| &**value)
    }

    /// Get the attribute value for the given key, encoded as JSON.
    ///
    /// Returns `None` if the key does not exist or if its value cannot be encoded.
    #[must_use]
    pub fn get_json(&self, key: &str) -> Option<serde_json::Value> {
        self.get(key)?.to_json_value().ok()
    }

    /// Iterate over the keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Iterate over all attributes, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn AttrValue)> {
        self.map.iter().map(|(k, v)| (k.as_str(), &**v))
    }
}

impl Serialize for Attrs {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.map.len()))?;
        for (key, value) in &self.map {
            let value = value.to_json_value().map_err(|err| {
                <S::Error as serde::ser::Error>::custom(format_args!("attribute {key:?}: {err}"))
            })?;
            map.serialize_entry(key, &value)?;
        }
        map.end()
    }
}
