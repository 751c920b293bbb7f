use core::fmt;
use core::marker::PhantomData;

use ::serde::de::{Deserialize, Deserializer, Error as _, MapAccess, Visitor};
use ::serde::ser::{Serialize, SerializeMap, Serializer};

use super::CowLinkedMap;

impl<K: Serialize, V: Serialize> Serialize for CowLinkedMap<K, V> {
    /// Serializes as a map whose entries appear in insertion order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct CowLinkedMapVisitor<K, V> {
    marker: PhantomData<fn() -> CowLinkedMap<K, V>>,
}

impl<'de, K, V> Visitor<'de> for CowLinkedMapVisitor<K, V>
where
    K: Deserialize<'de> + Ord + Clone,
    V: Deserialize<'de> + Clone,
{
    type Value = CowLinkedMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map with unique keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = CowLinkedMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map.insert_back(key, value).map_err(A::Error::custom)?;
        }
        Ok(map)
    }
}

impl<'de, K, V> Deserialize<'de> for CowLinkedMap<K, V>
where
    K: Deserialize<'de> + Ord + Clone,
    V: Deserialize<'de> + Clone,
{
    /// Deserializes from a map, keeping entries in document order.
    ///
    /// A repeated key is an error rather than an overwrite.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CowLinkedMapVisitor { marker: PhantomData })
    }
}
