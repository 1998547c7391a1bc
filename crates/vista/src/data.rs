//! The view data bag.

use serde::Serialize;
use serde_json::Value;
use vista_render::Data;

/// Key/value data handed to a view's renderer.
///
/// [`set`](Self::set) merges: keys from the incoming bag overwrite existing
/// ones, everything else is kept.
///
/// ```rust
/// use serde_json::json;
/// use vista::ViewData;
///
/// let mut data = ViewData::new();
/// data.add("foo", json!("bar"));
/// data.set([("joomla".to_string(), json!("rocks"))].into_iter().collect());
///
/// assert_eq!(data.get().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ViewData {
    data: Data,
}

impl ViewData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn add(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        self.data.insert(key.into(), value);
        self
    }

    /// Removes `key`. Absent keys are ignored.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.data.remove(key);
        self
    }

    /// Empties the bag.
    pub fn clear(&mut self) -> &mut Self {
        self.data.clear();
        self
    }

    /// Merges `bag` into the current data; `bag` wins on key collisions.
    pub fn set(&mut self, bag: Data) -> &mut Self {
        self.data.extend(bag);
        self
    }

    /// Serializes `value` and merges its top-level fields.
    ///
    /// Values that do not serialize to an object are stored under `key`.
    pub fn set_serialized<T: Serialize>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Result<&mut Self, serde_json::Error> {
        match serde_json::to_value(value)? {
            Value::Object(map) => {
                self.data.extend(map);
            }
            other => {
                self.data.insert(key.to_string(), other);
            }
        }
        Ok(self)
    }

    /// Borrows the current data.
    pub fn get(&self) -> &Data {
        &self.data
    }

    /// Returns an owned copy of the current data.
    pub fn snapshot(&self) -> Data {
        self.data.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl From<Data> for ViewData {
    fn from(data: Data) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(value: Value) -> Data {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_add_sets_value() {
        let mut data = ViewData::new();
        data.add("test", json!("value"));
        assert_eq!(data.get(), &bag(json!({"test": "value"})));
    }

    #[test]
    fn test_clear_empties() {
        let mut data = ViewData::new();
        data.add("a", json!(1)).add("b", json!(2));
        data.clear();
        assert!(data.is_empty());
    }

    #[test]
    fn test_new_is_empty() {
        assert_eq!(ViewData::new().get(), &Data::new());
    }

    #[test]
    fn test_remove_present_and_absent() {
        let mut data = ViewData::new();
        data.add("test", json!("value"));
        data.remove("test").remove("never-there");
        assert!(data.is_empty());
    }

    #[test]
    fn test_set_merges() {
        let mut data = ViewData::new();
        data.set(bag(json!({"foo": "bar"})));
        data.set(bag(json!({"joomla": "rocks"})));
        assert_eq!(data.get(), &bag(json!({"foo": "bar", "joomla": "rocks"})));
    }

    #[test]
    fn test_set_incoming_wins() {
        let mut data = ViewData::new();
        data.set(bag(json!({"a": 1, "b": 1})));
        data.set(bag(json!({"b": 2})));
        assert_eq!(data.get(), &bag(json!({"a": 1, "b": 2})));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut data = ViewData::new();
        data.add("a", json!(1));
        let snapshot = data.snapshot();
        data.add("b", json!(2));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_set_serialized_struct_fields() {
        #[derive(Serialize)]
        struct Article {
            title: String,
            views: u32,
        }

        let mut data = ViewData::new();
        data.set_serialized(
            "article",
            &Article {
                title: "Hi".into(),
                views: 3,
            },
        )
        .unwrap();
        assert_eq!(data.get(), &bag(json!({"title": "Hi", "views": 3})));
    }

    #[test]
    fn test_set_serialized_scalar_under_key() {
        let mut data = ViewData::new();
        data.set_serialized("count", &5).unwrap();
        assert_eq!(data.get(), &bag(json!({"count": 5})));
    }

    #[test]
    fn test_serializes_transparently() {
        let mut data = ViewData::new();
        data.add("k", json!("v"));
        assert_eq!(serde_json::to_string(&data).unwrap(), r#"{"k":"v"}"#);
    }
}
