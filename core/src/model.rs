//! Wire models for the cloud inventory API.

use serde::{Deserialize, Serialize};

/// A virtual datacenter: the scoping unit that groups virtual appliances.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VirtualDataCenter {
    pub id: u32,

    #[serde(default)]
    pub name: String,

    /// Remaining payload fields, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl VirtualDataCenter {
    /// A bare reference carrying only an id.
    pub fn reference(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            extra: serde_json::Map::new(),
        }
    }
}

/// A virtual appliance as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VirtualAppliance {
    pub id: u32,

    #[serde(default)]
    pub name: String,

    /// Remaining payload fields, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Wrapper shape of the API's list replies.
///
/// A missing or null `collection` reads as an empty list.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Collection<T> {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub collection: Vec<T>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_present() {
        let wrapper: Collection<VirtualAppliance> =
            serde_json::from_str(r#"{"collection": [{"id": 1, "name": "web"}]}"#).unwrap();
        assert_eq!(wrapper.collection.len(), 1);
        assert_eq!(wrapper.collection[0].name, "web");
    }

    #[test]
    fn test_collection_missing_reads_empty() {
        let wrapper: Collection<VirtualAppliance> =
            serde_json::from_str(r#"{"links": []}"#).unwrap();
        assert!(wrapper.collection.is_empty());
    }

    #[test]
    fn test_collection_null_reads_empty() {
        let wrapper: Collection<VirtualAppliance> =
            serde_json::from_str(r#"{"collection": null}"#).unwrap();
        assert!(wrapper.collection.is_empty());
    }

    #[test]
    fn test_appliance_extra_fields_pass_through() {
        let json = r#"{"id": 7, "name": "db", "state": "DEPLOYED", "error": false}"#;
        let appliance: VirtualAppliance = serde_json::from_str(json).unwrap();

        assert_eq!(appliance.id, 7);
        assert_eq!(appliance.extra["state"], "DEPLOYED");

        // Unknown fields survive a round trip unchanged.
        let back = serde_json::to_value(&appliance).unwrap();
        assert_eq!(back["state"], "DEPLOYED");
        assert_eq!(back["error"], false);
    }

    #[test]
    fn test_datacenter_reference_is_bare() {
        let dc = VirtualDataCenter::reference(42);
        assert_eq!(dc.id, 42);
        assert!(dc.name.is_empty());
        assert!(dc.extra.is_empty());
    }
}
