//! Hero records and the projections served to clients.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

/// One entry of the hero dataset.
///
/// Decoding is lenient: a field only counts as present when it is a
/// non-empty JSON string, and anything else reads as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroRecord {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub name: Option<String>,

    /// Free-text category label (e.g. "Mage", "Tank").
    #[serde(rename = "type", default, deserialize_with = "non_empty_string")]
    pub hero_type: Option<String>,

    #[serde(default, deserialize_with = "non_empty_string")]
    pub win_rate: Option<String>,

    #[serde(default, deserialize_with = "non_empty_string")]
    pub image: Option<String>,

    /// Heroes this hero is a counter-pick against.
    #[serde(default, deserialize_with = "string_list")]
    pub countered_heroes: Option<Vec<String>>,
}

impl HeroRecord {
    /// Decode one element of the dataset array.
    ///
    /// Elements that are not objects become an empty record, which never
    /// matches a name and is never listed.
    pub fn from_json(value: Value) -> Self {
        if !value.is_object() {
            debug!("Skipping non-object hero entry");
            return Self::default();
        }
        match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                debug!("Skipping malformed hero entry: {}", e);
                Self::default()
            }
        }
    }

    /// Case-insensitive name comparison against an already lowercased name.
    pub fn name_matches(&self, lowered: &str) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| name.to_lowercase() == lowered)
    }

    /// Whether `lowered` appears in this hero's countered list.
    pub fn counters(&self, lowered: &str) -> bool {
        self.countered_heroes
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|countered| countered.to_lowercase() == lowered)
    }

    /// The selector entry for this hero, if it has both a name and an image.
    pub fn name_entry(&self) -> Option<NameEntry> {
        Some(NameEntry {
            name: self.name.clone()?,
            image: self.image.clone()?,
        })
    }

    /// The counter summary for this hero, if every displayed field is present
    /// and it carries a countered list.
    pub fn counter_result(&self) -> Option<CounterResult> {
        self.countered_heroes.as_ref()?;
        Some(CounterResult {
            name: self.name.clone()?,
            hero_type: self.hero_type.clone()?,
            win_rate: self.win_rate.clone()?,
            image: self.image.clone()?,
        })
    }
}

/// Minimal `{name, image}` projection used to populate hero selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEntry {
    pub name: String,
    pub image: String,
}

/// A hero that counters the searched hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterResult {
    pub name: String,
    #[serde(rename = "type")]
    pub hero_type: String,
    pub win_rate: String,
    pub image: String,
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

fn string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_record() {
        let hero = HeroRecord::from_json(json!({
            "name": "Arthur",
            "type": "Warrior",
            "win_rate": "51.2%",
            "image": "arthur.png",
            "countered_heroes": ["Lam", "Marja"]
        }));

        assert_eq!(hero.name.as_deref(), Some("Arthur"));
        assert_eq!(hero.hero_type.as_deref(), Some("Warrior"));
        assert_eq!(hero.win_rate.as_deref(), Some("51.2%"));
        assert_eq!(hero.image.as_deref(), Some("arthur.png"));
        assert_eq!(
            hero.countered_heroes,
            Some(vec!["Lam".to_string(), "Marja".to_string()])
        );
    }

    #[test]
    fn test_decode_wrong_types_as_absent() {
        let hero = HeroRecord::from_json(json!({
            "name": "Lam",
            "type": 3,
            "win_rate": null,
            "image": "",
            "countered_heroes": "Arthur"
        }));

        assert_eq!(hero.name.as_deref(), Some("Lam"));
        assert!(hero.hero_type.is_none());
        assert!(hero.win_rate.is_none());
        assert!(hero.image.is_none());
        assert!(hero.countered_heroes.is_none());
    }

    #[test]
    fn test_decode_non_object_is_empty() {
        assert_eq!(HeroRecord::from_json(json!(null)), HeroRecord::default());
        assert_eq!(HeroRecord::from_json(json!("Arthur")), HeroRecord::default());
        assert_eq!(HeroRecord::from_json(json!([1, 2])), HeroRecord::default());
    }

    #[test]
    fn test_countered_list_skips_non_strings() {
        let hero = HeroRecord::from_json(json!({
            "name": "Arthur",
            "countered_heroes": ["Lam", 7, null, "Marja"]
        }));
        assert_eq!(
            hero.countered_heroes,
            Some(vec!["Lam".to_string(), "Marja".to_string()])
        );
    }

    #[test]
    fn test_name_matches_case_insensitive() {
        let hero = HeroRecord::from_json(json!({ "name": "Abc" }));
        assert!(hero.name_matches("abc"));
        assert!(!hero.name_matches("ab"));
        assert!(!HeroRecord::default().name_matches("abc"));
    }

    #[test]
    fn test_counters_case_insensitive() {
        let hero = HeroRecord::from_json(json!({
            "name": "Arthur",
            "countered_heroes": ["LAM"]
        }));
        assert!(hero.counters("lam"));
        assert!(!hero.counters("marja"));
    }

    #[test]
    fn test_counter_result_requires_all_fields() {
        let missing_image = HeroRecord::from_json(json!({
            "name": "Arthur",
            "type": "Warrior",
            "win_rate": "50%",
            "countered_heroes": []
        }));
        assert!(missing_image.counter_result().is_none());

        let missing_list = HeroRecord::from_json(json!({
            "name": "Arthur",
            "type": "Warrior",
            "win_rate": "50%",
            "image": "arthur.png"
        }));
        assert!(missing_list.counter_result().is_none());
    }

    #[test]
    fn test_counter_result_serializes_type_field() {
        let result = CounterResult {
            name: "A".to_string(),
            hero_type: "t".to_string(),
            win_rate: "80%".to_string(),
            image: "a.png".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            json!({ "name": "A", "type": "t", "win_rate": "80%", "image": "a.png" })
        );
    }
}
