//! Wire records for the catalog's `all.json` document.
//!
//! The remote service returns far more than the crate uses. Only the fields below are
//! decoded; everything else is ignored by serde. Records are converted into domain
//! [`Hero`] values immediately after decoding.

use crate::domain::{Hero, HeroId, Powerstats};
use serde::{Deserialize, Deserializer};

/// One element of the `all.json` array.
#[derive(Debug, Clone, Deserialize)]
pub struct HeroRecord {
    pub id: HeroId,
    pub name: String,
    #[serde(default)]
    pub biography: BiographyRecord,
    #[serde(default)]
    pub images: ImagesRecord,
    #[serde(default, deserialize_with = "lenient_powerstats")]
    pub powerstats: Option<Powerstats>,
}

/// The `biography` sub-object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiographyRecord {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub alignment: Option<String>,
}

/// The `images` sub-object. Only the large variant is kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImagesRecord {
    #[serde(default)]
    pub lg: String,
}

/// Decodes `powerstats`, dropping a malformed sub-object instead of failing the record.
fn lenient_powerstats<'de, D>(deserializer: D) -> Result<Option<Powerstats>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).ok())
}

/// Maps blank strings to `None`; the catalog uses `""` and `"-"` for unknown values.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let trimmed = v.trim();
        !trimmed.is_empty() && trimmed != "-"
    })
}

impl From<HeroRecord> for Hero {
    fn from(record: HeroRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            publisher: non_blank(record.biography.publisher),
            thumbnail_url: record.images.lg,
            full_name: non_blank(record.biography.full_name),
            alignment: non_blank(record.biography.alignment),
            powerstats: record.powerstats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPIDER_MAN: &str = r#"{
        "id": 620,
        "name": "Spider-Man",
        "slug": "620-spider-man",
        "powerstats": {
            "intelligence": 90, "strength": 55, "speed": 67,
            "durability": 75, "power": 74, "combat": 85
        },
        "biography": {
            "fullName": "Peter Parker",
            "alterEgos": "No alter egos found.",
            "publisher": "Marvel Comics",
            "alignment": "good"
        },
        "images": {
            "xs": "https://example.test/xs/620.jpg",
            "lg": "https://example.test/lg/620.jpg"
        }
    }"#;

    #[test]
    fn decodes_the_fields_the_crate_uses() {
        let record: HeroRecord = serde_json::from_str(SPIDER_MAN).unwrap();
        let hero = Hero::from(record);

        assert_eq!(hero.id, 620);
        assert_eq!(hero.name, "Spider-Man");
        assert_eq!(hero.publisher.as_deref(), Some("Marvel Comics"));
        assert_eq!(hero.thumbnail_url, "https://example.test/lg/620.jpg");
        assert_eq!(hero.full_name.as_deref(), Some("Peter Parker"));
        assert_eq!(hero.alignment.as_deref(), Some("good"));
        assert_eq!(hero.powerstats.and_then(|p| p.intelligence), Some(90));
    }

    #[test]
    fn null_and_blank_publishers_become_none() {
        let null_publisher = r#"{"id": 1, "name": "A", "biography": {"publisher": null}, "images": {"lg": ""}}"#;
        let blank_publisher = r#"{"id": 2, "name": "B", "biography": {"publisher": ""}, "images": {"lg": ""}}"#;

        let a = Hero::from(serde_json::from_str::<HeroRecord>(null_publisher).unwrap());
        let b = Hero::from(serde_json::from_str::<HeroRecord>(blank_publisher).unwrap());

        assert!(a.publisher.is_none());
        assert!(b.publisher.is_none());
    }

    #[test]
    fn partial_powerstats_do_not_fail_the_catalog() {
        let catalog = format!(
            r#"[{SPIDER_MAN},
            {{"id": 1, "name": "A-Bomb", "powerstats": {{"intelligence": 50, "strength": null}}}},
            {{"id": 2, "name": "Abe Sapien", "powerstats": {{"intelligence": "high"}}}}]"#
        );

        let records: Vec<HeroRecord> = serde_json::from_str(&catalog).unwrap();
        let heroes: Vec<Hero> = records.into_iter().map(Hero::from).collect();

        assert_eq!(heroes.len(), 3);
        assert_eq!(heroes[0].name, "Spider-Man");

        let partial = heroes[1].powerstats.unwrap();
        assert_eq!(partial.intelligence, Some(50));
        assert_eq!(partial.strength, None);
        assert_eq!(partial.speed, None);

        assert!(heroes[2].powerstats.is_none());
    }

    #[test]
    fn missing_sub_objects_default() {
        let record: HeroRecord = serde_json::from_str(r#"{"id": 3, "name": "Bare"}"#).unwrap();
        let hero = Hero::from(record);

        assert!(hero.publisher.is_none());
        assert!(hero.thumbnail_url.is_empty());
        assert!(hero.powerstats.is_none());
    }
}
