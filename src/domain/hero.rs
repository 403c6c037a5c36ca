//! Hero domain model.
//!
//! A [`Hero`] is an immutable record produced by the catalog fetch and read by every
//! downstream stage. Wire-format decoding lives in [`crate::catalog::records`]; this
//! module only knows the shape the rest of the crate works with.

use serde::{Deserialize, Serialize};

/// Unique hero identifier as assigned by the catalog.
pub type HeroId = u32;

/// Represents one hero from the public catalog.
///
/// # Fields
///
/// - `id`: Catalog identifier, unique across the collection
/// - `name`: Display name (e.g. "Spider-Man")
/// - `publisher`: Publishing house, absent for some heroes
/// - `thumbnail_url`: Large image URL used for cards and the detail panel
/// - `full_name`, `alignment`, `powerstats`: Detail payload, each optional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    pub publisher: Option<String>,
    pub thumbnail_url: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub alignment: Option<String>,
    #[serde(default)]
    pub powerstats: Option<Powerstats>,
}

impl Hero {
    /// Creates a hero with only the fields the search core needs.
    ///
    /// Detail fields start out empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use herodex::Hero;
    ///
    /// let hero = Hero::new(620, "Spider-Man", Some("Marvel Comics"), "https://img/620.jpg");
    /// assert_eq!(hero.publisher.as_deref(), Some("Marvel Comics"));
    /// assert!(hero.powerstats.is_none());
    /// ```
    #[must_use]
    pub fn new(
        id: HeroId,
        name: impl Into<String>,
        publisher: Option<&str>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            publisher: publisher.map(String::from),
            thumbnail_url: thumbnail_url.into(),
            full_name: None,
            alignment: None,
            powerstats: None,
        }
    }

    /// Case-insensitive substring match against `name` or `publisher`.
    ///
    /// `needle_lower` must already be lowercased. A missing publisher only fails
    /// the publisher half of the check.
    #[must_use]
    pub fn matches_lowercase(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self
                .publisher
                .as_ref()
                .is_some_and(|publisher| publisher.to_lowercase().contains(needle_lower))
    }
}

/// Numeric power ratings shown in the detail panel.
///
/// The catalog leaves individual ratings out or sets them to `null` for some
/// heroes; those decode as `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Powerstats {
    pub intelligence: Option<u32>,
    pub strength: Option<u32>,
    pub speed: Option<u32>,
    pub durability: Option<u32>,
    pub power: Option<u32>,
    pub combat: Option<u32>,
}

impl Powerstats {
    /// Returns `(label, value)` pairs in display order.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, Option<u32>); 6] {
        [
            ("intelligence", self.intelligence),
            ("strength", self.strength),
            ("speed", self.speed),
            ("durability", self.durability),
            ("power", self.power),
            ("combat", self.combat),
        ]
    }
}
