use crate::ids::PlanetId;

/// A catalogued planet.
///
/// Construction performs no validation. The store rejects blank `name`,
/// `climate` or `terrain` values and duplicate names, so an instance carrying
/// an `id` always satisfies those invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Planet {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<PlanetId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub climate: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub terrain: String,
}

impl Planet {
    pub fn new(
        name: impl Into<String>,
        climate: impl Into<String>,
        terrain: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            climate: climate.into(),
            terrain: terrain.into(),
        }
    }

    /// Template carrying only listing criteria; unset criteria stay empty.
    pub fn from_criteria(
        climate: Option<String>,
        terrain: Option<String>,
    ) -> Self {
        Self {
            id: None,
            name: String::new(),
            climate: climate.unwrap_or_default(),
            terrain: terrain.unwrap_or_default(),
        }
    }

    pub fn with_id(mut self, id: PlanetId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
