use swplanet_model::Planet;

/// Listing constraints derived from a template planet.
///
/// Each populated field is an exact, case-sensitive equality constraint.
/// `None` means the field matches any stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetFilter {
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

impl PlanetFilter {
    /// Builds a filter from a template, ignoring `id` and `name`.
    ///
    /// Empty strings are treated the same as absent values.
    pub fn from_template(template: &Planet) -> Self {
        Self {
            climate: populated(&template.climate),
            terrain: populated(&template.terrain),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.climate.is_none() && self.terrain.is_none()
    }

    pub fn matches(&self, planet: &Planet) -> bool {
        let climate_ok = self
            .climate
            .as_deref()
            .is_none_or(|climate| planet.climate == climate);
        let terrain_ok = self
            .terrain
            .as_deref()
            .is_none_or(|terrain| planet.terrain == terrain);

        climate_ok && terrain_ok
    }
}

fn populated(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
