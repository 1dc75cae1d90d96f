use std::fmt;
use std::str::FromStr;

/// Store-assigned identifier of a persisted planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct PlanetId(i64);

impl PlanetId {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<i64> for PlanetId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<PlanetId> for i64 {
    fn from(id: PlanetId) -> Self {
        id.0
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlanetId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_and_from_raw_values() {
        let id = PlanetId::from(7);
        assert_eq!(i64::from(id), 7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(" 7 ".parse::<PlanetId>(), Ok(PlanetId::new(7)));
        assert!("seven".parse::<PlanetId>().is_err());
    }
}
