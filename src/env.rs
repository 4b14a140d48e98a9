//! Table state a hand is scored under.

use std::collections::BTreeMap;

use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

use crate::notation::{parse_hai_list, NotationError};
use crate::tiles::{Fon, Hai};

/// Dora indicators on the dead wall, kan dora included
pub const MAX_INDICATORS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("`{0}` is not a wind")]
    NotAWind(Hai),
    #[error("too many indicators: {0} (at most {max})", max = MAX_INDICATORS)]
    TooManyIndicators(usize),
    #[error("`{0}` appears {1} times in the indicators")]
    TooManyCopies(Hai, usize),
    #[error(transparent)]
    Notation(#[from] NotationError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Env {
    #[serde(with = "wind")]
    bakaze: Fon,
    #[serde(with = "wind")]
    jikaze: Fon,
    richi: bool,
    daburi: bool,
    ippatsu: bool,
    /// Rinshan kaihou on tsumo, chankan on ron
    rinshan: bool,
    /// Haitei on tsumo, houtei on ron
    haitei: bool,
    /// Tenhou for the dealer, chihou otherwise
    tenho: bool,
    /// No limit hands: yakuman count as 13 han and points are not capped
    aotenjo: bool,
    dora: Vec<Hai>,
    uradora: Vec<Hai>,
}

impl Default for Env {
    fn default() -> Self {
        Env::new(Fon::Ton, Fon::Ton)
    }
}

fn parse_wind(s: &str) -> Result<Fon, ConfigError> {
    let hai: Hai = s.parse()?;
    hai.fon().ok_or(ConfigError::NotAWind(hai))
}

fn parse_indicators(s: &str) -> Result<Vec<Hai>, ConfigError> {
    let hai = parse_hai_list(s)?;
    if hai.len() > MAX_INDICATORS {
        return Err(ConfigError::TooManyIndicators(hai.len()));
    }
    let mut counts = BTreeMap::new();
    for h in &hai {
        *counts.entry(h.kind()).or_insert(0) += 1;
    }
    if let Some((kind, count)) = counts.into_iter().find(|(_, count)| *count > 4) {
        return Err(ConfigError::TooManyCopies(kind, count));
    }
    Ok(hai)
}

impl Env {
    pub fn new(bakaze: Fon, jikaze: Fon) -> Self {
        Env {
            bakaze,
            jikaze,
            richi: false,
            daburi: false,
            ippatsu: false,
            rinshan: false,
            haitei: false,
            tenho: false,
            aotenjo: false,
            dora: vec![],
            uradora: vec![],
        }
    }

    pub fn bakaze(&self) -> Fon {
        self.bakaze
    }

    pub fn jikaze(&self) -> Fon {
        self.jikaze
    }

    /// The dealer sits east
    pub fn is_oya(&self) -> bool {
        self.jikaze == Fon::Ton
    }

    pub fn richi(&self) -> bool {
        self.richi
    }

    pub fn daburi(&self) -> bool {
        self.daburi
    }

    pub fn any_richi(&self) -> bool {
        self.richi || self.daburi
    }

    pub fn ippatsu(&self) -> bool {
        self.ippatsu
    }

    pub fn rinshan(&self) -> bool {
        self.rinshan
    }

    pub fn haitei(&self) -> bool {
        self.haitei
    }

    pub fn tenho(&self) -> bool {
        self.tenho
    }

    pub fn aotenjo(&self) -> bool {
        self.aotenjo
    }

    pub fn dora(&self) -> &[Hai] {
        &self.dora
    }

    pub fn uradora(&self) -> &[Hai] {
        &self.uradora
    }

    pub fn set_bakaze(&mut self, s: &str) -> Result<&mut Self, ConfigError> {
        self.bakaze = parse_wind(s)?;
        Ok(self)
    }

    pub fn set_jikaze(&mut self, s: &str) -> Result<&mut Self, ConfigError> {
        self.jikaze = parse_wind(s)?;
        Ok(self)
    }

    /// Replace the dora indicators, e.g. `"3m7j"`. An empty string clears them.
    pub fn set_dora(&mut self, s: &str) -> Result<&mut Self, ConfigError> {
        self.dora = parse_indicators(s)?;
        Ok(self)
    }

    pub fn set_uradora(&mut self, s: &str) -> Result<&mut Self, ConfigError> {
        self.uradora = parse_indicators(s)?;
        Ok(self)
    }

    pub fn set_richi(&mut self, value: bool) -> &mut Self {
        self.richi = value;
        self
    }

    pub fn set_daburi(&mut self, value: bool) -> &mut Self {
        self.daburi = value;
        self
    }

    pub fn set_ippatsu(&mut self, value: bool) -> &mut Self {
        self.ippatsu = value;
        self
    }

    pub fn set_rinshan(&mut self, value: bool) -> &mut Self {
        self.rinshan = value;
        self
    }

    pub fn set_haitei(&mut self, value: bool) -> &mut Self {
        self.haitei = value;
        self
    }

    pub fn set_tenho(&mut self, value: bool) -> &mut Self {
        self.tenho = value;
        self
    }

    pub fn set_aotenjo(&mut self, value: bool) -> &mut Self {
        self.aotenjo = value;
        self
    }
}

/// Winds are written as honor tiles, `"1j"` to `"4j"`.
mod wind {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::tiles::{Fon, Hai};

    pub fn serialize<S: Serializer>(fon: &Fon, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&Hai::from(*fon).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Fon, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_wind(&s).map_err(D::Error::custom)
    }
}
