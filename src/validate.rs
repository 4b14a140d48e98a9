//! Consistency checks between the table state and a hand.
//!
//! Nothing here fails: every contradiction found becomes a [`Warning`] naming
//! the fields involved, and scoring still goes ahead.

use std::collections::BTreeMap;
use std::fmt;

use enumflags2::{bitflags, BitFlags};

use crate::env::{Env, MAX_INDICATORS};
use crate::hand::{Tehai, WinningMethod};
use crate::tiles::Hai;

#[bitflags]
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Tehai = 1 << 0,
    Richi = 1 << 1,
    Daburi = 1 << 2,
    Ippatsu = 1 << 3,
    Rinshan = 1 << 4,
    Haitei = 1 << 5,
    Tenho = 1 << 6,
    Bakaze = 1 << 7,
    Jikaze = 1 << 8,
    Dora = 1 << 9,
    Uradora = 1 << 10,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Tehai => "tehai",
            Field::Richi => "richi",
            Field::Daburi => "daburi",
            Field::Ippatsu => "ippatsu",
            Field::Rinshan => "rinshan",
            Field::Haitei => "haitei",
            Field::Tenho => "tenho",
            Field::Bakaze => "bakaze",
            Field::Jikaze => "jikaze",
            Field::Dora => "dora",
            Field::Uradora => "uradora",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub fields: BitFlags<Field>,
    pub message: String,
}

impl Warning {
    fn new(fields: impl Into<BitFlags<Field>>, message: impl Into<String>) -> Self {
        Warning {
            fields: fields.into(),
            message: message.into(),
        }
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(Field::as_str).collect()
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field_names().join(", "), self.message)
    }
}

/// Tile kind counts per source, and over all sources with the sources seen
#[derive(Default)]
struct HaiCount {
    tehai: BTreeMap<Hai, usize>,
    dora: BTreeMap<Hai, usize>,
    uradora: BTreeMap<Hai, usize>,
    all: BTreeMap<Hai, (BitFlags<Field>, usize)>,
}

impl HaiCount {
    fn add(&mut self, field: Field, hai: Hai) {
        let kind = hai.kind();
        let map = match field {
            Field::Tehai => &mut self.tehai,
            Field::Dora => &mut self.dora,
            _ => &mut self.uradora,
        };
        *map.entry(kind).or_default() += 1;
        let (fields, count) = self.all.entry(kind).or_default();
        *fields |= field;
        *count += 1;
    }

    fn source_name(field: Field) -> &'static str {
        match field {
            Field::Tehai => "hand",
            Field::Dora => "dora indicators",
            _ => "uradora indicators",
        }
    }

    fn check(&self, out: &mut Vec<Warning>) {
        for (field, map) in [
            (Field::Tehai, &self.tehai),
            (Field::Dora, &self.dora),
            (Field::Uradora, &self.uradora),
        ] {
            for (kind, count) in map {
                if *count > 4 {
                    out.push(Warning::new(
                        field,
                        format!("`{}` appears more than 4 times ({})", kind, count),
                    ));
                    continue;
                }
                let (fields, total) = self.all[kind];
                if total > 4 {
                    let names: Vec<_> = fields.iter().map(Self::source_name).collect();
                    out.push(Warning::new(
                        field,
                        format!(
                            "`{}` appears more than 4 times across {} ({})",
                            kind,
                            names.join(", "),
                            total
                        ),
                    ));
                }
            }
        }
    }
}

impl Env {
    pub fn check_props_with_tehai(&self, tehai: &Tehai) -> Vec<Warning> {
        self.check_props(Some(tehai))
    }

    /// Checks that do not need the hand. Hand-dependent checks are skipped.
    pub fn check_props_without_tehai(&self) -> Vec<Warning> {
        self.check_props(None)
    }

    fn check_props(&self, tehai: Option<&Tehai>) -> Vec<Warning> {
        let mut out = vec![];
        let method = tehai.map(Tehai::method);
        let tsumo = method == Some(WinningMethod::Tsumo);
        let ron = method == Some(WinningMethod::Ron);

        let haitei_name = match method {
            Some(WinningMethod::Tsumo) => "haitei",
            Some(WinningMethod::Ron) => "houtei",
            None => "haitei/houtei",
        };
        let rinshan_name = match method {
            Some(WinningMethod::Tsumo) => "rinshan kaihou",
            Some(WinningMethod::Ron) => "chankan",
            None => "rinshan kaihou/chankan",
        };
        let tenho_name = if self.is_oya() { "tenhou" } else { "chihou" };
        let richi_name = match (self.richi(), self.daburi()) {
            (true, false) => "riichi",
            (false, true) => "double riichi",
            _ => "riichi/double riichi",
        };

        let mut count = HaiCount::default();
        if let Some(tehai) = tehai {
            tehai.all_hai().for_each(|hai| count.add(Field::Tehai, hai));
        }
        self.dora().iter().for_each(|hai| count.add(Field::Dora, *hai));
        self.uradora()
            .iter()
            .for_each(|hai| count.add(Field::Uradora, *hai));
        count.check(&mut out);

        if self.ippatsu() {
            if !self.any_richi() {
                out.push(Warning::new(
                    Field::Ippatsu | Field::Richi | Field::Daburi,
                    "ippatsu needs riichi or double riichi",
                ));
            }
            if self.rinshan() && tsumo {
                out.push(Warning::new(
                    Field::Ippatsu | Field::Rinshan,
                    "ippatsu and rinshan kaihou cannot combine",
                ));
            }
        }
        if self.richi() && self.daburi() {
            out.push(Warning::new(
                Field::Richi | Field::Daburi,
                "riichi and double riichi are exclusive",
            ));
        }
        if let Some(tehai) = tehai {
            if self.richi() && !tehai.is_menzen() {
                out.push(Warning::new(
                    Field::Richi | Field::Tehai,
                    "riichi needs a closed hand",
                ));
            }
            if self.daburi() && !tehai.is_menzen() {
                out.push(Warning::new(
                    Field::Daburi | Field::Tehai,
                    "double riichi needs a closed hand",
                ));
            }
        }
        if self.daburi() && self.ippatsu() {
            let fields = Field::Daburi | Field::Ippatsu;
            if self.haitei() {
                out.push(Warning::new(
                    fields | Field::Haitei,
                    format!("double riichi ippatsu and {} cannot combine", haitei_name),
                ));
            }
            if self.dora().len() > 1 {
                out.push(Warning::new(
                    fields | Field::Dora,
                    "double riichi ippatsu leaves exactly one dora indicator",
                ));
            }
        }
        if self.tenho() {
            if ron {
                out.push(Warning::new(
                    Field::Tenho | Field::Tehai,
                    format!("{} needs a tsumo win", tenho_name),
                ));
            }
            if tehai.map_or(false, |tehai| !tehai.fuuro().is_empty()) {
                out.push(Warning::new(
                    Field::Tenho | Field::Tehai,
                    format!("{} is impossible with melds", tenho_name),
                ));
            }
            if self.richi() {
                out.push(Warning::new(
                    Field::Tenho | Field::Richi,
                    format!("{} and riichi cannot combine", tenho_name),
                ));
            }
            if self.daburi() {
                out.push(Warning::new(
                    Field::Tenho | Field::Daburi,
                    format!("{} and double riichi cannot combine", tenho_name),
                ));
            }
            if self.rinshan() {
                out.push(Warning::new(
                    Field::Tenho | Field::Rinshan,
                    format!("{} and {} cannot combine", tenho_name, rinshan_name),
                ));
            }
            if self.haitei() {
                out.push(Warning::new(
                    Field::Tenho | Field::Haitei,
                    format!("{} and {} cannot combine", tenho_name, haitei_name),
                ));
            }
        }
        if let Some(tehai) = tehai.filter(|_| self.rinshan() && ron) {
            let kind = tehai.agari_hai().hai.kind();
            if count.tehai.get(&kind).copied().unwrap_or(0) > 1 {
                out.push(Warning::new(
                    Field::Tehai,
                    "the chankan tile is also in the hand",
                ));
            }
            if count.dora.contains_key(&kind) {
                out.push(Warning::new(
                    Field::Dora,
                    "the chankan tile is also a dora indicator",
                ));
            }
            if count.uradora.contains_key(&kind) {
                out.push(Warning::new(
                    Field::Uradora,
                    "the chankan tile is also an uradora indicator",
                ));
            }
        }

        let dora = self.dora().len();
        let uradora = self.uradora().len();
        if dora == 0 {
            out.push(Warning::new(Field::Dora, "no dora indicator"));
        } else if dora > MAX_INDICATORS {
            out.push(Warning::new(
                Field::Dora,
                format!("too many dora indicators ({})", dora),
            ));
        }
        if self.any_richi() {
            if dora != uradora {
                out.push(Warning::new(
                    Field::Dora | Field::Uradora,
                    format!(
                        "{} dora indicators but {} uradora indicators",
                        dora, uradora
                    ),
                ));
            }
            if uradora == 0 {
                out.push(Warning::new(
                    Field::Uradora,
                    format!("{} without uradora indicator", richi_name),
                ));
            } else if uradora > MAX_INDICATORS {
                out.push(Warning::new(
                    Field::Uradora,
                    format!("too many uradora indicators ({})", uradora),
                ));
            }
        } else if uradora > 0 {
            out.push(Warning::new(
                Field::Uradora,
                "uradora only counts with riichi or double riichi",
            ));
        }
        out
    }
}
