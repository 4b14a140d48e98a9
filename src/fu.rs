//! Minipoints of a winning reading.

use crate::agari::{Agari, Group, GroupKind, Machi, WinningCombination};
use crate::env::Env;

/// Base fu every non seven-pairs hand starts from
const FUTEI: u32 = 20;
const CHIITOITSU_FU: u32 = 25;

impl Group {
    pub fn compute_fu(&self, env: &Env) -> u32 {
        let yaochu = self.head.is_jihai_or_1_9();
        match self.kind {
            GroupKind::Single | GroupKind::Shuntsu => 0,
            GroupKind::Kootsu => match (self.concealed, yaochu) {
                (false, false) => 2,
                (false, true) => 4,
                (true, false) => 4,
                (true, true) => 8,
            },
            GroupKind::Kantsu => match (self.concealed, yaochu) {
                (false, false) => 8,
                (false, true) => 16,
                (true, false) => 16,
                (true, true) => 32,
            },
            GroupKind::Toitsu => {
                if self.head.is_sangenpai() {
                    return 2;
                }
                let fon = self.head.fon();
                let mut fu = 0;
                if fon == Some(env.bakaze()) {
                    fu += 2;
                }
                if fon == Some(env.jikaze()) {
                    fu += 2;
                }
                fu
            }
        }
    }
}

impl Machi {
    pub fn compute_fu(self) -> u32 {
        match self {
            Machi::Tanki | Machi::Penchan | Machi::Kanchan | Machi::KokushimusouNormal => 2,
            Machi::Ryanmen | Machi::Shanpon | Machi::KokushimusouJuusanmen => 0,
        }
    }
}

impl Agari<'_> {
    pub fn compute_fu(&self, env: &Env) -> u32 {
        if let WinningCombination::Chiitoitsu(..) = self.combination() {
            return CHIITOITSU_FU;
        }
        let tehai = self.tehai();
        let menzen = tehai.is_menzen();
        let ron = !tehai.is_tsumo();

        let groups: u32 = self.groups().iter().map(|g| g.compute_fu(env)).sum();
        let machi = self.machi().compute_fu();
        if groups + machi == 0 {
            if !menzen {
                return 30;
            }
            if !ron {
                return FUTEI;
            }
        }

        let menzen_ron = if menzen && ron { 10 } else { 0 };
        let tsumo = if ron { 0 } else { 2 };
        let total = FUTEI + groups + machi + menzen_ron + tsumo;
        (total + 9) / 10 * 10
    }
}
