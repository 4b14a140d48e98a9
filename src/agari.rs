//! Decomposition of a complete hand into every admissible winning reading.

use std::fmt;

use log::{debug, trace};
use thiserror::Error;

use crate::hand::{Fuuro, KantsuInner, Tehai};
use crate::notation::hai_run_to_string;
use crate::tiles::{Hai, Values};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a winning hand: `{tehai}`")]
pub struct NoAgariError {
    pub tehai: String,
}

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WinningCombination {
    Chiitoitsu([[Hai; 2]; 7]),
    Kokushimusou([Hai; 14]),
    Normal {
        toitsu: [Hai; 2],
        /// Concealed sets only, 4 minus the number of melds
        mentsu: Vec<[Hai; 3]>,
    },
}

impl fmt::Debug for WinningCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinningCombination::Chiitoitsu(toitsu7) => {
                let toitsu_list: Vec<_> = toitsu7.iter().map(|t| hai_run_to_string(t)).collect();
                f.debug_tuple("Chiitoitsu").field(&toitsu_list).finish()
            }
            WinningCombination::Kokushimusou(hai14) => f
                .debug_tuple("Kokushimusou")
                .field(&hai_run_to_string(hai14))
                .finish(),
            WinningCombination::Normal { toitsu, mentsu } => {
                let mentsu_list: Vec<_> = mentsu.iter().map(|m| hai_run_to_string(m)).collect();
                f.debug_struct("Normal")
                    .field("toitsu", &hai_run_to_string(toitsu))
                    .field("mentsu", &mentsu_list)
                    .finish()
            }
        }
    }
}

impl WinningCombination {
    /// Concealed groups, the pair first
    pub fn mentsu(&self) -> Vec<Mentsu> {
        match self {
            WinningCombination::Chiitoitsu(toitsu7) => {
                toitsu7.iter().copied().map(Mentsu::Toitsu).collect()
            }
            WinningCombination::Kokushimusou(hai14) => {
                let mut out = vec![];
                let mut singles = vec![];
                let mut iter = hai14.iter().copied().peekable();
                while let Some(hai) = iter.next() {
                    match iter.next_if(|next| next.is_same(hai)) {
                        Some(next) => out.push(Mentsu::Toitsu([hai, next])),
                        None => singles.push(Mentsu::Single(hai)),
                    }
                }
                out.extend(singles);
                out
            }
            WinningCombination::Normal { toitsu, mentsu } => std::iter::once(Mentsu::Toitsu(*toitsu))
                .chain(mentsu.iter().map(|m| {
                    if m[0].is_same(m[1]) {
                        Mentsu::Kootsu(*m)
                    } else {
                        Mentsu::Shuntsu(*m)
                    }
                }))
                .collect(),
        }
    }
}

/// One concealed group of a winning reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mentsu {
    Toitsu([Hai; 2]),
    Shuntsu([Hai; 3]),
    Kootsu([Hai; 3]),
    /// Lone terminal or honor of a thirteen orphans hand
    Single(Hai),
}

impl Mentsu {
    pub fn tiles(&self) -> &[Hai] {
        match self {
            Mentsu::Toitsu(hai) => &hai[..],
            Mentsu::Shuntsu(hai) | Mentsu::Kootsu(hai) => &hai[..],
            Mentsu::Single(hai) => std::slice::from_ref(hai),
        }
    }

    pub fn head(&self) -> Hai {
        self.tiles()[0].kind()
    }

    /// Same shape and kinds, ignoring red fives
    fn is_same(&self, other: &Mentsu) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
            && self
                .tiles()
                .iter()
                .zip(other.tiles())
                .all(|(a, b)| a.is_same(*b))
    }

    fn to_machi(&self, agari_hai: Hai) -> Option<Machi> {
        match *self {
            Mentsu::Toitsu([hai, _]) => hai.is_same(agari_hai).then_some(Machi::Tanki),
            Mentsu::Kootsu([hai, ..]) => hai.is_same(agari_hai).then_some(Machi::Shanpon),
            Mentsu::Single(hai) => hai.is_same(agari_hai).then_some(Machi::KokushimusouNormal),
            Mentsu::Shuntsu([h0, h1, h2]) => {
                if h2.is_same(agari_hai) {
                    if h0.value() == Some(Values::Ii) {
                        Some(Machi::Penchan)
                    } else {
                        Some(Machi::Ryanmen)
                    }
                } else if h1.is_same(agari_hai) {
                    Some(Machi::Kanchan)
                } else if h0.is_same(agari_hai) {
                    if h2.value() == Some(Values::Kyuu) {
                        Some(Machi::Penchan)
                    } else {
                        Some(Machi::Ryanmen)
                    }
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for Mentsu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hai_run_to_string(self.tiles()))
    }
}

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone)]
pub enum Machi {
    Tanki,
    Penchan,
    Kanchan,
    Ryanmen,
    Shanpon,
    KokushimusouNormal,
    KokushimusouJuusanmen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Single,
    Toitsu,
    Shuntsu,
    Kootsu,
    Kantsu,
}

/// Concealed group or meld, reduced to what scoring looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub kind: GroupKind,
    /// Lowest tile, red flag cleared
    pub head: Hai,
    /// A triplet completed by ron counts as open
    pub concealed: bool,
}

impl Group {
    pub fn is_kootsu_or_kantsu(&self) -> bool {
        matches!(self.kind, GroupKind::Kootsu | GroupKind::Kantsu)
    }

    pub fn has_yaochu(&self) -> bool {
        match self.kind {
            GroupKind::Shuntsu => matches!(self.head.value(), Some(Values::Ii | Values::Chii)),
            _ => self.head.is_jihai_or_1_9(),
        }
    }
}

impl From<&Fuuro> for Group {
    fn from(fuuro: &Fuuro) -> Self {
        let kind = match fuuro {
            Fuuro::Shuntsu { .. } => GroupKind::Shuntsu,
            Fuuro::Kootsu { .. } => GroupKind::Kootsu,
            Fuuro::Kantsu(..) => GroupKind::Kantsu,
        };
        Group {
            kind,
            head: fuuro.head().kind(),
            concealed: matches!(fuuro, Fuuro::Kantsu(KantsuInner::Ankan { .. })),
        }
    }
}

/// One reading of a winning hand: a partition of the concealed tiles and
/// the group completed by the winning tile.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Agari<'t> {
    combination: WinningCombination,
    machi: Machi,
    /// Index into [`WinningCombination::mentsu`]
    machi_mentsu: usize,
    tehai: &'t Tehai,
}

impl<'t> Agari<'t> {
    pub fn combination(&self) -> &WinningCombination {
        &self.combination
    }

    pub fn machi(&self) -> Machi {
        self.machi
    }

    pub fn machi_mentsu_index(&self) -> usize {
        self.machi_mentsu
    }

    pub fn tehai(&self) -> &'t Tehai {
        self.tehai
    }

    pub fn mentsu(&self) -> Vec<Mentsu> {
        self.combination.mentsu()
    }

    pub fn janto(&self) -> Option<Hai> {
        match &self.combination {
            WinningCombination::Normal { toitsu, .. } => Some(toitsu[0].kind()),
            _ => None,
        }
    }

    /// Every group of the hand: concealed groups, then melds
    pub fn groups(&self) -> Vec<Group> {
        let ron = !self.tehai.is_tsumo();
        self.mentsu()
            .iter()
            .enumerate()
            .map(|(i, mentsu)| {
                let kind = match mentsu {
                    Mentsu::Single(..) => GroupKind::Single,
                    Mentsu::Toitsu(..) => GroupKind::Toitsu,
                    Mentsu::Shuntsu(..) => GroupKind::Shuntsu,
                    Mentsu::Kootsu(..) => GroupKind::Kootsu,
                };
                Group {
                    kind,
                    head: mentsu.head(),
                    concealed: !(ron && i == self.machi_mentsu),
                }
            })
            .chain(self.tehai.fuuro().iter().map(Group::from))
            .collect()
    }
}

impl fmt::Display for Agari<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mentsu) in self.mentsu().iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            if i == self.machi_mentsu {
                write!(f, "{{{}}}", mentsu)?;
            } else {
                write!(f, "{}", mentsu)?;
            }
        }
        for fuuro in self.tehai.fuuro() {
            write!(f, " {}", fuuro)?;
        }
        Ok(())
    }
}

/// Readings of a hand in canonical order. A clone taken before iterating
/// replays the whole sequence.
#[derive(Debug, Clone)]
pub struct AgariCombinations<'t> {
    iter: std::vec::IntoIter<Agari<'t>>,
}

impl<'t> Iterator for AgariCombinations<'t> {
    type Item = Agari<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for AgariCombinations<'_> {}

impl Tehai {
    pub fn to_agari_combinations(&self) -> Result<AgariCombinations<'_>, NoAgariError> {
        let te = self.closed_hai();
        let mut combinations = vec![];
        if self.fuuro().is_empty() {
            combinations.extend(try_kokushimusou(&te).map(WinningCombination::Kokushimusou));
            combinations.extend(try_chiitoitsu(&te).map(WinningCombination::Chiitoitsu));
        }
        combinations.extend(try_normal_combinations(&te));

        let agari_hai = self.agari_hai().hai;
        let mut agari = vec![];
        for combination in combinations {
            let mentsu = combination.mentsu();
            for (i, m) in mentsu.iter().enumerate() {
                if mentsu[..i].iter().any(|prev| prev.is_same(m)) {
                    continue;
                }
                let machi = match (m.to_machi(agari_hai), &combination) {
                    (None, _) => continue,
                    (Some(Machi::Tanki), WinningCombination::Kokushimusou(..)) => {
                        Machi::KokushimusouJuusanmen
                    }
                    (Some(machi), _) => machi,
                };
                agari.push(Agari {
                    combination: combination.clone(),
                    machi,
                    machi_mentsu: i,
                    tehai: self,
                });
            }
        }
        agari.sort();
        agari.dedup();

        if agari.is_empty() {
            debug!("No agari for {}", self);
            return Err(NoAgariError {
                tehai: self.to_string(),
            });
        }
        for a in &agari {
            debug!("Agari found: {} ({:?})", a, a.machi);
        }
        Ok(AgariCombinations {
            iter: agari.into_iter(),
        })
    }
}

fn try_normal_combinations(te: &[Hai]) -> Vec<WinningCombination> {
    let mut out = vec![];
    for (i, pair) in te.windows(2).enumerate() {
        if !pair[0].is_same(pair[1]) || (i > 0 && te[i - 1].is_same(pair[0])) {
            continue;
        }
        let toitsu = [pair[0], pair[1]];
        let mut remaining = te.to_vec();
        remaining.drain(i..i + 2);
        trace!("Trying toitsu {}", hai_run_to_string(&toitsu));

        let mut found = vec![];
        pickup_mentsu(&remaining, &mut vec![], &mut found);
        for mut mentsu in found {
            mentsu.sort();
            out.push(WinningCombination::Normal { toitsu, mentsu });
        }
    }
    out.sort();
    out.dedup();
    out
}

/// Peel the lowest tile off as a triplet or as the start of a run, recursively.
fn pickup_mentsu(remaining: &[Hai], picked: &mut Vec<[Hai; 3]>, out: &mut Vec<Vec<[Hai; 3]>>) {
    let first = match remaining.first() {
        Some(hai) => *hai,
        None => {
            out.push(picked.clone());
            return;
        }
    };
    trace!(
        "Picked {:?}, remaining {}",
        picked.iter().map(|m| hai_run_to_string(m)).collect::<Vec<_>>(),
        hai_run_to_string(remaining)
    );

    if let [_, second, third, ..] = *remaining {
        if first.is_same(second) && first.is_same(third) {
            picked.push([first, second, third]);
            pickup_mentsu(&remaining[3..], picked, out);
            picked.pop();
        }
    }

    if let Some((shuntsu, rest)) = take_shuntsu(first, &remaining[1..]) {
        picked.push(shuntsu);
        pickup_mentsu(&rest, picked, out);
        picked.pop();
    }
}

fn take_shuntsu(first: Hai, rest: &[Hai]) -> Option<([Hai; 3], Vec<Hai>)> {
    match first.value() {
        Some(value) if value <= Values::Chii => {}
        _ => return None,
    }
    let mut rest = rest.to_vec();
    let second = remove_kind(&mut rest, first.next())?;
    let third = remove_kind(&mut rest, second.next())?;
    Some(([first, second, third], rest))
}

/// Plain fives sort before red ones, so a red five is kept while a plain one
/// is available.
fn remove_kind(te: &mut Vec<Hai>, kind: Hai) -> Option<Hai> {
    let pos = te.iter().position(|hai| hai.is_same(kind))?;
    Some(te.remove(pos))
}

fn try_chiitoitsu(te: &[Hai]) -> Option<[[Hai; 2]; 7]> {
    if te.len() != 14 {
        return None;
    }
    let toitsu: Vec<[Hai; 2]> = te.chunks(2).map(|c| [c[0], c[1]]).collect();
    if toitsu.iter().any(|t| !t[0].is_same(t[1]))
        || toitsu.windows(2).any(|w| w[0][1].is_same(w[1][0]))
    {
        return None;
    }
    toitsu.try_into().ok()
}

fn try_kokushimusou(te: &[Hai]) -> Option<[Hai; 14]> {
    let te: [Hai; 14] = te.try_into().ok()?;
    if !te.iter().all(|hai| hai.is_jihai_or_1_9()) {
        return None;
    }
    let kinds = 1 + te.windows(2).filter(|w| !w[0].is_same(w[1])).count();
    (kinds == 13).then_some(te)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::str::FromStr;

    fn tehai(s: &str) -> Tehai {
        Tehai::from_str(s).unwrap()
    }

    fn readings(tehai: &Tehai) -> Vec<String> {
        tehai
            .to_agari_combinations()
            .unwrap()
            .map(|agari| agari.to_string())
            .collect()
    }

    fn machi(tehai: &Tehai) -> Vec<Machi> {
        tehai
            .to_agari_combinations()
            .unwrap()
            .map(|agari| agari.machi())
            .collect()
    }

    #[test]
    fn test_chiitoitsu_agari() {
        let t = tehai("1199m1199p11s223j !3j");
        let combinations: Vec<_> = t.to_agari_combinations().unwrap().collect();
        assert_eq!(combinations.len(), 1);
        assert_matches!(
            combinations[0].combination(),
            WinningCombination::Chiitoitsu(..)
        );
        assert_eq!(combinations[0].machi(), Machi::Tanki);
    }

    #[test]
    fn test_chiitoitsu_kan_edgecase() {
        assert_matches!(
            tehai("1111m99m11p1122j3j !3j").to_agari_combinations(),
            Err(NoAgariError { .. })
        );
    }

    #[test]
    fn test_no_agari() {
        let err = tehai("1357m2468p1357s9s ?1j")
            .to_agari_combinations()
            .unwrap_err();
        assert_eq!(err.tehai, "1357m2468p13579s ?1j");
    }

    #[test]
    fn test_kokushimusou_agari() {
        assert_eq!(
            machi(&tehai("19m19p19s1234567j ?1m")),
            vec![Machi::KokushimusouJuusanmen]
        );
        assert_eq!(
            machi(&tehai("19m19p19s1234577j ?6j")),
            vec![Machi::KokushimusouNormal]
        );
        assert_eq!(
            readings(&tehai("19m19p19s1234577j ?6j")),
            vec!["77j,1m,9m,1p,9p,1s,9s,1j,2j,3j,4j,5j,{6j}"]
        );
    }

    #[test]
    fn test_find_winning_comb_normal_many() {
        let t = tehai("1112223334566m !6m");
        let combinations: Vec<_> = t
            .to_agari_combinations()
            .unwrap()
            .map(|agari| format!("{:?}", agari.combination()))
            .collect();
        let mut distinct = combinations.clone();
        distinct.dedup();
        assert_eq!(
            distinct,
            vec![
                r#"Normal { toitsu: "33m", mentsu: ["111m", "222m", "345m", "666m"] }"#,
                r#"Normal { toitsu: "66m", mentsu: ["111m", "222m", "333m", "456m"] }"#,
                r#"Normal { toitsu: "66m", mentsu: ["123m", "123m", "123m", "456m"] }"#,
            ]
        );
    }

    #[test]
    fn test_find_winning_comb_ryanpeikou() {
        let t = tehai("1122334455667m !7m");
        let combinations: Vec<_> = t
            .to_agari_combinations()
            .unwrap()
            .map(|agari| agari.combination().clone())
            .collect();
        assert_eq!(combinations.len(), 4);
        assert_eq!(
            combinations
                .iter()
                .filter(|c| matches!(c, WinningCombination::Chiitoitsu(..)))
                .count(),
            1
        );
    }

    #[test]
    fn test_machi() {
        assert_eq!(
            machi(&tehai("12m456p789s11j234s ?3m")),
            vec![Machi::Penchan]
        );
        assert_eq!(
            machi(&tehai("89m456p789s11j234s ?7m")),
            vec![Machi::Penchan]
        );
        assert_eq!(
            machi(&tehai("13m456p789s11j234s ?2m")),
            vec![Machi::Kanchan]
        );
        assert_eq!(
            machi(&tehai("23m456p789s11j234s ?1m")),
            vec![Machi::Ryanmen]
        );
        assert_eq!(
            machi(&tehai("123m456p789s234s1j ?1j")),
            vec![Machi::Tanki]
        );
        assert_eq!(
            machi(&tehai("123m456p789s11j22s ?2s")),
            vec![Machi::Shanpon]
        );
    }

    #[test]
    fn test_identical_groups_counted_once() {
        // Two identical 345m runs give one reading
        let t = tehai("33445m234p789s11j ?5m");
        assert_eq!(machi(&t), vec![Machi::Ryanmen]);
        let t = tehai("34567m234p33789s ?5m");
        assert_eq!(
            readings(&t),
            vec!["33s,{345m},567m,234p,789s", "33s,345m,{567m},234p,789s"]
        );
    }

    #[test]
    fn test_red_five_is_same_kind() {
        let t = tehai("34m234p789s11j234s ?5$m");
        assert_eq!(machi(&t), vec![Machi::Ryanmen]);
    }

    #[test]
    fn test_display_with_fuuro() {
        let t = tehai("123m456p789s1j ^222s ?1j");
        assert_eq!(readings(&t), vec!["{11j},123m,456p,789s ^222s"]);
    }

    #[test]
    fn test_clone_restarts() {
        let t = tehai("1112345678999m ?5m");
        let combinations = t.to_agari_combinations().unwrap();
        let len = combinations.len();
        assert_eq!(combinations.clone().count(), len);
        assert_eq!(combinations.count(), len);
    }

    #[test]
    fn test_groups_ron_kootsu_is_open() {
        let t = tehai("123m456p789s11j22s ?2s");
        let agari = t.to_agari_combinations().unwrap().next().unwrap();
        let groups = agari.groups();
        let kootsu: Vec<_> = groups
            .iter()
            .filter(|g| g.kind == GroupKind::Kootsu)
            .collect();
        assert_eq!(kootsu.len(), 1);
        assert!(!kootsu[0].concealed);
    }
}
