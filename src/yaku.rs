//! Yaku of a winning reading, its score, and the ranking of every reading of
//! a hand.

use std::cmp::Ordering;
use std::fmt;

use log::debug;
use num_bigint::BigUint;
use thiserror::Error;

use crate::agari::{Agari, Group, GroupKind, Machi, NoAgariError, WinningCombination};
use crate::env::Env;
use crate::hand::Tehai;
use crate::points::{base_point, Payment, PointClass, AOTENJO_YAKUMAN_HAN};
use crate::tiles::{Hai, Sangen, Suu, Values, SUU};

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone)]
pub enum Yaku {
    Menzentsumo,
    Riichi,
    Ippatsu,
    Tanyao,
    Pinfu,
    Iipeikou,
    Haku,
    Hatsu,
    Chun,
    BaNoKaze,
    JibunNoKaze,
    Chankan,
    RinshanKaihou,
    Haiteiraoyue,
    Houteiraoyui,
    Daburii,
    Chiitoitsu,
    Toitoi,
    SanAnkou,
    SanshokuDoukou,
    SanshokuDoujun,
    Honroutou,
    Ittsuu,
    Chanta,
    Shousangen,
    Sankantsu,
    HonItsu,
    Junchan,
    Ryanpeikou,
    ChinItsu,
    Tenhou,
    Chihou,
    Ryuuiisou,
    Daisangen,
    Shousuushii,
    Tsuuiisou,
    Kokushimusou,
    Chuurenpoutou,
    Suuankou,
    Chinroutou,
    Suukantsu,
    SuuankouTanki,
    Daisuushi,
    JunseiChuurenpoutou,
    KokushimusouJuusanmen,
    Dora,
    Uradora,
    Akadora,
}

use Yaku::*;

impl Yaku {
    /// Value of the yaku. Yakuhai and dora count this once per set or tile.
    pub fn han(self, closed: bool) -> YakuValue {
        use YakuValue::*;
        match self {
            Menzentsumo => Han(1),
            Riichi => Han(1),
            Ippatsu => Han(1),
            Tanyao => Han(1),
            Pinfu => Han(1),
            Iipeikou => Han(1),
            Haku => Han(1),
            Hatsu => Han(1),
            Chun => Han(1),
            BaNoKaze => Han(1),
            JibunNoKaze => Han(1),
            Chankan => Han(1),
            RinshanKaihou => Han(1),
            Haiteiraoyue => Han(1),
            Houteiraoyui => Han(1),
            Daburii => Han(2),
            Chiitoitsu => Han(2),
            Toitoi => Han(2),
            SanAnkou => Han(2),
            SanshokuDoukou => Han(2),
            SanshokuDoujun => Han(if closed { 2 } else { 1 }),
            Honroutou => Han(2),
            Ittsuu => Han(if closed { 2 } else { 1 }),
            Chanta => Han(if closed { 2 } else { 1 }),
            Shousangen => Han(2),
            Sankantsu => Han(2),
            HonItsu => Han(if closed { 3 } else { 2 }),
            Junchan => Han(if closed { 3 } else { 2 }),
            Ryanpeikou => Han(3),
            ChinItsu => Han(if closed { 6 } else { 5 }),
            Tenhou => Yakuman(1),
            Chihou => Yakuman(1),
            Ryuuiisou => Yakuman(1),
            Daisangen => Yakuman(1),
            Shousuushii => Yakuman(1),
            Tsuuiisou => Yakuman(1),
            Kokushimusou => Yakuman(1),
            Chuurenpoutou => Yakuman(1),
            Suuankou => Yakuman(1),
            Chinroutou => Yakuman(1),
            Suukantsu => Yakuman(1),
            SuuankouTanki => Yakuman(2),
            Daisuushi => Yakuman(2),
            JunseiChuurenpoutou => Yakuman(2),
            KokushimusouJuusanmen => Yakuman(2),
            Dora => Han(1),
            Uradora => Han(1),
            Akadora => Han(1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Menzentsumo => "Menzen tsumo",
            Riichi => "Riichi",
            Ippatsu => "Ippatsu",
            Tanyao => "Tanyao",
            Pinfu => "Pinfu",
            Iipeikou => "Iipeikou",
            Haku => "Yakuhai: haku",
            Hatsu => "Yakuhai: hatsu",
            Chun => "Yakuhai: chun",
            BaNoKaze => "Yakuhai: round wind",
            JibunNoKaze => "Yakuhai: seat wind",
            Chankan => "Chankan",
            RinshanKaihou => "Rinshan kaihou",
            Haiteiraoyue => "Haitei raoyue",
            Houteiraoyui => "Houtei raoyui",
            Daburii => "Double riichi",
            Chiitoitsu => "Chiitoitsu",
            Toitoi => "Toitoi",
            SanAnkou => "San ankou",
            SanshokuDoukou => "Sanshoku doukou",
            SanshokuDoujun => "Sanshoku doujun",
            Honroutou => "Honroutou",
            Ittsuu => "Ittsuu",
            Chanta => "Chanta",
            Shousangen => "Shousangen",
            Sankantsu => "Sankantsu",
            HonItsu => "Honitsu",
            Junchan => "Junchan",
            Ryanpeikou => "Ryanpeikou",
            ChinItsu => "Chinitsu",
            Tenhou => "Tenhou",
            Chihou => "Chihou",
            Ryuuiisou => "Ryuuiisou",
            Daisangen => "Daisangen",
            Shousuushii => "Shousuushii",
            Tsuuiisou => "Tsuuiisou",
            Kokushimusou => "Kokushi musou",
            Chuurenpoutou => "Chuuren poutou",
            Suuankou => "Suuankou",
            Chinroutou => "Chinroutou",
            Suukantsu => "Suukantsu",
            SuuankouTanki => "Suuankou tanki",
            Daisuushi => "Daisuushii",
            JunseiChuurenpoutou => "Junsei chuuren poutou",
            KokushimusouJuusanmen => "Kokushi musou juusanmen",
            Dora => "Dora",
            Uradora => "Uradora",
            Akadora => "Akadora",
        }
    }
}

impl fmt::Display for Yaku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone)]
pub enum YakuValue {
    Han(u32),
    Yakuman(u32),
}

impl YakuValue {
    /// Han this value is worth when limits are off
    fn aotenjo_han(self) -> u32 {
        match self {
            YakuValue::Han(han) => han,
            YakuValue::Yakuman(n) => n * AOTENJO_YAKUMAN_HAN,
        }
    }
}

impl std::ops::Add for YakuValue {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        use YakuValue::*;
        match (self, other) {
            (Han(han1), Han(han2)) => Han(han1 + han2),
            (Yakuman(yakuman), Han(_)) => Yakuman(yakuman),
            (Han(_), Yakuman(yakuman)) => Yakuman(yakuman),
            (Yakuman(yakuman1), Yakuman(yakuman2)) => Yakuman(yakuman1 + yakuman2),
        }
    }
}

impl fmt::Display for YakuValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YakuValue::Han(han) => write!(f, "{} han", han),
            YakuValue::Yakuman(1) => write!(f, "yakuman"),
            YakuValue::Yakuman(n) => write!(f, "{}x yakuman", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no yaku in `{agari}`")]
pub struct NoYakuError {
    pub agari: String,
}

/// Score of one reading
#[derive(Debug, Clone)]
pub struct YakuResult {
    pub detail: Vec<(Yaku, YakuValue)>,
    pub rank: YakuValue,
    pub fu: u32,
    pub class: PointClass,
    pub payment: Payment,
    /// Total received by the winner
    pub point: BigUint,
}

impl PartialEq for YakuResult {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for YakuResult {}

impl PartialOrd for YakuResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for YakuResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.point
            .cmp(&other.point)
            .then_with(|| self.rank.cmp(&other.rank))
            .then_with(|| self.fu.cmp(&other.fu))
    }
}

/// A reading with everything the yaku checks look at precomputed
struct Judge<'a, 't> {
    agari: &'a Agari<'t>,
    env: &'a Env,
    groups: Vec<Group>,
    /// Every tile, quads counting four
    hai: Vec<Hai>,
}

type JudgeFn = fn(&Judge) -> Option<(Yaku, YakuValue)>;

const YAKU_LIST: &[JudgeFn] = &[
    riichi,
    ippatsu,
    menzentsumo,
    tanyao,
    pinfu,
    iipeikou,
    bakaze,
    jikaze,
    haku,
    hatsu,
    chun,
    rinshan,
    haitei,
    sanshoku_doujun,
    ittsuu,
    chanta,
    chiitoitsu,
    toitoi,
    sanankou,
    honroutou,
    sanshoku_doukou,
    sankantsu,
    shousangen,
    daburii,
    honitsu,
    junchan,
    ryanpeikou,
    chinitsu,
];

const YAKUMAN_LIST: &[JudgeFn] = &[
    kokushimusou,
    suuankou,
    daisangen,
    tsuuiisou,
    shousuushii,
    daisuushi,
    ryuuiisou,
    chinroutou,
    suukantsu,
    chuurenpoutou,
    tenhou,
];

const DORA_LIST: &[JudgeFn] = &[dora, uradora, akadora];

impl<'a, 't> Judge<'a, 't> {
    fn new(agari: &'a Agari<'t>, env: &'a Env) -> Self {
        Judge {
            agari,
            env,
            groups: agari.groups(),
            hai: agari.tehai().all_hai().collect(),
        }
    }

    fn menzen(&self) -> bool {
        self.agari.tehai().is_menzen()
    }

    fn tsumo(&self) -> bool {
        self.agari.tehai().is_tsumo()
    }

    fn fixed(&self, yaku: Yaku) -> (Yaku, YakuValue) {
        (yaku, yaku.han(self.menzen()))
    }

    fn count(&self, f: impl Fn(&Group) -> bool) -> usize {
        self.groups.iter().filter(|g| f(g)).count()
    }

    fn num_anko(&self) -> usize {
        self.count(|g| g.kind == GroupKind::Kootsu && g.concealed)
    }

    fn num_ankan(&self) -> usize {
        self.count(|g| g.kind == GroupKind::Kantsu && g.concealed)
    }

    fn num_kantsu(&self) -> usize {
        self.count(|g| g.kind == GroupKind::Kantsu)
    }

    fn num_shuntsu(&self) -> usize {
        self.count(|g| g.kind == GroupKind::Shuntsu)
    }

    fn num_toitsu(&self) -> usize {
        self.count(|g| g.kind == GroupKind::Toitsu)
    }

    fn num_single(&self) -> usize {
        self.count(|g| g.kind == GroupKind::Single)
    }

    fn num_hai(&self) -> usize {
        self.hai.len()
    }

    fn num_jihai(&self) -> usize {
        self.hai.iter().filter(|h| h.is_jihai()).count()
    }

    fn num_yaochu(&self) -> usize {
        self.hai.iter().filter(|h| h.is_jihai_or_1_9()).count()
    }

    fn num_suu(&self, suu: Suu) -> usize {
        self.hai.iter().filter(|h| h.suu_kind() == Some(suu)).count()
    }

    fn is_one_suit(&self) -> bool {
        SUU.iter().any(|suu| self.num_suu(*suu) == self.num_hai())
    }

    fn machi_group(&self) -> Group {
        self.groups[self.agari.machi_mentsu_index()]
    }

    fn shuntsu_heads(&self) -> impl Iterator<Item = Hai> + '_ {
        self.groups
            .iter()
            .filter(|g| g.kind == GroupKind::Shuntsu)
            .map(|g| g.head)
    }

    fn kootsu_heads(&self) -> impl Iterator<Item = Hai> + '_ {
        self.groups
            .iter()
            .filter(|g| g.is_kootsu_or_kantsu())
            .map(|g| g.head)
    }

    /// One bit per wind with a triplet or quad
    fn kazehai_bits(&self) -> u8 {
        self.kootsu_heads()
            .filter_map(Hai::fon)
            .fold(0, |bits, fon| bits | 1 << fon as u8)
    }

    /// One bit per dragon with a triplet or quad
    fn sangenpai_bits(&self) -> u8 {
        self.kootsu_heads()
            .filter_map(Hai::sangen)
            .fold(0, |bits, sangen| bits | 1 << sangen as u8)
    }

    /// Triplets and quads of the given kind
    fn yakuhai(&self, hai: Hai) -> u32 {
        self.kootsu_heads().filter(|h| h.is_same(hai)).count() as u32
    }

    /// Pairs of identical runs. Four identical runs count as two.
    fn num_peko(&self) -> usize {
        let mut head_count: Vec<(Hai, usize)> = vec![];
        for head in self.shuntsu_heads() {
            match head_count.iter_mut().find(|(h, _)| h.is_same(head)) {
                Some((_, count)) => *count += 1,
                None => head_count.push((head, 1)),
            }
        }
        head_count.iter().filter(|(_, c)| *c > 1).count()
            + head_count.iter().filter(|(_, c)| *c > 3).count()
    }

    fn judge_list(&self, list: &[JudgeFn]) -> Vec<(Yaku, YakuValue)> {
        list.iter().filter_map(|f| f(self)).collect()
    }

    fn judge(&self) -> Option<(YakuValue, Vec<(Yaku, YakuValue)>)> {
        let mut detail = self.judge_list(YAKUMAN_LIST);
        if !detail.is_empty() && !self.env.aotenjo() {
            let rank = detail
                .iter()
                .fold(YakuValue::Yakuman(0), |acc, (_, value)| acc + *value);
            return Some((rank, detail));
        }

        detail.extend(self.judge_list(YAKU_LIST));
        if detail.is_empty() {
            return None;
        }
        detail.extend(self.judge_list(DORA_LIST));
        let han = detail.iter().map(|(_, value)| value.aotenjo_han()).sum();
        Some((YakuValue::Han(han), detail))
    }
}

fn riichi(j: &Judge) -> Option<(Yaku, YakuValue)> {
    (j.env.richi() && !j.env.daburi()).then(|| j.fixed(Riichi))
}

fn ippatsu(j: &Judge) -> Option<(Yaku, YakuValue)> {
    (j.env.ippatsu() && j.env.any_richi()).then(|| j.fixed(Ippatsu))
}

fn menzentsumo(j: &Judge) -> Option<(Yaku, YakuValue)> {
    // Tenhou and a tsumo suuankou already count the draw
    (!j.env.tenho()
        && (j.num_anko() + j.num_ankan() != 4 || j.machi_group().kind == GroupKind::Toitsu)
        && j.menzen()
        && j.tsumo())
    .then(|| j.fixed(Menzentsumo))
}

fn tanyao(j: &Judge) -> Option<(Yaku, YakuValue)> {
    j.hai
        .iter()
        .all(|h| !h.is_jihai_or_1_9())
        .then(|| j.fixed(Tanyao))
}

fn pinfu(j: &Judge) -> Option<(Yaku, YakuValue)> {
    let janto = Group {
        kind: GroupKind::Toitsu,
        head: j.agari.janto()?,
        concealed: true,
    };
    (j.menzen()
        && j.agari.machi() == Machi::Ryanmen
        && j.num_shuntsu() == 4
        && janto.compute_fu(j.env) == 0)
        .then(|| j.fixed(Pinfu))
}

fn iipeikou(j: &Judge) -> Option<(Yaku, YakuValue)> {
    (j.menzen() && j.num_peko() == 1).then(|| j.fixed(Iipeikou))
}

fn bakaze(j: &Judge) -> Option<(Yaku, YakuValue)> {
    if j.kazehai_bits() == 0b1111 {
        return None;
    }
    let count = j.yakuhai(j.env.bakaze().into());
    (count > 0).then_some((BaNoKaze, YakuValue::Han(count)))
}

fn jikaze(j: &Judge) -> Option<(Yaku, YakuValue)> {
    if j.kazehai_bits() == 0b1111 {
        return None;
    }
    let count = j.yakuhai(j.env.jikaze().into());
    (count > 0).then_some((JibunNoKaze, YakuValue::Han(count)))
}

fn sangenpai(j: &Judge, sangen: Sangen, yaku: Yaku) -> Option<(Yaku, YakuValue)> {
    if j.sangenpai_bits() == 0b111 {
        return None;
    }
    let count = j.yakuhai(sangen.into());
    (count > 0).then_some((yaku, YakuValue::Han(count)))
}

fn haku(j: &Judge) -> Option<(Yaku, YakuValue)> {
    sangenpai(j, Sangen::Haku, Haku)
}

fn hatsu(j: &Judge) -> Option<(Yaku, YakuValue)> {
    sangenpai(j, Sangen::Hatsu, Hatsu)
}

fn chun(j: &Judge) -> Option<(Yaku, YakuValue)> {
    sangenpai(j, Sangen::Chun, Chun)
}

fn rinshan(j: &Judge) -> Option<(Yaku, YakuValue)> {
    j.env
        .rinshan()
        .then(|| j.fixed(if j.tsumo() { RinshanKaihou } else { Chankan }))
}

fn haitei(j: &Judge) -> Option<(Yaku, YakuValue)> {
    j.env
        .haitei()
        .then(|| j.fixed(if j.tsumo() { Haiteiraoyue } else { Houteiraoyui }))
}

fn suu_bit(hai: Hai) -> Option<u8> {
    hai.suu_kind().map(|suu| 1 << suu as u8)
}

/// Is there a number whose heads cover all three suits?
fn three_suits(heads: impl Iterator<Item = Hai>) -> bool {
    let mut masks = [0u8; 9];
    for head in heads {
        if let Some(bit) = suu_bit(head) {
            masks[head.number() as usize - 1] |= bit;
        }
    }
    masks.iter().any(|mask| *mask == 0b111)
}

fn sanshoku_doujun(j: &Judge) -> Option<(Yaku, YakuValue)> {
    three_suits(j.shuntsu_heads()).then(|| j.fixed(SanshokuDoujun))
}

fn ittsuu(j: &Judge) -> Option<(Yaku, YakuValue)> {
    SUU.iter()
        .any(|suu| {
            [Values::Ii, Values::Suu, Values::Chii]
                .iter()
                .all(|value| j.shuntsu_heads().any(|h| h == Hai::suu(*suu, *value)))
        })
        .then(|| j.fixed(Ittsuu))
}

fn chanta(j: &Judge) -> Option<(Yaku, YakuValue)> {
    (j.num_shuntsu() > 0 && j.num_jihai() > 0 && j.groups.iter().all(Group::has_yaochu))
        .then(|| j.fixed(Chanta))
}

fn chiitoitsu(j: &Judge) -> Option<(Yaku, YakuValue)> {
    (j.num_toitsu() == 7).then(|| j.fixed(Chiitoitsu))
}

fn toitoi(j: &Judge) -> Option<(Yaku, YakuValue)> {
    // Suuankou, suukantsu, chinroutou and daisuushii replace it
    (j.kootsu_heads().count() == 4
        && j.num_kantsu() < 4
        && j.num_anko() + j.num_ankan() < 4
        && j.num_yaochu() - j.num_jihai() < j.num_hai()
        && j.kazehai_bits() != 0b1111)
        .then(|| j.fixed(Toitoi))
}

fn sanankou(j: &Judge) -> Option<(Yaku, YakuValue)> {
    (j.num_anko() + j.num_ankan() == 3).then(|| j.fixed(SanAnkou))
}

fn honroutou(j: &Judge) -> Option<(Yaku, YakuValue)> {
    (j.num_single() == 0
        && j.num_jihai() > 0
        && j.num_jihai() < j.num_hai()
        && j.num_yaochu() == j.num_hai())
    .then(|| j.fixed(Honroutou))
}

fn sanshoku_doukou(j: &Judge) -> Option<(Yaku, YakuValue)> {
    three_suits(j.kootsu_heads()).then(|| j.fixed(SanshokuDoukou))
}

fn sankantsu(j: &Judge) -> Option<(Yaku, YakuValue)> {
    (j.num_kantsu() == 3).then(|| j.fixed(Sankantsu))
}

fn shousangen(j: &Judge) -> Option<(Yaku, YakuValue)> {
    let janto = j.agari.janto()?.sangen()?;
    (j.sangenpai_bits() ^ (1 << janto as u8) == 0b111).then(|| j.fixed(Shousangen))
}

fn daburii(j: &Judge) -> Option<(Yaku, YakuValue)> {
    j.env.daburi().then(|| j.fixed(Daburii))
}

fn honitsu(j: &Judge) -> Option<(Yaku, YakuValue)> {
    let jihai = j.num_jihai();
    (jihai > 0
        && jihai < j.num_hai()
        && SUU.iter().any(|suu| j.num_suu(*suu) + jihai == j.num_hai()))
    .then(|| j.fixed(HonItsu))
}

fn junchan(j: &Judge) -> Option<(Yaku, YakuValue)> {
    (j.num_shuntsu() > 0 && j.num_jihai() == 0 && j.groups.iter().all(Group::has_yaochu))
        .then(|| j.fixed(Junchan))
}

fn ryanpeikou(j: &Judge) -> Option<(Yaku, YakuValue)> {
    (j.menzen() && j.num_peko() == 2).then(|| j.fixed(Ryanpeikou))
}

fn chinitsu(j: &Judge) -> Option<(Yaku, YakuValue)> {
    if chuurenpoutou(j).is_some() {
        return None;
    }
    j.is_one_suit().then(|| j.fixed(ChinItsu))
}

fn kokushimusou(j: &Judge) -> Option<(Yaku, YakuValue)> {
    match (j.agari.combination(), j.agari.machi()) {
        (WinningCombination::Kokushimusou(..), Machi::KokushimusouJuusanmen) => {
            Some(j.fixed(KokushimusouJuusanmen))
        }
        (WinningCombination::Kokushimusou(..), _) => Some(j.fixed(Kokushimusou)),
        _ => None,
    }
}

fn suuankou(j: &Judge) -> Option<(Yaku, YakuValue)> {
    (j.num_anko() + j.num_ankan() == 4).then(|| {
        if j.machi_group().kind == GroupKind::Toitsu {
            j.fixed(SuuankouTanki)
        } else {
            j.fixed(Suuankou)
        }
    })
}

fn daisangen(j: &Judge) -> Option<(Yaku, YakuValue)> {
    (j.sangenpai_bits() == 0b111).then(|| j.fixed(Daisangen))
}

fn tsuuiisou(j: &Judge) -> Option<(Yaku, YakuValue)> {
    (j.num_jihai() == j.num_hai()).then(|| j.fixed(Tsuuiisou))
}

fn shousuushii(j: &Judge) -> Option<(Yaku, YakuValue)> {
    let janto = j.agari.janto()?.fon()?;
    (j.kazehai_bits() ^ (1 << janto as u8) == 0b1111).then(|| j.fixed(Shousuushii))
}

fn daisuushi(j: &Judge) -> Option<(Yaku, YakuValue)> {
    (j.kazehai_bits() == 0b1111).then(|| j.fixed(Daisuushi))
}

fn ryuuiisou(j: &Judge) -> Option<(Yaku, YakuValue)> {
    j.hai
        .iter()
        .all(|h| match (h.suu_kind(), h.value()) {
            (Some(Suu::Sou), Some(value)) => matches!(
                value,
                Values::Ryan | Values::San | Values::Suu | Values::Roo | Values::Paa
            ),
            _ => h.sangen() == Some(Sangen::Hatsu),
        })
        .then(|| j.fixed(Ryuuiisou))
}

fn chinroutou(j: &Judge) -> Option<(Yaku, YakuValue)> {
    (j.num_jihai() == 0 && j.num_yaochu() == j.num_hai()).then(|| j.fixed(Chinroutou))
}

fn suukantsu(j: &Judge) -> Option<(Yaku, YakuValue)> {
    (j.num_kantsu() == 4).then(|| j.fixed(Suukantsu))
}

fn chuurenpoutou(j: &Judge) -> Option<(Yaku, YakuValue)> {
    if !j.menzen() || !j.is_one_suit() {
        return None;
    }
    const EXPECTED: [u8; 9] = [3, 1, 1, 1, 1, 1, 1, 1, 3];
    let mut count = [0u8; 9];
    let mut extra = None;
    for hai in &j.hai {
        let idx = hai.number() as usize - 1;
        count[idx] += 1;
        if count[idx] > EXPECTED[idx] + 1 {
            return None;
        }
        if count[idx] > EXPECTED[idx] {
            if extra.is_some() {
                return None;
            }
            extra = Some(*hai);
        }
    }
    if extra?.is_same(j.agari.tehai().agari_hai().hai) {
        Some(j.fixed(JunseiChuurenpoutou))
    } else {
        Some(j.fixed(Chuurenpoutou))
    }
}

fn tenhou(j: &Judge) -> Option<(Yaku, YakuValue)> {
    j.env
        .tenho()
        .then(|| j.fixed(if j.env.is_oya() { Tenhou } else { Chihou }))
}

fn count_dora(j: &Judge, indicators: &[Hai]) -> u32 {
    j.hai
        .iter()
        .map(|hai| indicators.iter().filter(|ind| hai.is_dora_of(**ind)).count() as u32)
        .sum()
}

fn dora(j: &Judge) -> Option<(Yaku, YakuValue)> {
    let count = count_dora(j, j.env.dora());
    (count > 0).then_some((Dora, YakuValue::Han(count)))
}

fn uradora(j: &Judge) -> Option<(Yaku, YakuValue)> {
    if !j.env.any_richi() {
        return None;
    }
    let count = count_dora(j, j.env.uradora());
    (count > 0).then_some((Uradora, YakuValue::Han(count)))
}

fn akadora(j: &Judge) -> Option<(Yaku, YakuValue)> {
    let count = j.hai.iter().filter(|h| h.is_aka()).count() as u32;
    (count > 0).then_some((Akadora, YakuValue::Han(count)))
}

impl Agari<'_> {
    pub fn judge_yaku(&self, env: &Env) -> Result<YakuResult, NoYakuError> {
        let (rank, detail) = Judge::new(self, env).judge().ok_or_else(|| {
            debug!("No yaku for {}", self);
            NoYakuError {
                agari: self.to_string(),
            }
        })?;
        let fu = self.compute_fu(env);
        let (base, class) = base_point(rank, fu, env.aotenjo());
        let payment = Payment::new(&base, env.is_oya(), self.tehai().method());
        let point = payment.total();
        debug!(
            "Judged {}: {:?}, {} fu, {}, {} points",
            self, detail, fu, rank, point
        );
        Ok(YakuResult {
            detail,
            rank,
            fu,
            class,
            payment,
            point,
        })
    }
}

pub type RankedAgari<'t> = (Agari<'t>, Result<YakuResult, NoYakuError>);

/// Every reading of the hand, best score first. Equal scores keep the order
/// of [`Tehai::to_agari_combinations`], and readings without yaku come last.
pub fn rank_agari<'t>(tehai: &'t Tehai, env: &Env) -> Result<Vec<RankedAgari<'t>>, NoAgariError> {
    let mut ranked: Vec<_> = tehai
        .to_agari_combinations()?
        .map(|agari| {
            let result = agari.judge_yaku(env);
            (agari, result)
        })
        .collect();
    ranked.sort_by(|(_, a), (_, b)| match (a, b) {
        (Ok(a), Ok(b)) => b.cmp(a),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => Ordering::Equal,
    });
    Ok(ranked)
}
