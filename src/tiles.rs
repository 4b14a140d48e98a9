use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone)]
pub enum Values {
    Ii = 1,
    Ryan = 2,
    San = 3,
    Suu = 4,
    Uu = 5,
    Roo = 6,
    Chii = 7,
    Paa = 8,
    Kyuu = 9,
}
pub const VALUES: [Values; 9] = [
    Values::Ii,
    Values::Ryan,
    Values::San,
    Values::Suu,
    Values::Uu,
    Values::Roo,
    Values::Chii,
    Values::Paa,
    Values::Kyuu,
];

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone)]
pub enum Suu {
    Wan,
    Pin,
    Sou,
}
pub const SUU: [Suu; 3] = [Suu::Wan, Suu::Pin, Suu::Sou];

impl Suu {
    pub fn to_char(self) -> char {
        match self {
            Suu::Wan => 'm',
            Suu::Pin => 'p',
            Suu::Sou => 's',
        }
    }
}

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone)]
pub enum JiHai {
    Fon(Fon),
    Sangen(Sangen),
}

/// A number tile. Red fives compare unequal to plain fives; use [`Hai::is_same`]
/// to compare kinds.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone)]
pub struct SuuHai {
    pub suu: Suu,
    pub value: Values,
    pub aka: bool,
}

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone)]
pub enum Fon {
    Ton = 0,
    Nan = 1,
    Shaa = 2,
    Pee = 3,
}

impl Fon {
    pub fn next(self) -> Self {
        match self {
            Fon::Ton => Fon::Nan,
            Fon::Nan => Fon::Shaa,
            Fon::Shaa => Fon::Pee,
            Fon::Pee => Fon::Ton,
        }
    }
    pub fn prev(self) -> Self {
        match self {
            Fon::Ton => Fon::Pee,
            Fon::Nan => Fon::Ton,
            Fon::Shaa => Fon::Nan,
            Fon::Pee => Fon::Shaa,
        }
    }
}

pub const FON: [Fon; 4] = [Fon::Ton, Fon::Nan, Fon::Shaa, Fon::Pee];

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone)]
pub enum Sangen {
    Haku,
    Hatsu,
    Chun,
}
pub const SANGEN: [Sangen; 3] = [Sangen::Haku, Sangen::Hatsu, Sangen::Chun];

impl Sangen {
    pub fn next(self) -> Self {
        match self {
            Sangen::Haku => Sangen::Hatsu,
            Sangen::Hatsu => Sangen::Chun,
            Sangen::Chun => Sangen::Haku,
        }
    }
    pub fn prev(self) -> Self {
        match self {
            Sangen::Haku => Sangen::Chun,
            Sangen::Hatsu => Sangen::Haku,
            Sangen::Chun => Sangen::Hatsu,
        }
    }
}

/// Tile. Number tiles sort before honors, then by suit and value, and a red
/// five sorts right after the plain five of its suit.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Hai {
    Suu(SuuHai),
    Ji(JiHai),
}

impl Values {
    pub fn next(self) -> Self {
        match self {
            Values::Ii => Values::Ryan,
            Values::Ryan => Values::San,
            Values::San => Values::Suu,
            Values::Suu => Values::Uu,
            Values::Uu => Values::Roo,
            Values::Roo => Values::Chii,
            Values::Chii => Values::Paa,
            Values::Paa => Values::Kyuu,
            Values::Kyuu => Values::Ii,
        }
    }
    pub fn prev(self) -> Self {
        match self {
            Values::Ii => Values::Kyuu,
            Values::Ryan => Values::Ii,
            Values::San => Values::Ryan,
            Values::Suu => Values::San,
            Values::Uu => Values::Suu,
            Values::Roo => Values::Uu,
            Values::Chii => Values::Roo,
            Values::Paa => Values::Chii,
            Values::Kyuu => Values::Paa,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        VALUES.get(usize::from(n).checked_sub(1)?).copied()
    }

    pub fn is_1_9(self) -> bool {
        matches!(self, Values::Ii | Values::Kyuu)
    }
}

impl JiHai {
    /// Honor number used by the notation: 1-4 winds, 5-7 dragons.
    pub fn number(self) -> u8 {
        match self {
            JiHai::Fon(fon) => fon as u8 + 1,
            JiHai::Sangen(sangen) => sangen as u8 + 5,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1..=4 => Some(JiHai::Fon(FON[usize::from(n - 1)])),
            5..=7 => Some(JiHai::Sangen(SANGEN[usize::from(n - 5)])),
            _ => None,
        }
    }
}

impl From<Fon> for Hai {
    fn from(fon: Fon) -> Self {
        Hai::Ji(JiHai::Fon(fon))
    }
}

impl From<Sangen> for Hai {
    fn from(sangen: Sangen) -> Self {
        Hai::Ji(JiHai::Sangen(sangen))
    }
}

impl Hai {
    pub fn suu(suu: Suu, value: Values) -> Self {
        Hai::Suu(SuuHai {
            suu,
            value,
            aka: false,
        })
    }

    /// Red five of the given suit
    pub fn aka(suu: Suu) -> Self {
        Hai::Suu(SuuHai {
            suu,
            value: Values::Uu,
            aka: true,
        })
    }

    pub fn is_suuhai(self) -> bool {
        match self {
            Hai::Suu(..) => true,
            Hai::Ji(..) => false,
        }
    }

    pub fn is_jihai(self) -> bool {
        !self.is_suuhai()
    }

    pub fn is_jihai_or_1_9(self) -> bool {
        match self {
            Hai::Suu(SuuHai { value, .. }) => value.is_1_9(),
            Hai::Ji(..) => true,
        }
    }

    pub fn is_sangenpai(self) -> bool {
        matches!(self, Hai::Ji(JiHai::Sangen(..)))
    }

    pub fn is_kazehai(self) -> bool {
        matches!(self, Hai::Ji(JiHai::Fon(..)))
    }

    pub fn fon(self) -> Option<Fon> {
        match self {
            Hai::Ji(JiHai::Fon(fon)) => Some(fon),
            _ => None,
        }
    }

    pub fn sangen(self) -> Option<Sangen> {
        match self {
            Hai::Ji(JiHai::Sangen(sangen)) => Some(sangen),
            _ => None,
        }
    }

    pub fn suu_kind(self) -> Option<Suu> {
        match self {
            Hai::Suu(SuuHai { suu, .. }) => Some(suu),
            Hai::Ji(..) => None,
        }
    }

    pub fn value(self) -> Option<Values> {
        match self {
            Hai::Suu(SuuHai { value, .. }) => Some(value),
            Hai::Ji(..) => None,
        }
    }

    /// Digit written in the notation
    pub fn number(self) -> u8 {
        match self {
            Hai::Suu(SuuHai { value, .. }) => value as u8,
            Hai::Ji(ji) => ji.number(),
        }
    }

    pub fn is_aka(self) -> bool {
        matches!(self, Hai::Suu(SuuHai { aka: true, .. }))
    }

    /// Same tile with the red flag cleared
    pub fn kind(self) -> Self {
        match self {
            Hai::Suu(SuuHai { suu, value, .. }) => Hai::suu(suu, value),
            ji => ji,
        }
    }

    pub fn is_same(self, other: Hai) -> bool {
        self.kind() == other.kind()
    }

    /// Dragons, plus the round and seat winds
    pub fn is_yakuhai(self, bakaze: Fon, jikaze: Fon) -> bool {
        match self {
            Hai::Ji(JiHai::Sangen(..)) => true,
            Hai::Ji(JiHai::Fon(fon)) => fon == bakaze || fon == jikaze,
            Hai::Suu(..) => false,
        }
    }

    /// Tile following `self` in the same suit, wrapping around. This is the
    /// dora named by an indicator.
    pub fn next(self) -> Self {
        match self {
            Hai::Suu(SuuHai { suu, value, .. }) => Hai::suu(suu, value.next()),
            Hai::Ji(JiHai::Fon(fon)) => Hai::Ji(JiHai::Fon(fon.next())),
            Hai::Ji(JiHai::Sangen(sangen)) => Hai::Ji(JiHai::Sangen(sangen.next())),
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Hai::Suu(SuuHai { suu, value, .. }) => Hai::suu(suu, value.prev()),
            Hai::Ji(JiHai::Fon(fon)) => Hai::Ji(JiHai::Fon(fon.prev())),
            Hai::Ji(JiHai::Sangen(sangen)) => Hai::Ji(JiHai::Sangen(sangen.prev())),
        }
    }

    /// Is `self` the dora named by `indicator`?
    pub fn is_dora_of(self, indicator: Hai) -> bool {
        indicator.next().is_same(self)
    }
}

const MANZU_CHARS: [char; 9] = [
    '\u{1F007}',
    '\u{1F008}',
    '\u{1F009}',
    '\u{1F00A}',
    '\u{1F00B}',
    '\u{1F00C}',
    '\u{1F00D}',
    '\u{1F00E}',
    '\u{1F00F}',
];
const SOUZU_CHARS: [char; 9] = [
    '\u{1F010}',
    '\u{1F011}',
    '\u{1F012}',
    '\u{1F013}',
    '\u{1F014}',
    '\u{1F015}',
    '\u{1F016}',
    '\u{1F017}',
    '\u{1F018}',
];
const PINZU_CHARS: [char; 9] = [
    '\u{1F019}',
    '\u{1F01A}',
    '\u{1F01B}',
    '\u{1F01C}',
    '\u{1F01D}',
    '\u{1F01E}',
    '\u{1F01F}',
    '\u{1F020}',
    '\u{1F021}',
];
const FON_CHARS: [char; 4] = ['\u{1F000}', '\u{1F001}', '\u{1F002}', '\u{1F003}'];

impl Hai {
    pub fn to_char(self) -> char {
        match self {
            Hai::Suu(SuuHai {
                suu: Suu::Wan,
                value,
                ..
            }) => MANZU_CHARS[value as usize - 1],
            Hai::Suu(SuuHai {
                suu: Suu::Pin,
                value,
                ..
            }) => PINZU_CHARS[value as usize - 1],
            Hai::Suu(SuuHai {
                suu: Suu::Sou,
                value,
                ..
            }) => SOUZU_CHARS[value as usize - 1],
            Hai::Ji(JiHai::Fon(fon)) => FON_CHARS[fon as usize],
            Hai::Ji(JiHai::Sangen(Sangen::Haku)) => '\u{1F006}',
            Hai::Ji(JiHai::Sangen(Sangen::Hatsu)) => '\u{1F005}',
            Hai::Ji(JiHai::Sangen(Sangen::Chun)) => '\u{1F004}',
        }
    }

    /// Convert to terminal-friendly strings for display
    pub fn to_unicode_string(self) -> String {
        match self {
            Hai::Ji(JiHai::Sangen(Sangen::Chun)) => {
                // Add VS15 after mahjong Chun tile for it to be shown as char (not emoji)
                format!("{}\u{FE0E}", self.to_char())
            }
            // Except for Chun, all tiles seem to be shown as half-width characters, so add space
            _ => format!("{} ", self.to_char()),
        }
    }

    pub fn back_char() -> char {
        '\u{1F02B}'
    }
}

/// The 34 tile kinds in canonical order
pub fn make_all_kinds() -> [Hai; 34] {
    let mut hai = [Hai::Ji(JiHai::Sangen(Sangen::Hatsu)); 34];
    let mut cnt = 0;

    for suu in &SUU {
        for value in &VALUES {
            hai[cnt] = Hai::suu(*suu, *value);
            cnt += 1;
        }
    }

    for fon in &FON {
        hai[cnt] = Hai::from(*fon);
        cnt += 1;
    }

    for sangen in &SANGEN {
        hai[cnt] = Hai::from(*sangen);
        cnt += 1;
    }
    hai
}
