use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::list::OrderedList;
use crate::notation::NotationErrorKind;
use crate::tiles::Hai;

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone)]
pub enum WinningMethod {
    Tsumo,
    Ron,
}

/// Winning tile and how it was obtained
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone)]
pub struct AgariHai {
    pub hai: Hai,
    pub method: WinningMethod,
}

/// Seat of the player a tile was taken from
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone)]
pub enum Direction {
    /// Kamicha
    Left,
    /// Toimen
    Front,
    /// Shimocha
    Right,
}

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone)]
pub enum Fuuro {
    /// Chi, always taken from the left
    Shuntsu { own: [Hai; 2], taken: Hai },
    Kootsu {
        own: [Hai; 2],
        taken: Hai,
        from: Direction,
    },
    Kantsu(KantsuInner),
}

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone)]
pub enum KantsuInner {
    Ankan {
        own: [Hai; 4],
    },
    DaiMinkan {
        own: [Hai; 3],
        taken: Hai,
        from: Direction,
    },
    ShouMinkan {
        own: [Hai; 2],
        added: Hai,
        taken: Hai,
        from: Direction,
    },
}

impl Fuuro {
    pub fn iter(&self) -> impl Iterator<Item = Hai> {
        let (tiles, len) = match *self {
            Fuuro::Shuntsu { own, taken } | Fuuro::Kootsu { own, taken, .. } => {
                ([taken, own[0], own[1], taken], 3)
            }
            Fuuro::Kantsu(KantsuInner::Ankan { own }) => (own, 4),
            Fuuro::Kantsu(KantsuInner::DaiMinkan { own, taken, .. }) => {
                ([taken, own[0], own[1], own[2]], 4)
            }
            Fuuro::Kantsu(KantsuInner::ShouMinkan {
                own, added, taken, ..
            }) => ([taken, own[0], own[1], added], 4),
        };
        tiles.into_iter().take(len)
    }

    /// Lowest tile of the meld
    pub fn head(&self) -> Hai {
        match *self {
            Fuuro::Shuntsu { own, taken } => {
                if taken < own[0] {
                    taken
                } else {
                    own[0]
                }
            }
            Fuuro::Kootsu { taken, .. } => taken,
            Fuuro::Kantsu(KantsuInner::Ankan { own }) => own[0],
            Fuuro::Kantsu(KantsuInner::DaiMinkan { taken, .. })
            | Fuuro::Kantsu(KantsuInner::ShouMinkan { taken, .. }) => taken,
        }
    }

    /// Only a concealed quad keeps the hand closed
    pub fn is_menzen(&self) -> bool {
        matches!(self, Fuuro::Kantsu(KantsuInner::Ankan { .. }))
    }

    pub fn is_kantsu(&self) -> bool {
        matches!(self, Fuuro::Kantsu(..))
    }
}

/// A complete hand: concealed tiles, called melds and the winning tile.
///
/// Construction checks the tile count (concealed + 3 per meld + 1 = 14) and
/// that no kind appears more than four times.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tehai {
    hai: OrderedList<Hai>,
    fuuro: Vec<Fuuro>,
    agari_hai: AgariHai,
}

pub const TEHAI_SIZE: usize = 14;
pub const MAX_FUURO: usize = 4;

impl Tehai {
    pub fn new(
        hai: Vec<Hai>,
        fuuro: Vec<Fuuro>,
        agari_hai: AgariHai,
    ) -> Result<Self, NotationErrorKind> {
        if fuuro.len() > MAX_FUURO {
            return Err(NotationErrorKind::TooManyMelds(fuuro.len()));
        }
        let count = hai.len() + fuuro.len() * 3 + 1;
        match count.cmp(&TEHAI_SIZE) {
            Ordering::Less => return Err(NotationErrorKind::TooFewTiles(count)),
            Ordering::Equal => {}
            Ordering::Greater => return Err(NotationErrorKind::TooManyTiles(count)),
        }

        let tehai = Tehai {
            hai: OrderedList::from(hai),
            fuuro,
            agari_hai,
        };
        if let Some((kind, count)) = tehai.kind_counts().into_iter().find(|(_, c)| *c > 4) {
            return Err(NotationErrorKind::TooManyCopies(kind, count));
        }
        Ok(tehai)
    }

    /// Concealed tiles, sorted, without the winning tile
    pub fn hai(&self) -> &[Hai] {
        self.hai.as_ref()
    }

    pub fn fuuro(&self) -> &[Fuuro] {
        &self.fuuro
    }

    pub fn agari_hai(&self) -> AgariHai {
        self.agari_hai
    }

    pub fn method(&self) -> WinningMethod {
        self.agari_hai.method
    }

    pub fn is_tsumo(&self) -> bool {
        self.agari_hai.method == WinningMethod::Tsumo
    }

    pub fn is_menzen(&self) -> bool {
        self.fuuro.iter().all(Fuuro::is_menzen)
    }

    /// Every tile of the hand, quads counting four
    pub fn all_hai(&self) -> impl Iterator<Item = Hai> + '_ {
        self.hai
            .iter()
            .copied()
            .chain(self.fuuro.iter().flat_map(Fuuro::iter))
            .chain(std::iter::once(self.agari_hai.hai))
    }

    /// Concealed tiles plus the winning tile, sorted
    pub fn closed_hai(&self) -> Vec<Hai> {
        let mut list = self.hai.clone();
        list.insert(self.agari_hai.hai);
        list.into_vec()
    }

    pub fn kind_counts(&self) -> BTreeMap<Hai, usize> {
        let mut counts = BTreeMap::new();
        for hai in self.all_hai() {
            *counts.entry(hai.kind()).or_default() += 1;
        }
        counts
    }
}
