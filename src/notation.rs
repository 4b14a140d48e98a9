//! Text notation for tiles, melds and hands.
//!
//! A tile is a digit, an optional `$` for a red five and a category letter
//! (`m`, `p`, `s`, or `j` for the honors 1-7: east, south, west, north, white,
//! green, red). The category may be shared: `123m4p` is 1m 2m 3m 4p. Prefixes
//! mark where a tile came from: `<` `^` `>` for the left, front and right
//! players, `+` for the tile added to a pon, and `!` / `?` for a winning tile
//! drawn or claimed.
//!
//! A hand is whitespace-separated chunks: concealed tiles first, then melds
//! and the winning tile in any order, e.g. `123m78m111j99p ^555j !9m`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::hand::{AgariHai, Direction, Fuuro, KantsuInner, Tehai, WinningMethod};
use crate::tiles::{Hai, JiHai, Suu, SuuHai, Values};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} in `{fragment}`")]
pub struct NotationError {
    /// Offending part of the input
    pub fragment: String,
    pub kind: NotationErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationErrorKind {
    #[error("empty hand")]
    EmptyHand,
    #[error("number not found")]
    NumberNotFound,
    #[error("category not found at last")]
    CategoryNotFound,
    #[error("invalid char found: `{0}`")]
    InvalidChar(char),
    #[error("invalid tile: `{number}{category}`")]
    InvalidNumber { number: u8, category: char },
    #[error("invalid akadora: `{number}${category}`")]
    InvalidAkadora { number: u8, category: char },
    #[error("multiple prefixes on one tile")]
    MultiplePrefix,
    #[error("multiple akadora marks on one tile")]
    MultipleAkadora,
    #[error("multiple categories found")]
    MultipleCategories,
    #[error("face-down tile `_` cannot be parsed")]
    HiddenTile,
    #[error("unexpected prefix `{0}`")]
    UnexpectedPrefix(char),
    #[error("expected a single tile, found {0}")]
    NotSingleTile(usize),
    #[error("menzen chi found")]
    MenzenChi,
    #[error("menzen pon found")]
    MenzenPon,
    #[error("chi not from kamicha: `{0}`")]
    ChiNotFromKamicha(Hai),
    #[error("chi with kakan: `{0}`")]
    ChiWithKakan(Hai),
    #[error("pon with kakan: `{0}`")]
    PonWithKakan(Hai),
    #[error("ankan with kakan: `{0}`")]
    AnkanWithKakan(Hai),
    #[error("multiple tiles taken from other players")]
    MultipleTaken,
    #[error("multiple kakan tiles found")]
    MultipleKakan,
    #[error("tiles do not form a meld")]
    InvalidMeldShape,
    #[error("agari tile not found")]
    NoAgariHai,
    #[error("multiple agari tiles: `{0}`, `{1}`")]
    MultipleAgariHai(AgariHai, AgariHai),
    #[error("agari tile must be one tile prefixed with `!` or `?`")]
    InvalidAgariHai,
    #[error("too few tiles (shohai): {0}")]
    TooFewTiles(usize),
    #[error("too many tiles (tahai): {0}")]
    TooManyTiles(usize),
    #[error("too many melds: {0}")]
    TooManyMelds(usize),
    #[error("`{0}` appears {1} times")]
    TooManyCopies(Hai, usize),
}

impl NotationErrorKind {
    pub fn at(self, fragment: &str) -> NotationError {
        NotationError {
            fragment: fragment.to_owned(),
            kind: self,
        }
    }
}

impl Direction {
    pub fn mark(self) -> char {
        match self {
            Direction::Left => '<',
            Direction::Front => '^',
            Direction::Right => '>',
        }
    }
}

impl WinningMethod {
    pub fn mark(self) -> char {
        match self {
            WinningMethod::Tsumo => '!',
            WinningMethod::Ron => '?',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prefix {
    Taken(Direction),
    Kakan,
    Agari(WinningMethod),
}

impl Prefix {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Prefix::Taken(Direction::Left)),
            '^' => Some(Prefix::Taken(Direction::Front)),
            '>' => Some(Prefix::Taken(Direction::Right)),
            '+' => Some(Prefix::Kakan),
            '!' => Some(Prefix::Agari(WinningMethod::Tsumo)),
            '?' => Some(Prefix::Agari(WinningMethod::Ron)),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Prefix::Taken(direction) => direction.mark(),
            Prefix::Kakan => '+',
            Prefix::Agari(method) => method.mark(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Suu(Suu),
    Ji,
}

impl Category {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'm' => Some(Category::Suu(Suu::Wan)),
            'p' => Some(Category::Suu(Suu::Pin)),
            's' => Some(Category::Suu(Suu::Sou)),
            'j' => Some(Category::Ji),
            _ => None,
        }
    }

    fn of(hai: Hai) -> Self {
        match hai.suu_kind() {
            Some(suu) => Category::Suu(suu),
            None => Category::Ji,
        }
    }

    fn to_char(self) -> char {
        match self {
            Category::Suu(suu) => suu.to_char(),
            Category::Ji => 'j',
        }
    }

    fn make_hai(self, number: u8, aka: bool) -> Result<Hai, NotationErrorKind> {
        let category = self.to_char();
        let hai = match self {
            Category::Suu(suu) => {
                let value = Values::from_number(number)
                    .ok_or(NotationErrorKind::InvalidNumber { number, category })?;
                Hai::Suu(SuuHai { suu, value, aka })
            }
            Category::Ji => Hai::Ji(
                JiHai::from_number(number)
                    .ok_or(NotationErrorKind::InvalidNumber { number, category })?,
            ),
        };
        if aka && !hai.is_aka() {
            return Err(NotationErrorKind::InvalidAkadora { number, category });
        }
        Ok(hai)
    }
}

#[derive(Debug, Clone, Copy)]
struct Token {
    prefix: Option<Prefix>,
    hai: Hai,
}

/// Split one whitespace-free chunk into tiles.
fn lex(chunk: &str) -> Result<Vec<Token>, NotationErrorKind> {
    use NotationErrorKind::*;

    struct Pending {
        prefix: Option<Prefix>,
        number: u8,
        aka: bool,
    }

    let mut tokens = vec![];
    let mut pending: Vec<Pending> = vec![];
    let mut chars = chunk.chars().peekable();
    while let Some(mut c) = chars.next() {
        let mut prefix = None;
        while let Some(p) = Prefix::from_char(c) {
            if prefix.is_some() {
                return Err(MultiplePrefix);
            }
            prefix = Some(p);
            c = chars.next().ok_or(NumberNotFound)?;
        }

        if c == '_' {
            return Err(HiddenTile);
        }
        let number = c.to_digit(10).ok_or(InvalidChar(c))? as u8;

        let mut aka = false;
        while chars.next_if_eq(&'$').is_some() {
            if aka {
                return Err(MultipleAkadora);
            }
            aka = true;
        }
        pending.push(Pending {
            prefix,
            number,
            aka,
        });

        if let Some(category) = chars.peek().copied().and_then(Category::from_char) {
            chars.next();
            if chars.peek().copied().and_then(Category::from_char).is_some() {
                return Err(MultipleCategories);
            }
            for p in pending.drain(..) {
                tokens.push(Token {
                    prefix: p.prefix,
                    hai: category.make_hai(p.number, p.aka)?,
                });
            }
        }
    }
    if !pending.is_empty() {
        return Err(CategoryNotFound);
    }
    Ok(tokens)
}

fn lex_plain(chunk: &str) -> Result<Vec<Hai>, NotationErrorKind> {
    lex(chunk)?
        .into_iter()
        .map(|token| match token.prefix {
            None => Ok(token.hai),
            Some(prefix) => Err(NotationErrorKind::UnexpectedPrefix(prefix.to_char())),
        })
        .collect()
}

/// Parse a list of tiles without prefixes, e.g. dora indicators `3m7j` or
/// `3m 7j`. An empty string is an empty list.
pub fn parse_hai_list(s: &str) -> Result<Vec<Hai>, NotationError> {
    let mut out = vec![];
    for chunk in s.split_whitespace() {
        out.extend(lex_plain(chunk).map_err(|kind| kind.at(chunk))?);
    }
    Ok(out)
}

impl FromStr for Hai {
    type Err = NotationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hai = lex_plain(s).map_err(|kind| kind.at(s))?;
        match hai.as_slice() {
            [hai] => Ok(*hai),
            _ => Err(NotationErrorKind::NotSingleTile(hai.len()).at(s)),
        }
    }
}

impl TryFrom<String> for Hai {
    type Error = NotationError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Hai> for String {
    fn from(hai: Hai) -> Self {
        hai.to_string()
    }
}

impl FromStr for AgariHai {
    type Err = NotationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = lex(s).map_err(|kind| kind.at(s))?;
        match tokens.as_slice() {
            [Token {
                prefix: Some(Prefix::Agari(method)),
                hai,
            }] => Ok(AgariHai {
                hai: *hai,
                method: *method,
            }),
            [_] => Err(NotationErrorKind::InvalidAgariHai.at(s)),
            _ => Err(NotationErrorKind::NotSingleTile(tokens.len()).at(s)),
        }
    }
}

fn is_run(hai: [Hai; 3]) -> bool {
    let suu = hai[0].suu_kind();
    suu.is_some()
        && hai.iter().all(|h| h.suu_kind() == suu)
        && hai[0].number() + 1 == hai[1].number()
        && hai[1].number() + 1 == hai[2].number()
}

fn own<const N: usize>(own: &[Hai]) -> Result<[Hai; N], NotationErrorKind> {
    own.try_into()
        .map_err(|_| NotationErrorKind::InvalidMeldShape)
}

fn parse_fuuro(s: &str) -> Result<Fuuro, NotationErrorKind> {
    use NotationErrorKind::*;

    let mut all_hai = vec![];
    let mut own_hai = vec![];
    let mut taken = None;
    let mut added = None;
    for Token { prefix, hai } in lex(s)? {
        all_hai.push(hai);
        match prefix {
            None => own_hai.push(hai),
            Some(Prefix::Taken(direction)) => {
                if taken.is_some() {
                    return Err(MultipleTaken);
                }
                taken = Some((direction, hai));
            }
            Some(Prefix::Kakan) => {
                if added.is_some() {
                    return Err(MultipleKakan);
                }
                added = Some(hai);
            }
            Some(prefix @ Prefix::Agari(..)) => return Err(UnexpectedPrefix(prefix.to_char())),
        }
    }
    all_hai.sort();
    own_hai.sort();

    let fuuro = match *all_hai.as_slice() {
        [h0, h1, h2] if is_run([h0, h1, h2]) => {
            let (from, taken) = taken.ok_or(MenzenChi)?;
            if from != Direction::Left {
                return Err(ChiNotFromKamicha(taken));
            }
            if let Some(added) = added {
                return Err(ChiWithKakan(added));
            }
            Fuuro::Shuntsu {
                own: own(&own_hai)?,
                taken,
            }
        }
        [h0, h1, h2] if h0.is_same(h1) && h1.is_same(h2) => {
            let (from, taken) = taken.ok_or(MenzenPon)?;
            if let Some(added) = added {
                return Err(PonWithKakan(added));
            }
            Fuuro::Kootsu {
                own: own(&own_hai)?,
                taken,
                from,
            }
        }
        [h0, h1, h2, h3] if h0.is_same(h1) && h1.is_same(h2) && h2.is_same(h3) => {
            let inner = match (taken, added) {
                (Some((from, taken)), Some(added)) => KantsuInner::ShouMinkan {
                    own: own(&own_hai)?,
                    added,
                    taken,
                    from,
                },
                (Some((from, taken)), None) => KantsuInner::DaiMinkan {
                    own: own(&own_hai)?,
                    taken,
                    from,
                },
                (None, None) => KantsuInner::Ankan {
                    own: own(&own_hai)?,
                },
                (None, Some(added)) => return Err(AnkanWithKakan(added)),
            };
            Fuuro::Kantsu(inner)
        }
        _ => return Err(InvalidMeldShape),
    };
    Ok(fuuro)
}

impl FromStr for Fuuro {
    type Err = NotationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fuuro(s).map_err(|kind| kind.at(s))
    }
}

impl FromStr for Tehai {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use NotationErrorKind::*;

        let mut chunks = s.split_whitespace();
        let first = chunks.next().ok_or_else(|| EmptyHand.at(s))?;
        let hai = lex_plain(first).map_err(|kind| kind.at(first))?;

        let mut fuuro = vec![];
        let mut agari_hai: Option<AgariHai> = None;
        for chunk in chunks {
            if chunk.starts_with(|c| c == '!' || c == '?') {
                let new_agari_hai = chunk.parse()?;
                if let Some(old_agari_hai) = agari_hai {
                    return Err(MultipleAgariHai(old_agari_hai, new_agari_hai).at(chunk));
                }
                agari_hai = Some(new_agari_hai);
            } else {
                fuuro.push(chunk.parse()?);
            }
        }
        let agari_hai = agari_hai.ok_or_else(|| NoAgariHai.at(s))?;

        Tehai::new(hai, fuuro, agari_hai).map_err(|kind| kind.at(s))
    }
}

fn write_digit(f: &mut impl fmt::Write, hai: Hai) -> fmt::Result {
    write!(f, "{}{}", hai.number(), if hai.is_aka() { "$" } else { "" })
}

/// Tiles sharing category letters, e.g. `123m45p`.
pub struct HaiRun<'a>(pub &'a [Hai]);

impl fmt::Display for HaiRun<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hai = self.0;
        for (i, h) in hai.iter().enumerate() {
            write_digit(f, *h)?;
            let category = Category::of(*h);
            if hai.get(i + 1).map(|next| Category::of(*next)) != Some(category) {
                write!(f, "{}", category.to_char())?;
            }
        }
        Ok(())
    }
}

pub fn hai_run_to_string(hai: &[Hai]) -> String {
    HaiRun(hai).to_string()
}

impl fmt::Display for Hai {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", HaiRun(&[*self]))
    }
}

impl fmt::Display for AgariHai {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.method.mark(), self.hai)
    }
}

impl fmt::Display for Fuuro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            // <213m
            Fuuro::Shuntsu { own, taken } => {
                write!(f, "{}", Direction::Left.mark())?;
                write!(f, "{}", HaiRun(&[taken, own[0], own[1]]))
            }
            // ^333m
            Fuuro::Kootsu { own, taken, from } => {
                write!(f, "{}", from.mark())?;
                write!(f, "{}", HaiRun(&[taken, own[0], own[1]]))
            }
            // >555+5m
            Fuuro::Kantsu(KantsuInner::ShouMinkan {
                own,
                added,
                taken,
                from,
            }) => {
                write!(f, "{}", from.mark())?;
                for hai in [taken, own[0], own[1]] {
                    write_digit(f, hai)?;
                }
                write!(f, "+")?;
                write!(f, "{}", HaiRun(&[added]))
            }
            // ^5555m
            Fuuro::Kantsu(KantsuInner::DaiMinkan { own, taken, from }) => {
                write!(f, "{}", from.mark())?;
                write!(f, "{}", HaiRun(&[taken, own[0], own[1], own[2]]))
            }
            // 3333p
            Fuuro::Kantsu(KantsuInner::Ankan { own }) => write!(f, "{}", HaiRun(&own)),
        }
    }
}

impl fmt::Display for Tehai {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", HaiRun(self.hai()))?;
        for fuuro in self.fuuro() {
            write!(f, " {}", fuuro)?;
        }
        write!(f, " {}", self.agari_hai())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::{Fon, Sangen};
    use assert_matches::assert_matches;

    fn kind(s: &str) -> NotationErrorKind {
        Hai::from_str(s).unwrap_err().kind
    }

    fn furo_kind(s: &str) -> NotationErrorKind {
        Fuuro::from_str(s).unwrap_err().kind
    }

    fn tehai_kind(s: &str) -> NotationErrorKind {
        Tehai::from_str(s).unwrap_err().kind
    }

    #[test]
    fn test_parse_hai() {
        assert_eq!(Hai::from_str("1m").unwrap(), Hai::suu(Suu::Wan, Values::Ii));
        assert_eq!(Hai::from_str("5$p").unwrap(), Hai::aka(Suu::Pin));
        assert_eq!(Hai::from_str("9s").unwrap(), Hai::suu(Suu::Sou, Values::Kyuu));
        assert_eq!(Hai::from_str("1j").unwrap(), Hai::from(Fon::Ton));
        assert_eq!(Hai::from_str("4j").unwrap(), Hai::from(Fon::Pee));
        assert_eq!(Hai::from_str("5j").unwrap(), Hai::from(Sangen::Haku));
        assert_eq!(Hai::from_str("7j").unwrap(), Hai::from(Sangen::Chun));
    }

    #[test]
    fn test_parse_hai_error() {
        assert_matches!(
            kind("0m"),
            NotationErrorKind::InvalidNumber {
                number: 0,
                category: 'm'
            }
        );
        assert_matches!(
            kind("8j"),
            NotationErrorKind::InvalidNumber {
                number: 8,
                category: 'j'
            }
        );
        assert_matches!(kind("1x"), NotationErrorKind::InvalidChar('x'));
        assert_matches!(kind("3$m"), NotationErrorKind::InvalidAkadora { .. });
        assert_matches!(kind("5$j"), NotationErrorKind::InvalidAkadora { .. });
        assert_matches!(kind("5$$m"), NotationErrorKind::MultipleAkadora);
        assert_matches!(kind("1"), NotationErrorKind::CategoryNotFound);
        assert_matches!(kind("1mp"), NotationErrorKind::MultipleCategories);
        assert_matches!(kind("_"), NotationErrorKind::HiddenTile);
        assert_matches!(kind("<1m"), NotationErrorKind::UnexpectedPrefix('<'));
        assert_matches!(kind("<^1m"), NotationErrorKind::MultiplePrefix);
        assert_matches!(kind("!"), NotationErrorKind::NumberNotFound);
        assert_matches!(kind("12m"), NotationErrorKind::NotSingleTile(2));
        assert_matches!(kind(""), NotationErrorKind::NotSingleTile(0));

        let err = Hai::from_str("1x").unwrap_err();
        assert_eq!(err.fragment, "1x");
        assert_eq!(err.to_string(), "invalid char found: `x` in `1x`");
    }

    #[test]
    fn test_display_hai() {
        for s in ["1m", "5$m", "9p", "5$s", "3j", "7j"] {
            assert_eq!(Hai::from_str(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_parse_hai_list() {
        let list = parse_hai_list("123m4p 5$s").unwrap();
        assert_eq!(hai_run_to_string(&list), "123m4p5$s");
        assert!(parse_hai_list("").unwrap().is_empty());
        assert_eq!(format!("[{}]", HaiRun(&list[..3])), "[123m]");
        assert_eq!(HaiRun(&[]).to_string(), "");
        assert_matches!(
            parse_hai_list("1m ?2m").unwrap_err().kind,
            NotationErrorKind::UnexpectedPrefix('?')
        );
    }

    #[test]
    fn test_parse_fuuro() {
        let h = |s: &str| Hai::from_str(s).unwrap();
        assert_eq!(
            Fuuro::from_str("<213m").unwrap(),
            Fuuro::Shuntsu {
                own: [h("1m"), h("3m")],
                taken: h("2m"),
            }
        );
        assert_eq!(
            Fuuro::from_str("^333j").unwrap(),
            Fuuro::Kootsu {
                own: [h("3j"), h("3j")],
                taken: h("3j"),
                from: Direction::Front,
            }
        );
        assert_eq!(
            Fuuro::from_str("<111+1j").unwrap(),
            Fuuro::Kantsu(KantsuInner::ShouMinkan {
                own: [h("1j"), h("1j")],
                added: h("1j"),
                taken: h("1j"),
                from: Direction::Left,
            })
        );
        assert_eq!(
            Fuuro::from_str(">5$555m").unwrap(),
            Fuuro::Kantsu(KantsuInner::DaiMinkan {
                own: [h("5m"), h("5m"), h("5m")],
                taken: h("5$m"),
                from: Direction::Right,
            })
        );
        assert_eq!(
            Fuuro::from_str("3333p").unwrap(),
            Fuuro::Kantsu(KantsuInner::Ankan {
                own: [h("3p"); 4]
            })
        );
    }

    #[test]
    fn test_parse_fuuro_error() {
        assert_matches!(furo_kind("123m"), NotationErrorKind::MenzenChi);
        assert_matches!(furo_kind("^213m"), NotationErrorKind::ChiNotFromKamicha(_));
        assert_matches!(furo_kind("<21+3m"), NotationErrorKind::ChiWithKakan(_));
        assert_matches!(furo_kind("111m"), NotationErrorKind::MenzenPon);
        assert_matches!(furo_kind("<11+1m"), NotationErrorKind::PonWithKakan(_));
        assert_matches!(furo_kind("111+1j"), NotationErrorKind::AnkanWithKakan(_));
        assert_matches!(furo_kind("<1<11m"), NotationErrorKind::MultipleTaken);
        assert_matches!(furo_kind("<11+1+1m"), NotationErrorKind::MultipleKakan);
        assert_matches!(furo_kind("<135m"), NotationErrorKind::InvalidMeldShape);
        assert_matches!(furo_kind("<123j"), NotationErrorKind::InvalidMeldShape);
        assert_matches!(furo_kind("<1m2p3s"), NotationErrorKind::InvalidMeldShape);
        assert_matches!(furo_kind("?111m"), NotationErrorKind::UnexpectedPrefix('?'));
    }

    #[test]
    fn test_display_fuuro_roundtrip() {
        for (input, expected) in [
            ("<213m", "<213m"),
            ("2<13m", "<213m"),
            ("^333j", "^333j"),
            ("<111+1j", "<111+1j"),
            ("1+11<1j", "<111+1j"),
            (">5$555m", ">5$555m"),
            ("3333p", "3333p"),
            ("555$5s", "5555$s"),
        ] {
            let fuuro = Fuuro::from_str(input).unwrap();
            assert_eq!(fuuro.to_string(), expected);
            assert_eq!(Fuuro::from_str(expected).unwrap(), fuuro);
        }
    }

    #[test]
    fn test_parse_tehai() {
        let tehai = Tehai::from_str("123m78m111j555j99p !9m").unwrap();
        assert_eq!(tehai.hai().len(), 13);
        assert!(tehai.fuuro().is_empty());
        assert_eq!(tehai.agari_hai().method, WinningMethod::Tsumo);
        assert_eq!(tehai.to_string(), "12378m99p111555j !9m");

        // Agari chunk may appear anywhere and is rendered last
        let tehai = Tehai::from_str("66s666j45689m ?7m <213m").unwrap();
        assert_eq!(tehai.to_string(), "45689m66s666j <213m ?7m");
        assert_eq!(tehai.fuuro().len(), 1);
    }

    #[test]
    fn test_tehai_roundtrip() {
        for s in [
            "55s12345678m234p ?9m",
            "77j12p666j >999m ^888+8p !3p",
            "234s1177j 9999p 1111m ?7j",
            "1p 4444j <1111m ^999+9p >5$555s !1p",
            "19m19p19s1234567j !7j",
            "22567m88s <657p <657s !2m",
        ] {
            let tehai = Tehai::from_str(s).unwrap();
            let rendered = tehai.to_string();
            assert_eq!(Tehai::from_str(&rendered).unwrap(), tehai);
        }
    }

    #[test]
    fn test_parse_tehai_error() {
        assert_matches!(tehai_kind(""), NotationErrorKind::EmptyHand);
        assert_matches!(tehai_kind("  "), NotationErrorKind::EmptyHand);
        assert_matches!(
            tehai_kind("12345678m234p55s"),
            NotationErrorKind::NoAgariHai
        );
        assert_matches!(
            tehai_kind("12345678m234p55s ?9m !9m"),
            NotationErrorKind::MultipleAgariHai(..)
        );
        assert_matches!(
            tehai_kind("1234567m234p55s ?9m"),
            NotationErrorKind::TooFewTiles(13)
        );
        assert_matches!(
            tehai_kind("123456789m234p55s ?9m"),
            NotationErrorKind::TooManyTiles(15)
        );
        assert_matches!(
            tehai_kind("11111m222333m44p !4p"),
            NotationErrorKind::TooManyCopies(_, 5)
        );
        assert_matches!(
            tehai_kind("1m 1111m 2222m 3333m 4444m 5555m !1m"),
            NotationErrorKind::TooManyMelds(5)
        );
        assert_matches!(
            tehai_kind("1m ?1m 1111m 2222m 3333m"),
            NotationErrorKind::TooFewTiles(11)
        );
        assert_matches!(tehai_kind("12x3m ?1m"), NotationErrorKind::InvalidChar('x'));
        assert_matches!(
            tehai_kind("?1m 123m"),
            NotationErrorKind::UnexpectedPrefix('?')
        );
        assert_matches!(
            tehai_kind("12345678m234p55s 9m"),
            NotationErrorKind::InvalidMeldShape
        );

        let err = Tehai::from_str("12345678m234p55s ?9x").unwrap_err();
        assert_eq!(err.fragment, "?9x");
    }
}
