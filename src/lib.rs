//! Riichi mahjong winning-hand engine: parse a hand, enumerate its readings,
//! judge yaku, count fu and points, and check the table state for
//! inconsistencies.

use thiserror::Error;

pub mod agari;
pub mod env;
pub mod fu;
pub mod hand;
pub mod image;
pub mod list;
pub mod notation;
pub mod points;
pub mod tiles;
pub mod validate;
pub mod yaku;

pub use agari::{Agari, NoAgariError};
pub use env::{ConfigError, Env};
pub use hand::Tehai;
pub use notation::NotationError;
pub use yaku::{rank_agari, NoYakuError, YakuResult};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Notation(#[from] NotationError),
    #[error(transparent)]
    NoAgari(#[from] NoAgariError),
    #[error(transparent)]
    NoYaku(#[from] NoYakuError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("cannot write report: {0}")]
    Report(#[from] ron::Error),
}

impl Error {
    /// A well-formed hand that does not win
    pub fn is_not_winning(&self) -> bool {
        matches!(self, Error::NoAgari(..) | Error::NoYaku(..))
    }
}
