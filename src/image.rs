//! Layout of a hand as seen from its owner: which tile of a meld lies
//! sideways, which ones are face down and where a kakan tile is stacked.

use crate::hand::{Direction, Fuuro, KantsuInner, Tehai};
use crate::tiles::Hai;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaiImage {
    Normal(Hai),
    /// Taken from another player
    Sideways(Hai),
    Hidden,
    /// Added tile of a shouminkan, lying on the taken tile
    Stack { bottom: Hai, top: Hai },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileStyle {
    Notation,
    Unicode,
}

fn place<const N: usize>(from: Direction, taken: HaiImage, own: [Hai; N]) -> Vec<HaiImage> {
    let mut images: Vec<HaiImage> = own.iter().copied().map(HaiImage::Normal).collect();
    let index = match from {
        Direction::Left => 0,
        Direction::Front => 1,
        Direction::Right => images.len(),
    };
    images.insert(index, taken);
    images
}

impl Fuuro {
    pub fn to_image(&self) -> Vec<HaiImage> {
        match *self {
            Fuuro::Shuntsu { own, taken } => {
                place(Direction::Left, HaiImage::Sideways(taken), own)
            }
            Fuuro::Kootsu { own, taken, from } => place(from, HaiImage::Sideways(taken), own),
            Fuuro::Kantsu(KantsuInner::DaiMinkan { own, taken, from }) => {
                place(from, HaiImage::Sideways(taken), own)
            }
            Fuuro::Kantsu(KantsuInner::ShouMinkan {
                own,
                added,
                taken,
                from,
            }) => place(
                from,
                HaiImage::Stack {
                    bottom: taken,
                    top: added,
                },
                own,
            ),
            Fuuro::Kantsu(KantsuInner::Ankan { own }) => vec![
                HaiImage::Normal(own[0]),
                HaiImage::Hidden,
                HaiImage::Hidden,
                HaiImage::Normal(own[3]),
            ],
        }
    }
}

impl Tehai {
    /// Concealed tiles, then the winning tile, then each meld
    pub fn to_image(&self) -> Vec<Vec<HaiImage>> {
        let mut groups = vec![
            self.hai().iter().copied().map(HaiImage::Normal).collect(),
            vec![HaiImage::Normal(self.agari_hai().hai)],
        ];
        groups.extend(self.fuuro().iter().map(Fuuro::to_image));
        groups
    }
}

fn body(hai: Option<Hai>, style: TileStyle) -> String {
    match (style, hai) {
        (TileStyle::Notation, Some(hai)) => format!("{:<3}", hai.to_string()),
        (TileStyle::Notation, None) => format!("{:<3}", "_"),
        (TileStyle::Unicode, Some(hai)) => hai.to_unicode_string(),
        (TileStyle::Unicode, None) => format!("{} ", Hai::back_char()),
    }
}

fn blank(style: TileStyle) -> String {
    match style {
        TileStyle::Notation => "     ".to_owned(),
        TileStyle::Unicode => "    ".to_owned(),
    }
}

fn cell(hai: Option<Hai>, sideways: bool, style: TileStyle) -> String {
    let body = body(hai, style);
    if sideways {
        format!("[{}]", body)
    } else {
        format!(" {} ", body)
    }
}

/// Render groups of tiles, one space between groups. Stacked tiles get a
/// second line on top.
pub fn render(groups: &[Vec<HaiImage>], style: TileStyle) -> String {
    let mut top = String::new();
    let mut bottom = String::new();
    let mut stacked = false;
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            top.push(' ');
            bottom.push(' ');
        }
        for image in group {
            match *image {
                HaiImage::Normal(hai) => {
                    top.push_str(&blank(style));
                    bottom.push_str(&cell(Some(hai), false, style));
                }
                HaiImage::Sideways(hai) => {
                    top.push_str(&blank(style));
                    bottom.push_str(&cell(Some(hai), true, style));
                }
                HaiImage::Hidden => {
                    top.push_str(&blank(style));
                    bottom.push_str(&cell(None, false, style));
                }
                HaiImage::Stack {
                    bottom: lower,
                    top: upper,
                } => {
                    stacked = true;
                    top.push_str(&cell(Some(upper), true, style));
                    bottom.push_str(&cell(Some(lower), true, style));
                }
            }
        }
    }
    let bottom = bottom.trim_end().to_owned();
    if stacked {
        format!("{}\n{}", top.trim_end(), bottom)
    } else {
        bottom
    }
}
