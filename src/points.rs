use std::fmt;

use num_bigint::BigUint;

use crate::hand::WinningMethod;
use crate::yaku::YakuValue;

const MANGAN: u32 = 2000;
const HANEMAN: u32 = 3000;
const BAIMAN: u32 = 4000;
const SANBAIMAN: u32 = 6000;
const YAKUMAN: u32 = 8000;
/// Han counted per yakuman when limits are off
pub const AOTENJO_YAKUMAN_HAN: u32 = 13;

/// Limit a hand's base points were capped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PointClass {
    /// Computed from fu and han, under every limit
    Normal,
    Mangan,
    Haneman,
    Baiman,
    Sanbaiman,
    KazoeYakuman,
    Yakuman(u32),
    /// No limit applied
    Aotenjo,
}

impl PointClass {
    pub fn name(self) -> Option<String> {
        match self {
            PointClass::Normal | PointClass::Aotenjo => None,
            PointClass::Mangan => Some("Mangan".to_owned()),
            PointClass::Haneman => Some("Haneman".to_owned()),
            PointClass::Baiman => Some("Baiman".to_owned()),
            PointClass::Sanbaiman => Some("Sanbaiman".to_owned()),
            PointClass::KazoeYakuman => Some("Kazoe yakuman".to_owned()),
            PointClass::Yakuman(1) => Some("Yakuman".to_owned()),
            PointClass::Yakuman(n) => Some(format!("{}x Yakuman", n)),
        }
    }
}

/// Base points of a hand, before the dealer and tsumo multipliers
pub fn base_point(rank: YakuValue, fu: u32, aotenjo: bool) -> (BigUint, PointClass) {
    if aotenjo {
        let han = match rank {
            YakuValue::Han(han) => han,
            YakuValue::Yakuman(n) => n * AOTENJO_YAKUMAN_HAN,
        };
        return (BigUint::from(fu) << (han as usize + 2), PointClass::Aotenjo);
    }

    let (base, class) = match rank {
        YakuValue::Yakuman(n) => (n * YAKUMAN, PointClass::Yakuman(n)),
        YakuValue::Han(13..) => (YAKUMAN, PointClass::KazoeYakuman),
        YakuValue::Han(11 | 12) => (SANBAIMAN, PointClass::Sanbaiman),
        YakuValue::Han(8..=10) => (BAIMAN, PointClass::Baiman),
        YakuValue::Han(6 | 7) => (HANEMAN, PointClass::Haneman),
        YakuValue::Han(5) => (MANGAN, PointClass::Mangan),
        YakuValue::Han(han) => {
            let base = fu << (han + 2);
            if base > MANGAN {
                (MANGAN, PointClass::Mangan)
            } else {
                (base, PointClass::Normal)
            }
        }
    };
    (BigUint::from(base), class)
}

fn round_up_100(points: BigUint) -> BigUint {
    (points + 99u32) / 100u32 * 100u32
}

/// What the losers pay
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Payment {
    /// Paid by the discarder alone
    Ron(BigUint),
    /// Dealer's tsumo, each of the three others pays `ko`
    TsumoOya { ko: BigUint },
    TsumoKo { oya: BigUint, ko: BigUint },
}

impl Payment {
    pub fn new(base: &BigUint, oya: bool, method: WinningMethod) -> Self {
        match (method, oya) {
            (WinningMethod::Ron, true) => Payment::Ron(round_up_100(base * 6u32)),
            (WinningMethod::Ron, false) => Payment::Ron(round_up_100(base * 4u32)),
            (WinningMethod::Tsumo, true) => Payment::TsumoOya {
                ko: round_up_100(base * 2u32),
            },
            (WinningMethod::Tsumo, false) => Payment::TsumoKo {
                oya: round_up_100(base * 2u32),
                ko: round_up_100(base.clone()),
            },
        }
    }

    pub fn total(&self) -> BigUint {
        match self {
            Payment::Ron(points) => points.clone(),
            Payment::TsumoOya { ko } => ko * 3u32,
            Payment::TsumoKo { oya, ko } => oya + ko * 2u32,
        }
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payment::Ron(points) => write!(f, "{}", points),
            Payment::TsumoOya { ko } => write!(f, "{} all", ko),
            Payment::TsumoKo { oya, ko } => write!(f, "{}/{}", ko, oya),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pay(rank: YakuValue, fu: u32, oya: bool, method: WinningMethod) -> Payment {
        let (base, _) = base_point(rank, fu, false);
        Payment::new(&base, oya, method)
    }

    fn ron(rank: YakuValue, fu: u32, oya: bool) -> u32 {
        match pay(rank, fu, oya, WinningMethod::Ron) {
            Payment::Ron(points) => u32::try_from(points).unwrap(),
            other => panic!("{:?}", other),
        }
    }

    fn tsumo_oya(rank: YakuValue, fu: u32) -> u32 {
        match pay(rank, fu, true, WinningMethod::Tsumo) {
            Payment::TsumoOya { ko } => u32::try_from(ko).unwrap(),
            other => panic!("{:?}", other),
        }
    }

    fn tsumo_ko(rank: YakuValue, fu: u32) -> (u32, u32) {
        match pay(rank, fu, false, WinningMethod::Tsumo) {
            Payment::TsumoKo { oya, ko } => {
                (u32::try_from(oya).unwrap(), u32::try_from(ko).unwrap())
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_points_ron_oya() {
        use YakuValue::*;
        for (rank, fu, expected) in [
            (Han(1), 30, 1500),
            (Han(1), 40, 2000),
            (Han(1), 110, 5300),
            (Han(2), 25, 2400),
            (Han(2), 70, 6800),
            (Han(3), 60, 11600),
            (Han(3), 70, 12000),
            (Han(4), 30, 11600),
            (Han(5), 30, 12000),
            (Han(7), 40, 18000),
            (Han(10), 40, 24000),
            (Han(12), 40, 36000),
            (Han(15), 40, 48000),
            (Yakuman(2), 40, 96000),
        ] {
            assert_eq!(ron(rank, fu, true), expected, "{:?} {}", rank, fu);
        }
    }

    #[test]
    fn test_points_ron_ko() {
        use YakuValue::*;
        for (rank, fu, expected) in [
            (Han(1), 30, 1000),
            (Han(1), 50, 1600),
            (Han(2), 25, 1600),
            (Han(2), 110, 7100),
            (Han(3), 25, 3200),
            (Han(3), 60, 7700),
            (Han(4), 30, 7700),
            (Han(4), 40, 8000),
            (Han(6), 30, 12000),
            (Yakuman(1), 30, 32000),
        ] {
            assert_eq!(ron(rank, fu, false), expected, "{:?} {}", rank, fu);
        }
    }

    #[test]
    fn test_points_tsumo() {
        use YakuValue::*;
        assert_eq!(tsumo_oya(Han(1), 30), 500);
        assert_eq!(tsumo_oya(Han(2), 20), 700);
        assert_eq!(tsumo_oya(Han(3), 25), 1600);
        assert_eq!(tsumo_oya(Han(4), 40), 4000);
        assert_eq!(tsumo_oya(Yakuman(1), 20), 16000);

        assert_eq!(tsumo_ko(Han(1), 30), (500, 300));
        assert_eq!(tsumo_ko(Han(1), 40), (700, 400));
        assert_eq!(tsumo_ko(Han(2), 20), (700, 400));
        assert_eq!(tsumo_ko(Han(3), 60), (3900, 2000));
        assert_eq!(tsumo_ko(Han(8), 30), (8000, 4000));
    }

    #[test]
    fn test_point_class() {
        use YakuValue::*;
        assert_eq!(base_point(Han(3), 60, false).1, PointClass::Normal);
        assert_eq!(base_point(Han(3), 70, false).1, PointClass::Mangan);
        assert_eq!(base_point(Han(13), 30, false).1, PointClass::KazoeYakuman);
        assert_eq!(base_point(Yakuman(3), 30, false).1, PointClass::Yakuman(3));
        assert_eq!(PointClass::Yakuman(2).name().unwrap(), "2x Yakuman");
        assert_eq!(PointClass::Normal.name(), None);
    }

    #[test]
    fn test_aotenjo_is_unbounded() {
        let (base, class) = base_point(YakuValue::Han(60), 30, true);
        assert_eq!(class, PointClass::Aotenjo);
        assert_eq!(base, BigUint::from(30u32) << 62usize);
        let payment = Payment::new(&base, false, WinningMethod::Ron);
        assert!(payment.total() > BigUint::from(u64::MAX));

        let (base, _) = base_point(YakuValue::Han(3), 70, true);
        assert_eq!(base, BigUint::from(2240u32));
    }

    #[test]
    fn test_payment_total_and_display() {
        let payment = pay(YakuValue::Han(1), 30, false, WinningMethod::Tsumo);
        assert_eq!(payment.total(), BigUint::from(1100u32));
        assert_eq!(payment.to_string(), "300/500");
        let payment = pay(YakuValue::Han(1), 30, true, WinningMethod::Tsumo);
        assert_eq!(payment.total(), BigUint::from(1500u32));
        assert_eq!(payment.to_string(), "500 all");
    }
}
