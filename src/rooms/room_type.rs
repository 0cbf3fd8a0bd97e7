// src/rooms/room_type.rs
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Connectivity class of a room: which of its sides have openings.
///
/// The discriminants are the ordinal used when a type is drawn uniformly from
/// the whole enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// Filler room, not guaranteed to connect to anything.
    Side = 0,
    /// Left and right.
    Lr = 1,
    /// Left, right and bottom.
    Lrb = 2,
    /// Left, right and top.
    Lrt = 3,
    /// All four sides.
    Lrtb = 4,
}

impl RoomType {
    /// Every room type, in ordinal order.
    pub const ALL: [RoomType; 5] = [
        RoomType::Side,
        RoomType::Lr,
        RoomType::Lrb,
        RoomType::Lrt,
        RoomType::Lrtb,
    ];

    /// Types without a bottom opening.
    pub const BOTTOM_CLOSED: [RoomType; 2] = [RoomType::Lr, RoomType::Lrt];

    /// Types with a bottom opening.
    pub const BOTTOM_OPENED: [RoomType; 2] = [RoomType::Lrb, RoomType::Lrtb];

    pub fn name(&self) -> &'static str {
        match self {
            RoomType::Side => "side",
            RoomType::Lr => "lr",
            RoomType::Lrb => "lrb",
            RoomType::Lrt => "lrt",
            RoomType::Lrtb => "lrtb",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<RoomType> {
        RoomType::ALL.get(index).copied()
    }

    pub fn is_bottom_closed(&self) -> bool {
        RoomType::BOTTOM_CLOSED.contains(self)
    }

    pub fn is_bottom_opened(&self) -> bool {
        RoomType::BOTTOM_OPENED.contains(self)
    }

    /// Uniform draw over the whole enumeration.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> RoomType {
        RoomType::ALL[rng.random_range(0..RoomType::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_index_round_trips_through_all() {
        for (i, room_type) in RoomType::ALL.iter().enumerate() {
            assert_eq!(room_type.index(), i);
            assert_eq!(RoomType::from_index(i), Some(*room_type));
        }
        assert_eq!(RoomType::from_index(5), None);
    }

    #[test]
    fn test_bottom_sets_are_disjoint() {
        for room_type in RoomType::ALL {
            assert!(!(room_type.is_bottom_closed() && room_type.is_bottom_opened()));
        }
        assert!(RoomType::Lrt.is_bottom_closed());
        assert!(RoomType::Lrtb.is_bottom_opened());
        assert!(!RoomType::Side.is_bottom_closed());
        assert!(!RoomType::Side.is_bottom_opened());
    }

    #[test]
    fn test_random_reaches_every_type() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[RoomType::random(&mut rng).index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&RoomType::Lrtb).unwrap();
        assert_eq!(json, "\"lrtb\"");
        let parsed: RoomType = serde_json::from_str("\"lrb\"").unwrap();
        assert_eq!(parsed, RoomType::Lrb);
    }
}
