//! Dice pair value type.
//!
//! A `DicePair` is the outcome of one roll: two faces plus the face count
//! they were drawn from. Pairs are immutable once built.

use serde::{Deserialize, Serialize};

/// Default number of faces on each die.
pub const NUM_FACES: u8 = 6;

/// Two die faces and the face count used to generate them.
///
/// ```
/// use dice_wager::core::DicePair;
///
/// let pair = DicePair::new(3, 4, 6).unwrap();
/// assert_eq!(pair.total(), 7);
///
/// // Faces outside [1, faces] are rejected
/// assert!(DicePair::new(0, 4, 6).is_none());
/// assert!(DicePair::new(3, 7, 6).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDicePair")]
pub struct DicePair {
    dice1: u8,
    dice2: u8,
    faces: u8,
}

impl DicePair {
    /// Create a pair, returning `None` if either face is outside `[1, faces]`.
    #[must_use]
    pub fn new(dice1: u8, dice2: u8, faces: u8) -> Option<Self> {
        let valid = |face: u8| (1..=faces).contains(&face);
        if valid(dice1) && valid(dice2) {
            Some(Self { dice1, dice2, faces })
        } else {
            None
        }
    }

    /// Build a pair from faces the caller has already range-checked.
    pub(crate) const fn from_draw(dice1: u8, dice2: u8, faces: u8) -> Self {
        Self { dice1, dice2, faces }
    }

    /// First die face.
    #[must_use]
    pub const fn dice1(&self) -> u8 {
        self.dice1
    }

    /// Second die face.
    #[must_use]
    pub const fn dice2(&self) -> u8 {
        self.dice2
    }

    /// Face count both dice were drawn from.
    #[must_use]
    pub const fn faces(&self) -> u8 {
        self.faces
    }

    /// Sum of both faces.
    #[must_use]
    pub const fn total(&self) -> u16 {
        self.dice1 as u16 + self.dice2 as u16
    }
}

/// Unchecked wire form of a `DicePair`.
#[derive(Deserialize)]
struct RawDicePair {
    dice1: u8,
    dice2: u8,
    faces: u8,
}

impl TryFrom<RawDicePair> for DicePair {
    type Error = String;

    fn try_from(raw: RawDicePair) -> Result<Self, Self::Error> {
        Self::new(raw.dice1, raw.dice2, raw.faces).ok_or_else(|| {
            format!(
                "dice {} and {} are not both in [1, {}]",
                raw.dice1, raw.dice2, raw.faces
            )
        })
    }
}

impl std::fmt::Display for DicePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{}={}", self.dice1, self.dice2, self.total())
    }
}
