use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use rand::Rng;
use Dir::*;

// defined in clockwise order starting at U
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U = 0,
    R = 1,
    D = 2,
    L = 3,
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        // SAFETY: (num % 4) is between 0 and 3
        unsafe { std::mem::transmute(num % 4) }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self + 2
    }
}

impl Add<u8> for Dir {
    type Output = Self;

    fn add(self, rhs: u8) -> Self::Output {
        Self::from(self as u8 + rhs % 4)
    }
}

impl Add<Self> for Dir {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self + rhs as u8
    }
}

impl AddAssign<u8> for Dir {
    fn add_assign(&mut self, rhs: u8) {
        *self = *self + rhs;
    }
}

impl Sub<u8> for Dir {
    type Output = Self;

    fn sub(self, rhs: u8) -> Self::Output {
        self + (4 - (rhs % 4))
    }
}

impl SubAssign<u8> for Dir {
    fn sub_assign(&mut self, rhs: u8) {
        *self = *self - rhs;
    }
}

// U is the smallest, directions get bigger clockwise, L is the largest
impl Ord for Dir {
    fn cmp(&self, other: &Self) -> Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

impl PartialOrd for Dir {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[test]
fn test_dir_math() {
    let test_plus = [(U, 1, R), (U, 2, D), (D, 3, R), (L, 4, L), (L, 1, U)];

    for &(start, add, expect) in &test_plus {
        assert_eq!(start + add, expect);
    }

    let test_minus = [(U, 1, L), (U, 2, D), (R, 3, D), (D, 4, D)];

    for &(start, sub, expect) in &test_minus {
        assert_eq!(start - sub, expect);
    }
}

impl Dir {
    // clockwise order starting from U
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, R, D, L].iter().copied()
    }

    pub fn iter_from(start: Self) -> impl Iterator<Item = Self> {
        Self::iter().map(move |dir| dir + start)
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::from(rng.gen_range(0..4_u8))
    }

    /// Clockwise angle from self to other in quarter turns
    pub fn clockwise_distance_to(self, other: Self) -> u8 {
        (other as u8 + 4 - self as u8) % 4
    }

    pub fn is_reversal_of(self, other: Self) -> bool {
        self == -other
    }

    /// The turns that don't reverse the snake
    pub fn turns(self) -> [Self; 2] {
        [self + 1, self - 1]
    }
}

#[test]
fn test_clockwise_distance_to() {
    for (from, to, clockwise_dist) in [
        (U, U, 0),
        (U, R, 1),
        (U, D, 2),
        (U, L, 3),
        (R, U, 3),
        (D, R, 3),
        (L, U, 1),
    ] {
        assert_eq!(
            from.clockwise_distance_to(to),
            clockwise_dist,
            "{:?} => {:?}",
            from,
            to
        )
    }
}

#[test]
fn test_reversal() {
    for dir in Dir::iter() {
        assert!((-dir).is_reversal_of(dir));
        assert!(!dir.is_reversal_of(dir));
        for turn in dir.turns() {
            assert!(!turn.is_reversal_of(dir));
        }
    }
}

#[test]
fn test_random_hits_every_dir() {
    use rand::{rngs::StdRng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(3);
    let mut seen = [false; 4];
    for _ in 0..200 {
        seen[Dir::random(&mut rng) as usize] = true;
    }
    assert_eq!(seen, [true; 4]);
}
