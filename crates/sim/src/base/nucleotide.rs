use core::fmt;

use serde::{Deserialize, Serialize};
use crate::errors::InvalidBase;

/// A set of canonical bases (A, C, G, T) stored as a 4-bit mask.
///
/// Bit 0 is A, bit 1 is C, bit 2 is G and bit 3 is T.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BaseSet(u8);

impl BaseSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// All four canonical bases.
    pub const ALL: Self = Self(0b1111);

    /// Build a set from its raw mask. Bits above the fourth are ignored.
    #[inline(always)]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    /// Raw 4-bit mask.
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Number of canonical bases in the set.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if the canonical `base` is in the set.
    ///
    /// Ambiguity codes are contained when all of their bases are.
    #[inline(always)]
    pub const fn contains(self, base: Base) -> bool {
        let mask = base.canonical_set().0;
        self.0 & mask == mask
    }

    #[inline(always)]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline(always)]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Iterate over the canonical bases in the set, in A, C, G, T order.
    pub fn iter(self) -> impl Iterator<Item = Base> {
        Base::CANONICAL.into_iter().filter(move |b| self.contains(*b))
    }
}

/// A DNA base: one of the four canonical nucleotides or one of the eleven
/// IUPAC ambiguity codes.
///
/// Every variant stands for a fixed, non-empty subset of {A, C, G, T}
/// (see [`Base::canonical_set`]). Two bases are compatible when their
/// subsets intersect, so `N` is compatible with everything and `R` (A or G)
/// is compatible with `A`, `G`, `M`, `D`, ... but not with `C` or `Y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Base {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
    /// A or C (amino)
    M = 4,
    /// A or G (purine)
    R = 5,
    /// A or T (weak)
    W = 6,
    /// C or G (strong)
    S = 7,
    /// C or T (pyrimidine)
    Y = 8,
    /// G or T (keto)
    K = 9,
    /// not T
    V = 10,
    /// not G
    H = 11,
    /// not C
    D = 12,
    /// not A
    B = 13,
    /// any base
    N = 14,
}

impl Base {
    /// The four canonical bases, in index order.
    pub const CANONICAL: [Base; 4] = [Base::A, Base::C, Base::G, Base::T];

    /// Every symbol of the alphabet.
    pub const ALL: [Base; 15] = [
        Base::A,
        Base::C,
        Base::G,
        Base::T,
        Base::M,
        Base::R,
        Base::W,
        Base::S,
        Base::Y,
        Base::K,
        Base::V,
        Base::H,
        Base::D,
        Base::B,
        Base::N,
    ];

    /// Convert from a canonical index (0-3).
    #[inline(always)]
    pub const fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::A),
            1 => Some(Self::C),
            2 => Some(Self::G),
            3 => Some(Self::T),
            _ => None,
        }
    }

    /// Index of a canonical base (A=0, C=1, G=2, T=3), `None` for
    /// ambiguity codes.
    #[inline(always)]
    pub const fn canonical_index(self) -> Option<u8> {
        match self {
            Self::A | Self::C | Self::G | Self::T => Some(self as u8),
            _ => None,
        }
    }

    #[inline(always)]
    pub const fn is_canonical(self) -> bool {
        (self as u8) < 4
    }

    /// Convert from an ASCII byte. Accepts the fifteen IUPAC symbols in
    /// either case; returns `None` for anything else.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte.to_ascii_uppercase() {
            b'A' => Some(Self::A),
            b'C' => Some(Self::C),
            b'G' => Some(Self::G),
            b'T' => Some(Self::T),
            b'M' => Some(Self::M),
            b'R' => Some(Self::R),
            b'W' => Some(Self::W),
            b'S' => Some(Self::S),
            b'Y' => Some(Self::Y),
            b'K' => Some(Self::K),
            b'V' => Some(Self::V),
            b'H' => Some(Self::H),
            b'D' => Some(Self::D),
            b'B' => Some(Self::B),
            b'N' => Some(Self::N),
            _ => None,
        }
    }

    /// Uppercase ASCII byte for this base.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
            Self::M => b'M',
            Self::R => b'R',
            Self::W => b'W',
            Self::S => b'S',
            Self::Y => b'Y',
            Self::K => b'K',
            Self::V => b'V',
            Self::H => b'H',
            Self::D => b'D',
            Self::B => b'B',
            Self::N => b'N',
        }
    }

    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }

    /// The canonical bases this symbol stands for.
    #[inline(always)]
    pub const fn canonical_set(self) -> BaseSet {
        const A: u8 = 0b0001;
        const C: u8 = 0b0010;
        const G: u8 = 0b0100;
        const T: u8 = 0b1000;
        BaseSet(match self {
            Self::A => A,
            Self::C => C,
            Self::G => G,
            Self::T => T,
            Self::M => A | C,
            Self::R => A | G,
            Self::W => A | T,
            Self::S => C | G,
            Self::Y => C | T,
            Self::K => G | T,
            Self::V => A | C | G,
            Self::H => A | C | T,
            Self::D => A | G | T,
            Self::B => C | G | T,
            Self::N => A | C | G | T,
        })
    }

    /// The symbol standing for exactly `set`, or `None` for the empty set.
    pub const fn from_set(set: BaseSet) -> Option<Self> {
        match set.bits() {
            0b0001 => Some(Self::A),
            0b0010 => Some(Self::C),
            0b0100 => Some(Self::G),
            0b1000 => Some(Self::T),
            0b0011 => Some(Self::M),
            0b0101 => Some(Self::R),
            0b1001 => Some(Self::W),
            0b0110 => Some(Self::S),
            0b1010 => Some(Self::Y),
            0b1100 => Some(Self::K),
            0b0111 => Some(Self::V),
            0b1011 => Some(Self::H),
            0b1101 => Some(Self::D),
            0b1110 => Some(Self::B),
            0b1111 => Some(Self::N),
            _ => None,
        }
    }

    /// Complementary base. Canonical bases pair A <-> T and C <-> G;
    /// ambiguity codes map to the code of the complementary subset.
    #[inline(always)]
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
            Self::M => Self::K,
            Self::K => Self::M,
            Self::R => Self::Y,
            Self::Y => Self::R,
            Self::W => Self::W,
            Self::S => Self::S,
            Self::V => Self::B,
            Self::B => Self::V,
            Self::H => Self::D,
            Self::D => Self::H,
            Self::N => Self::N,
        }
    }

    /// Canonical bases shared by `self` and `other`.
    #[inline(always)]
    pub const fn overlap(self, other: Self) -> BaseSet {
        if self as u8 == other as u8 {
            return self.canonical_set();
        }
        self.canonical_set().intersection(other.canonical_set())
    }

    /// Return `true` if the two symbols share at least one canonical base.
    #[inline(always)]
    pub const fn compatible(self, other: Self) -> bool {
        !self.overlap(other).is_empty()
    }

    /// Decode a numeric base value: the value is rounded up to the next
    /// integer and 1, 2, 3, 4 map to A, C, G, T. Zero is treated as A.
    pub fn from_encoding(value: f64) -> Result<Self, InvalidBase> {
        if !(0.0..=4.0).contains(&value) {
            return Err(InvalidBase::Encoding(value));
        }
        let idx = (value.ceil() as u8).max(1) - 1;
        Self::from_index(idx).ok_or(InvalidBase::Encoding(value))
    }

    /// Numeric value of a canonical base (A=1 ... T=4).
    #[inline]
    pub const fn encoding(self) -> Option<f64> {
        match self.canonical_index() {
            Some(idx) => Some(idx as f64 + 1.0),
            None => None,
        }
    }
}

impl TryFrom<u8> for Base {
    type Error = InvalidBase;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_ascii(byte).ok_or(InvalidBase::Byte(byte))
    }
}

impl TryFrom<char> for Base {
    type Error = InvalidBase;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii() {
            Self::from_ascii(c as u8).ok_or(InvalidBase::Char(c))
        } else {
            Err(InvalidBase::Char(c))
        }
    }
}

impl From<Base> for char {
    #[inline(always)]
    fn from(base: Base) -> char {
        base.to_char()
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
