use crate::error::OhaengError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The four independent dichotomies, in code-letter order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// E / I
    Attitude,
    /// N / S
    Perception,
    /// T / F
    Judgment,
    /// J / P
    Lifestyle,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Attitude,
        Axis::Perception,
        Axis::Judgment,
        Axis::Lifestyle,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The pole selected by a non-negative score.
    pub fn positive(self) -> Pole {
        match self {
            Self::Attitude => Pole::E,
            Self::Perception => Pole::N,
            Self::Judgment => Pole::T,
            Self::Lifestyle => Pole::J,
        }
    }

    /// The pole selected by a negative score.
    pub fn negative(self) -> Pole {
        self.positive().opposite()
    }

    pub fn poles(self) -> [Pole; 2] {
        [self.positive(), self.negative()]
    }
}

/// One side of a dichotomy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pole {
    E,
    I,
    N,
    S,
    T,
    F,
    J,
    P,
}

impl Pole {
    pub const ALL: [Pole; 8] = [
        Pole::E,
        Pole::I,
        Pole::N,
        Pole::S,
        Pole::T,
        Pole::F,
        Pole::J,
        Pole::P,
    ];

    /// Position in [`Pole::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn axis(self) -> Axis {
        match self {
            Self::E | Self::I => Axis::Attitude,
            Self::N | Self::S => Axis::Perception,
            Self::T | Self::F => Axis::Judgment,
            Self::J | Self::P => Axis::Lifestyle,
        }
    }

    pub fn opposite(self) -> Pole {
        match self {
            Self::E => Self::I,
            Self::I => Self::E,
            Self::N => Self::S,
            Self::S => Self::N,
            Self::T => Self::F,
            Self::F => Self::T,
            Self::J => Self::P,
            Self::P => Self::J,
        }
    }

    pub fn is_positive(self) -> bool {
        self.axis().positive() == self
    }

    pub fn letter(self) -> char {
        match self {
            Self::E => 'E',
            Self::I => 'I',
            Self::N => 'N',
            Self::S => 'S',
            Self::T => 'T',
            Self::F => 'F',
            Self::J => 'J',
            Self::P => 'P',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'E' => Some(Self::E),
            'I' => Some(Self::I),
            'N' => Some(Self::N),
            'S' => Some(Self::S),
            'T' => Some(Self::T),
            'F' => Some(Self::F),
            'J' => Some(Self::J),
            'P' => Some(Self::P),
            _ => None,
        }
    }
}

impl std::fmt::Display for Pole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Signed score per axis. The sign picks the pole, the magnitude is signal strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisScores {
    pub attitude: f64,
    pub perception: f64,
    pub judgment: f64,
    pub lifestyle: f64,
}

impl AxisScores {
    pub fn from_array(values: [f64; 4]) -> Self {
        Self {
            attitude: values[0],
            perception: values[1],
            judgment: values[2],
            lifestyle: values[3],
        }
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.attitude, self.perception, self.judgment, self.lifestyle]
    }

    pub fn get(&self, axis: Axis) -> f64 {
        self.to_array()[axis.index()]
    }

    /// Pole chosen by the sign of the axis score (zero counts as positive).
    pub fn pole(&self, axis: Axis) -> Pole {
        if self.get(axis) >= 0.0 {
            axis.positive()
        } else {
            axis.negative()
        }
    }

    /// Σ|score| over the four axes.
    pub fn magnitude(&self) -> f64 {
        self.to_array().iter().map(|v| v.abs()).sum()
    }

    pub fn code(&self) -> TypeCode {
        TypeCode([
            self.pole(Axis::Attitude),
            self.pole(Axis::Perception),
            self.pole(Axis::Judgment),
            self.pole(Axis::Lifestyle),
        ])
    }
}

/// A four-letter type code: one pole per axis, in axis order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeCode([Pole; 4]);

impl TypeCode {
    /// Build from poles; each pole must belong to the axis at its position.
    pub fn new(poles: [Pole; 4]) -> Result<Self, OhaengError> {
        for (axis, pole) in Axis::ALL.iter().zip(poles.iter()) {
            if pole.axis() != *axis {
                return Err(OhaengError::InvalidTypeCode(
                    poles.iter().map(|p| p.letter()).collect(),
                ));
            }
        }
        Ok(Self(poles))
    }

    /// All sixteen codes, E before I, N before S, T before F, J before P,
    /// with the attitude axis varying slowest.
    pub fn all() -> [TypeCode; 16] {
        let mut codes = [TypeCode([Pole::E, Pole::N, Pole::T, Pole::J]); 16];
        let mut i = 0;
        for a in Axis::Attitude.poles() {
            for b in Axis::Perception.poles() {
                for c in Axis::Judgment.poles() {
                    for d in Axis::Lifestyle.poles() {
                        codes[i] = TypeCode([a, b, c, d]);
                        i += 1;
                    }
                }
            }
        }
        codes
    }

    pub fn poles(&self) -> [Pole; 4] {
        self.0
    }

    pub fn pole(&self, axis: Axis) -> Pole {
        self.0[axis.index()]
    }

    /// The same code with one axis switched to its other pole.
    pub fn flipped(&self, axis: Axis) -> TypeCode {
        let mut poles = self.0;
        poles[axis.index()] = poles[axis.index()].opposite();
        TypeCode(poles)
    }
}

impl std::fmt::Display for TypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for pole in self.0 {
            write!(f, "{}", pole.letter())?;
        }
        Ok(())
    }
}

impl FromStr for TypeCode {
    type Err = OhaengError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let letters: Vec<char> = trimmed.chars().collect();
        if letters.len() != 4 {
            return Err(OhaengError::InvalidTypeCode(trimmed.to_string()));
        }
        let mut poles = [Pole::E; 4];
        for (slot, c) in poles.iter_mut().zip(letters) {
            *slot = Pole::from_letter(c)
                .ok_or_else(|| OhaengError::InvalidTypeCode(trimmed.to_string()))?;
        }
        Self::new(poles).map_err(|_| OhaengError::InvalidTypeCode(trimmed.to_string()))
    }
}

impl TryFrom<String> for TypeCode {
    type Error = OhaengError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeCode> for String {
    fn from(code: TypeCode) -> Self {
        code.to_string()
    }
}

/// Probability per pole.
///
/// Built from axis scores, each complementary pair sums to 1.0. After a
/// posterior update the poles evolve independently and a pair need not sum
/// to 1.0; only the 16-way joint distribution is normalized.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisProbabilities {
    #[serde(rename = "E")]
    pub e: f64,
    #[serde(rename = "I")]
    pub i: f64,
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "S")]
    pub s: f64,
    #[serde(rename = "T")]
    pub t: f64,
    #[serde(rename = "F")]
    pub f: f64,
    #[serde(rename = "J")]
    pub j: f64,
    #[serde(rename = "P")]
    pub p: f64,
}

impl AxisProbabilities {
    /// Every pole at 0.5.
    pub fn uniform() -> Self {
        Self::from_fn(|_| 0.5)
    }

    pub fn from_fn(mut f: impl FnMut(Pole) -> f64) -> Self {
        Self {
            e: f(Pole::E),
            i: f(Pole::I),
            n: f(Pole::N),
            s: f(Pole::S),
            t: f(Pole::T),
            f: f(Pole::F),
            j: f(Pole::J),
            p: f(Pole::P),
        }
    }

    pub fn get(&self, pole: Pole) -> f64 {
        match pole {
            Pole::E => self.e,
            Pole::I => self.i,
            Pole::N => self.n,
            Pole::S => self.s,
            Pole::T => self.t,
            Pole::F => self.f,
            Pole::J => self.j,
            Pole::P => self.p,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pole, f64)> + '_ {
        Pole::ALL.iter().map(move |p| (*p, self.get(*p)))
    }

    /// Unnormalized joint weight of a code: product of its four pole probabilities.
    pub fn joint(&self, code: &TypeCode) -> f64 {
        code.poles().iter().map(|p| self.get(*p)).product()
    }
}
