use serde::{Deserialize, Serialize};

/// The five element categories, in canonical order.
///
/// Canonical order matters: it is the tie-break order for every argmax/argmin
/// and the `e1..e5` order of the axis coefficients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Position in canonical order (0..5).
    pub fn index(self) -> usize {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Lower-case identifier, as used in hypothesis seeds and exports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    /// Korean reading (목, 화, 토, 금, 수).
    pub fn korean(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wood" => Some(Self::Wood),
            "fire" => Some(Self::Fire),
            "earth" => Some(Self::Earth),
            "metal" => Some(Self::Metal),
            "water" => Some(Self::Water),
            _ => None,
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wood => write!(f, "Wood"),
            Self::Fire => write!(f, "Fire"),
            Self::Earth => write!(f, "Earth"),
            Self::Metal => write!(f, "Metal"),
            Self::Water => write!(f, "Water"),
        }
    }
}

/// One `f64` per element. Used both for user adjustments and as the
/// storage behind a normalized distribution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementVector {
    #[serde(default)]
    pub wood: f64,
    #[serde(default)]
    pub fire: f64,
    #[serde(default)]
    pub earth: f64,
    #[serde(default)]
    pub metal: f64,
    #[serde(default)]
    pub water: f64,
}

impl ElementVector {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build from values in canonical order.
    pub fn from_array(values: [f64; 5]) -> Self {
        Self {
            wood: values[0],
            fire: values[1],
            earth: values[2],
            metal: values[3],
            water: values[4],
        }
    }

    pub fn to_array(&self) -> [f64; 5] {
        [self.wood, self.fire, self.earth, self.metal, self.water]
    }

    pub fn get(&self, element: Element) -> f64 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    pub fn get_mut(&mut self, element: Element) -> &mut f64 {
        match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, element: Element, value: f64) -> Self {
        *self.get_mut(element) = value;
        self
    }

    pub fn add(&mut self, element: Element, amount: f64) {
        *self.get_mut(element) += amount;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        Element::ALL.iter().map(move |e| (*e, self.get(*e)))
    }

    pub fn sum(&self) -> f64 {
        self.to_array().iter().sum()
    }

    pub fn min(&self) -> f64 {
        self.to_array().iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.to_array().iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Element with the largest value; earliest in canonical order wins ties.
    pub fn strongest(&self) -> Element {
        let mut best = Element::Wood;
        for (element, value) in self.iter().skip(1) {
            if value > self.get(best) {
                best = element;
            }
        }
        best
    }

    /// Element with the smallest value; earliest in canonical order wins ties.
    pub fn weakest(&self) -> Element {
        let mut worst = Element::Wood;
        for (element, value) in self.iter().skip(1) {
            if value < self.get(worst) {
                worst = element;
            }
        }
        worst
    }
}

/// Normalized element weights: every value ≥ 0, summing to 1.0
/// (or all zero in the degenerate case).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementDistribution {
    pub weights: ElementVector,
}

impl ElementDistribution {
    pub fn get(&self, element: Element) -> f64 {
        self.weights.get(element)
    }

    pub fn total(&self) -> f64 {
        self.weights.sum()
    }

    /// Argmax, ties broken by canonical element order.
    pub fn dominant(&self) -> Element {
        self.weights.strongest()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        self.weights.iter()
    }

    pub fn is_degenerate(&self) -> bool {
        self.weights.to_array().iter().all(|v| *v == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_indices() {
        for (i, e) in Element::ALL.iter().enumerate() {
            assert_eq!(e.index(), i);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Element::parse(" Metal "), Some(Element::Metal));
        assert_eq!(Element::parse("WATER"), Some(Element::Water));
        assert_eq!(Element::parse("aether"), None);
    }

    #[test]
    fn strongest_breaks_ties_in_canonical_order() {
        let v = ElementVector::from_array([0.1, 0.4, 0.0, 0.4, 0.1]);
        assert_eq!(v.strongest(), Element::Fire);
        assert_eq!(v.weakest(), Element::Earth);
    }

    #[test]
    fn all_equal_vector_picks_wood() {
        let v = ElementVector::from_array([0.2; 5]);
        assert_eq!(v.strongest(), Element::Wood);
        assert_eq!(v.weakest(), Element::Wood);
    }

    #[test]
    fn with_and_add() {
        let mut v = ElementVector::zero().with(Element::Earth, 1.5);
        v.add(Element::Earth, 0.5);
        v.add(Element::Water, -1.0);
        assert_eq!(v.earth, 2.0);
        assert_eq!(v.water, -1.0);
        assert_eq!(v.sum(), 1.0);
        assert_eq!(v.min(), -1.0);
        assert_eq!(v.max(), 2.0);
    }

    #[test]
    fn display_and_korean() {
        assert_eq!(format!("{}", Element::Fire), "Fire");
        assert_eq!(Element::Water.korean(), "수");
        assert_eq!(Element::Wood.as_str(), "wood");
    }

    #[test]
    fn element_vector_serde_defaults_missing_fields() {
        let v: ElementVector = serde_json::from_str(r#"{"fire": 1.5}"#).unwrap();
        assert_eq!(v.fire, 1.5);
        assert_eq!(v.wood, 0.0);
    }
}
