use crate::element::Element;
use serde::{Deserialize, Serialize};

/// Yin/yang polarity of a heavenly stem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// +1 for yang, -1 for yin.
    pub fn sign(self) -> f64 {
        match self {
            Self::Yang => 1.0,
            Self::Yin => -1.0,
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yang => write!(f, "Yang"),
            Self::Yin => write!(f, "Yin"),
        }
    }
}

/// The ten heavenly stems (10-cycle).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

impl Stem {
    pub const CYCLE: [Stem; 10] = [
        Stem::Gap,
        Stem::Eul,
        Stem::Byeong,
        Stem::Jeong,
        Stem::Mu,
        Stem::Gi,
        Stem::Gyeong,
        Stem::Sin,
        Stem::Im,
        Stem::Gye,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Stems pair up per element: Gap/Eul wood, Byeong/Jeong fire, and so on.
    pub fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
        }
    }

    /// Even positions are yang, odd positions yin.
    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    pub fn hanja(self) -> &'static str {
        match self {
            Self::Gap => "甲",
            Self::Eul => "乙",
            Self::Byeong => "丙",
            Self::Jeong => "丁",
            Self::Mu => "戊",
            Self::Gi => "己",
            Self::Gyeong => "庚",
            Self::Sin => "辛",
            Self::Im => "壬",
            Self::Gye => "癸",
        }
    }
}

/// The twelve earthly branches (12-cycle).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Shin,
    Yu,
    Sul,
    Hae,
}

impl Branch {
    pub const CYCLE: [Branch; 12] = [
        Branch::Ja,
        Branch::Chuk,
        Branch::In,
        Branch::Myo,
        Branch::Jin,
        Branch::Sa,
        Branch::O,
        Branch::Mi,
        Branch::Shin,
        Branch::Yu,
        Branch::Sul,
        Branch::Hae,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn element(self) -> Element {
        match self {
            Self::Ja | Self::Hae => Element::Water,
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Shin | Self::Yu => Element::Metal,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => Element::Earth,
        }
    }

    pub fn hanja(self) -> &'static str {
        match self {
            Self::Ja => "子",
            Self::Chuk => "丑",
            Self::In => "寅",
            Self::Myo => "卯",
            Self::Jin => "辰",
            Self::Sa => "巳",
            Self::O => "午",
            Self::Mi => "未",
            Self::Shin => "申",
            Self::Yu => "酉",
            Self::Sul => "戌",
            Self::Hae => "亥",
        }
    }
}

/// Stem/branch pair for a year, with the derived elements and polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSymbol {
    pub year: i32,
    pub stem: Stem,
    pub branch: Branch,
    pub stem_element: Element,
    pub branch_element: Element,
    pub polarity: Polarity,
}

impl YearSymbol {
    /// Sexagenary name, e.g. `Gi-Sa (己巳)`.
    pub fn name(&self) -> String {
        format!(
            "{:?}-{:?} ({}{})",
            self.stem,
            self.branch,
            self.stem.hanja(),
            self.branch.hanja()
        )
    }
}
