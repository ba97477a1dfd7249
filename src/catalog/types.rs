use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub(crate) enum Category {
    Quantitative,
    Logical,
    Verbal,
    Technical,
}

impl Category {
    pub(crate) const ALL: [Category; 4] =
        [Self::Quantitative, Self::Logical, Self::Verbal, Self::Technical];

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Quantitative => "Quantitative",
            Self::Logical => "Logical",
            Self::Verbal => "Verbal",
            Self::Technical => "Technical",
        }
    }

    /// Exact, case-sensitive lookup.
    pub(crate) fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == value)
    }

    pub(crate) fn parse_ignore_case(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str().eq_ignore_ascii_case(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub(crate) enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub(crate) const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    pub(crate) fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|difficulty| difficulty.as_str() == value)
    }
}
