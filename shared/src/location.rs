use derive_more::Display;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

/// Body location of the lesion, in the order the picker lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Location {
    Scalp,
    Ear,
    Face,
    Back,
    Trunk,
    Chest,
    #[strum(serialize = "Upper Extremity")]
    UpperExtremity,
    Abdomen,
    #[strum(serialize = "Lower Extremity")]
    LowerExtremity,
    Genital,
    Neck,
    Hand,
    Foot,
    Acral,
}

impl Location {
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Wire value sent as the `localization` form field.
    pub fn token(self) -> String {
        self.label().to_lowercase().replace(' ', "_")
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::iter().find(|location| location.token() == token)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Sex {
    #[display(fmt = "Male")]
    Male,
    #[display(fmt = "Female")]
    Female,
}

impl Sex {
    pub fn token(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::iter().find(|sex| sex.token() == token)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}
