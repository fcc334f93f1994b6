use std::{fmt, str::FromStr};

use crate::error::BayesError;

/// One of the two document classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Zero,
    One,
}

impl Label {
    pub fn as_u8(self) -> u8 {
        match self {
            Label::Zero => 0,
            Label::One => 1,
        }
    }

    pub fn is_one(self) -> bool {
        self == Label::One
    }
}

impl From<bool> for Label {
    fn from(one: bool) -> Self {
        if one {
            Label::One
        } else {
            Label::Zero
        }
    }
}

impl TryFrom<u8> for Label {
    type Error = BayesError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Zero),
            1 => Ok(Label::One),
            other => Err(BayesError::InvalidLabel(other.to_string())),
        }
    }
}

impl FromStr for Label {
    type Err = BayesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Label::Zero),
            "1" => Ok(Label::One),
            other => Err(BayesError::InvalidLabel(other.to_string())),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
