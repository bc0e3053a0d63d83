use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    None,
}

impl Gender {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use Gender::*;
        match self {
            Male => "MALE",
            Female => "FEMALE",
            None => "NONE",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use Gender::*;
        match code {
            "MALE" => Some(Male),
            "FEMALE" => Some(Female),
            "NONE" => Some(None),
            _ => Option::None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_codes() {
        for g in [Gender::Male, Gender::Female, Gender::None] {
            assert_eq!(Gender::from_code(g.code()), Some(g));
        }
        assert_eq!(Gender::from_code("male"), Option::None);
        assert_eq!(Gender::from_code("Non-Binary"), Option::None);
    }

    #[test]
    fn test_gender_serde_matches_code() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"FEMALE\"");
        let g: Gender = serde_json::from_str("\"NONE\"").unwrap();
        assert_eq!(g, Gender::None);
    }
}
