use serde::Serialize;

/// Mutually-exclusive absence classification for a day.
/// A non-`None` absence overrides hour tracking: the day carries no time
/// segments and its total is forced to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Absence {
    #[default]
    None,
    Vacation,
    NonWorking,
    Medical,
}

impl Absence {
    pub fn to_db_str(self) -> &'static str {
        match self {
            Absence::None => "none",
            Absence::Vacation => "vacation",
            Absence::NonWorking => "nonworking",
            Absence::Medical => "medical",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Absence::None),
            "vacation" => Some(Absence::Vacation),
            "nonworking" => Some(Absence::NonWorking),
            "medical" => Some(Absence::Medical),
            _ => None,
        }
    }

    /// Parse a user-supplied code (CLI argument).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "none" | "clear" => Some(Absence::None),
            "vacation" | "v" => Some(Absence::Vacation),
            "nonworking" | "nw" => Some(Absence::NonWorking),
            "medical" | "m" => Some(Absence::Medical),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Absence::None => "-",
            Absence::Vacation => "Vacation",
            Absence::NonWorking => "Non-working day",
            Absence::Medical => "Medical leave",
        }
    }

    pub fn is_none(self) -> bool {
        matches!(self, Absence::None)
    }
}
