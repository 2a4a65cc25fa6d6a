use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight Australian state/territory codes.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Jurisdiction {
    NSW,
    VIC,
    QLD,
    WA,
    SA,
    TAS,
    NT,
    ACT,
}

impl Jurisdiction {
    /// All jurisdictions, in the conventional display order.
    pub const ALL: [Jurisdiction; 8] = [
        Jurisdiction::NSW,
        Jurisdiction::VIC,
        Jurisdiction::QLD,
        Jurisdiction::WA,
        Jurisdiction::SA,
        Jurisdiction::TAS,
        Jurisdiction::NT,
        Jurisdiction::ACT,
    ];

    /// The short code used in the data exports ("NSW", "VIC", ...).
    pub fn code(&self) -> &'static str {
        match self {
            Jurisdiction::NSW => "NSW",
            Jurisdiction::VIC => "VIC",
            Jurisdiction::QLD => "QLD",
            Jurisdiction::WA => "WA",
            Jurisdiction::SA => "SA",
            Jurisdiction::TAS => "TAS",
            Jurisdiction::NT => "NT",
            Jurisdiction::ACT => "ACT",
        }
    }

    /// Full state/territory name for labels and tooltips.
    pub fn full_name(&self) -> &'static str {
        match self {
            Jurisdiction::NSW => "New South Wales",
            Jurisdiction::VIC => "Victoria",
            Jurisdiction::QLD => "Queensland",
            Jurisdiction::WA => "Western Australia",
            Jurisdiction::SA => "South Australia",
            Jurisdiction::TAS => "Tasmania",
            Jurisdiction::NT => "Northern Territory",
            Jurisdiction::ACT => "Australian Capital Territory",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Jurisdiction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NSW" => Ok(Jurisdiction::NSW),
            "VIC" => Ok(Jurisdiction::VIC),
            "QLD" => Ok(Jurisdiction::QLD),
            "WA" => Ok(Jurisdiction::WA),
            "SA" => Ok(Jurisdiction::SA),
            "TAS" => Ok(Jurisdiction::TAS),
            "NT" => Ok(Jurisdiction::NT),
            "ACT" => Ok(Jurisdiction::ACT),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!("NSW".parse::<Jurisdiction>(), Ok(Jurisdiction::NSW));
        assert_eq!("vic".parse::<Jurisdiction>(), Ok(Jurisdiction::VIC));
        assert_eq!(" act ".parse::<Jurisdiction>(), Ok(Jurisdiction::ACT));
        assert!("XYZ".parse::<Jurisdiction>().is_err());
    }

    #[test]
    fn test_full_names() {
        assert_eq!(Jurisdiction::WA.full_name(), "Western Australia");
        assert_eq!(Jurisdiction::NT.full_name(), "Northern Territory");
    }

    #[test]
    fn test_all_covers_eight() {
        assert_eq!(Jurisdiction::ALL.len(), 8);
    }
}
