use crate::palette;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A substance detected in roadside oral fluid testing.
///
/// `Unknown` covers positive roadside screens without laboratory
/// confirmation of the specific drug ("Screening Only" in the displays),
/// common in QLD, TAS and NT.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum DrugType {
    Amphetamine,
    Cannabis,
    Ecstasy,
    Cocaine,
    Unknown,
}

impl DrugType {
    /// All drug types, in display order.
    pub const ALL: [DrugType; 5] = [
        DrugType::Amphetamine,
        DrugType::Cannabis,
        DrugType::Ecstasy,
        DrugType::Cocaine,
        DrugType::Unknown,
    ];

    /// Canonical name as it appears in canonical records.
    pub fn name(&self) -> &'static str {
        match self {
            DrugType::Amphetamine => "Amphetamine",
            DrugType::Cannabis => "Cannabis",
            DrugType::Ecstasy => "Ecstasy",
            DrugType::Cocaine => "Cocaine",
            DrugType::Unknown => "Unknown",
        }
    }

    /// Display label. `Unknown` is surfaced as "Screening Only".
    pub fn label(&self) -> &'static str {
        match self {
            DrugType::Unknown => "Screening Only",
            other => other.name(),
        }
    }

    /// Tooltip description.
    pub fn description(&self) -> &'static str {
        match self {
            DrugType::Amphetamine => {
                "Includes methamphetamine and other amphetamine-type stimulants"
            }
            DrugType::Cannabis => "THC detected in oral fluid sample",
            DrugType::Ecstasy => "MDMA and related compounds",
            DrugType::Cocaine => "Cocaine detected in oral fluid sample",
            DrugType::Unknown => {
                "Positive roadside screening without laboratory confirmation of \
                 specific drug type. Common in QLD, TAS, and NT jurisdictions."
            }
        }
    }

    /// Chart color (Okabe-Ito, colorblind-safe).
    pub fn color(&self) -> &'static str {
        match self {
            DrugType::Amphetamine => palette::VERMILLION,
            DrugType::Cannabis => palette::TEAL,
            DrugType::Ecstasy => palette::PINK,
            DrugType::Cocaine => palette::BLUE,
            DrugType::Unknown => palette::MUTED,
        }
    }
}

impl fmt::Display for DrugType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DrugType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_drug_type(s).as_str() {
            "Amphetamine" => Ok(DrugType::Amphetamine),
            "Cannabis" => Ok(DrugType::Cannabis),
            "Ecstasy" => Ok(DrugType::Ecstasy),
            "Cocaine" => Ok(DrugType::Cocaine),
            "Unknown" => Ok(DrugType::Unknown),
            _ => Err(()),
        }
    }
}

/// Map a raw drug name from the data exports to its canonical Title Case
/// spelling. Handles the UPPERCASE/lowercase variations of the KNIME export
/// generations; lab synonyms collapse to one canonical type
/// (METHYLAMPHETAMINE -> Amphetamine, MDMA -> Ecstasy). Unrecognized names
/// are title-cased as-is; an empty name is "Unknown".
pub fn normalize_drug_type(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "Unknown".to_string();
    }
    match trimmed.to_lowercase().as_str() {
        "amphetamine" | "methylamphetamine" => "Amphetamine".to_string(),
        "cannabis" => "Cannabis".to_string(),
        "ecstasy" | "mdma" => "Ecstasy".to_string(),
        "cocaine" => "Cocaine".to_string(),
        "unknown" => "Unknown".to_string(),
        lower => {
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => "Unknown".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_known_spellings() {
        assert_eq!(normalize_drug_type("METHYLAMPHETAMINE"), "Amphetamine");
        assert_eq!(normalize_drug_type("mdma"), "Ecstasy");
        assert_eq!(normalize_drug_type("CANNABIS"), "Cannabis");
        assert_eq!(normalize_drug_type("Cocaine"), "Cocaine");
        assert_eq!(normalize_drug_type("unknown"), "Unknown");
    }

    #[test]
    fn test_normalize_fallbacks() {
        // Unrecognized substances keep their name, title-cased
        assert_eq!(normalize_drug_type("OPIOID"), "Opioid");
        assert_eq!(normalize_drug_type(""), "Unknown");
        assert_eq!(normalize_drug_type("  "), "Unknown");
    }

    #[test]
    fn test_parse_via_normalization() {
        assert_eq!("MDMA".parse::<DrugType>(), Ok(DrugType::Ecstasy));
        assert_eq!(
            "methylamphetamine".parse::<DrugType>(),
            Ok(DrugType::Amphetamine)
        );
        assert!("Opioid".parse::<DrugType>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(DrugType::Unknown.label(), "Screening Only");
        assert_eq!(DrugType::Cannabis.label(), "Cannabis");
    }
}
