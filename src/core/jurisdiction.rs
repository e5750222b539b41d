//! Jurisdiction alias table and EU member state prefixes.

use serde::Serialize;

use super::types::VerificationType;

/// A jurisdiction with an automated verification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Jurisdiction {
    India,
    EuropeanUnion,
    Usa,
    UnitedKingdom,
    Uae,
    Canada,
    Australia,
}

/// Accepted spellings, already uppercased. No fuzzy matching beyond this.
static ALIASES: &[(&str, Jurisdiction)] = &[
    ("INDIA", Jurisdiction::India),
    ("EU", Jurisdiction::EuropeanUnion),
    ("GERMANY", Jurisdiction::EuropeanUnion),
    ("FRANCE", Jurisdiction::EuropeanUnion),
    ("ITALY", Jurisdiction::EuropeanUnion),
    ("SPAIN", Jurisdiction::EuropeanUnion),
    ("NETHERLANDS", Jurisdiction::EuropeanUnion),
    ("POLAND", Jurisdiction::EuropeanUnion),
    ("BELGIUM", Jurisdiction::EuropeanUnion),
    ("AUSTRIA", Jurisdiction::EuropeanUnion),
    ("USA", Jurisdiction::Usa),
    ("UK", Jurisdiction::UnitedKingdom),
    ("UNITED KINGDOM", Jurisdiction::UnitedKingdom),
    ("UAE", Jurisdiction::Uae),
    ("UNITED ARAB EMIRATES", Jurisdiction::Uae),
    ("CANADA", Jurisdiction::Canada),
    ("AUSTRALIA", Jurisdiction::Australia),
];

impl Jurisdiction {
    pub const ALL: [Jurisdiction; 7] = [
        Self::India,
        Self::EuropeanUnion,
        Self::Usa,
        Self::UnitedKingdom,
        Self::Uae,
        Self::Canada,
        Self::Australia,
    ];

    /// Resolve a user-supplied country string.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Returns `None` for anything outside the alias table; such countries
    /// go to manual verification.
    pub fn classify(country: &str) -> Option<Self> {
        let key = country.trim().to_uppercase();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|&(_, j)| j)
    }

    /// Label echoed back in `VerificationResult::country`.
    pub fn label(self) -> &'static str {
        match self {
            Self::India => "India",
            Self::EuropeanUnion => "EU",
            Self::Usa => "USA",
            Self::UnitedKingdom => "UK",
            Self::Uae => "UAE",
            Self::Canada => "Canada",
            Self::Australia => "Australia",
        }
    }

    /// Tag of the rule that runs for this jurisdiction.
    pub fn verification_type(self) -> VerificationType {
        match self {
            Self::India => VerificationType::Gst,
            Self::EuropeanUnion => VerificationType::Vat,
            Self::Usa => VerificationType::Ein,
            Self::UnitedKingdom => VerificationType::CompanyNumber,
            Self::Uae => VerificationType::TradeLicense,
            Self::Canada => VerificationType::BusinessNumber,
            Self::Australia => VerificationType::Abn,
        }
    }

    /// All accepted spellings for this jurisdiction.
    pub fn aliases(self) -> impl Iterator<Item = &'static str> {
        ALIASES
            .iter()
            .filter(move |(_, j)| *j == self)
            .map(|(alias, _)| *alias)
    }
}

/// Check whether `code` is one of the 27 VIES member state prefixes.
///
/// Expects an uppercased code. Greece is `EL`, not `GR`.
pub fn is_eu_member_code(code: &str) -> bool {
    EU_MEMBER_CODES.binary_search(&code).is_ok()
}

/// VIES member state prefixes, sorted for binary search.
static EU_MEMBER_CODES: &[&str] = &[
    "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "EL", "ES", "FI", "FR", "HR", "HU", "IE", "IT",
    "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO", "SE", "SI", "SK",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(Jurisdiction::classify("india"), Some(Jurisdiction::India));
        assert_eq!(Jurisdiction::classify("India"), Some(Jurisdiction::India));
        assert_eq!(Jurisdiction::classify("  usa "), Some(Jurisdiction::Usa));
    }

    #[test]
    fn long_form_aliases() {
        assert_eq!(
            Jurisdiction::classify("United Kingdom"),
            Some(Jurisdiction::UnitedKingdom)
        );
        assert_eq!(
            Jurisdiction::classify("united arab emirates"),
            Some(Jurisdiction::Uae)
        );
    }

    #[test]
    fn eu_country_names_route_to_vat() {
        for name in [
            "EU", "Germany", "FRANCE", "italy", "Spain", "Netherlands", "Poland", "Belgium",
            "Austria",
        ] {
            assert_eq!(
                Jurisdiction::classify(name),
                Some(Jurisdiction::EuropeanUnion),
                "{name}"
            );
        }
    }

    #[test]
    fn no_fuzzy_matching() {
        assert_eq!(Jurisdiction::classify("US"), None);
        assert_eq!(Jurisdiction::classify("Great Britain"), None);
        assert_eq!(Jurisdiction::classify("Sweden"), None);
        assert_eq!(Jurisdiction::classify("BRAZIL"), None);
        assert_eq!(Jurisdiction::classify(""), None);
    }

    #[test]
    fn every_jurisdiction_has_an_alias() {
        for j in Jurisdiction::ALL {
            assert!(j.aliases().next().is_some(), "{j:?}");
        }
        assert_eq!(Jurisdiction::EuropeanUnion.aliases().count(), 9);
    }

    #[test]
    fn member_codes() {
        assert!(is_eu_member_code("DE"));
        assert!(is_eu_member_code("EL"));
        assert!(is_eu_member_code("SK"));
        assert!(!is_eu_member_code("GR"));
        assert!(!is_eu_member_code("GB"));
        assert!(!is_eu_member_code("XI"));
        assert!(!is_eu_member_code("de"));
    }

    #[test]
    fn member_list_is_sorted() {
        for window in EU_MEMBER_CODES.windows(2) {
            assert!(
                window[0] < window[1],
                "member codes not sorted: {} >= {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn member_list_count() {
        assert_eq!(EU_MEMBER_CODES.len(), 27);
    }
}
