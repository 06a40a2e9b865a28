//! Maps free-text delivery addresses onto country labels.

/// Label for addresses that match no rule.
pub const OTHER: &str = "Other";

/// Substring to look for and the label it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRule {
    pub needle: String,
    pub label: String,
}

impl CountryRule {
    pub fn new(needle: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
            label: label.into(),
        }
    }
}

/// Ordered rule list scanned first-match-wins.
///
/// Matching is case-sensitive substring containment, so order matters:
/// an address containing both "USA" and "UK" is labelled by whichever rule
/// comes first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryTable {
    rules: Vec<CountryRule>,
}

impl CountryTable {
    pub fn new(rules: Vec<CountryRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[CountryRule] {
        &self.rules
    }

    pub fn classify(&self, address: &str) -> &str {
        self.rules
            .iter()
            .find(|rule| address.contains(rule.needle.as_str()))
            .map(|rule| rule.label.as_str())
            .unwrap_or(OTHER)
    }
}

impl Default for CountryTable {
    fn default() -> Self {
        const RULES: &[(&str, &str)] = &[
            ("USA", "USA"),
            ("Canada", "Canada"),
            ("UK", "UK"),
            ("France", "France"),
            ("Germany", "Germany"),
            ("Italy", "Italy"),
            ("Spain", "Spain"),
            ("Netherlands", "Netherlands"),
            ("Japan", "Japan"),
            ("Korea", "South Korea"),
            ("Singapore", "Singapore"),
            ("Hong Kong", "Hong Kong"),
            ("China", "China"),
            ("India", "India"),
            ("Thailand", "Thailand"),
            ("Philippines", "Philippines"),
            ("Jamaica", "Jamaica"),
            ("Trinidad", "Trinidad & Tobago"),
            ("Barbados", "Barbados"),
            ("Bahamas", "Bahamas"),
            ("Grenada", "Grenada"),
            ("Australia", "Australia"),
            ("New Zealand", "New Zealand"),
            ("Brazil", "Brazil"),
            ("Argentina", "Argentina"),
            ("Peru", "Peru"),
            ("Colombia", "Colombia"),
            ("South Africa", "South Africa"),
            ("Nigeria", "Nigeria"),
            ("Egypt", "Egypt"),
            ("UAE", "UAE"),
            ("Lebanon", "Lebanon"),
            ("Jordan", "Jordan"),
            ("Qatar", "Qatar"),
        ];

        Self::new(
            RULES
                .iter()
                .map(|(needle, label)| CountryRule::new(*needle, *label))
                .collect(),
        )
    }
}
