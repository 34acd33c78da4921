//! Data model for the OpenHolidays API.
//!
//! Field names follow the API's camelCase JSON. Unknown fields are ignored so
//! additions on the server side do not break decoding.

use serde::{Deserialize, Serialize};

/// One entry of a localized name list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub language: String,
    pub text: String,
}

/// First entry of a localized name list, if any.
fn first_text(names: &[LocalizedText]) -> Option<&str> {
    names.first().map(|n| n.text.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub iso_code: String,
    #[serde(default)]
    pub name: Vec<LocalizedText>,
    #[serde(default)]
    pub official_languages: Vec<String>,
}

impl Country {
    /// Label shown in the dropdown: the first localized name, or the ISO code
    /// when the API sent no names.
    pub fn display_name(&self) -> &str {
        first_text(&self.name).unwrap_or(&self.iso_code)
    }

    /// Case-insensitive match on name or ISO code, used by the dropdown filter.
    pub fn matches_filter(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let needle = filter.to_lowercase();
        self.iso_code.to_lowercase().contains(&needle)
            || self.display_name().to_lowercase().contains(&needle)
    }
}

/// Reference to a subdivision (state, province, ...) a regional holiday
/// applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubdivisionRef {
    pub code: String,
    #[serde(default)]
    pub short_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub id: String,
    #[serde(default)]
    pub name: Vec<LocalizedText>,
    pub start_date: String,
    pub end_date: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub regional_scope: String,
    #[serde(default)]
    pub nationwide: Option<bool>,
    #[serde(default)]
    pub subdivisions: Vec<SubdivisionRef>,
}

impl Holiday {
    pub fn display_name(&self) -> &str {
        first_text(&self.name).unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTRIES_JSON: &str = r#"[
        {
            "isoCode": "NL",
            "name": [{"language": "EN", "text": "Netherlands"}],
            "officialLanguages": ["NL"]
        },
        {
            "isoCode": "DE",
            "name": [{"language": "EN", "text": "Germany"}, {"language": "DE", "text": "Deutschland"}],
            "officialLanguages": ["DE"]
        }
    ]"#;

    const HOLIDAYS_JSON: &str = r#"[
        {
            "id": "b3a6a4e0-0e4b-4b9b-9d0b-0b0b0b0b0b0b",
            "startDate": "2026-12-25",
            "endDate": "2026-12-25",
            "type": "Public",
            "name": [{"language": "EN", "text": "Christmas Day"}],
            "regionalScope": "National",
            "temporalScope": "FullDay",
            "nationwide": true
        },
        {
            "id": "4f1a",
            "startDate": "2027-02-15",
            "endDate": "2027-02-16",
            "type": "Public",
            "name": [],
            "regionalScope": "Regional",
            "nationwide": false,
            "subdivisions": [{"code": "DE-BY", "shortName": "BY"}]
        }
    ]"#;

    #[test]
    fn test_decode_countries() {
        let countries: Vec<Country> = serde_json::from_str(COUNTRIES_JSON).unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].iso_code, "NL");
        assert_eq!(countries[0].display_name(), "Netherlands");
        assert_eq!(countries[1].display_name(), "Germany");
        assert_eq!(countries[1].official_languages, vec!["DE".to_string()]);
    }

    #[test]
    fn test_decode_holidays_ignores_unknown_fields() {
        let holidays: Vec<Holiday> = serde_json::from_str(HOLIDAYS_JSON).unwrap();
        assert_eq!(holidays.len(), 2);
        assert_eq!(holidays[0].display_name(), "Christmas Day");
        assert_eq!(holidays[0].kind, "Public");
        assert_eq!(holidays[0].regional_scope, "National");
        assert_eq!(holidays[1].end_date, "2027-02-16");
        assert_eq!(holidays[1].subdivisions[0].code, "DE-BY");
    }

    #[test]
    fn test_display_name_falls_back_when_names_empty() {
        let country = Country {
            iso_code: "XK".into(),
            name: vec![],
            official_languages: vec![],
        };
        assert_eq!(country.display_name(), "XK");

        let holidays: Vec<Holiday> = serde_json::from_str(HOLIDAYS_JSON).unwrap();
        assert_eq!(holidays[1].display_name(), "4f1a");
    }

    #[test]
    fn test_country_filter() {
        let countries: Vec<Country> = serde_json::from_str(COUNTRIES_JSON).unwrap();
        assert!(countries[0].matches_filter(""));
        assert!(countries[0].matches_filter("nether"));
        assert!(countries[1].matches_filter("de"));
        assert!(!countries[1].matches_filter("nl"));
    }
}
