//! Month and weekday names for calendar headings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AgendaError;

const PT_BR_MONTHS: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

const EN_US_MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

const PT_BR_WEEKDAYS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];
const EN_US_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Language used for month labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    /// Lowercase month name for a 1-based month. Out-of-range months wrap.
    pub fn month_name(&self, month: u32) -> &'static str {
        let index = (month.max(1) - 1) as usize % 12;
        match self {
            Locale::PtBr => PT_BR_MONTHS[index],
            Locale::EnUs => EN_US_MONTHS[index],
        }
    }

    /// Short weekday headers, Sunday first
    pub fn weekday_headers(&self) -> [&'static str; 7] {
        match self {
            Locale::PtBr => PT_BR_WEEKDAYS,
            Locale::EnUs => EN_US_WEEKDAYS,
        }
    }

    /// Capitalized "month year" heading, e.g. "Janeiro 2024"
    pub fn month_year_label(&self, year: i32, month: u32) -> String {
        capitalize(&format!("{} {}", self.month_name(month), year))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::PtBr => write!(f, "pt-BR"),
            Locale::EnUs => write!(f, "en-US"),
        }
    }
}

impl FromStr for Locale {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pt" | "pt-br" | "pt_br" => Ok(Locale::PtBr),
            "en" | "en-us" | "en_us" => Ok(Locale::EnUs),
            other => Err(AgendaError::Parse(format!(
                "Unsupported locale '{}'. Expected pt-BR or en-US",
                other
            ))),
        }
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_year_label_is_capitalized() {
        assert_eq!(Locale::PtBr.month_year_label(2024, 1), "Janeiro 2024");
        assert_eq!(Locale::PtBr.month_year_label(2024, 3), "Março 2024");
        assert_eq!(Locale::EnUs.month_year_label(2025, 12), "December 2025");
    }

    #[test]
    fn capitalize_handles_multibyte_and_empty() {
        assert_eq!(capitalize("ébano"), "Ébano");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn parses_locale_tags() {
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::EnUs);
        assert!("fr-FR".parse::<Locale>().is_err());
    }
}
