//! # Domain Model: Billable Items
//!
//! An [`Item`] is one line on an invoice: a name, a price and the day it was bought.
//! Items are identified by a UUID that never changes and is never shown to the user.
//!
//! ## Dates
//!
//! Dates are stored as real calendar dates ([`NaiveDate`]) and written to disk in ISO
//! form (`2024-01-31`). Formatting for people (`31.01.2024`) only happens when
//! rendering. Input is lenient, because dates arrive typed by hand:
//!
//! | Input          | Example        |
//! |----------------|----------------|
//! | ISO            | `2024-01-31`   |
//! | Day first      | `31-01-2024`, `31.01.2024`, `31/01/2024` |
//! | Medium English | `Jan 31, 2024`, `31 Jan 2024` |
//! | Medium, other spellings | `5 Sept 2024`, `17 oct. 2024`, `17. Okt. 2024` |
//!
//! The same parser reads `date` fields of older documents, where the field was
//! free text in any of the forms above. Those were written in the medium style of
//! whatever locale the machine ran, so German and French month abbreviations are
//! mapped to their English counterparts before parsing.
//!
//! ## Prices
//!
//! Prices are non-negative amounts in a single currency. Both `12.50` and `12,50`
//! are accepted as input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Formats accepted by [`parse_date`], tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d/%m/%Y",
    "%b %d, %Y",
    "%d %b %Y",
    "%d. %b %Y",
];

/// Month spellings chrono's `%b` does not know, keyed lowercase without the
/// trailing dot.
const MONTH_ALIASES: &[(&str, &str)] = &[
    ("sept", "Sep"),
    // German
    ("jän", "Jan"),
    ("januar", "Jan"),
    ("febr", "Feb"),
    ("februar", "Feb"),
    ("mär", "Mar"),
    ("märz", "Mar"),
    ("mrz", "Mar"),
    ("mai", "May"),
    ("juni", "Jun"),
    ("juli", "Jul"),
    ("okt", "Oct"),
    ("oktober", "Oct"),
    ("dez", "Dec"),
    ("dezember", "Dec"),
    // French
    ("janv", "Jan"),
    ("janvier", "Jan"),
    ("févr", "Feb"),
    ("février", "Feb"),
    ("mars", "Mar"),
    ("avr", "Apr"),
    ("avril", "Apr"),
    ("juin", "Jun"),
    ("juil", "Jul"),
    ("juillet", "Jul"),
    ("août", "Aug"),
    ("déc", "Dec"),
    ("décembre", "Dec"),
];

/// Date format used when showing dates to people.
pub const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub date: NaiveDate,
}

// Older documents carry `date` as free text, so dates go through the lenient parser.
impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let helper = ItemHelper::deserialize(deserializer)?;
        let date = parse_date(&helper.date).map_err(serde::de::Error::custom)?;

        Ok(Item {
            id: helper.id,
            name: helper.name,
            price: helper.price,
            date,
        })
    }
}

#[derive(Deserialize)]
struct ItemHelper {
    id: Uuid,
    name: String,
    price: f64,
    date: String,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            date,
        }
    }

    /// Builds an item from raw field text, validating every field.
    pub fn from_input(name: &str, price: &str, date: &str) -> Result<Self, ValidationError> {
        let name = parse_name(name)?;
        let price = parse_price(price)?;
        let date = parse_date(date)?;
        Ok(Self::new(name, price, date))
    }

    pub fn display_date(&self) -> String {
        self.date.format(DISPLAY_DATE_FORMAT).to_string()
    }

    /// Case-insensitive comparison against the whole name.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    pub fn matches_name(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Field changes for an existing item. `None` leaves the field as it is.
///
/// Values are raw text and go through the same validation as new items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<String>,
    pub date: Option<String>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.date.is_none()
    }

    /// Validates the patch and returns `item` with the changes applied.
    /// `item` itself is untouched, so a rejected patch leaves no trace.
    pub fn apply_to(&self, item: &Item) -> Result<Item, ValidationError> {
        let mut updated = item.clone();
        if let Some(name) = &self.name {
            updated.name = parse_name(name)?;
        }
        if let Some(price) = &self.price {
            updated.price = parse_price(price)?;
        }
        if let Some(date) = &self.date {
            updated.date = parse_date(date)?;
        }
        Ok(updated)
    }
}

pub fn parse_name(input: &str) -> Result<String, ValidationError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

pub fn parse_price(input: &str) -> Result<f64, ValidationError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyPrice);
    }

    // Decimal comma, as in "12,50"
    let normalized = if text.contains(',') && !text.contains('.') {
        text.replace(',', ".")
    } else {
        text.to_string()
    };

    let value: f64 = normalized
        .parse()
        .map_err(|_| ValidationError::InvalidPrice(text.to_string()))?;

    if !value.is_finite() {
        return Err(ValidationError::InvalidPrice(text.to_string()));
    }
    if value < 0.0 {
        return Err(ValidationError::NegativePrice);
    }
    // -0.0 would print as "-0.00"
    Ok(value + 0.0)
}

pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyDate);
    }

    let normalized = normalize_month(text);
    [text, normalized.as_str()]
        .iter()
        .find_map(|candidate| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(candidate, fmt).ok())
        })
        .ok_or_else(|| ValidationError::InvalidDate(text.to_string()))
}

/// Rewrites month words as English abbreviations: "17. Okt. 2024" → "17. Oct 2024".
fn normalize_month(text: &str) -> String {
    text.split_whitespace()
        .map(|token| {
            if !token.chars().any(char::is_alphabetic) {
                return token.to_string();
            }
            let word = token.trim_end_matches('.');
            let key = word.to_lowercase();
            MONTH_ALIASES
                .iter()
                .find(|(alias, _)| *alias == key)
                .map(|(_, month)| month.to_string())
                .unwrap_or_else(|| word.to_string())
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn from_input_builds_item() {
        let item = Item::from_input("Widget", "12.50", "01-01-2024").unwrap();
        assert_eq!(item.name, "Widget");
        assert_eq!(item.price, 12.50);
        assert_eq!(item.date, ymd(2024, 1, 1));
    }

    #[test]
    fn from_input_trims_name() {
        let item = Item::from_input("  Widget ", "1", "2024-01-01").unwrap();
        assert_eq!(item.name, "Widget");
    }

    #[test]
    fn from_input_gives_fresh_ids() {
        let a = Item::from_input("A", "1", "2024-01-01").unwrap();
        let b = Item::from_input("A", "1", "2024-01-01").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn rejects_empty_fields() {
        assert_eq!(
            Item::from_input("", "1", "2024-01-01"),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            Item::from_input("   ", "1", "2024-01-01"),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            Item::from_input("A", "", "2024-01-01"),
            Err(ValidationError::EmptyPrice)
        );
        assert_eq!(
            Item::from_input("A", "1", ""),
            Err(ValidationError::EmptyDate)
        );
    }

    #[test]
    fn parse_price_accepts_decimal_comma() {
        assert_eq!(parse_price("12,50"), Ok(12.5));
        assert_eq!(parse_price(" 3 "), Ok(3.0));
    }

    #[test]
    fn parse_price_rejects_garbage() {
        assert!(matches!(
            parse_price("abc"),
            Err(ValidationError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("1.000,50"),
            Err(ValidationError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("inf"),
            Err(ValidationError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("NaN"),
            Err(ValidationError::InvalidPrice(_))
        ));
    }

    #[test]
    fn parse_price_rejects_negative() {
        assert_eq!(parse_price("-1"), Err(ValidationError::NegativePrice));
    }

    #[test]
    fn parse_price_normalizes_negative_zero() {
        let zero = parse_price("-0").unwrap();
        assert!(zero.is_sign_positive());
    }

    #[test]
    fn parse_date_accepts_known_formats() {
        let expected = ymd(2024, 1, 5);
        for input in [
            "2024-01-05",
            "05-01-2024",
            "05.01.2024",
            "5.1.2024",
            "05/01/2024",
            "Jan 5, 2024",
            "January 5, 2024",
            "5 Jan 2024",
        ] {
            assert_eq!(parse_date(input), Ok(expected), "input: {}", input);
        }
    }

    #[test]
    fn parse_date_accepts_other_locale_month_names() {
        assert_eq!(parse_date("5 Sept 2024"), Ok(ymd(2024, 9, 5)));
        assert_eq!(parse_date("Sept 5, 2024"), Ok(ymd(2024, 9, 5)));
        assert_eq!(parse_date("17 oct. 2024"), Ok(ymd(2024, 10, 17)));
        assert_eq!(parse_date("17. Okt. 2024"), Ok(ymd(2024, 10, 17)));
        assert_eq!(parse_date("1. März 2024"), Ok(ymd(2024, 3, 1)));
        assert_eq!(parse_date("3 févr. 2024"), Ok(ymd(2024, 2, 3)));
        assert_eq!(parse_date("12 mai 2024"), Ok(ymd(2024, 5, 12)));
    }

    #[test]
    fn parse_date_rejects_impossible_dates() {
        assert!(matches!(
            parse_date("31-02-2024"),
            Err(ValidationError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_date("yesterday"),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn serializes_date_as_iso() {
        let item = Item::new("A", 1.0, ymd(2024, 3, 9));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["date"], "2024-03-09");
        assert_eq!(json["price"], 1.0);
        assert_eq!(json["id"], item.id.to_string());
    }

    #[test]
    fn deserializes_free_text_dates() {
        let json = r#"{
            "id": "E621E1F8-C36C-495A-93FC-0C247A3E6E5F",
            "name": "Legacy",
            "price": 4.2,
            "date": "Mar 9, 2024"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.date, ymd(2024, 3, 9));
        assert_eq!(
            item.id,
            Uuid::parse_str("e621e1f8-c36c-495a-93fc-0c247a3e6e5f").unwrap()
        );
    }

    #[test]
    fn deserialize_fails_on_unknown_date() {
        let json = r#"{"id": "e621e1f8-c36c-495a-93fc-0c247a3e6e5f", "name": "X", "price": 1, "date": "soon"}"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }

    #[test]
    fn patch_applies_only_given_fields() {
        let item = Item::new("Old", 1.0, ymd(2024, 1, 1));
        let patch = ItemPatch {
            price: Some("2,5".into()),
            ..Default::default()
        };
        let updated = patch.apply_to(&item).unwrap();
        assert_eq!(updated.id, item.id);
        assert_eq!(updated.name, "Old");
        assert_eq!(updated.price, 2.5);
        assert_eq!(updated.date, item.date);
    }

    #[test]
    fn patch_validates() {
        let item = Item::new("Old", 1.0, ymd(2024, 1, 1));
        let patch = ItemPatch {
            name: Some(" ".into()),
            ..Default::default()
        };
        assert_eq!(patch.apply_to(&item), Err(ValidationError::EmptyName));
    }

    #[test]
    fn display_date_is_day_first() {
        let item = Item::new("A", 1.0, ymd(2024, 3, 9));
        assert_eq!(item.display_date(), "09.03.2024");
    }

    #[test]
    fn matches_name_ignores_case() {
        let item = Item::new("Coffee Beans", 1.0, ymd(2024, 3, 9));
        assert!(item.matches_name("beans"));
        assert!(!item.matches_name("tea"));
    }
}
