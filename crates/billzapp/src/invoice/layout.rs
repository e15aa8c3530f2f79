use crate::config::BillzConfig;
use crate::model::Item;
use chrono::{Datelike, NaiveDate};
use unicode_width::UnicodeWidthStr;

pub const NAME_WIDTH: usize = 14;
pub const PRICE_WIDTH: usize = 8;
/// Rows that fit on the single page below the header.
pub const MAX_ROWS: usize = 35;

const SEPARATOR_WIDTH: usize = 44;

const GERMAN_MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// One item row, kept as cells so each renderer can adapt the characters
/// before the columns are padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub name: String,
    pub currency: String,
    pub price: String,
    pub date: String,
}

impl ItemRow {
    fn new(item: &Item, currency: &str) -> Self {
        Self {
            name: item.name.clone(),
            currency: currency.to_string(),
            price: format!("{:.2}", item.price),
            date: item.display_date(),
        }
    }

    pub fn format(&self) -> String {
        self.format_with(|s| s.to_string())
    }

    /// Formats the row after passing every cell through `map`.
    pub fn format_with<F: Fn(&str) -> String>(&self, map: F) -> String {
        let name = map(&self.name);
        let price = map(&self.price);
        // Overlong names still get one space before the price column
        let name_pad = NAME_WIDTH.saturating_sub(name.width()).max(1);
        let price_pad = PRICE_WIDTH.saturating_sub(price.width());
        format!(
            "{}{}{}{}{}   {}",
            name,
            " ".repeat(name_pad),
            map(&self.currency),
            " ".repeat(price_pad),
            price,
            map(&self.date)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceLine {
    Blank,
    /// Sender details above the title.
    Sender(String),
    Title(String),
    Text(String),
    /// Column header row.
    Heading(String),
    Separator,
    Row(ItemRow),
    Total(String),
}

impl InvoiceLine {
    pub fn text(&self) -> String {
        match self {
            InvoiceLine::Blank => String::new(),
            InvoiceLine::Sender(s)
            | InvoiceLine::Title(s)
            | InvoiceLine::Text(s)
            | InvoiceLine::Heading(s)
            | InvoiceLine::Total(s) => s.clone(),
            InvoiceLine::Separator => "-".repeat(SEPARATOR_WIDTH),
            InvoiceLine::Row(row) => row.format(),
        }
    }
}

/// The fixed invoice layout, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceLayout {
    pub lines: Vec<InvoiceLine>,
}

impl InvoiceLayout {
    pub fn build(
        items: &[Item],
        total: f64,
        config: &BillzConfig,
        export_date: NaiveDate,
    ) -> Self {
        let mut lines = Vec::with_capacity(items.len().min(MAX_ROWS) + 16);

        if let Some(company) = &config.company {
            lines.push(InvoiceLine::Sender(company.clone()));
        }
        if let Some(iban) = &config.iban {
            lines.push(InvoiceLine::Sender(format!("IBAN: {}", iban)));
        }
        lines.push(InvoiceLine::Blank);

        lines.push(InvoiceLine::Title("RECHNUNG".to_string()));
        lines.push(InvoiceLine::Text(format!(
            "Datum: {}",
            long_date(export_date)
        )));
        lines.push(InvoiceLine::Blank);
        lines.push(InvoiceLine::Separator);
        lines.push(InvoiceLine::Blank);

        lines.push(InvoiceLine::Heading(format!(
            "{:<25} {:<10} {:<12}",
            "Name", "Preis", "Datum"
        )));
        lines.push(InvoiceLine::Separator);
        lines.push(InvoiceLine::Blank);

        for item in items.iter().take(MAX_ROWS) {
            lines.push(InvoiceLine::Row(ItemRow::new(item, &config.currency)));
        }
        if items.len() > MAX_ROWS {
            lines.push(InvoiceLine::Text(format!(
                "… und {} weitere Positionen",
                items.len() - MAX_ROWS
            )));
        }

        lines.push(InvoiceLine::Blank);
        lines.push(InvoiceLine::Total(format!(
            "Gesamtsumme: {} {:.2}",
            config.currency, total
        )));

        Self { lines }
    }

    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(InvoiceLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn rows(&self) -> impl Iterator<Item = &ItemRow> {
        self.lines.iter().filter_map(|line| match line {
            InvoiceLine::Row(row) => Some(row),
            _ => None,
        })
    }
}

/// `17. Oktober 2026`
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{}. {} {}",
        date.day(),
        GERMAN_MONTHS[date.month0() as usize],
        date.year()
    )
}
