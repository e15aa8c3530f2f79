//! # Rendering
//!
//! Every function here turns library data into a `String`; printing happens in
//! `commands.rs`. Layout math (widths, truncation, padding) is Unicode-aware so
//! names with umlauts or wide characters keep the columns straight.

use billzapp::api::{CmdMessage, MessageLevel};
use billzapp::config::BillzConfig;
use billzapp::index::DisplayItem;
use billzapp::stats::Stats;
use colored::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const INDEX_WIDTH: usize = 4;
pub const NAME_WIDTH: usize = 32;
pub const PRICE_WIDTH: usize = 12;
const ELLIPSIS: char = '…';

pub fn format_price(price: f64, currency: &str) -> String {
    format!("{} {:.2}", currency, price)
}

/// Cuts `text` to at most `width` columns, marking the cut with an ellipsis.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

fn pad_to_width(text: &str, width: usize) -> String {
    let fitted = truncate_to_width(text, width);
    let padding = width.saturating_sub(fitted.width());
    format!("{}{}", fitted, " ".repeat(padding))
}

/// The item table followed by the total of the whole sequence.
pub fn render_item_list(items: &[DisplayItem], total: f64, currency: &str, show_ids: bool) -> String {
    if items.is_empty() {
        return format!(
            "{}\n",
            "No items found. Add one with: billz add <name> <price> <date>".dimmed()
        );
    }

    let mut out = String::new();
    for dp in items {
        let index = format!("{:>width$}.", dp.index, width = INDEX_WIDTH - 1);
        let name = pad_to_width(&dp.item.name, NAME_WIDTH);
        let price = format!(
            "{:>width$}",
            format_price(dp.item.price, currency),
            width = PRICE_WIDTH
        );
        out.push_str(&format!(
            "{} {} {}   {}",
            index.yellow(),
            name,
            price,
            dp.item.display_date().dimmed()
        ));
        if show_ids {
            out.push_str(&format!("   {}", dp.item.id.to_string().dimmed()));
        }
        out.push('\n');
    }

    out.push_str(&render_total_line(total, currency));
    out
}

pub fn render_total_line(total: f64, currency: &str) -> String {
    let label = pad_to_width("Total", INDEX_WIDTH + 1 + NAME_WIDTH);
    let amount = format!(
        "{:>width$}",
        format_price(total, currency),
        width = PRICE_WIDTH
    );
    format!("{} {}\n", label.bold(), amount.bold())
}

/// Full details, one block per item.
pub fn render_item_details(items: &[DisplayItem], currency: &str) -> String {
    let mut blocks = Vec::with_capacity(items.len());
    for dp in items {
        blocks.push(format!(
            "{} {}\n  Price: {}\n  Date:  {}\n  Id:    {}\n",
            format!("{}.", dp.index).yellow(),
            dp.item.name.bold(),
            format_price(dp.item.price, currency),
            dp.item.display_date(),
            dp.item.id.to_string().dimmed()
        ));
    }
    blocks.join("\n")
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.normal(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn render_stats(stats: &Stats, currency: &str) -> String {
    let mut out = String::new();
    let row = |label: &str, value: String| format!("{:<16}{}\n", label, value);

    out.push_str(&row("Items", stats.count.to_string()));
    out.push_str(&row("Total", format_price(stats.total, currency)));
    if let Some(average) = stats.average {
        out.push_str(&row("Average", format_price(average, currency)));
    }
    if let Some(item) = &stats.cheapest {
        out.push_str(&row(
            "Cheapest",
            format!("{} ({})", item.name, format_price(item.price, currency)),
        ));
    }
    if let Some(item) = &stats.most_expensive {
        out.push_str(&row(
            "Most expensive",
            format!("{} ({})", item.name, format_price(item.price, currency)),
        ));
    }

    if !stats.by_month.is_empty() {
        out.push_str(&format!("\n{}\n", "By month".bold()));
        for month in &stats.by_month {
            let count = if month.count == 1 { "item" } else { "items" };
            out.push_str(&format!(
                "  {}  {:>width$}  {} {}\n",
                month.month,
                format_price(month.total, currency),
                month.count,
                count,
                width = PRICE_WIDTH
            ));
        }
    }
    out
}

pub fn render_config(config: &BillzConfig) -> String {
    config
        .entries()
        .into_iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}
