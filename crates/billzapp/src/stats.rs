//! Summary figures over a snapshot of items.

use crate::model::Item;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthTotal {
    /// `YYYY-MM`
    pub month: String,
    pub count: usize,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub count: usize,
    pub total: f64,
    pub average: Option<f64>,
    pub cheapest: Option<Item>,
    pub most_expensive: Option<Item>,
    /// Chronological.
    pub by_month: Vec<MonthTotal>,
}

pub fn summarize(items: &[Item]) -> Stats {
    let count = items.len();
    let total: f64 = items.iter().map(|i| i.price).sum();
    let average = (count > 0).then(|| total / count as f64);

    // First one wins on ties
    let cheapest = items
        .iter()
        .reduce(|best, i| if i.price < best.price { i } else { best })
        .cloned();
    let most_expensive = items
        .iter()
        .reduce(|best, i| if i.price > best.price { i } else { best })
        .cloned();

    let mut months: BTreeMap<String, (usize, f64)> = BTreeMap::new();
    for item in items {
        let entry = months
            .entry(item.date.format("%Y-%m").to_string())
            .or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += item.price;
    }
    let by_month = months
        .into_iter()
        .map(|(month, (count, total))| MonthTotal {
            month,
            count,
            total,
        })
        .collect();

    Stats {
        count,
        total,
        average,
        cheapest,
        most_expensive,
        by_month,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(name: &str, price: f64, y: i32, m: u32, d: u32) -> Item {
        Item::new(name, price, NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn empty_snapshot() {
        let stats = summarize(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.total, 0.0);
        assert_eq!(stats.average, None);
        assert!(stats.cheapest.is_none());
        assert!(stats.by_month.is_empty());
    }

    #[test]
    fn figures_and_months() {
        let items = vec![
            item("feb", 10.0, 2024, 2, 3),
            item("jan-a", 2.0, 2024, 1, 9),
            item("jan-b", 6.0, 2024, 1, 20),
            item("dec", 2.0, 2023, 12, 31),
        ];
        let stats = summarize(&items);

        assert_eq!(stats.count, 4);
        assert_eq!(stats.total, 20.0);
        assert_eq!(stats.average, Some(5.0));
        assert_eq!(stats.cheapest.unwrap().name, "jan-a");
        assert_eq!(stats.most_expensive.unwrap().name, "feb");

        let months: Vec<(&str, usize, f64)> = stats
            .by_month
            .iter()
            .map(|m| (m.month.as_str(), m.count, m.total))
            .collect();
        assert_eq!(
            months,
            vec![("2023-12", 1, 2.0), ("2024-01", 2, 8.0), ("2024-02", 1, 10.0)]
        );
    }
}
