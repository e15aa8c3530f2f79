//! # Item Identifiers: UUID vs Display Index
//!
//! Every item carries a UUID, which is the only thing the store uses for identity.
//! UUIDs are awkward to type, so user-facing clients refer to items by their
//! 1-based position in the current sequence: the **display index**.
//!
//! The display index always comes from the full, unfiltered sequence. A filtered
//! listing keeps each item's canonical index, so `billz rm 3` removes the same
//! item whether or not the last listing was filtered.
//!
//! Since the sequence order changes with sorting, indexes are only stable between
//! sorts. Resolution from index to UUID therefore happens once, up front, before
//! any mutation (see [`crate::commands::helpers`]).
//!
//! ## Selector Grammar
//!
//! - **Index**: `N` (e.g. `1`, `42`)
//! - **Range**: `Start-End` (e.g. `1-5`); start must be ≤ end, and a range covers at
//!   most [`MAX_RANGE_LEN`] indexes
//! - **UUID**: the full item id (e.g. `e621e1f8-c36c-495a-93fc-0c247a3e6e5f`)
//! - **Name**: anything else is a case-insensitive search on the item name

use crate::model::Item;
use serde::Serialize;
use uuid::Uuid;

/// An item paired with its 1-based position in the full sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayItem {
    pub index: usize,
    #[serde(flatten)]
    pub item: Item,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSelector {
    Index(usize),
    Id(Uuid),
    Name(String),
}

impl std::fmt::Display for ItemSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemSelector::Index(i) => write!(f, "{}", i),
            ItemSelector::Id(id) => write!(f, "{}", id),
            ItemSelector::Name(term) => write!(f, "\"{}\"", term),
        }
    }
}

/// Upper bound on the indexes a single range may expand to.
pub const MAX_RANGE_LEN: usize = 10_000;

/// Assigns canonical display indexes to the sequence, in order.
pub fn index_items(items: &[Item]) -> Vec<DisplayItem> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| DisplayItem {
            index: i + 1,
            item: item.clone(),
        })
        .collect()
}

/// Parses an index (`3`) or range (`1-3`) into indexes.
/// Returns Err with a message when the input is not an index at all or the
/// range is malformed.
pub fn parse_index_or_range(s: &str) -> Result<Vec<usize>, String> {
    let s = s.trim();
    if let Some((start, end)) = s.split_once('-') {
        let start: usize = parse_index(start)?;
        let end: usize = parse_index(end)?;
        if start > end {
            return Err(format!("Invalid range {}: start is after end", s));
        }
        if end - start >= MAX_RANGE_LEN {
            return Err(format!(
                "Invalid range {}: covers more than {} items",
                s, MAX_RANGE_LEN
            ));
        }
        return Ok((start..=end).collect());
    }
    Ok(vec![parse_index(s)?])
}

fn parse_index(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Not an index: {}", s))?;
    if n == 0 {
        return Err("Invalid range: indexes start at 1".to_string());
    }
    Ok(n)
}

/// Parses user inputs into selectors, deduplicated in input order.
///
/// If any input is neither an index, a range, nor a UUID, all inputs are joined
/// into a single name search.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<ItemSelector>, String> {
    let mut selectors = Vec::new();

    for input in inputs {
        let input = input.as_ref().trim();
        if let Ok(id) = Uuid::parse_str(input) {
            selectors.push(ItemSelector::Id(id));
            continue;
        }
        match parse_index_or_range(input) {
            Ok(indexes) => selectors.extend(indexes.into_iter().map(ItemSelector::Index)),
            Err(e) if e.starts_with("Invalid range") => return Err(e),
            Err(_) => {
                let term = inputs
                    .iter()
                    .map(|s| s.as_ref().trim())
                    .collect::<Vec<&str>>()
                    .join(" ");
                return Ok(vec![ItemSelector::Name(term)]);
            }
        }
    }

    let mut unique: Vec<ItemSelector> = Vec::with_capacity(selectors.len());
    for selector in selectors {
        if !unique.contains(&selector) {
            unique.push(selector);
        }
    }
    Ok(unique)
}
