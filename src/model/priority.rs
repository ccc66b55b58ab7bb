// File: ./src/model/priority.rs
//! Category to priority rank mapping.
//!
//! Lower ranks are displayed first: `CLASS` (rank 0) is the most important
//! kind of event. The table is an immutable value handed to whoever needs
//! ranks, so different configurations can coexist (tests, user overrides).
use crate::model::item::{EventRecord, normalize_category};
use std::collections::HashMap;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// The categories the extraction prompt asks the service to choose from,
/// in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum KnownCategory {
    Class,
    Lab,
    Tut,
    Debsoc,
    Qc,
    Sm,
    Drama,
    Dance,
    Hs,
    Music,
    Literary,
    Design,
    Pfc,
    Facc,
    Rdv,
    Fest,
}

impl KnownCategory {
    /// Comma separated list for prompts and help text.
    pub fn prompt_list() -> String {
        Self::iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityTable {
    ranks: HashMap<String, u32>,
    fallback: u32,
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl PriorityTable {
    /// The built-in table: every `KnownCategory` ranked by declaration order.
    pub fn standard() -> Self {
        Self::from_entries(
            KnownCategory::iter()
                .enumerate()
                .map(|(rank, cat)| (cat.to_string(), rank as u32)),
        )
    }

    /// Builds a table from arbitrary entries. The fallback rank sits right
    /// after the largest rank so unknown categories sink below every known one.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let ranks: HashMap<String, u32> = entries
            .into_iter()
            .filter_map(|(name, rank)| normalize_category(name.as_ref()).map(|n| (n, rank)))
            .collect();
        let fallback = Self::next_free_rank(&ranks);
        Self { ranks, fallback }
    }

    /// Returns a copy with `overrides` merged over the existing entries.
    /// The fallback is recomputed from the merged table.
    pub fn with_overrides(mut self, overrides: &HashMap<String, u32>) -> Self {
        for (name, rank) in overrides {
            if let Some(key) = normalize_category(name) {
                self.ranks.insert(key, *rank);
            }
        }
        self.fallback = Self::next_free_rank(&self.ranks);
        self
    }

    pub fn with_fallback(mut self, fallback: u32) -> Self {
        self.fallback = fallback;
        self
    }

    fn next_free_rank(ranks: &HashMap<String, u32>) -> u32 {
        ranks
            .values()
            .max()
            .map(|max| max.saturating_add(1))
            .unwrap_or(0)
    }

    pub fn fallback_rank(&self) -> u32 {
        self.fallback
    }

    pub fn is_known(&self, category: &str) -> bool {
        normalize_category(category).is_some_and(|key| self.ranks.contains_key(&key))
    }

    /// Rank for a category label. Unknown and unspecified categories get the fallback rank.
    pub fn rank_for(&self, category: Option<&str>) -> u32 {
        category
            .and_then(normalize_category)
            .and_then(|key| self.ranks.get(&key).copied())
            .unwrap_or(self.fallback)
    }

    /// Sets the rank of every record from its category.
    pub fn assign(&self, events: &mut [EventRecord]) {
        for ev in events.iter_mut() {
            let rank = self.rank_for(ev.category.as_deref());
            if rank == self.fallback {
                log::debug!(
                    "Category {:?} of event {} is not ranked, using fallback {}",
                    ev.category,
                    ev.id,
                    rank
                );
            }
            ev.priority_rank = Some(rank);
        }
    }

    /// Entries ordered by rank, then name.
    pub fn entries(&self) -> Vec<(&str, u32)> {
        let mut out: Vec<(&str, u32)> = self
            .ranks
            .iter()
            .map(|(name, rank)| (name.as_str(), *rank))
            .collect();
        out.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn known_category_parses_any_case() {
        assert_eq!(KnownCategory::from_str("debsoc"), Ok(KnownCategory::Debsoc));
        assert_eq!(KnownCategory::Literary.to_string(), "LITERARY");
    }

    #[test]
    fn empty_table_falls_back_to_zero() {
        let table = PriorityTable::from_entries(Vec::<(String, u32)>::new());
        assert_eq!(table.fallback_rank(), 0);
        assert_eq!(table.rank_for(Some("CLASS")), 0);
    }
}
