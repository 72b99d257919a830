use crate::error::EosResult;
use crate::substance::{Substance, SubstanceConstants};

/// One row of the built-in property table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CatalogEntry {
    #[cfg_attr(feature = "serde", serde(skip))]
    pub substance: Substance,
    pub name: &'static str,
    pub formula: &'static str,
    pub constants: SubstanceConstants,
}

impl CatalogEntry {
    fn of(substance: Substance) -> Self {
        Self {
            substance,
            name: substance.name(),
            formula: substance.formula(),
            constants: substance.constants(),
        }
    }

    /// Case-insensitive substring match on name or formula, for listings.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.name.to_ascii_lowercase().contains(&query)
            || self.formula.to_ascii_lowercase().contains(&query)
    }
}

/// All table rows, in table order.
pub fn catalog() -> Vec<CatalogEntry> {
    Substance::ALL.iter().copied().map(CatalogEntry::of).collect()
}

/// Rows matching `query`; an empty query returns everything.
pub fn search(query: &str) -> Vec<CatalogEntry> {
    catalog()
        .into_iter()
        .filter(|entry| entry.matches_query(query))
        .collect()
}

/// Substance names in table order.
pub fn names() -> Vec<&'static str> {
    Substance::ALL.iter().map(Substance::name).collect()
}

/// Case-sensitive existence check.
pub fn is_known(name: &str) -> bool {
    name.parse::<Substance>().is_ok()
}

/// Critical constants for `name` (case-sensitive).
pub fn lookup(name: &str) -> EosResult<SubstanceConstants> {
    let substance: Substance = name.parse()?;
    Ok(substance.constants())
}

/// Like [`lookup`], also returning the resolved substance.
pub fn resolve(name: &str) -> EosResult<CatalogEntry> {
    name.parse::<Substance>().map(CatalogEntry::of)
}
