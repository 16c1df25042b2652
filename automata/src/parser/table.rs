
use std::collections::BTreeMap;
use std::fmt;
use std::iter::FromIterator;

use log::debug;

use super::types::*;

/*
 * The predictive parsing table : for each non-terminal, a map
 * from the lookahead symbol to the production to expand.
 *
 * The table is never checked for conflicts : inserting a cell
 * twice keeps the last production. A supplied table is expected
 * to be LL(1) already.
 */
#[derive(Clone, Default, Debug)]
pub struct ParseTable {
    rows: BTreeMap<Symbol, BTreeMap<Symbol, Production>>,
}

impl ParseTable {
    pub fn new() -> Self {
        ParseTable {rows: BTreeMap::new()}
    }

    pub fn build<I>(rows: I) -> Self
        where I: IntoIterator<Item = (Symbol, Symbol, Production)>
    {
        let mut table = ParseTable::new();
        for (non_terminal, lookahead, production) in rows {
            table.insert(non_terminal, lookahead, production);
        }
        table
    }

    /// Sets the cell, returning the production it replaces.
    pub fn insert(&mut self, non_terminal: Symbol, lookahead: Symbol, production: Production)
        -> Option<Production>
    {
        let replaced = self.rows
            .entry(non_terminal)
            .or_insert_with(BTreeMap::new)
            .insert(lookahead, production);

        if let Some(old) = &replaced {
            debug!("Cell ({}, {}) overwritten, was {}", non_terminal, lookahead, old);
        }

        replaced
    }

    pub fn lookup(&self, non_terminal: Symbol, lookahead: Symbol) -> Option<&Production> {
        self.rows.get(&non_terminal).and_then(|row| row.get(&lookahead))
    }

    /// Whether the table has at least one cell for `non_terminal`.
    pub fn contains(&self, non_terminal: Symbol) -> bool {
        self.rows.contains_key(&non_terminal)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.rows.values().map(|row| row.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, Symbol, &Production)> {
        self.rows.iter().flat_map(|(nt, row)| {
            row.iter().map(move |(la, prod)| (*nt, *la, prod))
        })
    }
}

impl FromIterator<(Symbol, Symbol, Production)> for ParseTable {
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = (Symbol, Symbol, Production)>
    {
        ParseTable::build(iter)
    }
}

impl fmt::Display for ParseTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut last = None;
        for (nt, la, prod) in self.iter() {
            if last != Some(nt) {
                writeln!(f, "{}", nt)?;
                last = Some(nt);
            }
            writeln!(f, "    {} => {}", la, prod)?;
        }
        Ok(())
    }
}
