
use std::fs;
use std::path::Path;

use log::debug;

use crate::lexer::{Token, tokens};
use crate::read_error::TableError;
use super::types::*;
use super::table::ParseTable;

/*
 * Reads a parsing table written one cell per line :
 *
 *     <non-terminal> <lookahead> <production symbols>...
 *
 * The line is tokenized as a whole, so `E i TE'` and `E i T E'`
 * are the same row. `$` stands for the empty production and is
 * dropped. `file` is only used in error messages.
 */
pub fn read_table(file: &str, source: &str, grammar: &Grammar)
    -> Result<ParseTable, TableError>
{
    let mut table = ParseTable::new();

    for (i, line) in source.lines().enumerate() {
        let mut row = tokens(line);

        let (non_terminal, lookahead) = match (row.next(), row.next()) {
            (None, _) => continue,
            (Some(nt), Some(la)) => (grammar.classify(nt), grammar.classify(la)),
            (Some(_), None) => return Err(TableError::MalformedRow {
                file: file.to_string(),
                line: i + 1,
                text: line.trim().to_string(),
            }),
        };

        let expand = row
            .filter(|t| *t != Token::new(EPSILON))
            .map(|t| grammar.classify(t))
            .collect();
        let production = Production::new(expand);

        debug!("{}:{} ({}, {}) => {}", file, i + 1, non_terminal, lookahead, production);
        table.insert(non_terminal, lookahead, production);
    }

    Ok(table)
}

pub fn load_table<P>(path: P, grammar: &Grammar) -> Result<ParseTable, TableError>
    where P: AsRef<Path>
{
    let path = path.as_ref();
    let display = path.display().to_string();

    let source = fs::read_to_string(path).map_err(|source| TableError::Unavailable {
        path: display.clone(),
        source,
    })?;

    read_table(&display, &source, grammar)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nt(c: char) -> Symbol {
        Symbol::N(Token::new(c))
    }

    fn t(c: char) -> Symbol {
        Symbol::T(Token::new(c))
    }

    #[test]
    fn reads_rows() {
        let g = Grammar::default();
        let table = read_table("t", "E i TE'\nE' + +TE'\nF ( (E)\n", &g).unwrap();
        let e_prime = Symbol::N(Token::primed('E').unwrap());

        assert_eq!(table.len(), 3);
        assert_eq!(
            table.lookup(nt('E'), t('i')),
            Some(&Production::new(vec!(nt('T'), e_prime))),
        );
        assert_eq!(
            table.lookup(e_prime, t('+')),
            Some(&Production::new(vec!(t('+'), nt('T'), e_prime))),
        );
        assert_eq!(
            table.lookup(nt('F'), t('(')),
            Some(&Production::new(vec!(t('('), nt('E'), t(')')))),
        );
    }

    #[test]
    fn epsilon_and_end_marker() {
        let g = Grammar::default();
        let table = read_table("t", "T' # $\nT' )", &g).unwrap();
        let t_prime = Symbol::N(Token::primed('T').unwrap());

        assert_eq!(table.lookup(t_prime, Symbol::End), Some(&Production::epsilon()));
        // A row without any production symbol is epsilon too.
        assert_eq!(table.lookup(t_prime, t(')')), Some(&Production::epsilon()));
    }

    #[test]
    fn spacing_does_not_matter() {
        let g = Grammar::default();
        let spaced = read_table("a", "  E   i  T E'  ", &g).unwrap();
        let packed = read_table("b", "Ei TE'", &g).unwrap();

        assert_eq!(
            spaced.lookup(nt('E'), t('i')),
            packed.lookup(nt('E'), t('i')),
        );
    }

    #[test]
    fn skips_blank_lines() {
        let g = Grammar::default();
        let table = read_table("t", "\n\nF i i\n   \n", &g).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn later_rows_replace_earlier_ones() {
        let g = Grammar::default();
        let table = read_table("t", "F i i\nF i (E)", &g).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup(nt('F'), t('i')).unwrap().to_string(), "(E)");
    }

    #[test]
    fn rejects_short_rows() {
        let g = Grammar::default();
        let err = read_table("table.txt", "F i i\nE\n", &g).unwrap_err();

        match err {
            TableError::MalformedRow {ref file, line, ref text} => {
                assert_eq!(file, "table.txt");
                assert_eq!(line, 2);
                assert_eq!(text, "E");
            },
            _ => panic!("unexpected error {:?}", err),
        }
        assert!(!err.is_unavailable());
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = load_table("this/table/does/not/exist.txt", &Grammar::default()).unwrap_err();

        assert!(err.is_unavailable());
        assert!(err.to_string().starts_with("Couldn't open this/table/does/not/exist.txt"));
    }
}
