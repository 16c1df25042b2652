
use std::collections::BTreeSet;
use std::fmt;

use crate::lexer::{Token, tokens};

pub const END_MARKER: char = '#';
pub const EPSILON: char = '$';

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Symbol {
    // End-marker, sits at the bottom of the stack
    // and after the last input symbol.
    End,
    // Terminal
    T(Token),
    // Non-terminal
    N(Token),
}

impl Symbol {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::T(_) | Symbol::End)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::End => write!(f, "{}", END_MARKER),
            Symbol::T(t) | Symbol::N(t) => write!(f, "{}", t),
        }
    }
}

/*
 * Right-hand side of a rule. The left-hand side is the
 * key of the table cell the production is stored in.
 * An empty expansion is an epsilon production.
 */
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Production {
    pub expand: Vec<Symbol>,
}

impl Production {
    pub fn new(expand: Vec<Symbol>) -> Self {
        Production {expand}
    }

    pub fn epsilon() -> Self {
        Production {expand: vec!()}
    }

    pub fn is_epsilon(&self) -> bool {
        self.expand.is_empty()
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.expand.is_empty() {
            return write!(f, "{}", EPSILON)
        }

        self.expand.iter().try_for_each(|s| write!(f, "{}", s))
    }
}

/*
 * What the engine needs to know about the grammar besides its
 * table : where to start, and which symbols are terminals.
 * Every other symbol is treated as a non-terminal.
 */
#[derive(Clone, Debug)]
pub struct Grammar {
    start: Token,
    terminals: BTreeSet<Token>,
}

impl Grammar {
    pub fn new<I>(start: Token, terminals: I) -> Self
        where I: IntoIterator<Item = Token>
    {
        Grammar {
            start,
            terminals: terminals.into_iter().collect(),
        }
    }

    pub fn start(&self) -> Symbol {
        self.classify(self.start)
    }

    pub fn terminals(&self) -> impl Iterator<Item = &Token> {
        self.terminals.iter()
    }

    pub fn classify(&self, token: Token) -> Symbol {
        if token == Token::new(END_MARKER) {
            Symbol::End
        } else if self.terminals.contains(&token) {
            Symbol::T(token)
        } else {
            Symbol::N(token)
        }
    }

    /// Tokenizes `raw` and classifies every token.
    pub fn symbols(&self, raw: &str) -> Vec<Symbol> {
        tokens(raw).map(|t| self.classify(t)).collect()
    }
}

impl Default for Grammar {
    /*
     * E -> TE'      E' -> +TE' | ε
     * T -> FT'      T' -> *FT' | ε
     * F -> i | (E)
     */
    fn default() -> Self {
        Grammar::new(Token::new('E'), "i()*+".chars().map(Token::new))
    }
}
