
use std::fmt;

use thiserror::Error;

use super::types::*;

/// Why a run was rejected. Every variant ends the run.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    TerminalMismatch {
        expected: Symbol,
        found: Symbol,
    },
    #[error("invalid non-terminal {0}")]
    UnknownNonTerminal(Symbol),
    #[error("no production for {non_terminal} on lookahead {lookahead}")]
    NoProduction {
        non_terminal: Symbol,
        lookahead: Symbol,
    },
    #[error("stack exhausted")]
    StackExhausted,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Action {
    Match(Symbol),
    Expand(Symbol, Production),
    Accept,
    Error(ParseError),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Match(s) => write!(f, "match {}", s),
            Action::Expand(nt, prod) => write!(f, "{}\u{2192}{}", nt, prod),
            Action::Accept => write!(f, "Acc"),
            Action::Error(e) => write!(f, "error: {}", e),
        }
    }
}

/*
 * One line of the trace : the configuration of the automaton
 * when the step started, and what the step did.
 */
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TraceRecord {
    pub step: usize,
    // Bottom of the stack first.
    pub stack: Vec<Symbol>,
    // Unread input, ends with the end-marker.
    pub remaining: Vec<Symbol>,
    pub action: Action,
}

impl TraceRecord {
    /// The stack, top first (`E#` at the start of a run).
    pub fn stack_string(&self) -> String {
        self.stack.iter().rev().map(|s| s.to_string()).collect()
    }

    pub fn input_string(&self) -> String {
        self.remaining.iter().map(|s| s.to_string()).collect()
    }
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f, "{} {} {} {}",
            self.step, self.stack_string(), self.input_string(), self.action,
        )
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Verdict {
    Accepted,
    Rejected(ParseError),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn error(&self) -> Option<&ParseError> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected(e) => Some(e),
        }
    }
}

/// A whole run : every record, then the verdict.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub records: Vec<TraceRecord>,
    pub verdict: Verdict,
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }

    pub fn steps(&self) -> usize {
        self.records.len()
    }

    pub fn last(&self) -> Option<&TraceRecord> {
        self.records.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Token;

    #[test]
    fn action_labels() {
        let g = Grammar::default();
        let e = Symbol::N(Token::new('E'));
        let i = Symbol::T(Token::new('i'));

        assert_eq!(Action::Match(i).to_string(), "match i");
        assert_eq!(Action::Expand(e, Production::new(g.symbols("TE'"))).to_string(), "E\u{2192}TE'");
        assert_eq!(Action::Expand(e, Production::epsilon()).to_string(), "E\u{2192}$");
        assert_eq!(Action::Accept.to_string(), "Acc");
        assert_eq!(
            Action::Error(ParseError::TerminalMismatch {expected: i, found: Symbol::End}).to_string(),
            "error: expected i, found #",
        );
    }

    #[test]
    fn record_renders_stack_top_first() {
        let g = Grammar::default();
        let record = TraceRecord {
            step: 1,
            stack: vec!(Symbol::End, g.start()),
            remaining: vec!(Symbol::T(Token::new('i')), Symbol::End),
            action: Action::Accept,
        };

        assert_eq!(record.stack_string(), "E#");
        assert_eq!(record.input_string(), "i#");
        assert_eq!(record.to_string(), "1 E# i# Acc");
    }
}
