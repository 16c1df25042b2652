
use log::{debug, trace};

use super::types::*;
use super::table::ParseTable;
use super::trace::*;

/*
 * The predictive parser : a pushdown automaton driven by a
 * parsing table. A `PDA` only borrows the grammar and the table,
 * so any number of runs can share them.
 */
pub struct PDA<'a> {
    grammar: &'a Grammar,
    table: &'a ParseTable,
}

impl<'a> PDA<'a> {
    pub fn new(grammar: &'a Grammar, table: &'a ParseTable) -> PDA<'a> {
        PDA {grammar, table}
    }

    /// Starts a run on already classified symbols.
    pub fn run<I>(&self, input: I) -> Run<'a>
        where I: IntoIterator<Item = Symbol>
    {
        Run::new(self.table, vec!(Symbol::End, self.grammar.start()), input)
    }

    /// Starts a run on raw text.
    pub fn run_str(&self, raw: &str) -> Run<'a> {
        self.run(self.grammar.symbols(raw))
    }

    /// Runs to completion and collects the whole trace.
    pub fn parse(&self, raw: &str) -> Outcome {
        self.run_str(raw).finish()
    }
}

/*
 * One simulation. This is an iterator over the trace : each
 * call to `next` performs one step and returns its record, until
 * the run is accepted or rejected.
 */
pub struct Run<'a> {
    table: &'a ParseTable,
    // The top of the stack is the last element.
    stack: Vec<Symbol>,
    // Always ends with the end-marker.
    input: Vec<Symbol>,
    cursor: usize,
    step: usize,
    verdict: Option<Verdict>,
}

impl<'a> Run<'a> {
    pub(crate) fn new<I>(table: &'a ParseTable, stack: Vec<Symbol>, input: I) -> Run<'a>
        where I: IntoIterator<Item = Symbol>
    {
        // The end-marker ends the input, even when it is typed in.
        let mut input: Vec<Symbol> = input.into_iter()
            .take_while(|s| *s != Symbol::End)
            .collect();
        input.push(Symbol::End);

        Run {
            table,
            stack,
            input,
            cursor: 0,
            step: 1,
            verdict: None,
        }
    }

    /// `None` while the run is still going.
    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    /// Bottom first.
    pub fn stack(&self) -> &[Symbol] {
        &self.stack
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn lookahead(&self) -> Symbol {
        self.input.get(self.cursor).copied().unwrap_or(Symbol::End)
    }

    /// Whether the cursor sits on the final end-marker.
    pub fn at_end(&self) -> bool {
        self.cursor + 1 >= self.input.len()
    }

    /// Drives the run to its end.
    pub fn finish(mut self) -> Outcome {
        let records = self.by_ref().collect();
        let verdict = self.verdict.unwrap_or(Verdict::Rejected(ParseError::StackExhausted));
        Outcome {records, verdict}
    }

    fn reject(&mut self, error: ParseError) -> Action {
        self.verdict = Some(Verdict::Rejected(error.clone()));
        Action::Error(error)
    }

    /*
     * Performs one transition and says what it did.
     * Sets the verdict when the run is over.
     */
    fn transition(&mut self) -> Action {
        let top = match self.stack.last() {
            Some(top) => *top,
            None => return self.reject(ParseError::StackExhausted),
        };
        let current = self.lookahead();
        let table = self.table;

        if top == Symbol::End && current == Symbol::End {
            self.verdict = Some(Verdict::Accepted);
            return Action::Accept
        }

        if top.is_terminal() {
            if top == current {
                self.stack.pop();
                self.cursor += 1;
                Action::Match(top)
            } else {
                self.reject(ParseError::TerminalMismatch {
                    expected: top,
                    found: current,
                })
            }
        } else if !table.contains(top) {
            self.reject(ParseError::UnknownNonTerminal(top))
        } else {
            match table.lookup(top, current) {
                Some(production) => {
                    self.stack.pop();
                    self.stack.extend(production.expand.iter().rev());
                    Action::Expand(top, production.clone())
                },
                None => self.reject(ParseError::NoProduction {
                    non_terminal: top,
                    lookahead: current,
                }),
            }
        }
    }
}

impl Iterator for Run<'_> {
    type Item = TraceRecord;

    fn next(&mut self) -> Option<TraceRecord> {
        if self.verdict.is_some() {
            return None
        }

        let stack = self.stack.clone();
        let remaining = self.input[self.cursor.min(self.input.len() - 1)..].to_vec();
        let action = self.transition();

        let record = TraceRecord {step: self.step, stack, remaining, action};
        trace!("{}", record);
        self.step += 1;

        if let Some(verdict) = &self.verdict {
            debug!("Run over after {} steps : {:?}", record.step, verdict);
        }

        Some(record)
    }
}
