
mod types;
mod table;
mod trace;
mod api;
mod pda;

pub use types::{Grammar, Production, Symbol, END_MARKER, EPSILON};
pub use table::ParseTable;
pub use trace::{Action, Outcome, ParseError, TraceRecord, Verdict};
pub use api::{load_table, read_table};
pub use pda::{PDA, Run};
