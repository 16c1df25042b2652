
mod types;
mod scan;

pub use types::Token;
pub use scan::{tokenize, tokens, Tokens};
