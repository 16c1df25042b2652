
pub mod lexer;
pub mod parser;
pub mod read_error;

pub use read_error::TableError;
