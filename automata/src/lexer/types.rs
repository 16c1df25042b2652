
use std::fmt;

/*
 * A lexical unit of the grammar notation : one character,
 * optionally followed by an apostrophe when that character
 * is a letter (`T'` is one token, not two).
 */
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Token {
    head: char,
    primed: bool,
}

impl Token {
    pub fn new(head: char) -> Self {
        Token {head, primed: false}
    }

    /// Builds `head'`. Only letters may carry the apostrophe.
    pub fn primed(head: char) -> Option<Self> {
        if head.is_alphabetic() {
            Some(Token {head, primed: true})
        } else {
            None
        }
    }

    #[inline]
    pub fn is_primed(&self) -> bool {
        self.primed
    }

    /// Number of source characters this token was read from.
    pub fn width(&self) -> usize {
        if self.primed {2} else {1}
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.primed {
            write!(f, "{}'", self.head)
        } else {
            write!(f, "{}", self.head)
        }
    }
}
