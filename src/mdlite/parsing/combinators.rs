//! Parser combinators
//!
//!     Every parser here answers the same question: starting at `cursor` in a single owned token
//!     buffer, does a prefix of the remaining tokens form my construct, and if so how many tokens
//!     did it take? The answer is an `Option<Parsed<T>>`. `None` is ordinary control flow, never an
//!     error, and a parser that returns `None` has consumed nothing.
//!
//!     Parsers never re-slice or copy the buffer. Advancing is explicit arithmetic on the cursor
//!     using the `consumed` count, which keeps that count honest and testable.
//!
//! Greedy but branch-atomic
//!
//!     [Many] repeats greedily and its consumption is final within the alternative that ran it.
//!     [First] gives each alternative the same starting cursor. If an alternative collects some
//!     repetitions and then fails on a required trailing token, the whole alternative is
//!     discarded and the next one starts from the original cursor. There is no backtracking
//!     inside an alternative.

use crate::mdlite::token::Token;

/// A successful match: the node and how many tokens of the input prefix it accounts for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub node: T,
    pub consumed: usize,
}

impl<T> Parsed<T> {
    pub fn new(node: T, consumed: usize) -> Self {
        Parsed { node, consumed }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        Parsed {
            node: f(self.node),
            consumed: self.consumed,
        }
    }
}

/// The contract shared by leaf parsers and combinators.
pub trait TokenParser {
    type Output;

    /// Try to match a prefix of `tokens[cursor..]`.
    fn try_parse(&self, tokens: &[Token], cursor: usize) -> Option<Parsed<Self::Output>>;
}

/// The tokens remaining at `cursor`, empty past the end of the buffer.
pub fn window(tokens: &[Token], cursor: usize) -> &[Token] {
    tokens.get(cursor..).unwrap_or(&[])
}

/// Zero or more repetitions of a sub-parser.
///
/// Repetition stops at the first failure. It also stops at a zero-width success, which would
/// otherwise repeat forever.
pub struct Many<P> {
    parser: P,
}

impl<P: TokenParser> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }

    /// Collect repetitions. Always succeeds, possibly with nothing.
    pub fn repeat(&self, tokens: &[Token], cursor: usize) -> Parsed<Vec<P::Output>> {
        let mut nodes = Vec::new();
        let mut consumed = 0;

        while let Some(parsed) = self.parser.try_parse(tokens, cursor + consumed) {
            if parsed.consumed == 0 {
                break;
            }
            consumed += parsed.consumed;
            nodes.push(parsed.node);
        }

        Parsed::new(nodes, consumed)
    }
}

impl<P: TokenParser> TokenParser for Many<P> {
    type Output = Vec<P::Output>;

    fn try_parse(&self, tokens: &[Token], cursor: usize) -> Option<Parsed<Self::Output>> {
        Some(self.repeat(tokens, cursor))
    }
}

/// Ordered alternatives: the first one that matches wins.
pub struct First<T> {
    alternatives: Vec<Box<dyn TokenParser<Output = T>>>,
}

impl<T> First<T> {
    pub fn new(alternatives: Vec<Box<dyn TokenParser<Output = T>>>) -> Self {
        First { alternatives }
    }
}

impl<T> TokenParser for First<T> {
    type Output = T;

    fn try_parse(&self, tokens: &[Token], cursor: usize) -> Option<Parsed<T>> {
        self.alternatives
            .iter()
            .find_map(|alternative| alternative.try_parse(tokens, cursor))
    }
}
