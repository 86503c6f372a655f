use std::{mem, vec};

use crate::{
    lexer::tokens::{Delimiter, Token, TokenKind},
    Span, MK_TOKEN,
};

use super::tree::{Delimited, TokenStream, TokenTree};

/// A suspended outer stream, resumed once the delimited group is done.
struct Frame {
    trees: vec::IntoIter<TokenTree>,
    delimiter: Delimiter,
    close_span: Span,
}

/// Depth-first walker over a [`TokenStream`].
///
/// Entering a delimited group yields its opening delimiter as a token,
/// leaving it yields the closing one, so the parser sees a flat stream.
/// Once everything is consumed the end-of-stream token is returned on every
/// call.
pub struct TokenCursor {
    trees: vec::IntoIter<TokenTree>,
    stack: Vec<Frame>,
    eof: Token,
}

impl TokenCursor {
    pub fn new(stream: TokenStream) -> Self {
        TokenCursor {
            trees: stream.trees.into_iter(),
            stack: vec![],
            eof: stream.eof,
        }
    }

    pub fn advance(&mut self) -> Token {
        loop {
            match self.trees.next() {
                Some(TokenTree::Token(token)) => {
                    if token.is_comment() {
                        continue;
                    }
                    return token;
                }
                Some(TokenTree::Delimited(Delimited {
                    delimiter,
                    stream,
                    open_span,
                    close_span,
                })) => {
                    let outer = mem::replace(&mut self.trees, stream.into_iter());
                    self.stack.push(Frame {
                        trees: outer,
                        delimiter,
                        close_span,
                    });
                    return MK_TOKEN!(TokenKind::Punct(delimiter.open()), open_span);
                }
                None => {
                    let Some(frame) = self.stack.pop() else {
                        return self.eof.clone();
                    };
                    self.trees = frame.trees;
                    return MK_TOKEN!(TokenKind::Punct(frame.delimiter.close()), frame.close_span);
                }
            }
        }
    }

    /// Number of delimited groups the cursor is currently inside.
    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
