use tracing::{debug, instrument};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Delimiter, Token, TokenKind},
    },
    Span,
};

#[derive(Debug, Clone, PartialEq)]
pub enum TokenTree {
    Token(Token),
    Delimited(Delimited),
}

/// A balanced run between an opening delimiter and its matching closer.
#[derive(Debug, Clone, PartialEq)]
pub struct Delimited {
    pub delimiter: Delimiter,
    pub stream: Vec<TokenTree>,
    pub open_span: Span,
    pub close_span: Span,
}

impl Delimited {
    #[cfg(test)]
    pub fn span(&self) -> Span {
        self.open_span.to(&self.close_span)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenStream {
    pub trees: Vec<TokenTree>,
    /// End-of-stream token, handed out once the trees are exhausted.
    pub eof: Token,
}

/// Lexes `content` and nests it into token trees. Comments are dropped.
///
/// The first lexical or delimiter error aborts the whole run; no partial
/// stream is returned.
#[instrument(skip(content))]
pub fn tokenize(file: &str, content: &str) -> Result<TokenStream, Error> {
    let mut lexer = Lexer::new(file, content);
    let (trees, eof) = build_trees(&mut lexer, None)?;

    debug!(trees = trees.len(), "tokenized {}", file);
    Ok(TokenStream { trees, eof })
}

/// Collects trees until the closer matching `opener`, or until the end of
/// input at the top level. Returns the trees and the token that ended them.
fn build_trees(
    lexer: &mut Lexer,
    opener: Option<(Delimiter, &Span)>,
) -> Result<(Vec<TokenTree>, Token), Error> {
    let mut trees = vec![];

    loop {
        let token = lexer.next_token();

        match token.kind {
            TokenKind::LineComment | TokenKind::BlockComment => continue,
            TokenKind::Error(error) => {
                return Err(Error::new(ErrorImpl::Lexical(error), token.span));
            }
            TokenKind::Eos => {
                return match opener {
                    None => Ok((trees, token)),
                    Some((delimiter, open_span)) => Err(Error::new(
                        ErrorImpl::MissingDelimiter {
                            delimiter: delimiter.close_char(),
                        },
                        open_span.to(&token.span),
                    )),
                };
            }
            TokenKind::Punct(punct) => {
                if let Some(delimiter) = punct.open_delimiter() {
                    let (stream, close) = build_trees(lexer, Some((delimiter, &token.span)))?;
                    trees.push(TokenTree::Delimited(Delimited {
                        delimiter,
                        stream,
                        open_span: token.span,
                        close_span: close.span,
                    }));
                } else if let Some(delimiter) = punct.close_delimiter() {
                    return match opener {
                        None => Err(Error::new(
                            ErrorImpl::UnexpectedDelimiter {
                                delimiter: delimiter.close_char(),
                            },
                            token.span,
                        )),
                        Some((expected, _)) if expected == delimiter => Ok((trees, token)),
                        Some((expected, open_span)) => Err(Error::new(
                            ErrorImpl::MismatchedDelimiter {
                                expected: expected.close_char(),
                                found: delimiter.close_char(),
                            },
                            open_span.to(&token.span),
                        )),
                    };
                } else {
                    trees.push(TokenTree::Token(token));
                }
            }
            _ => trees.push(TokenTree::Token(token)),
        }
    }
}
