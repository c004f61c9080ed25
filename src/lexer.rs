use crate::error::{CompileError, ErrorKind};
use crate::resolver::{Scope, Symbol};

pub(crate) enum Token<'s, 'a, B: ?Sized> {
    Num(f64),
    /// An identifier already resolved against the scope.
    Name(Symbol<'s, 'a, B>),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LParen,
    RParen,
    Comma,
    Eof,
}

impl<B: ?Sized> Clone for Token<'_, '_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ?Sized> Copy for Token<'_, '_, B> {}

impl<B: ?Sized> Token<'_, '_, B> {
    pub(crate) fn describe(&self) -> &'static str {
        match self {
            Token::Num(_) => "number",
            Token::Name(_) => "name",
            Token::Plus => "'+'",
            Token::Minus => "'-'",
            Token::Star => "'*'",
            Token::Slash => "'/'",
            Token::Percent => "'%'",
            Token::Caret => "'^'",
            Token::LParen => "'('",
            Token::RParen => "')'",
            Token::Comma => "','",
            Token::Eof => "end of input",
        }
    }

    /// Whether this token can begin an operand, which makes it an implicit
    /// multiplication when it directly follows one.
    pub(crate) fn starts_operand(&self) -> bool {
        matches!(self, Token::Num(_) | Token::Name(_) | Token::LParen)
    }
}

pub(crate) struct Lexer<'x, 's, 'a, B: ?Sized> {
    text: &'x str,
    src: &'x [u8],
    i: usize,
    scope: Scope<'s, 'a, B>,
}

impl<'x, 's, 'a, B: ?Sized> Lexer<'x, 's, 'a, B> {
    pub(crate) fn new(text: &'x str, scope: Scope<'s, 'a, B>) -> Self {
        Self {
            text,
            src: text.as_bytes(),
            i: 0,
            scope,
        }
    }
    fn peek(&self) -> Option<u8> {
        self.src.get(self.i).copied()
    }
    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() {
                self.i += 1;
            } else {
                break;
            }
        }
    }
    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.i += 1;
        }
    }

    /// Returns the next token together with the byte offset it starts at.
    pub(crate) fn next_token(&mut self) -> Result<(Token<'s, 'a, B>, usize), CompileError> {
        self.skip_ws();
        let start = self.i;
        let c = match self.peek() {
            Some(c) => c,
            None => return Ok((Token::Eof, start)),
        };
        let tok = match c {
            b'+' => Token::Plus,
            b'-' => Token::Minus,
            b'*' => Token::Star,
            b'/' => Token::Slash,
            b'%' => Token::Percent,
            b'^' => Token::Caret,
            b'(' => Token::LParen,
            b')' => Token::RParen,
            b',' => Token::Comma,
            c if c.is_ascii_digit() || c == b'.' => return self.lex_number().map(|t| (t, start)),
            c if c.is_ascii_alphabetic() || c == b'_' => return self.lex_ident().map(|t| (t, start)),
            _ => {
                let ch = self.text[start..].chars().next().unwrap_or('\u{fffd}');
                return Err(CompileError::new(start, ErrorKind::UnexpectedChar(ch)));
            }
        };
        self.i += 1;
        Ok((tok, start))
    }

    fn lex_number(&mut self) -> Result<Token<'s, 'a, B>, CompileError> {
        let start = self.i;
        self.skip_digits();
        if self.peek() == Some(b'.') {
            self.i += 1;
            self.skip_digits();
        }
        // An exponent needs at least one digit; otherwise the 'e' starts a
        // name, as in `2e` (two times e).
        if matches!(self.peek(), Some(b'e' | b'E')) {
            let mut j = self.i + 1;
            if matches!(self.src.get(j), Some(b'+' | b'-')) {
                j += 1;
            }
            if self.src.get(j).is_some_and(|d| d.is_ascii_digit()) {
                self.i = j;
                self.skip_digits();
            }
        }
        if self.peek() == Some(b'.') {
            return Err(CompileError::new(start, ErrorKind::BadNumber));
        }
        self.text[start..self.i]
            .parse::<f64>()
            .map(Token::Num)
            .map_err(|_| CompileError::new(start, ErrorKind::BadNumber))
    }

    fn lex_ident(&mut self) -> Result<Token<'s, 'a, B>, CompileError> {
        let start = self.i;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == b'_')
        {
            self.i += 1;
        }
        let ident = &self.text[start..self.i];
        match self.scope.resolve(ident) {
            Some(sym) => Ok(Token::Name(sym)),
            None => Err(CompileError::new(
                start,
                ErrorKind::UnknownIdent(ident.to_string()),
            )),
        }
    }
}
