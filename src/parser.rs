use crate::ast::Node;
use crate::binding::Value;
use crate::builtins;
use crate::error::{CompileError, ErrorKind};
use crate::lexer::{Lexer, Token};
use crate::optimizer::fold;
use crate::resolver::{Scope, Symbol};
use crate::rt_types::{Fn1, Fn2, Native};
use std::sync::Arc;

/// Nesting limit for signs, parentheses and exponents.
pub(crate) const MAX_DEPTH: usize = 128;

pub(crate) struct Parser<'x, 's, 'a, B: ?Sized> {
    lex: Lexer<'x, 's, 'a, B>,
    look: Token<'s, 'a, B>,
    /// Byte offset of `look`.
    at: usize,
    depth: usize,
}

impl<'x, 's, 'a, B: ?Sized> Parser<'x, 's, 'a, B> {
    pub(crate) fn new(text: &'x str, scope: Scope<'s, 'a, B>) -> Result<Self, CompileError> {
        let mut lex = Lexer::new(text, scope);
        let (look, at) = lex.next_token()?;
        Ok(Self {
            lex,
            look,
            at,
            depth: 0,
        })
    }
    fn bump(&mut self) -> Result<(), CompileError> {
        (self.look, self.at) = self.lex.next_token()?;
        Ok(())
    }
    fn error(&self, kind: ErrorKind) -> CompileError {
        CompileError::new(self.at, kind)
    }
    fn unexpected(&self) -> CompileError {
        match self.look {
            Token::Eof => self.error(ErrorKind::UnexpectedEnd),
            other => self.error(ErrorKind::UnexpectedToken(other.describe())),
        }
    }
    fn close_paren(&mut self) -> Result<(), CompileError> {
        if matches!(self.look, Token::RParen) {
            self.bump()
        } else {
            Err(self.error(ErrorKind::UnclosedParen(self.look.describe())))
        }
    }

    pub(crate) fn parse(mut self) -> Result<Node<'a, B>, CompileError> {
        let root = self.list()?;
        if !matches!(self.look, Token::Eof) {
            return Err(self.error(ErrorKind::TrailingInput(self.look.describe())));
        }
        Ok(root)
    }

    fn list(&mut self) -> Result<Node<'a, B>, CompileError> {
        let mut node = self.expr()?;
        while matches!(self.look, Token::Comma) {
            self.bump()?;
            let rhs = self.expr()?;
            node = binary(",", builtins::comma, node, rhs);
        }
        Ok(node)
    }
    fn expr(&mut self) -> Result<Node<'a, B>, CompileError> {
        let mut node = self.term()?;
        loop {
            let (op, f): (&str, Fn2) = match self.look {
                Token::Plus => ("+", builtins::add),
                Token::Minus => ("-", builtins::sub),
                _ => break,
            };
            self.bump()?;
            let rhs = self.term()?;
            node = binary(op, f, node, rhs);
        }
        Ok(node)
    }
    fn term(&mut self) -> Result<Node<'a, B>, CompileError> {
        let mut node = self.factor()?;
        loop {
            let (op, f): (&str, Fn2) = match self.look {
                Token::Star => ("*", builtins::mul),
                Token::Slash => ("/", builtins::div),
                Token::Percent => ("%", builtins::fmod),
                // `2x`, `3(a + b)`, `x sin(y)`
                tok if tok.starts_operand() => {
                    let rhs = self.factor()?;
                    node = binary("*", builtins::mul, node, rhs);
                    continue;
                }
                _ => break,
            };
            self.bump()?;
            let rhs = self.factor()?;
            node = binary(op, f, node, rhs);
        }
        Ok(node)
    }
    /// Every recursive path of the grammar passes through here, so this is
    /// where nesting is bounded.
    fn factor(&mut self) -> Result<Node<'a, B>, CompileError> {
        if self.depth == MAX_DEPTH {
            return Err(self.error(ErrorKind::TooDeep(MAX_DEPTH)));
        }
        self.depth += 1;
        let node = self.signed();
        self.depth -= 1;
        node
    }
    /// Sign prefixes apply to the whole power to their right: `-2^2` is `-(2^2)`.
    fn signed(&mut self) -> Result<Node<'a, B>, CompileError> {
        match self.look {
            Token::Minus => {
                self.bump()?;
                let x = self.factor()?;
                Ok(unary("-", builtins::neg, x))
            }
            Token::Plus => {
                self.bump()?;
                self.factor()
            }
            _ => self.power(),
        }
    }
    /// `^` is right associative and its exponent may carry a sign: `2^-1`.
    fn power(&mut self) -> Result<Node<'a, B>, CompileError> {
        let base = self.base()?;
        if matches!(self.look, Token::Caret) {
            self.bump()?;
            let exp = self.factor()?;
            return Ok(binary("^", builtins::pow, base, exp));
        }
        Ok(base)
    }
    fn base(&mut self) -> Result<Node<'a, B>, CompileError> {
        match self.look {
            Token::Num(v) => {
                self.bump()?;
                Ok(Node::Const(v))
            }
            Token::Name(sym) => {
                self.bump()?;
                self.symbol(sym)
            }
            Token::LParen => {
                self.bump()?;
                let e = self.list()?;
                self.close_paren()?;
                Ok(e)
            }
            _ => Err(self.unexpected()),
        }
    }

    fn symbol(&mut self, sym: Symbol<'s, 'a, B>) -> Result<Node<'a, B>, CompileError> {
        let binding = match sym {
            Symbol::Builtin(b) => {
                let args = self.call_args(b.name, b.f.arity())?;
                return Ok(fold(Node::Function {
                    name: Arc::from(b.name),
                    f: b.f,
                    pure: true,
                    args,
                }));
            }
            Symbol::User(binding) => binding,
        };
        let name = binding.name.clone();
        match &binding.value {
            Value::Const(c) => Ok(Node::Const(*c)),
            Value::Var(var) => Ok(Node::Var { name, var: *var }),
            Value::Offset(get) => Ok(Node::Offset { name, get: *get }),
            Value::Function { f, pure } => {
                let args = self.call_args(&name, f.arity())?;
                Ok(fold(Node::Function {
                    name,
                    f: *f,
                    pure: *pure,
                    args,
                }))
            }
            Value::Closure { f, pure } => {
                let args = self.call_args(&name, f.arity())?;
                Ok(fold(Node::Closure {
                    name,
                    f: f.clone(),
                    pure: *pure,
                    args,
                }))
            }
        }
    }

    /// Parses the argument list of a call to a callable of the given arity.
    /// Parentheses are optional only for arity 0.
    fn call_args(&mut self, name: &str, arity: usize) -> Result<Box<[Node<'a, B>]>, CompileError> {
        if arity == 0 {
            if matches!(self.look, Token::LParen) {
                self.bump()?;
                self.close_paren()?;
            }
            return Ok(Box::default());
        }
        if !matches!(self.look, Token::LParen) {
            return Err(self.error(ErrorKind::ExpectedCall(name.to_string())));
        }
        self.bump()?;
        let mut args = Vec::with_capacity(arity);
        if !matches!(self.look, Token::RParen) {
            loop {
                if args.len() == arity {
                    return Err(self.error(ErrorKind::TooManyArgs {
                        name: name.to_string(),
                        expected: arity,
                    }));
                }
                args.push(self.expr()?);
                if matches!(self.look, Token::Comma) {
                    self.bump()?;
                    continue;
                }
                break;
            }
        }
        if args.len() < arity {
            return Err(self.error(ErrorKind::TooFewArgs {
                name: name.to_string(),
                expected: arity,
                found: args.len(),
            }));
        }
        self.close_paren()?;
        Ok(args.into_boxed_slice())
    }
}

fn unary<'a, B: ?Sized>(op: &str, f: Fn1, x: Node<'a, B>) -> Node<'a, B> {
    fold(Node::Function {
        name: Arc::from(op),
        f: Native::F1(f),
        pure: true,
        args: Box::new([x]),
    })
}

fn binary<'a, B: ?Sized>(op: &str, f: Fn2, lhs: Node<'a, B>, rhs: Node<'a, B>) -> Node<'a, B> {
    fold(Node::Function {
        name: Arc::from(op),
        f: Native::F2(f),
        pure: true,
        args: Box::new([lhs, rhs]),
    })
}
