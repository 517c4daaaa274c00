//! Parser and evaluator for parenthesized prefix `+`/`-` expressions.
//!
//! A toy on purpose: binary operators only, no error recovery. Symbols that
//! are not operators resolve through a [`ChainHashMap`] used as a symbol
//! table, so `(+ x 1)` works when `x` is bound.

use crate::chain_hash_map::ChainHashMap;
use crate::scanner::Token;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    Int(i64),
    Sym(String),
    Expr(Vec<Ast>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    EmptyInput,
    UnbalancedParens,
    TrailingTokens,
    /// A form that is not `(op a b)`.
    MalformedExpression,
    UnknownOperator(String),
    /// Symbol with no binding (or a null binding) in the symbol table.
    UnboundSymbol(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::EmptyInput => f.write_str("no expression to evaluate"),
            EvalError::UnbalancedParens => f.write_str("unbalanced parentheses"),
            EvalError::TrailingTokens => f.write_str("trailing tokens after expression"),
            EvalError::MalformedExpression => f.write_str("expected a form of shape (op a b)"),
            EvalError::UnknownOperator(op) => write!(f, "unknown operator `{op}`"),
            EvalError::UnboundSymbol(s) => write!(f, "unbound symbol `{s}`"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Parse a token stream into a single form; all tokens must be consumed.
pub fn parse(tokens: &[Token]) -> Result<Ast, EvalError> {
    let mut pos = 0;
    let ast = parse_form(tokens, &mut pos)?;
    if pos != tokens.len() {
        return Err(EvalError::TrailingTokens);
    }
    Ok(ast)
}

fn parse_form(tokens: &[Token], pos: &mut usize) -> Result<Ast, EvalError> {
    match tokens.get(*pos) {
        None => Err(EvalError::EmptyInput),
        Some(Token::Integer(n)) => {
            *pos += 1;
            Ok(Ast::Int(*n))
        }
        Some(Token::Symbol(s)) => {
            *pos += 1;
            Ok(Ast::Sym(s.clone()))
        }
        Some(Token::CloseParen) => Err(EvalError::UnbalancedParens),
        Some(Token::OpenParen) => {
            *pos += 1;
            let mut items = Vec::new();
            loop {
                match tokens.get(*pos) {
                    Some(Token::CloseParen) => {
                        *pos += 1;
                        return Ok(Ast::Expr(items));
                    }
                    None => return Err(EvalError::UnbalancedParens),
                    Some(_) => items.push(parse_form(tokens, pos)?),
                }
            }
        }
    }
}

/// Evaluate a form. Integers are themselves, symbols look up the table,
/// lists must be exactly `(op a b)` with op `+` or `-`. Arithmetic wraps.
pub fn eval(ast: &Ast, symbols: &ChainHashMap<i64>) -> Result<i64, EvalError> {
    match ast {
        Ast::Int(n) => Ok(*n),
        Ast::Sym(s) => symbols
            .get(s)
            .copied()
            .ok_or_else(|| EvalError::UnboundSymbol(s.clone())),
        Ast::Expr(items) => {
            let (op, args) = match items.split_first() {
                Some((Ast::Sym(op), args)) if args.len() == 2 => (op, args),
                _ => return Err(EvalError::MalformedExpression),
            };
            let a = eval(&args[0], symbols)?;
            let b = eval(&args[1], symbols)?;
            match op.as_str() {
                "+" => Ok(a.wrapping_add(b)),
                "-" => Ok(a.wrapping_sub(b)),
                _ => Err(EvalError::UnknownOperator(op.clone())),
            }
        }
    }
}
