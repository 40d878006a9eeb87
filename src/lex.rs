// Tiger Backend
//! Lexer for the textual tree IR
// Note this project relies on logos 0.12.1 see docs [here]
// (https://docs.rs/logos/0.12.1/logos/index.html)

#![allow(clippy::upper_case_acronyms)]
use logos::{Lexer, Logos};
use std::{fmt, num::ParseIntError};
use strum_macros::AsRefStr;

fn from_num<'b>(lex: &mut Lexer<'b, Token<'b>>) -> Result<i64, String> {
  let res: Result<i64, ParseIntError> = lex.slice().parse();
  res.map_err(|e| format!("Parsing {} failed with Error {:?}", lex.slice(), e))
}

// Skip over the leading t
fn from_temp<'b>(lex: &mut Lexer<'b, Token<'b>>) -> Result<u32, String> {
  let slice = lex.slice();
  slice[1..]
    .parse()
    .map_err(|e| format!("Bad temp {}: {:?}", slice, e))
}

// Skip over the leading %
fn register_name<'b>(lex: &mut Lexer<'b, Token<'b>>) -> &'b str {
  &lex.slice()[1..]
}

impl<'a> fmt::Display for Token<'a> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:#?}", self)
  }
}

#[derive(Clone, Logos, Debug, PartialEq, AsRefStr)]
pub enum Token<'a> {
  #[regex(r"[A-Za-z_][A-Za-z0-9_.]*")]
  Ident(&'a str),
  #[regex(r"t[0-9]+", from_temp)]
  Temp(u32),
  #[regex(r"%[A-Za-z][A-Za-z0-9]*", register_name)]
  Reg(&'a str),
  #[regex(r"-?[0-9]+", from_num)]
  Number(i64),

  #[token("(")]
  LParen,
  #[token(")")]
  RParen,
  #[token("{")]
  LBrace,
  #[token("}")]
  RBrace,
  #[token(",")]
  COMMA,

  // Procedure header
  #[token("proc")]
  Proc,
  #[token("frame")]
  Frame,

  // Statements
  #[token("SEQ")]
  SEQ,
  #[token("LABEL")]
  LABEL,
  #[token("JUMP")]
  JUMP,
  #[token("CJUMP")]
  CJUMP,
  #[token("MOVE")]
  MOVE,
  #[token("EXP")]
  EXP,

  // Expressions
  #[token("BINOP")]
  BINOP,
  #[token("MEM")]
  MEM,
  #[token("TEMP")]
  TEMP,
  #[token("ESEQ")]
  ESEQ,
  #[token("NAME")]
  NAME,
  #[token("CONST")]
  CONST,
  #[token("CALL")]
  CALL,

  // Binary operators
  #[token("PLUS")]
  PLUS,
  #[token("MINUS")]
  MINUS,
  #[token("MUL")]
  MUL,
  #[token("DIV")]
  DIV,
  #[token("AND")]
  AND,
  #[token("OR")]
  OR,
  #[token("LSHIFT")]
  LSHIFT,
  #[token("RSHIFT")]
  RSHIFT,
  #[token("ARSHIFT")]
  ARSHIFT,
  #[token("XOR")]
  XOR,

  // Relational operators
  #[token("EQ")]
  EQ,
  #[token("NE")]
  NE,
  #[token("LT")]
  LT,
  #[token("GT")]
  GT,
  #[token("LE")]
  LE,
  #[token("GE")]
  GE,
  #[token("ULT")]
  ULT,
  #[token("ULE")]
  ULE,
  #[token("UGT")]
  UGT,
  #[token("UGE")]
  UGE,

  #[error]
  #[regex(r"[ \t\n\v\r\f]+", logos::skip)] // Whitespace
  #[regex(r"#[^\n]*", logos::skip)] // Line comment
  Error,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_lex_move() {
    let tokens = Token::lexer("MOVE(TEMP t101, BINOP(PLUS, TEMP %rbp, CONST -8))").collect::<Vec<_>>();
    assert_eq!(
      tokens,
      vec![
        Token::MOVE,
        Token::LParen,
        Token::TEMP,
        Token::Temp(101),
        Token::COMMA,
        Token::BINOP,
        Token::LParen,
        Token::PLUS,
        Token::COMMA,
        Token::TEMP,
        Token::Reg("rbp"),
        Token::COMMA,
        Token::CONST,
        Token::Number(-8),
        Token::RParen,
        Token::RParen,
      ]
    );
  }

  #[test]
  fn test_lex_labels_and_comments() {
    let tokens = Token::lexer("# entry\nLABEL L12 JUMP(NAME tigermain)").collect::<Vec<_>>();
    assert_eq!(
      tokens,
      vec![
        Token::LABEL,
        Token::Ident("L12"),
        Token::JUMP,
        Token::LParen,
        Token::NAME,
        Token::Ident("tigermain"),
        Token::RParen,
      ]
    );
  }
}
