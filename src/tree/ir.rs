// Tiger Backend
//! Canonical tree IR handed to instruction selection.

use crate::temp::{Label, Temp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
  Plus,
  Minus,
  Mul,
  Div,
  And,
  Or,
  LShift,
  RShift,
  ARShift,
  Xor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
  Eq,
  Ne,
  Lt,
  Gt,
  Le,
  Ge,
  Ult,
  Ule,
  Ugt,
  Uge,
}

impl RelOp {
  /// The operator that holds after swapping the operands: `a < b` iff `b > a`.
  pub fn commute(self) -> Self {
    match self {
      RelOp::Eq => RelOp::Eq,
      RelOp::Ne => RelOp::Ne,
      RelOp::Lt => RelOp::Gt,
      RelOp::Gt => RelOp::Lt,
      RelOp::Le => RelOp::Ge,
      RelOp::Ge => RelOp::Le,
      RelOp::Ult => RelOp::Ugt,
      RelOp::Ugt => RelOp::Ult,
      RelOp::Ule => RelOp::Uge,
      RelOp::Uge => RelOp::Ule,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stm {
  Seq(Box<Stm>, Box<Stm>),
  Label(Label),
  /// Jump to the address computed by the expression; the labels are every
  /// place it may land.
  Jump(Exp, Vec<Label>),
  CJump {
    op: RelOp,
    left: Exp,
    right: Exp,
    t: Label,
    f: Label,
  },
  Move(Exp, Exp),
  Exp(Exp),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exp {
  BinOp(BinOp, Box<Exp>, Box<Exp>),
  Mem(Box<Exp>),
  Temp(Temp),
  /// Evaluate the statement for its effect, then the expression.
  ESeq(Box<Stm>, Box<Exp>),
  Name(Label),
  Const(i64),
  Call(Box<Exp>, Vec<Exp>),
}

impl Exp {
  pub fn binop(op: BinOp, left: Exp, right: Exp) -> Exp {
    Exp::BinOp(op, Box::new(left), Box::new(right))
  }

  pub fn mem(addr: Exp) -> Exp {
    Exp::Mem(Box::new(addr))
  }

  pub fn call(func: Exp, args: Vec<Exp>) -> Exp {
    Exp::Call(Box::new(func), args)
  }
}

/// A procedure body after canonicalization.
#[derive(Debug, Clone)]
pub struct Proc {
  pub name: Label,
  /// Bytes of locals the translator already placed in the frame.
  pub locals_size: i64,
  pub body: Vec<Stm>,
}

impl Proc {
  pub fn new(name: Label, locals_size: i64, body: Vec<Stm>) -> Self {
    Proc {
      name,
      locals_size,
      body,
    }
  }

  /// Largest temp mentioned anywhere in the body.
  pub fn max_temp(&self) -> Option<Temp> {
    fn in_stm(stm: &Stm, max: &mut Option<Temp>) {
      match stm {
        Stm::Seq(a, b) => {
          in_stm(a, max);
          in_stm(b, max);
        }
        Stm::Label(_) => {}
        Stm::Jump(e, _) | Stm::Exp(e) => in_exp(e, max),
        Stm::CJump { left, right, .. } => {
          in_exp(left, max);
          in_exp(right, max);
        }
        Stm::Move(d, s) => {
          in_exp(d, max);
          in_exp(s, max);
        }
      }
    }
    fn in_exp(exp: &Exp, max: &mut Option<Temp>) {
      match exp {
        Exp::BinOp(_, a, b) => {
          in_exp(a, max);
          in_exp(b, max);
        }
        Exp::Mem(e) => in_exp(e, max),
        Exp::Temp(t) => *max = (*max).max(Some(*t)),
        Exp::ESeq(s, e) => {
          in_stm(s, max);
          in_exp(e, max);
        }
        Exp::Name(_) | Exp::Const(_) => {}
        Exp::Call(f, args) => {
          in_exp(f, max);
          args.iter().for_each(|a| in_exp(a, max));
        }
      }
    }

    let mut max = None;
    self.body.iter().for_each(|s| in_stm(s, &mut max));
    max
  }
}
