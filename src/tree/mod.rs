mod ir;

use std::fmt::{Display, Error, Formatter};

pub use ir::*;

// Trees print in Tiger's tree notation, the same one the reader accepts.

impl Display for BinOp {
  fn fmt(&self, fmt: &mut Formatter) -> Result<(), Error> {
    match *self {
      BinOp::Plus => write!(fmt, "PLUS"),
      BinOp::Minus => write!(fmt, "MINUS"),
      BinOp::Mul => write!(fmt, "MUL"),
      BinOp::Div => write!(fmt, "DIV"),
      BinOp::And => write!(fmt, "AND"),
      BinOp::Or => write!(fmt, "OR"),
      BinOp::LShift => write!(fmt, "LSHIFT"),
      BinOp::RShift => write!(fmt, "RSHIFT"),
      BinOp::ARShift => write!(fmt, "ARSHIFT"),
      BinOp::Xor => write!(fmt, "XOR"),
    }
  }
}

impl Display for RelOp {
  fn fmt(&self, fmt: &mut Formatter) -> Result<(), Error> {
    match *self {
      RelOp::Eq => write!(fmt, "EQ"),
      RelOp::Ne => write!(fmt, "NE"),
      RelOp::Lt => write!(fmt, "LT"),
      RelOp::Gt => write!(fmt, "GT"),
      RelOp::Le => write!(fmt, "LE"),
      RelOp::Ge => write!(fmt, "GE"),
      RelOp::Ult => write!(fmt, "ULT"),
      RelOp::Ule => write!(fmt, "ULE"),
      RelOp::Ugt => write!(fmt, "UGT"),
      RelOp::Uge => write!(fmt, "UGE"),
    }
  }
}

impl Display for Exp {
  fn fmt(&self, fmt: &mut Formatter) -> Result<(), Error> {
    match self {
      Exp::BinOp(op, l, r) => write!(fmt, "BINOP({}, {}, {})", op, l, r),
      Exp::Mem(e) => write!(fmt, "MEM({})", e),
      Exp::Temp(t) => write!(fmt, "TEMP {}", t),
      Exp::ESeq(s, e) => write!(fmt, "ESEQ({}, {})", s, e),
      Exp::Name(l) => write!(fmt, "NAME {}", l),
      Exp::Const(n) => write!(fmt, "CONST {}", n),
      Exp::Call(f, args) => {
        write!(fmt, "CALL({}", f)?;
        for arg in args {
          write!(fmt, ", {}", arg)?;
        }
        write!(fmt, ")")
      }
    }
  }
}

impl Display for Stm {
  fn fmt(&self, fmt: &mut Formatter) -> Result<(), Error> {
    match self {
      Stm::Seq(a, b) => write!(fmt, "SEQ({}, {})", a, b),
      Stm::Label(l) => write!(fmt, "LABEL {}", l),
      Stm::Jump(e, targets) => {
        write!(fmt, "JUMP({}", e)?;
        for t in targets {
          write!(fmt, ", {}", t)?;
        }
        write!(fmt, ")")
      }
      Stm::CJump {
        op,
        left,
        right,
        t,
        f,
      } => write!(fmt, "CJUMP({}, {}, {}, {}, {})", op, left, right, t, f),
      Stm::Move(d, s) => write!(fmt, "MOVE({}, {})", d, s),
      Stm::Exp(e) => write!(fmt, "EXP({})", e),
    }
  }
}

impl Display for Proc {
  fn fmt(&self, fmt: &mut Formatter) -> Result<(), Error> {
    writeln!(fmt, "proc {} frame {} {{", self.name, self.locals_size)?;
    for stm in &self.body {
      writeln!(fmt, "  {}", stm)?;
    }
    write!(fmt, "}}")
  }
}
