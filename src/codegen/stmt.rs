use anyhow::{bail, Result};

use crate::asm::Instr;
use crate::temp::Label;
use crate::tree::{Exp, RelOp, Stm};

use super::expr::{munch_address, munch_call, munch_expr, munch_load};
use super::{is_imm32, Context};

/// Transform a statement into a series of instructions in a context.
pub(super) fn munch_stmt(ctx: &mut Context, stm: Stm) -> Result<()> {
  match stm {
    Stm::Seq(a, b) => {
      munch_stmt(ctx, *a)?;
      munch_stmt(ctx, *b)
    }
    Stm::Label(label) => {
      ctx.add_instr(Instr::label(label));
      Ok(())
    }
    Stm::Jump(e, targets) => munch_jump(ctx, e, targets),
    Stm::CJump {
      op,
      left,
      right,
      t,
      f,
    } => munch_cjump(ctx, op, left, right, t, f),
    Stm::Move(dst, src) => munch_move(ctx, dst, src),
    Stm::Exp(Exp::Call(f, args)) => munch_call(ctx, *f, args),
    Stm::Exp(e) => {
      munch_expr(ctx, e)?;
      Ok(())
    }
  }
}

fn munch_jump(ctx: &mut Context, e: Exp, mut targets: Vec<Label>) -> Result<()> {
  match e {
    Exp::Name(label) => {
      if targets.is_empty() {
        targets.push(label);
      }
      ctx.add_instr(Instr::jump("jmp `j0", vec![], targets));
    }
    e => {
      // computed jump, the targets are every place it may land
      let t = munch_expr(ctx, e)?;
      ctx.add_instr(Instr::jump("jmp *`s0", vec![t], targets));
    }
  }
  Ok(())
}

/// Jump mnemonic taken when `left op right` holds after `cmpq right, left`.
fn condition_code(op: RelOp) -> &'static str {
  match op {
    RelOp::Eq => "je",
    RelOp::Ne => "jne",
    RelOp::Lt => "jl",
    RelOp::Gt => "jg",
    RelOp::Le => "jle",
    RelOp::Ge => "jge",
    RelOp::Ult => "jb",
    RelOp::Ule => "jbe",
    RelOp::Ugt => "ja",
    RelOp::Uge => "jae",
  }
}

fn munch_cjump(
  ctx: &mut Context,
  op: RelOp,
  left: Exp,
  right: Exp,
  t: Label,
  f: Label,
) -> Result<()> {
  // keep an immediate on the right, where cmpq accepts it
  let (op, left, right) = match (&left, &right) {
    (Exp::Const(_), Exp::Const(_)) => (op, left, right),
    (Exp::Const(_), _) => (op.commute(), right, left),
    _ => (op, left, right),
  };

  let l = munch_expr(ctx, left)?;
  match right {
    Exp::Const(c) if is_imm32(c) => {
      ctx.add_instr(Instr::oper(format!("cmpq ${}, `s0", c), vec![], vec![l]));
    }
    right => {
      let r = munch_expr(ctx, right)?;
      ctx.add_instr(Instr::oper("cmpq `s1, `s0", vec![], vec![l, r]));
    }
  }
  ctx.add_instr(Instr::branch(&format!("{} `j0", condition_code(op)), vec![t, f]));
  Ok(())
}

fn munch_move(ctx: &mut Context, dst: Exp, src: Exp) -> Result<()> {
  match (dst, src) {
    (Exp::Mem(addr), Exp::Const(c)) if is_imm32(c) => {
      let addr = munch_address(ctx, *addr)?;
      let (operand, base) = addr.operand(ctx, 0);
      ctx.add_instr(Instr::oper(format!("movq ${}, {}", c, operand), vec![], vec![base]));
    }
    (Exp::Mem(addr), src) => {
      let addr = munch_address(ctx, *addr)?;
      let value = munch_expr(ctx, src)?;
      let (operand, base) = addr.operand(ctx, 1);
      ctx.add_instr(Instr::oper(format!("movq `s0, {}", operand), vec![], vec![value, base]));
    }
    (Exp::Temp(t), Exp::Const(c)) => {
      ctx.add_instr(Instr::oper(format!("movq ${}, `d0", c), vec![t], vec![]));
    }
    (Exp::Temp(t), Exp::Mem(addr)) => munch_load(ctx, t, *addr)?,
    (Exp::Temp(t), src) => {
      let value = munch_expr(ctx, src)?;
      ctx.add_instr(Instr::mov("movq `s0, `d0", t, value));
    }
    (Exp::ESeq(s, dst), src) => {
      munch_stmt(ctx, *s)?;
      munch_move(ctx, *dst, src)?;
    }
    (dst, _) => bail!("MOVE into {} which is not a temp or memory location", dst),
  }
  Ok(())
}
