use anyhow::Result;

use crate::asm::Instr;
use crate::temp::{Label, Temp};
use crate::tree::{BinOp, Exp};

use super::stmt::munch_stmt;
use super::{is_imm32, Context};

/// A memory operand after folding constant offsets into the addressing mode.
pub(super) enum Address {
  /// Frame pointer plus offset. The frame pointer is virtual, so this is
  /// addressed from the stack pointer through the frame-size symbol.
  Frame(i64),
  Base(Temp, i64),
}

impl Address {
  /// Operand text reading its base from use slot `slot`, and the temp that
  /// must sit in that slot.
  pub(super) fn operand(&self, ctx: &Context, slot: usize) -> (String, Temp) {
    match *self {
      Address::Frame(0) => (
        format!("{}(`s{})", ctx.framesize(), slot),
        ctx.machine.stack_pointer(),
      ),
      Address::Frame(off) => (
        format!("{}{:+}(`s{})", ctx.framesize(), off, slot),
        ctx.machine.stack_pointer(),
      ),
      Address::Base(base, 0) => (format!("(`s{})", slot), base),
      Address::Base(base, off) => (format!("{}(`s{})", off, slot), base),
    }
  }
}

/// Transform an expression into a series of instructions in a context,
/// returning the temp that holds its value.
pub(super) fn munch_expr(ctx: &mut Context, exp: Exp) -> Result<Temp> {
  match exp {
    Exp::BinOp(op, l, r) => munch_binop(ctx, op, *l, *r),
    Exp::Mem(addr) => {
      let dest = ctx.temp();
      munch_load(ctx, dest, *addr)?;
      Ok(dest)
    }
    Exp::Temp(t) => Ok(munch_temp(ctx, t)),
    Exp::ESeq(s, e) => {
      munch_stmt(ctx, *s)?;
      munch_expr(ctx, *e)
    }
    Exp::Name(label) => {
      let dest = ctx.temp();
      ctx.add_instr(Instr::oper(format!("leaq {}(%rip), `d0", label), vec![dest], vec![]));
      Ok(dest)
    }
    Exp::Const(n) => {
      let dest = ctx.temp();
      ctx.add_instr(Instr::oper(format!("movq ${}, `d0", n), vec![dest], vec![]));
      Ok(dest)
    }
    Exp::Call(f, args) => {
      munch_call(ctx, *f, args)?;
      let dest = ctx.temp();
      ctx.add_instr(Instr::mov("movq `s0, `d0", dest, ctx.machine.return_value()));
      Ok(dest)
    }
  }
}

/// Like `munch_expr`, but never hands back a machine register, so the value
/// survives the fixed-register moves that follow.
fn munch_virtual(ctx: &mut Context, exp: Exp) -> Result<Temp> {
  let t = munch_expr(ctx, exp)?;
  if ctx.machine.is_register(t) {
    let copy = ctx.temp();
    ctx.add_instr(Instr::mov("movq `s0, `d0", copy, t));
    Ok(copy)
  } else {
    Ok(t)
  }
}

fn munch_temp(ctx: &mut Context, t: Temp) -> Temp {
  if t != ctx.machine.frame_pointer() {
    return t;
  }
  // the frame pointer itself is the address of the frame
  let dest = ctx.temp();
  let (addr, sp) = Address::Frame(0).operand(ctx, 0);
  ctx.add_instr(Instr::oper(format!("leaq {}, `d0", addr), vec![dest], vec![sp]));
  dest
}

/// Fold `e + c`, `c + e` and `e - c` into a base and displacement.
pub(super) fn munch_address(ctx: &mut Context, addr: Exp) -> Result<Address> {
  let fp = ctx.machine.frame_pointer();
  let (base, off) = match addr {
    Exp::BinOp(BinOp::Plus, l, r) => match (*l, *r) {
      (e, Exp::Const(c)) | (Exp::Const(c), e) if is_imm32(c) => (e, c),
      (l, r) => (Exp::binop(BinOp::Plus, l, r), 0),
    },
    Exp::BinOp(BinOp::Minus, l, r) => match (*l, *r) {
      (e, Exp::Const(c)) if c.checked_neg().map_or(false, is_imm32) => (e, -c),
      (l, r) => (Exp::binop(BinOp::Minus, l, r), 0),
    },
    e => (e, 0),
  };

  match base {
    Exp::Temp(t) if t == fp => Ok(Address::Frame(off)),
    base => Ok(Address::Base(munch_expr(ctx, base)?, off)),
  }
}

/// `movq addr, dest`
pub(super) fn munch_load(ctx: &mut Context, dest: Temp, addr: Exp) -> Result<()> {
  let addr = munch_address(ctx, addr)?;
  let (operand, base) = addr.operand(ctx, 0);
  ctx.add_instr(Instr::oper(format!("movq {}, `d0", operand), vec![dest], vec![base]));
  Ok(())
}

fn munch_binop(ctx: &mut Context, op: BinOp, l: Exp, r: Exp) -> Result<Temp> {
  match op {
    BinOp::Plus if matches!(&l, Exp::Temp(t) if *t == ctx.machine.frame_pointer()) => {
      // address of a frame slot
      if let Exp::Const(c) = r {
        if is_imm32(c) {
          let dest = ctx.temp();
          let (addr, sp) = Address::Frame(c).operand(ctx, 0);
          ctx.add_instr(Instr::oper(format!("leaq {}, `d0", addr), vec![dest], vec![sp]));
          return Ok(dest);
        }
      }
      munch_arith(ctx, "addq", l, r)
    }
    BinOp::Plus => munch_arith(ctx, "addq", l, r),
    BinOp::Minus => munch_arith(ctx, "subq", l, r),
    BinOp::And => munch_arith(ctx, "andq", l, r),
    BinOp::Or => munch_arith(ctx, "orq", l, r),
    BinOp::Xor => munch_arith(ctx, "xorq", l, r),
    BinOp::Mul => munch_mul(ctx, l, r),
    BinOp::Div => munch_div(ctx, l, r),
    BinOp::LShift => munch_shift(ctx, "salq", l, r),
    BinOp::RShift => munch_shift(ctx, "shrq", l, r),
    BinOp::ARShift => munch_shift(ctx, "sarq", l, r),
  }
}

/// Right operand: an immediate when it fits, otherwise a temp.
enum Operand {
  Imm(i64),
  Temp(Temp),
}

fn munch_operand(ctx: &mut Context, e: Exp) -> Result<Operand> {
  match e {
    Exp::Const(c) if is_imm32(c) => Ok(Operand::Imm(c)),
    e => Ok(Operand::Temp(munch_expr(ctx, e)?)),
  }
}

/// `movq left, d; op right, d`
fn munch_arith(ctx: &mut Context, mnemonic: &str, l: Exp, r: Exp) -> Result<Temp> {
  let left = munch_expr(ctx, l)?;
  let right = munch_operand(ctx, r)?;
  let dest = ctx.temp();
  ctx.add_instr(Instr::mov("movq `s0, `d0", dest, left));
  let instr = match right {
    Operand::Imm(c) => Instr::oper(format!("{} ${}, `d0", mnemonic, c), vec![dest], vec![dest]),
    Operand::Temp(t) => Instr::oper(format!("{} `s0, `d0", mnemonic), vec![dest], vec![t, dest]),
  };
  ctx.add_instr(instr);
  Ok(dest)
}

fn munch_mul(ctx: &mut Context, l: Exp, r: Exp) -> Result<Temp> {
  let (rax, rdx) = ctx.machine.mul_div_pair();
  let left = munch_expr(ctx, l)?;
  let right = munch_virtual(ctx, r)?;
  ctx.add_instr(Instr::mov("movq `s0, `d0", rax, left));
  ctx.add_instr(Instr::oper("imulq `s0", vec![rax, rdx], vec![right, rax]));
  let dest = ctx.temp();
  ctx.add_instr(Instr::mov("movq `s0, `d0", dest, rax));
  Ok(dest)
}

fn munch_div(ctx: &mut Context, l: Exp, r: Exp) -> Result<Temp> {
  let (rax, rdx) = ctx.machine.mul_div_pair();
  let left = munch_expr(ctx, l)?;
  let right = munch_virtual(ctx, r)?;
  ctx.add_instr(Instr::mov("movq `s0, `d0", rax, left));
  ctx.add_instr(Instr::oper("cqto", vec![rdx], vec![rax]));
  ctx.add_instr(Instr::oper("idivq `s0", vec![rax, rdx], vec![right, rax, rdx]));
  let dest = ctx.temp();
  ctx.add_instr(Instr::mov("movq `s0, `d0", dest, rax));
  Ok(dest)
}

/// Variable shift counts live in the machine's shift-count register.
fn munch_shift(ctx: &mut Context, mnemonic: &str, l: Exp, r: Exp) -> Result<Temp> {
  let left = munch_expr(ctx, l)?;
  let count = match r {
    Exp::Const(c) => Operand::Imm(c & 0x3f),
    r => Operand::Temp(munch_virtual(ctx, r)?),
  };
  let dest = ctx.temp();
  ctx.add_instr(Instr::mov("movq `s0, `d0", dest, left));
  let instr = match count {
    Operand::Imm(c) => Instr::oper(format!("{} ${}, `d0", mnemonic, c), vec![dest], vec![dest]),
    Operand::Temp(t) => {
      let count = ctx.machine.shift_count();
      ctx.add_instr(Instr::mov("movq `s0, `d0", count, t));
      let operand = ctx.machine.shift_count_operand();
      Instr::oper(format!("{} {}, `d0", mnemonic, operand), vec![dest], vec![count, dest])
    }
  };
  ctx.add_instr(instr);
  Ok(dest)
}

enum CallTarget {
  Direct(Label),
  Indirect(Temp),
}

/// Emit a call. Arguments beyond the register ones are stored upwards from
/// the stack pointer, the layout pushing them in reverse order would leave.
/// The result is left in the return value register.
pub(super) fn munch_call(ctx: &mut Context, f: Exp, args: Vec<Exp>) -> Result<()> {
  let machine = ctx.machine;
  let sp = machine.stack_pointer();

  let target = match f {
    Exp::Name(label) => CallTarget::Direct(label),
    f => CallTarget::Indirect(munch_virtual(ctx, f)?),
  };
  let values = args
    .into_iter()
    .map(|a| munch_virtual(ctx, a))
    .collect::<Result<Vec<_>>>()?;

  let nregs = machine.arg_regs().len();
  for (i, v) in values.iter().skip(nregs).enumerate() {
    let slot = Address::Base(sp, i as i64 * machine.word_size());
    let (operand, base) = slot.operand(ctx, 1);
    ctx.add_instr(Instr::oper(format!("movq `s0, {}", operand), vec![], vec![*v, base]));
  }
  ctx.reserve_outgoing(values.len().saturating_sub(nregs));

  let mut uses = vec![];
  for (v, reg) in values.iter().zip(machine.arg_regs()) {
    ctx.add_instr(Instr::mov("movq `s0, `d0", *reg, *v));
    uses.push(*reg);
  }

  let mut defs = machine.caller_saves().to_vec();
  if !defs.contains(&machine.return_value()) {
    defs.push(machine.return_value());
  }
  let call = match target {
    CallTarget::Direct(label) => Instr::oper(format!("callq {}", label), defs, uses),
    CallTarget::Indirect(t) => {
      let mut srcs = vec![t];
      srcs.extend(uses);
      Instr::oper("callq *`s0", defs, srcs)
    }
  };
  ctx.add_instr(call);
  Ok(())
}
