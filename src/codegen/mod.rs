// Tiger Backend
//! Instruction selection by maximal munch over the canonical tree IR.
//!
//! Expressions leave their value in a temp; statements only append
//! instructions. Templates are AT&T x86-64 with `` `s ``/`` `d ``/`` `j ``
//! operand slots.

mod expr;
mod stmt;

use anyhow::Result;

use crate::asm::Instr;
use crate::frame::Frame;
use crate::registers::MachineDesc;
use crate::temp::{Namer, Temp};
use crate::tree::Stm;

use self::stmt::munch_stmt;

/// Code generation context: the machine being targeted, the temp namer and
/// the list of currently-generated instructions.
pub struct Context<'a> {
  pub machine: &'a MachineDesc,
  namer: &'a mut Namer,
  /// Symbol that the prologue sets to the final frame size.
  framesize: String,
  /// Most arguments any call so far passed on the stack.
  outgoing_args: usize,
  pub instrs: Vec<Instr>,
}

impl<'a> Context<'a> {
  pub fn new(machine: &'a MachineDesc, namer: &'a mut Namer, framesize: &str) -> Self {
    Context {
      machine,
      namer,
      framesize: framesize.to_string(),
      outgoing_args: 0,
      instrs: Vec::new(),
    }
  }

  /// Create a new temp in this context.
  pub(crate) fn temp(&mut self) -> Temp {
    self.namer.new_temp()
  }

  pub(super) fn framesize(&self) -> &str {
    &self.framesize
  }

  pub(super) fn reserve_outgoing(&mut self, args: usize) {
    self.outgoing_args = self.outgoing_args.max(args);
  }

  pub(crate) fn add_instr(&mut self, instr: Instr) {
    log::trace!("{}", instr);
    self.instrs.push(instr);
  }

  /// Munch a list of statements, appending to the instructions so far.
  pub fn munch_stmts(&mut self, stms: Vec<Stm>) -> Result<()> {
    for stm in stms {
      munch_stmt(self, stm)?;
    }
    Ok(())
  }
}

/// Select instructions for a whole procedure body. The result ends with an
/// empty-text instruction that uses the machine's return sink, so that the
/// return value, stack pointer and callee-saved registers are live at exit.
/// The frame grows an outgoing area for the widest call.
pub fn munch_proc(
  body: Vec<Stm>,
  frame: &mut Frame,
  machine: &MachineDesc,
  namer: &mut Namer,
) -> Result<Vec<Instr>> {
  let framesize = frame.framesize_label();
  let mut ctx = Context::new(machine, namer, &framesize);
  ctx.munch_stmts(body)?;
  ctx.add_instr(Instr::oper("", vec![], machine.return_sink()));
  frame.reserve_outgoing(ctx.outgoing_args);
  log::debug!("{}: selected {} instructions", framesize, ctx.instrs.len());
  Ok(ctx.instrs)
}

/// x86-64 immediates are sign-extended 32 bit values.
pub(super) fn is_imm32(c: i64) -> bool {
  c >= i32::MIN as i64 && c <= i32::MAX as i64
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::registers::tests::toy_machine;
  use crate::registers::X86_64;
  use crate::temp::{Label, TempMap};
  use crate::tree::{BinOp, Exp, RelOp};

  fn select_in(body: Vec<Stm>, machine: &MachineDesc) -> (Vec<Instr>, Frame) {
    let mut namer = Namer::new().resume_after(Some(Temp::new(199)));
    let mut frame = Frame::new(Label::named("f"), 0, machine);
    let instrs = munch_proc(body, &mut frame, machine, &mut namer).unwrap();
    (instrs, frame)
  }

  fn select(body: Vec<Stm>) -> Vec<Instr> {
    select_in(body, &X86_64).0
  }

  fn texts(instrs: &[Instr]) -> Vec<String> {
    let mut map = TempMap::new();
    for r in X86_64.registers() {
      map.insert(r, X86_64.asm_name(r).unwrap());
    }
    instrs.iter().map(|i| i.format(&map)).collect()
  }

  fn t(n: u32) -> Exp {
    Exp::Temp(Temp::new(n))
  }

  #[test]
  fn test_return_sink_is_appended() {
    let instrs = select(vec![]);
    assert_eq!(instrs.len(), 1);
    assert_eq!(instrs[0].uses(), X86_64.return_sink());
    assert!(instrs[0].defs().is_empty());
  }

  #[test]
  fn test_add_is_move_then_in_place_op() {
    let instrs = select(vec![Stm::Move(
      t(100),
      Exp::binop(BinOp::Plus, t(101), t(102)),
    )]);
    let add = &instrs[1];
    assert_eq!(texts(&instrs)[1], "addq t102, t200");
    assert_eq!(add.defs(), vec![Temp::new(200)]);
    assert!(add.uses().contains(&Temp::new(200)));
    assert_eq!(instrs[2].move_pair(), Some((Temp::new(200), Temp::new(100))));
  }

  #[test]
  fn test_multiply_goes_through_rax_rdx() {
    let instrs = select(vec![Stm::Move(
      t(100),
      Exp::binop(BinOp::Mul, t(101), t(102)),
    )]);
    let (rax, rdx) = X86_64.mul_div_pair();
    let imul = instrs
      .iter()
      .find(|i| texts(std::slice::from_ref(*i))[0].starts_with("imulq"))
      .unwrap();
    assert_eq!(imul.defs(), vec![rax, rdx]);
    assert!(imul.uses().contains(&rax));
  }

  #[test]
  fn test_divide_sign_extends() {
    let instrs = select(vec![Stm::Move(
      t(100),
      Exp::binop(BinOp::Div, t(101), t(102)),
    )]);
    let text = texts(&instrs);
    let cqto = text.iter().position(|s| s == "cqto").unwrap();
    assert!(text[cqto + 1].starts_with("idivq"));
    let (_, rdx) = X86_64.mul_div_pair();
    assert!(instrs[cqto + 1].uses().contains(&rdx));
  }

  #[test]
  fn test_store_folds_offset() {
    let instrs = select(vec![Stm::Move(
      Exp::mem(Exp::binop(BinOp::Plus, t(101), Exp::Const(16))),
      t(102),
    )]);
    assert_eq!(texts(&instrs)[0], "movq t102, 16(t101)");
    assert_eq!(instrs[0].uses(), vec![Temp::new(102), Temp::new(101)]);
    assert!(instrs[0].defs().is_empty());
  }

  #[test]
  fn test_load_into_temp_is_one_instruction() {
    let instrs = select(vec![Stm::Move(t(100), Exp::mem(t(101)))]);
    assert_eq!(instrs.len(), 2);
    assert_eq!(texts(&instrs)[0], "movq (t101), t100");
  }

  #[test]
  fn test_frame_slot_uses_stack_pointer() {
    let fp = Exp::Temp(X86_64.frame_pointer());
    let instrs = select(vec![
      Stm::Move(t(100), Exp::mem(Exp::binop(BinOp::Plus, fp.clone(), Exp::Const(-8)))),
      Stm::Move(t(101), fp),
    ]);
    let text = texts(&instrs);
    assert_eq!(text[0], "movq f_framesize-8(%rsp), t100");
    assert_eq!(text[1], "leaq f_framesize(%rsp), t200");
    assert_eq!(instrs[1].uses(), vec![X86_64.stack_pointer()]);
  }

  #[test]
  fn test_cjump_condition_codes() {
    let cases = [
      (RelOp::Eq, "je"),
      (RelOp::Ne, "jne"),
      (RelOp::Lt, "jl"),
      (RelOp::Gt, "jg"),
      (RelOp::Le, "jle"),
      (RelOp::Ge, "jge"),
      (RelOp::Ult, "jb"),
      (RelOp::Ule, "jbe"),
      (RelOp::Ugt, "ja"),
      (RelOp::Uge, "jae"),
    ];
    for (op, jcc) in cases.iter() {
      let instrs = select(vec![Stm::CJump {
        op: *op,
        left: t(100),
        right: t(101),
        t: Label::named("T"),
        f: Label::named("F"),
      }]);
      let text = texts(&instrs);
      assert_eq!(text[0], "cmpq t101, t100");
      assert_eq!(text[1], format!("{} T", jcc));
      let targets = instrs[1].targets().unwrap();
      assert_eq!(targets.labels, vec![Label::named("T"), Label::named("F")]);
    }
  }

  #[test]
  fn test_cjump_constant_on_left_is_flipped() {
    let instrs = select(vec![Stm::CJump {
      op: RelOp::Lt,
      left: Exp::Const(5),
      right: t(100),
      t: Label::named("T"),
      f: Label::named("F"),
    }]);
    let text = texts(&instrs);
    assert_eq!(text[0], "cmpq $5, t100");
    assert_eq!(text[1], "jg T");
  }

  #[test]
  fn test_call_marshals_arguments() {
    let args = (0..8).map(|i| Exp::Const(i)).collect::<Vec<_>>();
    let (instrs, frame) = select_in(
      vec![Stm::Exp(Exp::call(Exp::Name(Label::named("g")), args))],
      &X86_64,
    );
    let text = texts(&instrs);

    // arguments seven and eight go to the outgoing area, lowest address first
    assert_eq!(text[8], "movq t206, (%rsp)");
    assert_eq!(text[9], "movq t207, 8(%rsp)");
    assert_eq!(instrs[9].uses(), vec![Temp::new(207), X86_64.stack_pointer()]);
    assert_eq!(frame.outgoing_size(), 16);
    assert_eq!(frame.frame_size(), 16);

    let call = instrs
      .iter()
      .zip(text.iter())
      .find(|(_, s)| s.as_str() == "callq g")
      .map(|(i, _)| i)
      .unwrap();
    for reg in X86_64.caller_saves() {
      assert!(call.defs().contains(reg));
    }
    assert_eq!(call.uses(), X86_64.arg_regs().to_vec());
    let sp = X86_64.stack_pointer();
    assert!(instrs.iter().all(|i| !i.defs().contains(&sp)));
  }

  #[test]
  fn test_register_only_call_reserves_nothing() {
    let (_, frame) = select_in(
      vec![Stm::Exp(Exp::call(Exp::Name(Label::named("g")), vec![t(100)]))],
      &X86_64,
    );
    assert_eq!(frame.frame_size(), 0);
  }

  #[test]
  fn test_variable_shift_uses_count_register() {
    let body = vec![Stm::Move(
      t(100),
      Exp::binop(BinOp::LShift, t(101), t(102)),
    )];
    let instrs = select(body.clone());
    let text = texts(&instrs);
    assert!(text.contains(&"salq %cl, t200".to_string()));
    // movq t101, t200; movq t102, %rcx; salq %cl, t200
    assert!(instrs[2].uses().contains(&X86_64.shift_count()));

    let toy = toy_machine();
    let (instrs, _) = select_in(body, &toy);
    let mut names = TempMap::new();
    for r in toy.registers() {
      names.insert(r, toy.asm_name(r).unwrap());
    }
    let text = instrs.iter().map(|i| i.format(&names)).collect::<Vec<_>>();
    assert!(text.iter().any(|s| s.starts_with("salq %r1, ")));
    assert!(text.iter().all(|s| !s.contains("%cl")));
  }

  #[test]
  fn test_call_without_arguments_uses_no_registers() {
    let instrs = select(vec![Stm::Move(
      t(100),
      Exp::call(Exp::Name(Label::named("getchar")), vec![]),
    )]);
    assert!(instrs[0].uses().is_empty());
    assert_eq!(instrs[1].move_pair(), Some((X86_64.return_value(), Temp::new(200))));
  }
}
