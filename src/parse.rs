// Tiger Backend
//! Parser for the textual tree IR

// We rely on [lalrpop](https://github.com/lalrpop/lalrpop) for parsing.
// Lalrpop generates a LR(1) parser, the grammar can be found in tir.lalrpop
// and the generated code in tir.rs

pub mod parser {
  use logos::{Logos, Span};
  use std::fs;

  use anyhow::{anyhow, Context, Result};

  use crate::lex::Token;
  use crate::registers::MachineDesc;
  use crate::tir;
  use crate::tree::Proc;

  /// Parse IR text; register names are resolved against `machine`.
  pub fn parse_string(input: &str, machine: &MachineDesc) -> Result<Vec<Proc>> {
    let lex_stream = Token::lexer(input)
      .spanned()
      .map(|(t, y): (Token, Span)| (y.start, t, y.end));

    tir::ProgramParser::new()
      .parse(machine, lex_stream)
      .map_err(|e| anyhow!("Couldn't parse file. Failed with message {:?}", e))
  }

  pub fn parse(file_name: &str, machine: &MachineDesc) -> Result<Vec<Proc>> {
    let input = fs::read_to_string(file_name).with_context(|| format!("Couldn't read {}", file_name))?;
    parse_string(&input, machine)
  }

  #[cfg(test)]
  mod tests {
    use super::*;
    use crate::registers::X86_64;
    use crate::temp::{Label, Temp};
    use crate::tree::{BinOp, Exp, RelOp, Stm};

    #[test]
    fn test_parse_proc() {
      let text = r#"
        proc tigermain frame 8 {
          MOVE(TEMP t100, CONST 1)
          CJUMP(LT, TEMP t100, TEMP %rdi, L1, L2)
          LABEL L1
          EXP(CALL(NAME print, TEMP t100, CONST 2))
          JUMP(NAME L2, L2)
          LABEL L2
          MOVE(MEM(BINOP(PLUS, TEMP %rbp, CONST -8)), TEMP t100)
        }
      "#;
      let procs = parse_string(text, &X86_64).unwrap();
      assert_eq!(procs.len(), 1);
      let p = &procs[0];
      assert_eq!(p.name, Label::named("tigermain"));
      assert_eq!(p.locals_size, 8);
      assert_eq!(p.body.len(), 7);
      assert_eq!(
        p.body[1],
        Stm::CJump {
          op: RelOp::Lt,
          left: Exp::Temp(Temp::new(100)),
          right: Exp::Temp(X86_64.register_named("rdi").unwrap()),
          t: Label::named("L1"),
          f: Label::named("L2"),
        }
      );
      assert_eq!(
        p.body[6],
        Stm::Move(
          Exp::mem(Exp::binop(
            BinOp::Plus,
            Exp::Temp(X86_64.frame_pointer()),
            Exp::Const(-8)
          )),
          Exp::Temp(Temp::new(100))
        )
      );
      assert_eq!(p.max_temp(), Some(Temp::new(100)));
    }

    #[test]
    fn test_reject_unknown_register() {
      let text = "proc f frame 0 { MOVE(TEMP %r99, CONST 1) }";
      assert!(parse_string(text, &X86_64).is_err());
    }

    #[test]
    fn test_reject_low_temp() {
      let text = "proc f frame 0 { MOVE(TEMP t3, CONST 1) }";
      assert!(parse_string(text, &X86_64).is_err());
    }

    #[test]
    fn test_display_reparses() {
      let text = "proc f frame 0 { MOVE(TEMP t101, BINOP(MUL, TEMP t102, CONST 3)) EXP(ESEQ(LABEL L4, NAME g)) }";
      let procs = parse_string(text, &X86_64).unwrap();
      let again = parse_string(&procs[0].to_string(), &X86_64).unwrap();
      assert_eq!(procs[0].body, again[0].body);
    }
  }
}
