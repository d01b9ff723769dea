//! Integration tests for the RISC loader.
//!
//! Tests cover:
//! - The sample programs under `tests/programs/`
//! - Label resolution across the whole file
//! - Listing and render output
//! - Load errors

use proptest::prelude::*;
use risc_assembler::{listing, load, load_with_labels, render, LoadError};
use risc_common::{ErrorKind, Line, Opcode, Operand, Register};
use std::path::PathBuf;

fn program_text(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/programs")
        .join(name);
    std::fs::read_to_string(&path).unwrap()
}

fn instr_at(text: &str, idx: usize) -> String {
    load(text).unwrap().lines[idx].to_string()
}

// ---- Sample programs ----

#[test]
fn sample_programs_load() {
    for name in [
        "hello.risc",
        "countdown.risc",
        "sum.risc",
        "recursion.risc",
        "argv.risc",
    ] {
        let text = program_text(name);
        let program = load(&text).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(program.len(), text.lines().count(), "{name}");
    }
}

#[test]
fn sum_program_resolves_call_target() {
    let text = program_text("sum.risc");
    let (program, labels) = load_with_labels(&text).unwrap();
    let add = labels.get("add").unwrap();
    let call = program
        .lines
        .iter()
        .find_map(|line| match line {
            Line::Instr(instr) if instr.opcode == Opcode::Cll => Some(instr.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(call.operands, vec![Operand::Immediate(add as i64)]);
}

// ---- Labels ----

#[test]
fn loop_label_resolves_to_line_zero() {
    let text = "loop: PSH 1\nJMP loop\n";
    assert_eq!(instr_at(text, 0), "PSH 1");
    assert_eq!(instr_at(text, 1), "JMP 0");
}

#[test]
fn labels_substitute_in_every_operand_position() {
    let text = "\
MOV a b
a: HLT
b: HLT
";
    assert_eq!(instr_at(text, 0), "MOV 1 2");
}

#[test]
fn duplicate_label_last_definition_wins() {
    let text = "\
JMP x
x: PSH 1
x: PSH 2
";
    assert_eq!(instr_at(text, 0), "JMP 2");
}

#[test]
fn label_named_like_register_shadows_it() {
    let text = "ACC: HLT\nMOV 1 ACC\n";
    assert_eq!(instr_at(text, 1), "MOV 1 0");
}

#[test]
fn label_on_blank_line_points_at_blank_line() {
    let (program, labels) = load_with_labels("JMP end\nend:\n").unwrap();
    assert_eq!(labels.get("end"), Some(1));
    assert_eq!(program.lines[1], Line::Blank);
}

// ---- Errors ----

#[test]
fn undefined_label_is_label_error() {
    let err = load("PSH 1\n\nMOV ACC nowhere\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LabelError);
    assert_eq!(err.line(), 3);
    assert_eq!(err.to_string(), "line 3: undefined label 'nowhere'");
}

#[test]
fn unknown_opcode_line_is_not_label_checked() {
    let program = load("FOO bar\na: b: HLT\n").unwrap();
    assert_eq!(
        program.lines[0],
        Line::Unknown {
            mnemonic: "FOO".to_string(),
            operands: vec!["bar".to_string()],
        }
    );
    assert_eq!(
        program.lines[1],
        Line::Unknown {
            mnemonic: "b:".to_string(),
            operands: vec!["HLT".to_string()],
        }
    );
}

#[test]
fn first_error_wins() {
    let err = load("JMP a\nJMP b\n").unwrap_err();
    assert_eq!(
        err,
        LoadError::UndefinedLabel {
            line: 1,
            name: "a".to_string()
        }
    );
}

#[test]
fn runtime_defects_do_not_fail_the_load() {
    let program = load("BOGUS\nPSH -1\nMOV 1 STP\nJMP ACC\nPSH [x]\n").unwrap();
    assert_eq!(program.len(), 5);
}

// ---- Listing ----

#[test]
fn listing_shows_resolved_program() {
    let text = "start: MOV [STP] ACC ' copy top\n\nJMP start\n";
    let program = load(text).unwrap();
    assert_eq!(
        listing(&program),
        "0000: MOV [STP] ACC\n0001:\n0002: JMP 0\n"
    );
}

#[test]
fn render_reloads_identically() {
    let sum = program_text("sum.risc");
    for text in [
        sum.as_str(),
        "a: x: 1",
        "x:\nJMP 0\nl: y: _0\n",
        "BOGUS 1 'c\n\nPSH [nowhere]\n",
    ] {
        let program = load(text).unwrap();
        let reloaded = load(&render(&program)).unwrap();
        assert_eq!(program, reloaded, "{text:?}");
    }
}

#[test]
fn register_operands_decode() {
    let program = load("MOV BSP BAK\n").unwrap();
    match &program.lines[0] {
        Line::Instr(instr) => assert_eq!(
            instr.operands,
            vec![
                Operand::Register(Register::Bsp),
                Operand::Register(Register::Bak)
            ]
        ),
        other => panic!("expected instruction, got {other:?}"),
    }
}

proptest! {
    /// Loading never changes the number of lines, whatever the labels do.
    #[test]
    fn line_count_preserved(
        lines in prop::collection::vec("(l[0-3]: )?(PSH|JMP|MOV|HLT)( [0-9]| ACC)?", 0..20)
    ) {
        let text = lines.join("\n");
        let program = load(&text).unwrap();
        prop_assert_eq!(program.len(), text.lines().count());
    }
}
