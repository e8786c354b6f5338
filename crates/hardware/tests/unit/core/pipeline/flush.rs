//! Control Hazard Tests.
//!
//! Jumps and taken branches resolve in Execute. The program counter is
//! redirected and both latches are empty at the end of that cycle, so the
//! two younger instructions never execute.

use pipesim_core::core::pipeline::stages::Redirect;
use pipesim_core::isa::opcodes::Opcode;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::builder::instruction::{InstructionBuilder, imm, ldi, reg};
use crate::common::harness::TestContext;

fn beqz_program() -> Vec<u16> {
    vec![
        ldi(1, 0),
        imm(Opcode::Beqz, 1, 2),
        ldi(2, 9),
        ldi(3, 9),
        ldi(4, 7),
    ]
}

#[test]
fn taken_branch_skips_two_instructions() {
    let mut tc = TestContext::new().load_program(&beqz_program());

    let summary = tc.run();
    assert_eq!(tc.get_reg(2), 0);
    assert_eq!(tc.get_reg(3), 0);
    assert_eq!(tc.get_reg(4), 7);
    assert_eq!(summary.cycles, 7);
    assert_eq!(summary.final_pc, 5);

    let s = &summary.stats;
    assert_eq!(s.flushes, 1);
    assert_eq!(s.squashed, 2);
    assert_eq!(s.branches_taken, 1);
    assert_eq!(s.branches_not_taken(), 0);
    assert_eq!(s.instructions_fetched, 5);
    assert_eq!(s.instructions_decoded, 3);
    assert_eq!(s.instructions_retired, 3);
}

#[test]
fn branch_over_end_of_program_halts_at_target() {
    let mut tc = TestContext::new().load_asm("LDI R1 0\nBEQZ R1 2\nLDI R2 9\n");

    let summary = tc.run();
    assert_eq!(summary.final_pc, 4);
    assert_eq!(tc.get_reg(2), 0);
    assert_eq!(summary.cycles, 4);
}

#[test]
fn flush_cycle_empties_both_latches() {
    let mut tc = TestContext::new().load_program(&beqz_program());

    let _ = tc.run_cycles(3);
    assert!(tc.cpu().if_id.is_some());
    assert!(tc.cpu().id_ex.is_some());

    let report = tc.tick();
    assert_eq!(report.executed, Some(1));
    assert_eq!(report.redirect, Some(Redirect::Branch { target: 4 }));
    assert_eq!(report.decoded, None);
    assert!(tc.cpu().if_id.is_none());
    assert!(tc.cpu().id_ex.is_none());
    assert_eq!(tc.pc(), 4);
}

#[test]
fn branch_not_taken_falls_through() {
    let mut tc = TestContext::new().load_asm("LDI R1 1\nBEQZ R1 5\nLDI R2 9\n");
    let summary = tc.run();
    assert_eq!(tc.get_reg(2), 9);
    assert_eq!(summary.cycles, 5);
    assert_eq!(summary.stats.flushes, 0);
    assert_eq!(summary.stats.branches_not_taken(), 1);
}

#[test]
fn jump_to_concatenated_target() {
    let mut tc = TestContext::new().load_program(&[
        ldi(1, 0),
        ldi(2, 4),
        reg(Opcode::Jr, 1, 2),
        ldi(5, 1),
        ldi(6, 2),
    ]);

    let summary = tc.run();
    assert_eq!(tc.get_reg(5), 0);
    assert_eq!(tc.get_reg(6), 2);
    assert_eq!(summary.cycles, 8);
    assert_eq!(summary.stats.inst_jump, 1);
    assert_eq!(summary.stats.squashed, 2);
}

#[test]
fn jump_past_program_end_terminates() {
    let mut tc = TestContext::new().load_program(&[ldi(1, 1), ldi(2, 0), reg(Opcode::Jr, 1, 2), ldi(3, 3)]);

    let summary = tc.run();
    assert_eq!(summary.final_pc, 0x0100);
    assert_eq!(tc.get_reg(3), 0);
    assert_eq!(summary.cycles, 5);
}

#[test]
fn squashed_invalid_opcode_is_never_decoded() {
    let bad = InstructionBuilder::new().opcode(15).build();
    let mut tc = TestContext::new().load_program(&[imm(Opcode::Beqz, 0, 1), bad, ldi(3, 3)]);

    let summary = tc.try_run().unwrap();
    assert_eq!(tc.get_reg(3), 3);
    assert_eq!(summary.cycles, 6);
}

#[test]
fn backward_branch_loop() {
    // R1 counts down from 3; R2 accumulates one per iteration. The exit
    // branch targets address 9, one past the end of the program.
    let mut tc = TestContext::new().load_asm(
        "LDI R1 3
         LDI R3 1
         LDI R4 0
         BEQZ R1 5
         ADD R2 R3
         SUB R1 R3
         JR R4 R5
         LDI R6 6
         LDI R7 7",
    );
    // R5 holds the loop head (address 3).
    tc.set_reg(5, 3);

    let _ = tc.run();
    assert_eq!(tc.get_reg(1), 0);
    assert_eq!(tc.get_reg(2), 3);
    assert_eq!(tc.get_reg(6), 0);
    assert_eq!(tc.get_reg(7), 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Whatever the branch offset, nothing between the branch and its target executes.
    #[test]
    fn taken_branch_skips_exactly_up_to_target(offset in 0u8..6) {
        let mut program = vec![imm(Opcode::Beqz, 0, offset)];
        program.extend((1..=8).map(|i| ldi(i, 1)));
        let mut tc = TestContext::new().load_program(&program);

        let _ = tc.run();
        let target = 1 + usize::from(offset);
        for r in 1..=8usize {
            prop_assert_eq!(tc.get_reg(r), u8::from(r >= target), "R{}", r);
        }
    }
}
