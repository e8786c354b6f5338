//! ALU Unit Tests.

use pipesim_core::core::pipeline::signals::AluOp;
use pipesim_core::core::units::alu::Alu;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(AluOp::Add, 3, 4, 7)]
#[case(AluOp::Add, 200, 100, 44)]
#[case(AluOp::Sub, 10, 3, 7)]
#[case(AluOp::Sub, 3, 5, 254)]
#[case(AluOp::Mul, 6, 7, 42)]
#[case(AluOp::Mul, 16, 17, 16)]
#[case(AluOp::And, 0b1100, 0b1010, 0b1000)]
#[case(AluOp::Or, 0b1100, 0b1010, 0b1110)]
#[case(AluOp::Slc, 0b1000_0001, 1, 0b0000_0011)]
#[case(AluOp::Src, 0b0000_0001, 1, 0b1000_0000)]
#[case(AluOp::Slc, 0x0F, 4, 0xF0)]
#[case(AluOp::Transfer, 99, 5, 5)]
#[case(AluOp::Concat, 0x12, 0x34, 0x1234)]
fn alu_table(#[case] op: AluOp, #[case] a: u8, #[case] b: u8, #[case] expected: u16) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

#[test]
fn rotate_amount_uses_low_three_bits() {
    assert_eq!(Alu::execute(AluOp::Slc, 0b0000_0001, 9), 0b0000_0010);
    assert_eq!(Alu::execute(AluOp::Src, 0b1000_0000, 8), 0b1000_0000);
}

proptest! {
    #[test]
    fn eight_bit_ops_fit_in_a_byte(a in any::<u8>(), b in any::<u8>()) {
        for op in [AluOp::Add, AluOp::Sub, AluOp::Mul, AluOp::And, AluOp::Or,
                   AluOp::Slc, AluOp::Src, AluOp::Transfer] {
            prop_assert!(Alu::execute(op, a, b) <= 0xFF);
        }
    }

    #[test]
    fn rotate_left_then_right_is_identity(a in any::<u8>(), sh in 0u8..8) {
        let left = Alu::execute(AluOp::Slc, a, sh) as u8;
        prop_assert_eq!(Alu::execute(AluOp::Src, left, sh), u16::from(a));
    }

    #[test]
    fn concat_splits_back(a in any::<u8>(), b in any::<u8>()) {
        let r = Alu::execute(AluOp::Concat, a, b);
        prop_assert_eq!((r >> 8) as u8, a);
        prop_assert_eq!(r as u8, b);
    }
}
