//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports everything needed for the
//! common workflows without further imports.

use arrayops::prelude::*;

/// Test that the prelude covers a reduction, a search and a transform.
#[test]
fn test_prelude_workflow() {
    let data = [4u32, 9, 16];
    let opts = Options::new();

    assert_eq!(reduce_any(opcodes::EQ, &data[..], 9u32, &opts), Ok(true));
    assert_eq!(reduce_all(opcodes::GT, &data[..], 3u32, &opts), Ok(true));
    assert_eq!(find_first(opcodes::GE, &data[..], 10u32, &opts), Ok(Some(2)));

    let mut idx = [0i64; 3];
    assert_eq!(find_indices(opcodes::LT, &data[..], 10u32, &mut idx[..], &opts), Ok(2));

    let mut out = [0u32; 3];
    let res = transform(
        opcodes::DIV,
        &data[..],
        2u32,
        Some(ArrayMut::from(&mut out[..])),
        &opts,
    );
    assert!(res.is_ok());
    assert_eq!(out, [2, 4, 8]);
}

/// Test that the type vocabulary is exported.
#[test]
fn test_prelude_types() {
    let kind: ElementKind = ElementKind::from_typecode('d').unwrap_or(ElementKind::I8);
    assert_eq!(kind, ElementKind::F64);

    let err: ArrayError = ArrayError::EmptyInput;
    assert_eq!(err.category(), ErrorCategory::LengthError);

    let op = Operation::from_code(opcodes::FMOD).map(OpCode::from);
    assert_eq!(op, Ok(OpCode::Int(11)));
    assert_eq!(Operation::from(CompareOp::Ne).code(), opcodes::NE);
    assert_eq!(Operation::from(MathOp::Add).code(), opcodes::ADD);

    let view = ArrayRef::from(&[1.0f32][..]);
    assert_eq!(Operand::from(view).buffer_kind(), Some(ElementKind::F32));
    assert_eq!(OperandMut::from(Scalar::Int(1)).buffer_kind(), None);
    assert_eq!(<f32 as Element>::KIND, ElementKind::F32);
}
