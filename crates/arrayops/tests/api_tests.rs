//! Tests for the public API.
//!
//! These tests use only the public surface and verify:
//! - Reference examples for reductions and search
//! - Opcode and option validation, and the order errors are reported in
//! - `maxlen` confinement for every operation
//! - Checked and suppressed transform modes
//!
//! ## Test Organization
//!
//! 1. **Reductions** - Reference examples and shapes
//! 2. **Search** - Index search and first match
//! 3. **Transform** - Destinations, in place, error modes
//! 4. **Options** - Builder, duplicates, unsupported options
//! 5. **Error Ordering** - One error per call, earliest category first

use approx::assert_relative_eq;

use arrayops::{
    find_first, find_indices, opcodes, reduce_all, reduce_any, transform, transform_self,
    ArrayError, ArrayMut, ArrayRef, ElementKind, ErrorCategory, ErrorMode, OpCode, Operand,
    OperandMut, Options, Scalar,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn opts() -> Options {
    Options::new()
}

// ============================================================================
// Reduction Tests
// ============================================================================

/// Test the reference all-not-equal example.
#[test]
fn test_reduce_all_reference() {
    let data = [5i64; 20];
    assert_eq!(reduce_all(opcodes::NE, &data[..], 6i64, &opts()), Ok(true));
    assert_eq!(reduce_all(opcodes::NE, &data[..], 5i64, &opts()), Ok(false));
}

/// Test reductions in every call shape.
#[test]
fn test_reduce_shapes() {
    let a = [1u32, 4, 9];
    let b = [1u32, 5, 8];

    assert_eq!(reduce_any(opcodes::GT, &a[..], 8u32, &opts()), Ok(true));
    assert_eq!(reduce_any(opcodes::GT, 8u32, &a[..], &opts()), Ok(true));
    assert_eq!(reduce_all(opcodes::GE, 9u32, &a[..], &opts()), Ok(true));
    assert_eq!(reduce_any(opcodes::GT, &a[..], &b[..], &opts()), Ok(true));
    assert_eq!(reduce_all(opcodes::LE, &a[..], &b[..], &opts()), Ok(false));
}

/// Test reductions over empty buffers.
#[test]
fn test_reduce_empty() {
    let empty: [f64; 0] = [];
    assert_eq!(reduce_any(opcodes::EQ, &empty[..], 1.0f64, &opts()), Ok(false));
    assert_eq!(reduce_all(opcodes::EQ, &empty[..], 1.0f64, &opts()), Ok(true));
}

/// Test that reductions reject NaN and infinite scalars.
#[test]
fn test_reduce_rejects_non_finite_scalar() {
    let data = [1.0f32, 2.0];
    for scalar in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = reduce_any(opcodes::EQ, &data[..], scalar, &opts()).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::RangeError);
    }
}

/// Test that a predicate-flipping value past `maxlen` is never seen.
#[test]
fn test_reduce_maxlen_confinement() {
    let data = [1i16, 1, 1, -50];
    let limited = opts().maxlen(3);
    assert_eq!(reduce_all(opcodes::GT, &data[..], 0i16, &limited), Ok(true));
    assert_eq!(reduce_any(opcodes::LT, &data[..], 0i16, &limited), Ok(false));
    assert_eq!(reduce_any(opcodes::LT, &data[..], 0i16, &opts()), Ok(true));
}

/// Test that negative and zero `maxlen` mean the full length.
#[test]
fn test_reduce_non_positive_maxlen() {
    let data = [1i16, 1, 1, -50];
    for k in [0, -1, -100] {
        assert_eq!(
            reduce_any(opcodes::LT, &data[..], 0i16, &opts().maxlen(k)),
            Ok(true),
            "maxlen {k} should cover every element"
        );
    }
}

// ============================================================================
// Search Tests
// ============================================================================

/// Test the reference search example.
#[test]
fn test_find_indices_reference() {
    let data = [97i8, 97, 97, 98, 99, 101, 101, 102, 95, 103];
    let mut dest = [i64::MIN; 10];

    let count = find_indices(opcodes::EQ, &data[..], 97i8, &mut dest[..], &opts()).unwrap();

    assert_eq!(count, 3);
    assert_eq!(&dest[..3], &[0, 1, 2]);
    assert!(dest[3..].iter().all(|&d| d == i64::MIN));
}

/// Test that search is idempotent.
#[test]
fn test_find_indices_idempotent() {
    let data = [2.5f64, -1.0, 7.0, 2.5, 0.0];
    let mut first = [0i64; 5];
    let mut second = [0i64; 5];

    let n1 = find_indices(opcodes::GE, &data[..], 2.5f64, &mut first[..], &opts()).unwrap();
    let n2 = find_indices(opcodes::GE, &data[..], 2.5f64, &mut second[..], &opts()).unwrap();

    assert_eq!(n1, n2);
    assert_eq!(first, second);
    assert_eq!(&first[..n1], &[0, 2, 3]);
}

/// Test search with a length limit.
///
/// Verifies that the destination must still cover the whole input.
#[test]
fn test_find_indices_maxlen() {
    let data = [1u8, 0, 1, 0, 1];
    let mut dest = [-1i64; 5];

    let count = find_indices(opcodes::EQ, &data[..], 1u8, &mut dest[..], &opts().maxlen(3)).unwrap();
    assert_eq!(count, 2);
    assert_eq!(dest, [0, 2, -1, -1, -1]);

    let mut short = [0i64; 3];
    let err = find_indices(opcodes::EQ, &data[..], 1u8, &mut short[..], &opts().maxlen(3)).unwrap_err();
    assert_eq!(err, ArrayError::DestinationTooShort { got: 3, min: 5 });
    assert_eq!(err.category(), ErrorCategory::LengthError);
}

/// Test that search accepts NaN scalars.
#[test]
fn test_find_indices_nan_scalar() {
    let data = [1.0f32, f32::NAN, 3.0];
    let mut dest = [0i64; 3];

    let eq = find_indices(opcodes::EQ, &data[..], f32::NAN, &mut dest[..], &opts()).unwrap();
    assert_eq!(eq, 0);
    let ne = find_indices(opcodes::NE, &data[..], f32::NAN, &mut dest[..], &opts()).unwrap();
    assert_eq!(ne, 3);
}

/// Test search against a second buffer.
#[test]
fn test_find_indices_buffer_buffer() {
    let a = [1i32, 5, 3];
    let b = [2i32, 5, 1];
    let mut dest = [9i64; 4];

    let count = find_indices(opcodes::GE, &a[..], &b[..], &mut dest[..], &opts()).unwrap();

    assert_eq!(count, 2);
    assert_eq!(dest, [1, 2, 9, 9]);
}

/// Test first-match search.
#[test]
fn test_find_first() {
    let data = [3u64, 8, 13, 21];
    assert_eq!(find_first(opcodes::GT, &data[..], 10u64, &opts()), Ok(Some(2)));
    assert_eq!(find_first(opcodes::GT, &data[..], 10u64, &opts().maxlen(2)), Ok(None));
    assert_eq!(find_first(opcodes::EQ, &data[..], 4u64, &opts()), Ok(None));
}

// ============================================================================
// Transform Tests
// ============================================================================

/// Test a transform into a destination.
#[test]
fn test_transform_into_destination() {
    let a = [1.5f64, 2.5, 3.5];
    let b = [0.5f64, 0.5, 1.5];
    let mut dest = [0.0f64; 3];

    transform(
        opcodes::ADD,
        &a[..],
        &b[..],
        Some(ArrayMut::from(&mut dest[..])),
        &opts(),
    )
    .unwrap();

    assert_relative_eq!(dest[0], 2.0);
    assert_relative_eq!(dest[1], 3.0);
    assert_relative_eq!(dest[2], 5.0);
}

/// Test in-place transforms in both scalar positions.
#[test]
fn test_transform_in_place() {
    let mut a = [10i32, 20, 30];
    transform(opcodes::SUB, &mut a[..], 1i32, None, &opts()).unwrap();
    assert_eq!(a, [9, 19, 29]);

    transform(opcodes::SUB, 100i32, &mut a[..], None, &opts()).unwrap();
    assert_eq!(a, [91, 81, 71]);
}

/// Test in place with two buffers.
///
/// Verifies that results overwrite the first buffer.
#[test]
fn test_transform_in_place_two_buffers() {
    let mut a = [2u16, 3, 4];
    let b = [5u16, 6, 7];
    transform(opcodes::MUL, &mut a[..], &b[..], None, &opts()).unwrap();
    assert_eq!(a, [10, 18, 28]);
    assert_eq!(b, [5, 6, 7]);
}

/// Test that elements past `maxlen` in the destination are untouched.
#[test]
fn test_transform_maxlen_confinement() {
    let a = [1i8, 2, 3, 4];
    let mut dest = [-9i8; 4];

    transform(
        opcodes::MUL,
        &a[..],
        3i8,
        Some(ArrayMut::from(&mut dest[..])),
        &opts().maxlen(2),
    )
    .unwrap();

    assert_eq!(dest, [3, 6, -9, -9]);
}

/// Test Fmod with non-finite elements.
///
/// Verifies an arithmetic error in checked mode and NaN results for just
/// those elements in suppressed mode.
#[test]
fn test_transform_fmod_non_finite() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let a = [7.0f64, bad, -7.0];
        let mut dest = [0.0f64; 3];
        let err = transform(
            opcodes::FMOD,
            &a[..],
            4.0f64,
            Some(ArrayMut::from(&mut dest[..])),
            &opts(),
        )
        .unwrap_err();
        assert_eq!(err, ArrayError::Arithmetic { index: 1 });
        assert_eq!(err.category(), ErrorCategory::ArithmeticError);

        let mut dest = [0.0f64; 3];
        transform(
            opcodes::FMOD,
            &a[..],
            4.0f64,
            Some(ArrayMut::from(&mut dest[..])),
            &opts().suppress_errors(),
        )
        .unwrap();
        assert_relative_eq!(dest[0], 3.0);
        assert!(dest[1].is_nan());
        assert_relative_eq!(dest[2], -3.0);
    }
}

/// Test an infinite scalar in a checked transform.
///
/// Verifies that `fmod(x, inf) == x` and `x / inf == 0` complete without an
/// arithmetic error, while `fmod(inf, y)` still fails.
#[test]
fn test_transform_checked_infinite_scalar() {
    let mut data = [5.0f64, -7.5, 1.0];
    transform(opcodes::FMOD, &mut data[..], f64::INFINITY, None, &opts()).unwrap();
    assert_eq!(data, [5.0, -7.5, 1.0]);

    let mut data = [3.0f32, -2.0];
    transform(opcodes::DIV, &mut data[..], f32::INFINITY, None, &opts()).unwrap();
    assert_eq!(data, [0.0, 0.0]);

    let mut data = [2.0f64, 4.0];
    let err = transform(opcodes::FMOD, f64::INFINITY, &mut data[..], None, &opts()).unwrap_err();
    assert_eq!(err, ArrayError::Arithmetic { index: 0 });
    assert_eq!(data, [2.0, 4.0]);
}

/// Test combining a buffer with itself in place.
///
/// Verifies `A OP A` for every math operation and that `maxlen` limits the
/// writes.
#[test]
fn test_transform_self() {
    let mut a = [3i32, -4, 5, 7];
    transform_self(opcodes::ADD, &mut a[..], &opts()).unwrap();
    assert_eq!(a, [6, -8, 10, 14]);

    transform_self(opcodes::SUB, &mut a[..], &opts().maxlen(2)).unwrap();
    assert_eq!(a, [0, 0, 10, 14]);

    let mut b = [1.5f32, -2.0, 3.0];
    transform_self(opcodes::MUL, &mut b[..], &opts()).unwrap();
    assert_eq!(b, [2.25, 4.0, 9.0]);

    let mut c = [9u8, 4];
    transform_self(opcodes::DIV, &mut c[..], &opts()).unwrap();
    assert_eq!(c, [1, 1]);
    transform_self(opcodes::FMOD, &mut c[..], &opts()).unwrap();
    assert_eq!(c, [0, 0]);
}

/// Test the error paths of a self-combining transform.
///
/// Verifies the zero divisor stop, suppression, opcode family and empty
/// input checks.
#[test]
fn test_transform_self_errors() {
    let mut a = [2i16, 0, 3];
    let err = transform_self(opcodes::DIV, &mut a[..], &opts()).unwrap_err();
    assert_eq!(err, ArrayError::Arithmetic { index: 1 });
    assert_eq!(a, [1, 0, 3]);

    let mut f = [2.0f64, 0.0, 3.0];
    transform_self(opcodes::DIV, &mut f[..], &opts().suppress_errors()).unwrap();
    assert_eq!(f[0], 1.0);
    assert!(f[1].is_nan());
    assert_eq!(f[2], 1.0);

    let mut x = [1u32, 2];
    let err = transform_self(opcodes::EQ, &mut x[..], &opts()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidOperation);

    let mut empty: [u64; 0] = [];
    let err = transform_self(opcodes::ADD, &mut empty[..], &opts()).unwrap_err();
    assert_eq!(err, ArrayError::EmptyInput);
}

/// Test that integer overflow is an arithmetic error unless suppressed.
#[test]
fn test_transform_integer_overflow() {
    let mut a = [250u8, 5];
    let err = transform(opcodes::ADD, &mut a[..], 10u8, None, &opts()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::ArithmeticError);
    assert_eq!(a, [250, 5]);

    transform(opcodes::ADD, &mut a[..], 10u8, None, &opts().matherrors(true)).unwrap();
    assert_eq!(a, [4, 15]);
}

/// Test that an explicit `matherrors(false)` keeps checked mode.
#[test]
fn test_transform_matherrors_false() {
    let options = opts().matherrors(false);
    assert_eq!(options.error_mode(), ErrorMode::Checked);

    let mut a = [1i32, 0];
    let err = transform(opcodes::DIV, 1i32, &mut a[..], None, &options).unwrap_err();
    assert_eq!(err, ArrayError::Arithmetic { index: 1 });
}

/// Test transforms on empty or mismatched buffers.
#[test]
fn test_transform_length_errors() {
    let mut empty: [f32; 0] = [];
    let err = transform(opcodes::ADD, &mut empty[..], 1.0f32, None, &opts()).unwrap_err();
    assert_eq!(err, ArrayError::EmptyInput);

    let mut a = [1.0f32, 2.0];
    let b = [1.0f32];
    let err = transform(opcodes::ADD, &mut a[..], &b[..], None, &opts()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::LengthError);
}

/// Test that an in-place transform rejects a read-only target.
#[test]
fn test_transform_read_only_target() {
    let a = [1u32, 2];
    let err = transform(opcodes::ADD, &a[..], 1u32, None, &opts()).unwrap_err();
    assert_eq!(err, ArrayError::ReadOnlyBuffer);
    assert_eq!(err.category(), ErrorCategory::TypeKindMismatch);
}

// ============================================================================
// Options Tests
// ============================================================================

/// Test duplicate option detection.
#[test]
fn test_options_duplicate() {
    let data = [1u8];
    let options = opts().maxlen(1).maxlen(2);
    let err = reduce_any(opcodes::EQ, &data[..], 1u8, &options).unwrap_err();
    assert_eq!(err, ArrayError::DuplicateParameter { parameter: "maxlen" });

    let options = opts().suppress_errors().matherrors(false);
    let mut a = [1u8];
    let err = transform(opcodes::ADD, &mut a[..], 1u8, None, &options).unwrap_err();
    assert_eq!(
        err,
        ArrayError::DuplicateParameter {
            parameter: "suppress_errors"
        }
    );
}

/// Test that error suppression is rejected outside transform.
#[test]
fn test_options_suppress_unsupported() {
    let data = [1u8, 2];
    let mut dest = [0i64; 2];
    let suppress = opts().suppress_errors();

    let err = reduce_all(opcodes::EQ, &data[..], 1u8, &suppress).unwrap_err();
    assert_eq!(
        err,
        ArrayError::UnsupportedOption {
            operation: "reduce_all",
            option: "suppress_errors"
        }
    );
    assert_eq!(err.category(), ErrorCategory::TypeKindMismatch);

    let err = find_indices(opcodes::EQ, &data[..], 1u8, &mut dest[..], &suppress).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::TypeKindMismatch);

    let explicit_off = opts().matherrors(false);
    assert!(find_first(opcodes::EQ, &data[..], 1u8, &explicit_off).is_err());
}

// ============================================================================
// Error Ordering Tests
// ============================================================================

/// Test opcode argument errors.
///
/// Verifies that a wrongly typed opcode and an unknown opcode are different
/// categories.
#[test]
fn test_opcode_errors() {
    let data = [1i32];
    let err = reduce_any(OpCode::Other("float"), &data[..], 1i32, &opts()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::TypeKindMismatch);

    let err = reduce_any(42i64, &data[..], 1i32, &opts()).unwrap_err();
    assert_eq!(err, ArrayError::InvalidOperation(42));
    assert_eq!(err.category(), ErrorCategory::InvalidOperation);

    let err = reduce_any(opcodes::ADD, &data[..], 1i32, &opts()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidOperation);

    let mut a = [1i32];
    let err = transform(opcodes::EQ, &mut a[..], 1i32, None, &opts()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidOperation);
}

/// Test that the opcode is checked before anything else.
#[test]
fn test_opcode_checked_first() {
    let a = [1i32, 2];
    let b = [1u8];
    let err = reduce_any(99i64, &a[..], &b[..], &opts().maxlen(1).maxlen(1)).unwrap_err();
    assert_eq!(err, ArrayError::InvalidOperation(99));
}

/// Test that options are checked before buffer kinds.
#[test]
fn test_options_checked_before_kinds() {
    let a = [1i32, 2];
    let b = [1u8];
    let err = reduce_any(opcodes::EQ, &a[..], &b[..], &opts().suppress_errors()).unwrap_err();
    assert!(matches!(err, ArrayError::UnsupportedOption { .. }));
}

/// Test that buffer kinds are checked before lengths and scalars.
#[test]
fn test_kinds_checked_before_lengths() {
    let a = [1i32, 2];
    let b = [1u8];
    let err = reduce_any(opcodes::EQ, &a[..], &b[..], &opts()).unwrap_err();
    assert_eq!(
        err,
        ArrayError::KindMismatch {
            expected: ElementKind::I32,
            found: ElementKind::U8
        }
    );
}

/// Test scalar kind and range errors.
#[test]
fn test_scalar_errors() {
    let ints = [1i32, 2];
    let err = reduce_any(opcodes::EQ, &ints[..], 1.0f64, &opts()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::TypeKindMismatch);

    let err = reduce_any(opcodes::EQ, &ints[..], i64::MAX, &opts()).unwrap_err();
    assert_eq!(
        err,
        ArrayError::OutOfRange {
            kind: ElementKind::I32,
            value: Scalar::Int(i64::MAX as i128)
        }
    );
}

/// Test that two scalars are rejected.
#[test]
fn test_no_buffer_operand() {
    let err = reduce_any(opcodes::EQ, 1i32, 2i32, &opts()).unwrap_err();
    assert_eq!(err, ArrayError::NoBufferOperand);

    let err = transform(opcodes::ADD, 1i32, 2i32, None, &opts()).unwrap_err();
    assert_eq!(err, ArrayError::NoBufferOperand);
}

/// Test calls through dynamic views.
///
/// Verifies that the kind is taken from the view at run time.
#[test]
fn test_dynamic_views() {
    let data = [3u16, 1, 2];
    let view = ArrayRef::from(&data[..]);
    let rhs = Operand::Scalar(Scalar::Int(2));

    assert_eq!(reduce_any(opcodes::EQ, view, rhs, &opts()), Ok(true));

    let mut out = [0u16; 3];
    transform(
        opcodes::MUL,
        OperandMut::from(view),
        OperandMut::Scalar(Scalar::Int(2)),
        Some(ArrayMut::from(&mut out[..])),
        &opts(),
    )
    .unwrap();
    assert_eq!(out, [6, 2, 4]);
}

/// Test that error messages carry their context.
#[test]
fn test_error_display() {
    let err = ArrayError::DestinationTooShort { got: 2, min: 5 };
    let msg = err.to_string();
    assert!(msg.contains('2') && msg.contains('5'), "message: {msg}");

    let err: Box<dyn std::error::Error> = Box::new(ArrayError::EmptyInput);
    assert!(!err.to_string().is_empty());
}
