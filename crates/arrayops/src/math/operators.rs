//! Operator table: opcodes, comparison rules and arithmetic rules.
//!
//! ## Purpose
//!
//! This module maps the small closed set of integer opcodes a caller passes
//! to the comparison or arithmetic rule each one selects.
//!
//! ## Design notes
//!
//! * **Closed enumeration**: Opcodes are exposed as named constants in
//!   [`opcodes`]; the table is a `static` array, initialised at compile time.
//! * **Distinct failures**: A non-integer opcode argument is a type mismatch;
//!   an integer outside the table is an invalid operation.
//! * **Native semantics**: Comparisons use `PartialOrd`, so NaN compares
//!   unequal to everything, including itself.
//!
//! ## Key concepts
//!
//! * **CompareOp**: predicates used by reductions and search.
//! * **MathOp**: binary arithmetic used by transforms.
//! * **ErrorMode**: whether arithmetic domain errors raise or yield NaN.
//!
//! ## Invariants
//!
//! * Every opcode in the table is unique and round-trips through
//!   [`Operation::from_code`] / [`Operation::code`].

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::primitives::errors::ArrayError;

// ============================================================================
// Opcode Constants
// ============================================================================

/// Named opcode constants.
pub mod opcodes {
    /// `a == b`
    pub const EQ: i64 = 1;
    /// `a != b`
    pub const NE: i64 = 2;
    /// `a < b`
    pub const LT: i64 = 3;
    /// `a <= b`
    pub const LE: i64 = 4;
    /// `a > b`
    pub const GT: i64 = 5;
    /// `a >= b`
    pub const GE: i64 = 6;
    /// `a + b`
    pub const ADD: i64 = 7;
    /// `a - b`
    pub const SUB: i64 = 8;
    /// `a / b` (floor division for integer kinds)
    pub const DIV: i64 = 9;
    /// `a * b`
    pub const MUL: i64 = 10;
    /// Remainder with the sign of the dividend.
    pub const FMOD: i64 = 11;
}

// ============================================================================
// Comparison Operators
// ============================================================================

/// Comparison rule used by reductions and search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Less than.
    Lt,
    /// Less than or equal.
    Le,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Ge,
}

impl CompareOp {
    /// Evaluate `lhs OP rhs`.
    #[inline(always)]
    pub fn eval<T: PartialOrd>(self, lhs: T, rhs: T) -> bool {
        match self {
            CompareOp::Eq => lhs == rhs,
            CompareOp::Ne => lhs != rhs,
            CompareOp::Lt => lhs < rhs,
            CompareOp::Le => lhs <= rhs,
            CompareOp::Gt => lhs > rhs,
            CompareOp::Ge => lhs >= rhs,
        }
    }

    /// Symbol of the operator.
    pub const fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }
}

// ============================================================================
// Arithmetic Operators
// ============================================================================

/// Arithmetic rule used by transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division; floor division for integer kinds.
    Div,
    /// Remainder with the sign of the dividend (C `fmod`).
    Fmod,
}

impl MathOp {
    /// Name of the operator.
    pub const fn name(&self) -> &'static str {
        match self {
            MathOp::Add => "add",
            MathOp::Sub => "sub",
            MathOp::Mul => "mul",
            MathOp::Div => "div",
            MathOp::Fmod => "fmod",
        }
    }
}

/// Per-element domain-error policy of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Stop at the first element that fails.
    #[default]
    Checked,

    /// Compute every element; float domain errors yield NaN and integer
    /// overflow wraps.
    Suppressed,
}

// ============================================================================
// Operation Table
// ============================================================================

/// Any operation selectable by opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// A comparison predicate.
    Compare(CompareOp),
    /// A binary arithmetic rule.
    Math(MathOp),
}

/// One row of the operator table.
struct OperationEntry {
    code: i64,
    name: &'static str,
    operation: Operation,
}

static OPERATION_TABLE: [OperationEntry; 11] = [
    OperationEntry { code: opcodes::EQ, name: "eq", operation: Operation::Compare(CompareOp::Eq) },
    OperationEntry { code: opcodes::NE, name: "ne", operation: Operation::Compare(CompareOp::Ne) },
    OperationEntry { code: opcodes::LT, name: "lt", operation: Operation::Compare(CompareOp::Lt) },
    OperationEntry { code: opcodes::LE, name: "le", operation: Operation::Compare(CompareOp::Le) },
    OperationEntry { code: opcodes::GT, name: "gt", operation: Operation::Compare(CompareOp::Gt) },
    OperationEntry { code: opcodes::GE, name: "ge", operation: Operation::Compare(CompareOp::Ge) },
    OperationEntry { code: opcodes::ADD, name: "add", operation: Operation::Math(MathOp::Add) },
    OperationEntry { code: opcodes::SUB, name: "sub", operation: Operation::Math(MathOp::Sub) },
    OperationEntry { code: opcodes::DIV, name: "div", operation: Operation::Math(MathOp::Div) },
    OperationEntry { code: opcodes::MUL, name: "mul", operation: Operation::Math(MathOp::Mul) },
    OperationEntry { code: opcodes::FMOD, name: "fmod", operation: Operation::Math(MathOp::Fmod) },
];

impl Operation {
    /// Look up an opcode in the operator table.
    pub fn from_code(code: i64) -> Result<Self, ArrayError> {
        OPERATION_TABLE
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.operation)
            .ok_or(ArrayError::InvalidOperation(code))
    }

    /// Opcode of the operation.
    pub const fn code(&self) -> i64 {
        match self {
            Operation::Compare(CompareOp::Eq) => opcodes::EQ,
            Operation::Compare(CompareOp::Ne) => opcodes::NE,
            Operation::Compare(CompareOp::Lt) => opcodes::LT,
            Operation::Compare(CompareOp::Le) => opcodes::LE,
            Operation::Compare(CompareOp::Gt) => opcodes::GT,
            Operation::Compare(CompareOp::Ge) => opcodes::GE,
            Operation::Math(MathOp::Add) => opcodes::ADD,
            Operation::Math(MathOp::Sub) => opcodes::SUB,
            Operation::Math(MathOp::Div) => opcodes::DIV,
            Operation::Math(MathOp::Mul) => opcodes::MUL,
            Operation::Math(MathOp::Fmod) => opcodes::FMOD,
        }
    }

    /// Name of the operation.
    pub fn name(&self) -> &'static str {
        let code = self.code();
        OPERATION_TABLE
            .iter()
            .find(|entry| entry.code == code)
            .map_or("unknown", |entry| entry.name)
    }

    /// The comparison rule, or an error naming `operation` for math opcodes.
    pub fn as_compare(&self, operation: &'static str) -> Result<CompareOp, ArrayError> {
        match self {
            Operation::Compare(op) => Ok(*op),
            Operation::Math(_) => Err(ArrayError::WrongOperationFamily {
                operation,
                opcode: self.code(),
            }),
        }
    }

    /// The arithmetic rule, or an error naming `operation` for comparisons.
    pub fn as_math(&self, operation: &'static str) -> Result<MathOp, ArrayError> {
        match self {
            Operation::Math(op) => Ok(*op),
            Operation::Compare(_) => Err(ArrayError::WrongOperationFamily {
                operation,
                opcode: self.code(),
            }),
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl From<CompareOp> for Operation {
    fn from(op: CompareOp) -> Self {
        Operation::Compare(op)
    }
}

impl From<MathOp> for Operation {
    fn from(op: MathOp) -> Self {
        Operation::Math(op)
    }
}

// ============================================================================
// Opcode Argument
// ============================================================================

/// The raw opcode argument as received from a caller.
///
/// A binding layer passes whatever value it was given: an integer, or the
/// name of the unexpected type it received instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    /// An integer opcode, valid or not.
    Int(i64),
    /// A value of another type, named by its type.
    Other(&'static str),
}

impl OpCode {
    /// Resolve the argument to an operation.
    ///
    /// Non-integer arguments fail with a type mismatch before the table is
    /// consulted; unknown integers fail as invalid operations.
    pub fn resolve(self) -> Result<Operation, ArrayError> {
        match self {
            OpCode::Int(code) => Operation::from_code(code),
            OpCode::Other(type_name) => Err(ArrayError::OpcodeType(type_name)),
        }
    }
}

impl From<i64> for OpCode {
    fn from(code: i64) -> Self {
        OpCode::Int(code)
    }
}

impl From<i32> for OpCode {
    fn from(code: i32) -> Self {
        OpCode::Int(code as i64)
    }
}

impl From<Operation> for OpCode {
    fn from(op: Operation) -> Self {
        OpCode::Int(op.code())
    }
}

impl From<CompareOp> for OpCode {
    fn from(op: CompareOp) -> Self {
        Operation::Compare(op).into()
    }
}

impl From<MathOp> for OpCode {
    fn from(op: MathOp) -> Self {
        Operation::Math(op).into()
    }
}
