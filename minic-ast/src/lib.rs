//! AST representation for miniC.
//!
//! The parser produces this tree, and later passes (type checking, code
//! generation) consume it. Nodes are immutable once constructed; passes
//! that need to attach information should keep a side table keyed by node
//! identity instead of extending the node definitions.

pub mod ast;
pub mod print;
pub mod visitor;

pub use ast::{Asgn, BinOp, Block, DataType, Decl, Expr, FuncDef, RelOp, Root, Stmt, UnOp};
