//! Tree printer for AST nodes.
//!
//! Renders a node and its children as an indented, line-oriented dump.
//! The parser's test suite compares this output against golden files, so
//! the wording and field order of every line are a stable contract.

use crate::ast::{Asgn, BinOp, Block, DataType, Decl, Expr, FuncDef, RelOp, Root, Stmt, UnOp};
use std::fmt::{self, Write};

/// Indent marker, repeated once per nesting level.
const INDENT_STR: &str = "|   ";

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RelOp::Lt => "LT",
            RelOp::Gt => "GT",
            RelOp::Leq => "LEQ",
            RelOp::Geq => "GEQ",
            RelOp::Eq => "EQ",
            RelOp::Neq => "NEQ",
        })
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BinOp::Add => "ADD",
            BinOp::Sub => "SUB",
            BinOp::Div => "DIV",
            BinOp::Mul => "MUL",
        })
    }
}

impl fmt::Display for UnOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnOp::Pos => "POS",
            UnOp::Neg => "NEG",
        })
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DataType::Float => "FLOAT_T",
            DataType::Int => "INT_T",
            DataType::Void => "VOID_T",
            DataType::Bool => "BOOL_T",
        })
    }
}

fn indent(f: &mut impl Write, depth: usize) -> fmt::Result {
    for _i in 0..depth {
        f.write_str(INDENT_STR)?;
    }
    Ok(())
}

/// Writes `root` at the given `depth`.
///
/// The `Declarations:`, `Assignments:` and `Functions:` sections are only
/// emitted if the corresponding sequence is non-empty.
pub fn write_root(f: &mut impl Write, root: &Root, depth: usize) -> fmt::Result {
    indent(f, depth)?;
    writeln!(f, "Root.")?;

    if !root.decls.is_empty() {
        indent(f, depth)?;
        writeln!(f, "Declarations:")?;
        for decl in &root.decls {
            write_decl(f, decl, depth + 1)?;
        }
    }

    if !root.asgns.is_empty() {
        indent(f, depth)?;
        writeln!(f, "Assignments:")?;
        for asgn in &root.asgns {
            write_asgn(f, asgn, depth + 1)?;
        }
    }

    if !root.funcs.is_empty() {
        indent(f, depth)?;
        writeln!(f, "Functions:")?;
        for func in &root.funcs {
            write_func_def(f, func, depth + 1)?;
        }
    }

    Ok(())
}

/// Writes `decl` at the given `depth`.
pub fn write_decl(f: &mut impl Write, decl: &Decl, depth: usize) -> fmt::Result {
    indent(f, depth)?;
    match decl {
        Decl::Var {
            is_extern,
            data_type,
            name,
        } => writeln!(
            f,
            "VarDecl. {}{} {}",
            if *is_extern { "extern " } else { "" },
            data_type,
            name
        ),
        Decl::Func {
            is_extern,
            return_type,
            name,
            param_type,
        } => writeln!(
            f,
            "FuncDecl. {}{} {}({})",
            if *is_extern { "extern " } else { "" },
            return_type,
            name,
            param_type
        ),
    }
}

/// Writes `func` at the given `depth`, followed by its body.
pub fn write_func_def(f: &mut impl Write, func: &FuncDef, depth: usize) -> fmt::Result {
    indent(f, depth)?;
    writeln!(
        f,
        "FuncDef. {} {}({} {})",
        func.return_type, func.name, func.param_type, func.param_name
    )?;
    write_block(f, &func.body, depth + 1)
}

/// Writes `asgn` at the given `depth`, followed by its right-hand side.
pub fn write_asgn(f: &mut impl Write, asgn: &Asgn, depth: usize) -> fmt::Result {
    indent(f, depth)?;
    writeln!(f, "Asgn. {} =", asgn.lhs)?;
    write_expr(f, &asgn.rhs, depth + 1)
}

/// Writes `block` at the given `depth`, followed by its statements.
pub fn write_block(f: &mut impl Write, block: &Block, depth: usize) -> fmt::Result {
    indent(f, depth)?;
    writeln!(f, "Block.")?;
    for stmt in &block.stmts {
        write_stmt(f, stmt, depth + 1)?;
    }
    Ok(())
}

/// Writes `stmt` at the given `depth`.
pub fn write_stmt(f: &mut impl Write, stmt: &Stmt, depth: usize) -> fmt::Result {
    match stmt {
        Stmt::Decl(decl) => write_decl(f, decl, depth),
        Stmt::Asgn(asgn) => write_asgn(f, asgn, depth),
        Stmt::ExprStmt(expr) => write_expr(f, expr, depth),
        Stmt::Block(block) => write_block(f, block, depth),
        Stmt::If {
            cond,
            if_body,
            else_body,
        } => {
            indent(f, depth)?;
            writeln!(f, "If.")?;
            indent(f, depth)?;
            writeln!(f, "(If) condition =")?;
            write_expr(f, cond, depth + 1)?;
            indent(f, depth)?;
            writeln!(f, "(If) if_body =")?;
            write_block(f, if_body, depth + 1)?;
            indent(f, depth)?;
            writeln!(f, "(If) else_body =")?;
            write_block(f, else_body, depth + 1)
        }
        Stmt::While { cond, body } => {
            indent(f, depth)?;
            writeln!(f, "While.")?;
            indent(f, depth)?;
            writeln!(f, "(While) condition =")?;
            write_expr(f, cond, depth + 1)?;
            indent(f, depth)?;
            writeln!(f, "(While) body =")?;
            write_block(f, body, depth + 1)
        }
        Stmt::Return(expr) => {
            indent(f, depth)?;
            match expr {
                Some(expr) => {
                    writeln!(f, "Ret. expression =")?;
                    write_expr(f, expr, depth + 1)
                }
                None => writeln!(f, "Ret."),
            }
        }
        Stmt::Empty => {
            indent(f, depth)?;
            writeln!(f, "EmptyStmt.")
        }
    }
}

/// Writes `expr` at the given `depth`.
pub fn write_expr(f: &mut impl Write, expr: &Expr, depth: usize) -> fmt::Result {
    match expr {
        Expr::Identifier(name) => {
            indent(f, depth)?;
            writeln!(f, "Var. {}", name)
        }
        Expr::IntLit(value) => {
            indent(f, depth)?;
            writeln!(f, "IntLiteral. {}", value)
        }
        Expr::FloatLit(value) => {
            indent(f, depth)?;
            writeln!(f, "FloatLiteral. {}", value)
        }
        Expr::BoolLit(value) => {
            indent(f, depth)?;
            writeln!(f, "BoolLiteral. {}", if *value { "True" } else { "False" })
        }
        Expr::Relational { lhs, op, rhs } => {
            indent(f, depth)?;
            writeln!(f, "RExpr. {}", op)?;
            indent(f, depth)?;
            writeln!(f, "(RExpr) LHS =")?;
            write_expr(f, lhs, depth + 1)?;
            indent(f, depth)?;
            writeln!(f, "(RExpr) RHS =")?;
            write_expr(f, rhs, depth + 1)
        }
        Expr::Binary { lhs, op, rhs } => {
            indent(f, depth)?;
            writeln!(f, "BExpr. {}", op)?;
            indent(f, depth)?;
            writeln!(f, "(BExpr) LHS =")?;
            write_expr(f, lhs, depth + 1)?;
            indent(f, depth)?;
            writeln!(f, "(BExpr) RHS =")?;
            write_expr(f, rhs, depth + 1)
        }
        Expr::Unary { op, arg } => {
            indent(f, depth)?;
            writeln!(f, "UExpr. {}, expression =", op)?;
            write_expr(f, arg, depth + 1)
        }
        Expr::Call { name, param } => {
            indent(f, depth)?;
            match param {
                Some(param) => {
                    writeln!(f, "Call. {}, parameter =", name)?;
                    write_expr(f, param, depth + 1)
                }
                None => writeln!(f, "Call. {}", name),
            }
        }
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_root(f, self, 0)
    }
}

impl fmt::Display for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_decl(f, self, 0)
    }
}

impl fmt::Display for FuncDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_func_def(f, self, 0)
    }
}

impl fmt::Display for Asgn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_asgn(f, self, 0)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_block(f, self, 0)
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_stmt(f, self, 0)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self, 0)
    }
}
