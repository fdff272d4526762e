//! Visitor pattern for AST nodes.
//!
//! Consumers override the `visit_*` methods they care about and delegate
//! the rest to the `walk_*` functions, which descend into child nodes in
//! the same order the tree printer uses.

use crate::ast::{Asgn, Block, Decl, Expr, FuncDef, Root, Stmt};

pub trait Visitor<'ast>: Sized {
    fn visit_root(&mut self, root: &'ast Root) {
        walk_root(self, root);
    }
    fn visit_decl(&mut self, decl: &'ast Decl) {
        walk_decl(self, decl);
    }
    fn visit_asgn(&mut self, asgn: &'ast Asgn) {
        walk_asgn(self, asgn);
    }
    fn visit_func_def(&mut self, func: &'ast FuncDef) {
        walk_func_def(self, func);
    }
    fn visit_block(&mut self, block: &'ast Block) {
        walk_block(self, block);
    }
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }
    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }
}

pub fn walk_root<'ast>(visitor: &mut impl Visitor<'ast>, root: &'ast Root) {
    for decl in &root.decls {
        visitor.visit_decl(decl);
    }
    for asgn in &root.asgns {
        visitor.visit_asgn(asgn);
    }
    for func in &root.funcs {
        visitor.visit_func_def(func);
    }
}

pub fn walk_decl<'ast>(_visitor: &mut impl Visitor<'ast>, _decl: &'ast Decl) {
    // Declarations have no child nodes.
}

pub fn walk_asgn<'ast>(visitor: &mut impl Visitor<'ast>, asgn: &'ast Asgn) {
    visitor.visit_expr(&asgn.rhs);
}

pub fn walk_func_def<'ast>(visitor: &mut impl Visitor<'ast>, func: &'ast FuncDef) {
    visitor.visit_block(&func.body);
}

pub fn walk_block<'ast>(visitor: &mut impl Visitor<'ast>, block: &'ast Block) {
    for stmt in &block.stmts {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_stmt<'ast>(visitor: &mut impl Visitor<'ast>, stmt: &'ast Stmt) {
    match stmt {
        Stmt::Decl(decl) => visitor.visit_decl(decl),
        Stmt::Asgn(asgn) => visitor.visit_asgn(asgn),
        Stmt::ExprStmt(expr) => visitor.visit_expr(expr),
        Stmt::Block(block) => visitor.visit_block(block),
        Stmt::If {
            cond,
            if_body,
            else_body,
        } => {
            visitor.visit_expr(cond);
            visitor.visit_block(if_body);
            visitor.visit_block(else_body);
        }
        Stmt::While { cond, body } => {
            visitor.visit_expr(cond);
            visitor.visit_block(body);
        }
        Stmt::Return(expr) => {
            if let Some(expr) = expr {
                visitor.visit_expr(expr);
            }
        }
        Stmt::Empty => {}
    }
}

pub fn walk_expr<'ast>(visitor: &mut impl Visitor<'ast>, expr: &'ast Expr) {
    match expr {
        Expr::Identifier(_) => {}
        Expr::IntLit(_) => {}
        Expr::FloatLit(_) => {}
        Expr::BoolLit(_) => {}
        Expr::Relational { lhs, op: _, rhs } => {
            visitor.visit_expr(lhs);
            visitor.visit_expr(rhs);
        }
        Expr::Binary { lhs, op: _, rhs } => {
            visitor.visit_expr(lhs);
            visitor.visit_expr(rhs);
        }
        Expr::Unary { op: _, arg } => visitor.visit_expr(arg),
        Expr::Call { name: _, param } => {
            if let Some(param) = param {
                visitor.visit_expr(param);
            }
        }
    }
}
