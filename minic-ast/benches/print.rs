use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use minic_ast::ast::{Asgn, BinOp, Block, Expr, Stmt};

/// Builds `((1 + 1) + 1) + ...` nested `levels` deep.
fn deep_expr(levels: usize) -> Expr {
    let mut expr = Expr::IntLit(1);
    for _i in 0..levels {
        expr = Expr::Binary {
            lhs: Box::new(expr),
            op: BinOp::Add,
            rhs: Box::new(Expr::IntLit(1)),
        };
    }
    expr
}

/// Builds a flat block of `len` assignments.
fn wide_block(len: usize) -> Block {
    let mut stmts = Vec::with_capacity(len);
    for i in 0..len {
        stmts.push(Stmt::Asgn(Asgn::new("a", Expr::IntLit(i as i32))));
    }
    Block::new(stmts)
}

fn deep_expr_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep-expr");

    let expr = deep_expr(500);
    group.throughput(Throughput::Bytes(expr.to_string().len() as u64));
    group.bench_function("deep-expr", |b| b.iter(|| expr.to_string()));
}

fn wide_block_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide-block");

    let block = wide_block(1000);
    group.throughput(Throughput::Bytes(block.to_string().len() as u64));
    group.bench_function("wide-block", |b| b.iter(|| block.to_string()));
}

criterion_group!(benches, deep_expr_bench, wide_block_bench);
criterion_main!(benches);
