use crate::ast::{Expr, Program, Stmt};

const INDENT: &str = "    ";

pub fn pretty(program: &Program) -> String {
    pretty_stmts(&program.stmts)
}

pub fn pretty_stmts(stmts: &[Stmt]) -> String {
    stmts
        .iter()
        .map(pretty_stmt)
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn pretty_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Expr(e) => pretty_expr(e),
        Stmt::Assign(x, e) => format!("{} = {}", x, pretty_expr(e)),
        Stmt::Print(e) => format!("print({})", pretty_expr(e)),
        Stmt::If(test, body, orelse) => format!(
            "if {}:\n{}\nelse:\n{}",
            pretty_expr(test),
            indent(&pretty_stmts(body)),
            indent(&pretty_stmts(orelse))
        ),
        Stmt::While(test, body) => format!(
            "while {}:\n{}",
            pretty_expr(test),
            indent(&pretty_stmts(body))
        ),
    }
}

pub fn pretty_expr(expr: &Expr) -> String {
    match expr {
        Expr::Id(x) => x.clone(),
        Expr::Const(v) => v.to_source(),
        // unary operands are deliberately left bare, e.g. `- 5`
        Expr::Prim1(op, e) => format!("{} {}", op.to_source(), pretty_expr(e)),
        // binaries are always fully parenthesized, so no precedence table is needed
        Expr::Prim2(op, left, right) => format!(
            "({} {} {})",
            pretty_expr(left),
            op.to_source(),
            pretty_expr(right)
        ),
        Expr::Input => "input_int()".to_string(),
        Expr::If(test, body, orelse) => format!(
            "({} if {} else {})",
            pretty_expr(body),
            pretty_expr(test),
            pretty_expr(orelse)
        ),
    }
}

// Per-line, so an empty block still shows up as one indented empty line.
pub fn indent(s: &str) -> String {
    s.split('\n')
        .map(|line| format!("{}{}", INDENT, line))
        .collect::<Vec<String>>()
        .join("\n")
}
