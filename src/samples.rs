use crate::ast::BinOp::*;
use crate::ast::Expr::{Const, Id, If, Input, Prim1, Prim2};
use crate::ast::MonOp::{Neg, Not};
use crate::ast::Value::{Bool, Int};
use crate::ast::{Expr, Program, Stmt};

pub fn all() -> Vec<(&'static str, Program)> {
    vec![
        ("counter", counter()),
        ("abs", abs()),
        ("countdown", countdown()),
        ("compare", compare()),
    ]
}

pub fn find(name: &str) -> Option<Program> {
    all().into_iter()
        .find(|(sample, _)| *sample == name)
        .map(|(_, program)| program)
}

fn var(name: &str) -> Box<Expr> {
    Box::new(Id(name.to_string()))
}

fn num(n: i64) -> Box<Expr> {
    Box::new(Const(Int(n)))
}

// x = 1
// while (x < 10):
//     print(x)
//     x = (x + 1)
fn counter() -> Program {
    Program {
        stmts: vec![
            Stmt::Assign("x".to_string(), Const(Int(1))),
            Stmt::While(
                Prim2(Less, var("x"), num(10)),
                vec![
                    Stmt::Print(Id("x".to_string())),
                    Stmt::Assign("x".to_string(), Prim2(Plus, var("x"), num(1))),
                ],
            ),
        ],
    }
}

// n = input_int()
// print((- n if (n < 0) else n))
fn abs() -> Program {
    Program {
        stmts: vec![
            Stmt::Assign("n".to_string(), Input),
            Stmt::Print(If(
                Box::new(Prim2(Less, var("n"), num(0))),
                Box::new(Prim1(Neg, var("n"))),
                var("n"),
            )),
        ],
    }
}

// done = False
// n = input_int()
// while not done:
//     print(n)
//     if (n <= 0):
//         done = True
//     else:
//         n = (n - 1)
// input_int()
// a = input_int()
// b = input_int()
// print((a == b))
// print((a != b))
// print((a > b))
// print((a >= b))
fn compare() -> Program {
    Program {
        stmts: vec![
            // the first read is a header value we discard
            Stmt::Expr(Input),
            Stmt::Assign("a".to_string(), Input),
            Stmt::Assign("b".to_string(), Input),
            Stmt::Print(Prim2(Equal, var("a"), var("b"))),
            Stmt::Print(Prim2(NotEqual, var("a"), var("b"))),
            Stmt::Print(Prim2(Greater, var("a"), var("b"))),
            Stmt::Print(Prim2(GreaterEq, var("a"), var("b"))),
        ],
    }
}

fn countdown() -> Program {
    Program {
        stmts: vec![
            Stmt::Assign("done".to_string(), Const(Bool(false))),
            Stmt::Assign("n".to_string(), Input),
            Stmt::While(
                Prim1(Not, var("done")),
                vec![
                    Stmt::Print(Id("n".to_string())),
                    Stmt::If(
                        Prim2(LessEq, var("n"), num(0)),
                        vec![Stmt::Assign("done".to_string(), Const(Bool(true)))],
                        vec![Stmt::Assign(
                            "n".to_string(),
                            Prim2(Minus, var("n"), num(1)),
                        )],
                    ),
                ],
            ),
        ],
    }
}
