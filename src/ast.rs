#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Value {
    Int(i64),
    Bool(bool),
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum MonOp {
    Neg,
    Not,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum BinOp {
    Plus,
    Minus,
    Equal,
    NotEqual,
    LessEq,
    Less,
    Greater,
    GreaterEq,
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Expr {
    Const(Value),
    Id(String),
    Prim1(MonOp, Box<Expr>),
    Prim2(BinOp, Box<Expr>, Box<Expr>),
    Input,
    If(Box<Expr>, Box<Expr>, Box<Expr>),
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Stmt {
    Expr(Expr),
    Print(Expr),
    Assign(String, Expr),
    If(Expr, Vec<Stmt>, Vec<Stmt>),
    While(Expr, Vec<Stmt>),
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

impl Value {
    pub fn to_source(&self) -> String {
        match self {
            Value::Int(n) => n.to_string(),
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
        }
    }
}

impl MonOp {
    pub fn to_source(&self) -> &'static str {
        match self {
            MonOp::Neg => "-",
            MonOp::Not => "not",
        }
    }
}

impl BinOp {
    pub fn to_source(&self) -> &'static str {
        match self {
            BinOp::Plus => "+",
            BinOp::Minus => "-",
            BinOp::Equal => "==",
            BinOp::NotEqual => "!=",
            BinOp::LessEq => "<=",
            BinOp::Less => "<",
            BinOp::Greater => ">",
            BinOp::GreaterEq => ">=",
        }
    }
}
