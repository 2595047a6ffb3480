use cool_core::Line;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub classes: Vec<ClassDefine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDefine {
    pub name: String,
    pub inherits: Option<String>,
    pub features: Vec<Feature>,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Feature {
    Method(Method),
    Attribute(Attribute),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub formals: Vec<Formal>,
    pub return_type: String,
    pub body: Expr,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub declared_type: String,
    pub init: Option<Expr>,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formal {
    pub name: String,
    pub declared_type: String,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetBinding {
    pub name: String,
    pub declared_type: String,
    pub init: Option<Expr>,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseBranch {
    pub name: String,
    pub declared_type: String,
    pub body: Expr,
    pub line: Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddOp {
    Plus,
    Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MulOp {
    Times,
    Divide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    LessThan,
    LessEq,
    Equal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assign {
    pub name: String,
    pub value: Box<Expr>,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct If {
    pub condition: Box<Expr>,
    pub then_branch: Box<Expr>,
    pub else_branch: Box<Expr>,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct While {
    pub condition: Box<Expr>,
    pub body: Box<Expr>,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub body: Vec<Expr>,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Let {
    pub bindings: Vec<LetBinding>,
    pub body: Box<Expr>,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub subject: Box<Expr>,
    pub branches: Vec<CaseBranch>,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct New {
    pub class_name: String,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsVoid {
    pub expr: Box<Expr>,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddSub {
    pub op: AddOp,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MulDiv {
    pub op: MulOp,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compare {
    pub op: CompareOp,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Negation {
    pub expr: Box<Expr>,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Not {
    pub expr: Box<Expr>,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispatch {
    pub receiver: Box<Expr>,
    pub method: String,
    pub args: Vec<Expr>,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImplicitDispatch {
    pub method: String,
    pub args: Vec<Expr>,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paren {
    pub expr: Box<Expr>,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Id {
    pub name: String,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntLit {
    pub value: i64,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLit {
    pub value: String,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Assign(Assign),
    If(If),
    While(While),
    Block(Block),
    Let(Let),
    Case(Case),
    New(New),
    IsVoid(IsVoid),
    AddSub(AddSub),
    MulDiv(MulDiv),
    Compare(Compare),
    Negation(Negation),
    Not(Not),
    Dispatch(Dispatch),
    ImplicitDispatch(ImplicitDispatch),
    Paren(Paren),
    Id(Id),
    Int(IntLit),
    String(StringLit),
    True(Line),
    False(Line),
}

impl Expr {
    pub fn line(&self) -> Line {
        match self {
            Expr::Assign(assign) => assign.line,
            Expr::If(if_expr) => if_expr.line,
            Expr::While(while_expr) => while_expr.line,
            Expr::Block(block) => block.line,
            Expr::Let(let_expr) => let_expr.line,
            Expr::Case(case) => case.line,
            Expr::New(new) => new.line,
            Expr::IsVoid(is_void) => is_void.line,
            Expr::AddSub(add_sub) => add_sub.line,
            Expr::MulDiv(mul_div) => mul_div.line,
            Expr::Compare(compare) => compare.line,
            Expr::Negation(negation) => negation.line,
            Expr::Not(not) => not.line,
            Expr::Dispatch(dispatch) => dispatch.line,
            Expr::ImplicitDispatch(dispatch) => dispatch.line,
            Expr::Paren(paren) => paren.line,
            Expr::Id(id) => id.line,
            Expr::Int(int) => int.line,
            Expr::String(string) => string.line,
            Expr::True(line) => *line,
            Expr::False(line) => *line,
        }
    }
}
