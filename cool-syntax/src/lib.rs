pub mod ast;

pub use ast::{
    AddOp, AddSub, Assign, Attribute, Block, Case, CaseBranch, ClassDefine, Compare, CompareOp,
    Dispatch, Expr, Feature, Formal, Id, If, ImplicitDispatch, IntLit, IsVoid, Let, LetBinding,
    Method, MulDiv, MulOp, Negation, New, Not, Paren, Program, StringLit, While,
};
