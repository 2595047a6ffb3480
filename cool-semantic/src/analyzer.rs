use cool_core::Line;
use cool_syntax::{
    Assign, Attribute, Case, ClassDefine, Dispatch, Expr, Feature, Id, If, ImplicitDispatch, Let,
    Method, Program, While,
};

use crate::class_table::ClassTable;
use crate::diagnostics::Diagnostics;
use crate::symbol_table::{Symbol, SymbolKind, SymbolTable, TypeName};

const SELF: &str = "self";

#[derive(Debug)]
pub struct SemanticAnalyzer {
    symbols: SymbolTable,
    classes: ClassTable,
    diagnostics: Diagnostics,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        let mut analyzer = Self {
            symbols: SymbolTable::new(),
            classes: ClassTable::new(),
            diagnostics: Diagnostics::default(),
        };

        // built-in classes resolve like any other symbol, so they live in the
        // root scope as well as in the class table
        for builtin in TypeName::builtins() {
            analyzer.symbols.declare(Symbol::builtin(builtin));
        }

        analyzer
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn analyze(&mut self, program: &Program) -> Diagnostics {
        for class in &program.classes {
            self.register_class(class);
        }

        // duplicate-named classes are not registered, but their bodies are
        // still checked
        for class in &program.classes {
            self.analyze_class(class);
        }

        std::mem::take(&mut self.diagnostics)
    }

    fn register_class(&mut self, class: &ClassDefine) {
        if self.classes.is_defined(&class.name) {
            self.diagnostics
                .error(class.line, format!("Class {} is already defined.", class.name));
            return;
        }

        let symbol = Symbol::new(
            class.name.clone(),
            TypeName::from(class.name.as_str()),
            SymbolKind::Class,
        );
        self.classes.define(symbol.clone());
        self.symbols.declare(symbol);
    }

    fn analyze_class(&mut self, class: &ClassDefine) {
        self.symbols.push_scope();

        let class_type = TypeName::from(class.name.as_str());
        self.symbols
            .declare(Symbol::new(SELF, class_type, SymbolKind::Variable));

        for feature in &class.features {
            self.analyze_feature(feature);
        }

        self.symbols.pop_scope();
    }

    fn analyze_feature(&mut self, feature: &Feature) {
        match feature {
            Feature::Method(method) => self.analyze_method(method),
            Feature::Attribute(attribute) => self.analyze_attribute(attribute),
        }
    }

    fn analyze_method(&mut self, method: &Method) {
        // the method symbol goes into the class scope before the parameter
        // scope opens, so recursive calls resolve
        let return_type = TypeName::from(method.return_type.as_str());
        self.symbols
            .declare(Symbol::new(method.name.clone(), return_type, SymbolKind::Method));

        self.symbols.push_scope();
        for formal in &method.formals {
            let declared = TypeName::from(formal.declared_type.as_str());
            self.symbols
                .declare(Symbol::new(formal.name.clone(), declared, SymbolKind::Variable));
        }

        self.analyze_expr(&method.body);

        self.warn_unused(method.line, "parameter");
        self.symbols.pop_scope();
    }

    fn analyze_attribute(&mut self, attribute: &Attribute) {
        let declared = TypeName::from(attribute.declared_type.as_str());
        self.symbols
            .declare(Symbol::new(attribute.name.clone(), declared, SymbolKind::Variable));

        if let Some(init) = &attribute.init {
            self.analyze_expr(init);
        }
    }

    fn analyze_expr(&mut self, expr: &Expr) -> TypeName {
        match expr {
            Expr::Assign(assign) => self.analyze_assign(assign),
            Expr::If(if_expr) => self.analyze_if(if_expr),
            Expr::While(while_expr) => self.analyze_while(while_expr),
            Expr::Block(block) => {
                let mut result = TypeName::Object;
                for expr in &block.body {
                    result = self.analyze_expr(expr);
                }
                result
            }
            Expr::Let(let_expr) => self.analyze_let(let_expr),
            Expr::Case(case) => self.analyze_case(case),
            Expr::New(new) => TypeName::from(new.class_name.as_str()),
            Expr::IsVoid(is_void) => {
                self.analyze_expr(&is_void.expr);
                TypeName::Bool
            }
            Expr::AddSub(add_sub) => self.analyze_arithmetic(&add_sub.lhs, &add_sub.rhs, add_sub.line),
            Expr::MulDiv(mul_div) => self.analyze_arithmetic(&mul_div.lhs, &mul_div.rhs, mul_div.line),
            Expr::Compare(compare) => {
                self.analyze_expr(&compare.lhs);
                self.analyze_expr(&compare.rhs);
                TypeName::Bool
            }
            Expr::Negation(negation) => {
                self.analyze_expr(&negation.expr);
                TypeName::Int
            }
            Expr::Not(not) => {
                self.analyze_expr(&not.expr);
                TypeName::Bool
            }
            Expr::Dispatch(dispatch) => self.analyze_dispatch(dispatch),
            Expr::ImplicitDispatch(dispatch) => self.analyze_implicit_dispatch(dispatch),
            Expr::Paren(paren) => self.analyze_expr(&paren.expr),
            Expr::Id(id) => self.analyze_id(id),
            Expr::Int(_) => TypeName::Int,
            Expr::String(_) => TypeName::String,
            Expr::True(_) | Expr::False(_) => TypeName::Bool,
        }
    }

    fn analyze_assign(&mut self, assign: &Assign) -> TypeName {
        let target = self.symbols.resolve(&assign.name);

        // the value is checked either way, so its diagnostics come before the
        // assignment's own
        let value_type = self.analyze_expr(&assign.value);

        match target {
            Some(id) => {
                let declared = &self.symbols.symbol(id).declared_type;
                if !declared.accepts(&value_type) {
                    self.diagnostics.error(
                        assign.line,
                        format!("Type mismatch. Cannot assign {value_type} to {declared}"),
                    );
                }
            }
            None => {
                self.diagnostics.error(
                    assign.line,
                    format!("Assignment to undeclared variable: {}", assign.name),
                );
            }
        }

        value_type
    }

    fn analyze_if(&mut self, if_expr: &If) -> TypeName {
        // syntactic heuristic: only the literal token counts, a parenthesized
        // or computed condition never fires it
        match if_expr.condition.as_ref() {
            Expr::True(_) => self.diagnostics.warn(if_expr.line, "'if true': Dead else branch."),
            Expr::False(_) => self.diagnostics.warn(if_expr.line, "'if false': Dead then branch."),
            _ => {}
        }

        let condition_type = self.analyze_expr(&if_expr.condition);
        if condition_type != TypeName::Bool {
            self.diagnostics.error(if_expr.line, "If condition must be Bool");
        }

        let then_type = self.analyze_expr(&if_expr.then_branch);
        let else_type = self.analyze_expr(&if_expr.else_branch);

        if then_type == else_type { then_type } else { TypeName::Object }
    }

    fn analyze_while(&mut self, while_expr: &While) -> TypeName {
        if matches!(while_expr.condition.as_ref(), Expr::True(_)) {
            self.diagnostics.warn(while_expr.line, "Infinite loop detected.");
        }

        let condition_type = self.analyze_expr(&while_expr.condition);
        if condition_type != TypeName::Bool {
            self.diagnostics.error(while_expr.line, "Loop condition must be Bool");
        }

        self.analyze_expr(&while_expr.body);
        TypeName::Object
    }

    fn analyze_let(&mut self, let_expr: &Let) -> TypeName {
        self.symbols.push_scope();

        for binding in &let_expr.bindings {
            // the binding is visible to its own initializer
            let declared = TypeName::from(binding.declared_type.as_str());
            self.symbols
                .declare(Symbol::new(binding.name.clone(), declared, SymbolKind::Variable));

            if let Some(init) = &binding.init {
                self.analyze_expr(init);
            }
        }

        let body_type = self.analyze_expr(&let_expr.body);

        self.warn_unused(let_expr.line, "local variable");
        self.symbols.pop_scope();

        body_type
    }

    fn analyze_case(&mut self, case: &Case) -> TypeName {
        self.analyze_expr(&case.subject);

        // branch binders are carried by the tree but never enter scope
        let mut result: Option<TypeName> = None;
        for branch in &case.branches {
            let branch_type = self.analyze_expr(&branch.body);
            result = match result {
                None => Some(branch_type),
                Some(current) if current == branch_type => Some(current),
                Some(_) => Some(TypeName::Object),
            };
        }

        result.unwrap_or(TypeName::Object)
    }

    fn analyze_dispatch(&mut self, dispatch: &Dispatch) -> TypeName {
        self.analyze_expr(&dispatch.receiver);
        for arg in &dispatch.args {
            self.analyze_expr(arg);
        }

        // there is no per-class method table, so a qualified call cannot be
        // looked up; it is always Object
        TypeName::Object
    }

    fn analyze_implicit_dispatch(&mut self, dispatch: &ImplicitDispatch) -> TypeName {
        for arg in &dispatch.args {
            self.analyze_expr(arg);
        }

        match self.symbols.resolve(&dispatch.method) {
            Some(id) => self.symbols.symbol(id).declared_type.clone(),
            None => {
                if !is_standard_io_method(&dispatch.method) {
                    self.diagnostics
                        .error(dispatch.line, format!("Undefined method: {}", dispatch.method));
                }
                TypeName::Object
            }
        }
    }

    fn analyze_id(&mut self, id: &Id) -> TypeName {
        match self.symbols.resolve(&id.name) {
            Some(symbol_id) => {
                self.symbols.mark_used(symbol_id);
                self.symbols.symbol(symbol_id).declared_type.clone()
            }
            None => {
                self.diagnostics
                    .error(id.line, format!("Undeclared identifier: {}", id.name));
                TypeName::Object
            }
        }
    }

    fn analyze_arithmetic(&mut self, lhs: &Expr, rhs: &Expr, line: Line) -> TypeName {
        let lhs_type = self.analyze_expr(lhs);
        let rhs_type = self.analyze_expr(rhs);

        if lhs_type != TypeName::Int || rhs_type != TypeName::Int {
            self.diagnostics.error(line, "Arithmetic requires Int.");
        }

        TypeName::Int
    }

    fn warn_unused(&mut self, line: Line, label: &str) {
        for symbol in self.symbols.current_scope_symbols() {
            if symbol.kind == SymbolKind::Variable && symbol.name != SELF && !symbol.used {
                self.diagnostics
                    .warn(line, format!("Unused {label}: '{}'", symbol.name));
            }
        }
    }
}

fn is_standard_io_method(name: &str) -> bool {
    name.starts_with("out_") || name.starts_with("in_")
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
