#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeName {
    Object,
    Io,
    Int,
    String,
    Bool,
    Class(String),
}

impl TypeName {
    pub fn builtins() -> [TypeName; 5] {
        [
            TypeName::Object,
            TypeName::Io,
            TypeName::Int,
            TypeName::String,
            TypeName::Bool,
        ]
    }

    pub fn accepts(&self, value: &TypeName) -> bool {
        matches!(self, TypeName::Object) || self == value
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeName::Object => write!(f, "Object"),
            TypeName::Io => write!(f, "IO"),
            TypeName::Int => write!(f, "Int"),
            TypeName::String => write!(f, "String"),
            TypeName::Bool => write!(f, "Bool"),
            TypeName::Class(name) => write!(f, "{name}"),
        }
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        match name {
            "Object" => TypeName::Object,
            "IO" => TypeName::Io,
            "Int" => TypeName::Int,
            "String" => TypeName::String,
            "Bool" => TypeName::Bool,
            _ => TypeName::Class(name.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Variable,
    Method,
    Class,
}

#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub declared_type: TypeName,
    pub kind: SymbolKind,
    pub used: bool,
}

impl Symbol {
    pub fn new(name: impl Into<String>, declared_type: TypeName, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            declared_type,
            kind,
            used: false,
        }
    }

    pub fn builtin(declared_type: TypeName) -> Self {
        Self {
            name: declared_type.to_string(),
            declared_type,
            kind: SymbolKind::Class,
            used: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolId(usize);

#[derive(Debug, Clone)]
pub struct Scope {
    pub id: usize,
    pub parent: Option<usize>,
    pub symbols: Vec<SymbolId>,
}

#[derive(Debug)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    scopes: Vec<Scope>,
    current_scope: usize,
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut table = Self {
            symbols: Vec::new(),
            scopes: Vec::new(),
            current_scope: 0,
        };

        table.push_scope();
        table
    }

    pub fn push_scope(&mut self) -> usize {
        let scope_id = self.scopes.len();
        let parent = if scope_id == 0 { None } else { Some(self.current_scope) };

        self.scopes.push(Scope {
            id: scope_id,
            parent,
            symbols: Vec::new(),
        });

        self.current_scope = scope_id;
        scope_id
    }

    pub fn pop_scope(&mut self) {
        if let Some(parent) = self.scopes[self.current_scope].parent {
            self.current_scope = parent;
        }
    }

    pub fn declare(&mut self, symbol: Symbol) -> SymbolId {
        // redefining a name in the same scope replaces the slot in place, so the
        // entry keeps its original declaration position
        for &id in &self.scopes[self.current_scope].symbols {
            if self.symbols[id.0].name == symbol.name {
                self.symbols[id.0] = symbol;
                return id;
            }
        }

        let id = SymbolId(self.symbols.len());
        self.symbols.push(symbol);
        self.scopes[self.current_scope].symbols.push(id);
        id
    }

    pub fn resolve(&self, name: &str) -> Option<SymbolId> {
        let mut scope_id = Some(self.current_scope);

        while let Some(id) = scope_id {
            let scope = &self.scopes[id];
            for &symbol_id in &scope.symbols {
                if self.symbols[symbol_id.0].name == name {
                    return Some(symbol_id);
                }
            }
            scope_id = scope.parent;
        }

        None
    }

    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.0]
    }

    pub fn mark_used(&mut self, id: SymbolId) {
        self.symbols[id.0].used = true;
    }

    pub fn current_scope_symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.scopes[self.current_scope]
            .symbols
            .iter()
            .map(|id| &self.symbols[id.0])
    }

    pub fn current_scope_id(&self) -> usize {
        self.current_scope
    }

    pub fn scope(&self, scope_id: usize) -> Option<&Scope> {
        self.scopes.get(scope_id)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variable(name: &str, declared_type: TypeName) -> Symbol {
        Symbol::new(name, declared_type, SymbolKind::Variable)
    }

    #[test]
    fn test_resolve_walks_parent_chain() {
        let mut table = SymbolTable::new();
        table.declare(variable("x", TypeName::Int));

        table.push_scope();
        table.push_scope();

        let id = table.resolve("x").unwrap();
        assert_eq!(table.symbol(id).declared_type, TypeName::Int);
        assert!(table.resolve("y").is_none());
    }

    #[test]
    fn test_shadowing_resolves_nearest_definition() {
        let mut table = SymbolTable::new();
        table.declare(variable("x", TypeName::String));

        table.push_scope();
        table.declare(variable("x", TypeName::Int));

        let id = table.resolve("x").unwrap();
        assert_eq!(table.symbol(id).declared_type, TypeName::Int);

        table.pop_scope();
        let id = table.resolve("x").unwrap();
        assert_eq!(table.symbol(id).declared_type, TypeName::String);
    }

    #[test]
    fn test_same_scope_redefinition_replaces_in_place() {
        let mut table = SymbolTable::new();
        let first = table.declare(variable("x", TypeName::Int));
        let second = table.declare(variable("x", TypeName::String));

        assert_eq!(first, second);
        assert_eq!(table.current_scope_symbols().count(), 1);
        assert_eq!(table.symbol(second).declared_type, TypeName::String);
    }

    #[test]
    fn test_popped_scope_locals_are_unreachable() {
        let mut table = SymbolTable::new();

        table.push_scope();
        table.declare(variable("local", TypeName::Bool));
        assert!(table.resolve("local").is_some());

        table.pop_scope();
        assert!(table.resolve("local").is_none());
    }

    #[test]
    fn test_entries_keep_declaration_order() {
        let mut table = SymbolTable::new();
        table.push_scope();
        table.declare(variable("b", TypeName::Int));
        table.declare(variable("a", TypeName::Int));
        table.declare(variable("c", TypeName::Int));

        let names: Vec<&str> = table
            .current_scope_symbols()
            .map(|symbol| symbol.name.as_str())
            .collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_mark_used() {
        let mut table = SymbolTable::new();
        let id = table.declare(variable("x", TypeName::Int));
        assert!(!table.symbol(id).used);

        table.mark_used(id);
        assert!(table.symbol(id).used);
    }

    #[test]
    fn test_scope_parents_form_a_chain() {
        let mut table = SymbolTable::new();
        let class_scope = table.push_scope();
        let method_scope = table.push_scope();

        assert_eq!(table.scope(method_scope).unwrap().parent, Some(class_scope));
        assert_eq!(table.scope(class_scope).unwrap().parent, Some(0));
        assert_eq!(table.scope(0).unwrap().parent, None);
    }

    #[test]
    fn test_type_name_display_round_trips() {
        for name in ["Object", "IO", "Int", "String", "Bool", "Main"] {
            assert_eq!(TypeName::from(name).to_string(), name);
        }
    }

    #[test]
    fn test_object_accepts_everything() {
        assert!(TypeName::Object.accepts(&TypeName::Int));
        assert!(TypeName::Object.accepts(&TypeName::Class("Main".into())));
        assert!(TypeName::Int.accepts(&TypeName::Int));
        assert!(!TypeName::Int.accepts(&TypeName::String));
        assert!(!TypeName::Class("A".into()).accepts(&TypeName::Class("B".into())));
    }
}
