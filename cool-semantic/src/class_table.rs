use std::collections::HashMap;

use crate::symbol_table::{Symbol, TypeName};

#[derive(Debug)]
pub struct ClassTable {
    classes: HashMap<String, Symbol>,
}

impl ClassTable {
    pub fn new() -> Self {
        let mut table = Self {
            classes: HashMap::new(),
        };

        for builtin in TypeName::builtins() {
            table.define(Symbol::builtin(builtin));
        }

        table
    }

    pub fn define(&mut self, symbol: Symbol) {
        if self.classes.contains_key(&symbol.name) {
            return;
        };

        let name = symbol.name.clone();
        self.classes.insert(name, symbol);
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.classes.get(name)
    }
}

impl Default for ClassTable {
    fn default() -> Self {
        Self::new()
    }
}
