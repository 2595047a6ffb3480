pub mod analyzer;
pub mod class_table;
pub mod diagnostics;
pub mod symbol_table;


pub use analyzer::SemanticAnalyzer;
pub use class_table::ClassTable;
pub use diagnostics::Diagnostics;
pub use symbol_table::{Symbol, SymbolId, SymbolKind, SymbolTable, TypeName};
