//! Go language parsing
//!
//! Tree-sitter-go integration for the import section of a Go file:
//!
//! - [`parser`]: parser construction, import spec reading, syntax error lookup
//!
//! Node kinds relied on: `source_file`, `package_clause`, `import_declaration`,
//! `import_spec_list`, `import_spec` (fields `name`, `path`), `comment`,
//! `selector_expression` (field `operand`) and `qualified_type` (field `package`).

pub mod parser;

pub use parser::GoParser;
