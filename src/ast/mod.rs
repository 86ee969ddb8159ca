/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed `Expr`/`Stmt` node enums and the program root
/// - expressions: Node structs for every expression kind
/// - statements: Node structs for every statement kind
/// - types: The value-type lattice, array shapes and operators
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
