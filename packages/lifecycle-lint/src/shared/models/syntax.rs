//! Language-neutral syntax vocabulary
//!
//! Node identifiers and kinds shared by the host tree (parsing feature) and
//! the lifecycle analyzer, which only ever sees trees through `TreeWalker`.

use serde::{Deserialize, Serialize};

/// Index of a node inside one unit's syntax arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Syntax node kind (language-neutral)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    // Unit level
    CompilationUnit,
    PackageDecl,
    ImportDecl,

    // Definitions
    ClassDef,
    /// `new T(..) { .. }` with a class body
    AnonymousClass,
    /// Declared supertype of a class (`extends` / `implements`)
    Supertype,
    MethodDef,
    LambdaDef,

    // Declarations
    FieldDecl,
    VariableDecl,
    ParameterDecl,
    /// One declared name inside a field/variable declaration
    Declarator,

    // Expressions
    CallExpr,
    ArgumentList,
    NewExpr,
    Identifier,
    FieldAccess,
    This,
    Super,

    // Exception handling
    TryStmt,
    /// Resource specification of a try-with-resources statement
    TryResources,
    CatchClause,
    CatchType,
    FinallyClause,

    // Other
    Block,

    // Unknown/Other
    Other(String),
}

impl SyntaxKind {
    /// Declarations that own executable bodies
    pub fn is_callable(&self) -> bool {
        matches!(self, SyntaxKind::MethodDef | SyntaxKind::LambdaDef)
    }

    /// Declarations that introduce a type
    pub fn is_type_declaration(&self) -> bool {
        matches!(self, SyntaxKind::ClassDef | SyntaxKind::AnonymousClass)
    }

    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            SyntaxKind::FieldDecl | SyntaxKind::VariableDecl | SyntaxKind::ParameterDecl
        )
    }
}
