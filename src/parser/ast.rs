// AST (Abstract Syntax Tree) definitions for msdscript expressions

use std::fmt;
use std::rc::Rc;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Shared-ownership handle to an expression node.
///
/// Trees are immutable once built, so handles and sub-trees can be cloned
/// and held by any number of owners.
pub type ExprRef = Rc<Expr>;

/// Expression nodes
///
/// Equality is structural: two trees compare equal when they have the same
/// shape, names and literal values, regardless of whether they share nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Num(i32),
    Bool(bool),
    Var(String),
    Add(ExprRef, ExprRef),
    Mult(ExprRef, ExprRef),
    Eq(ExprRef, ExprRef),
    /// `_let name = rhs _in body`
    Let {
        name: String,
        rhs: ExprRef,
        body: ExprRef,
    },
    /// `_if condition _then then_branch _else else_branch`
    If {
        condition: ExprRef,
        then_branch: ExprRef,
        else_branch: ExprRef,
    },
}

impl Expr {
    pub fn num(value: i32) -> ExprRef {
        Rc::new(Expr::Num(value))
    }

    pub fn boolean(value: bool) -> ExprRef {
        Rc::new(Expr::Bool(value))
    }

    pub fn var(name: impl Into<String>) -> ExprRef {
        Rc::new(Expr::Var(name.into()))
    }

    pub fn add(lhs: ExprRef, rhs: ExprRef) -> ExprRef {
        Rc::new(Expr::Add(lhs, rhs))
    }

    pub fn mult(lhs: ExprRef, rhs: ExprRef) -> ExprRef {
        Rc::new(Expr::Mult(lhs, rhs))
    }

    pub fn equality(lhs: ExprRef, rhs: ExprRef) -> ExprRef {
        Rc::new(Expr::Eq(lhs, rhs))
    }

    pub fn let_in(name: impl Into<String>, rhs: ExprRef, body: ExprRef) -> ExprRef {
        Rc::new(Expr::Let {
            name: name.into(),
            rhs,
            body,
        })
    }

    pub fn if_then_else(
        condition: ExprRef,
        then_branch: ExprRef,
        else_branch: ExprRef,
    ) -> ExprRef {
        Rc::new(Expr::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// Direct sub-expressions, in source order
    pub fn children(&self) -> Vec<&ExprRef> {
        match self {
            Expr::Num(_) | Expr::Bool(_) | Expr::Var(_) => Vec::new(),
            Expr::Add(lhs, rhs) | Expr::Mult(lhs, rhs) | Expr::Eq(lhs, rhs) => {
                vec![lhs, rhs]
            }
            Expr::Let { rhs, body, .. } => vec![rhs, body],
            Expr::If {
                condition,
                then_branch,
                else_branch,
            } => vec![condition, then_branch, else_branch],
        }
    }

    /// Total number of nodes in the tree rooted here
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(expr) = pending.pop() {
            count += 1;
            pending.extend(expr.children().into_iter().map(|child| &**child));
        }
        count
    }

    /// Length of the longest root-to-leaf path (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut pending = vec![(self, 1)];
        while let Some((expr, depth)) = pending.pop() {
            max_depth = max_depth.max(depth);
            pending.extend(
                expr.children()
                    .into_iter()
                    .map(|child| (&**child, depth + 1)),
            );
        }
        max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality_ignores_sharing() {
        let shared = Expr::num(1);
        let a = Expr::add(shared.clone(), shared);
        let b = Expr::add(Expr::num(1), Expr::num(1));
        assert_eq!(a, b);
        assert_ne!(a, Expr::add(Expr::num(1), Expr::num(2)));
        assert_ne!(a, Expr::mult(Expr::num(1), Expr::num(1)));
    }

    #[test]
    fn test_let_equality_compares_names() {
        let a = Expr::let_in("x", Expr::num(1), Expr::var("x"));
        let b = Expr::let_in("y", Expr::num(1), Expr::var("x"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_children_in_source_order() {
        let expr = Expr::if_then_else(Expr::boolean(true), Expr::num(1), Expr::num(2));
        let children = expr.children();
        assert_eq!(children.len(), 3);
        assert_eq!(*children[0], Expr::boolean(true));
        assert_eq!(*children[2], Expr::num(2));
        assert!(Expr::var("x").children().is_empty());
    }

    #[test]
    fn test_node_count_and_depth() {
        // 1 + (2 * x)
        let expr = Expr::add(Expr::num(1), Expr::mult(Expr::num(2), Expr::var("x")));
        assert_eq!(expr.node_count(), 5);
        assert_eq!(expr.depth(), 3);
        assert_eq!(Expr::num(7).depth(), 1);
    }

    #[test]
    fn test_source_location_display() {
        assert_eq!(SourceLocation::new(2, 14).to_string(), "line 2, column 14");
    }
}
