//! AST node definitions and the AST Builder: folds a postfix connector
//! sequence into a single-rooted tree.
//!
//! A child slot is either a classified term leaf or a boxed sub-node,
//! tagging each child with its own variant rather than keeping a
//! parallel array of child kinds alongside the children themselves.

use lexes_lex::Connector;
use lexes_util::AstError;

use crate::shunt::PostfixToken;

/// Classification of a term leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermClass {
    Phrase,
    Prefix,
    Wildcard,
}

impl TermClass {
    /// Classify a raw term and strip its trailing `*` if it is a prefix
    /// term. Returns the (possibly stripped) term text alongside its
    /// class.
    fn classify(term: String) -> (String, TermClass) {
        if let Some(stripped) = term.strip_suffix('*') {
            (stripped.to_string(), TermClass::Prefix)
        } else if term.contains('*') {
            (term, TermClass::Wildcard)
        } else {
            (term, TermClass::Phrase)
        }
    }
}

/// The boolean-clause role a node (or a `not` wrapper) plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Must,
    Should,
    /// Only ever appears on the single-child wrapper a `not` node builds
    /// around its excluded operand; never a standalone node's `op`.
    MustNot,
}

/// A child of an [`AstNode`]: either a term leaf or a nested node.
#[derive(Debug, Clone)]
pub enum ChildSlot {
    Term(String, TermClass),
    Sub(Box<AstNode>),
}

/// An operator node, or the singleton wrapper a lone term is promoted
/// into.
#[derive(Debug, Clone)]
pub struct AstNode {
    pub op: Op,
    pub children: Vec<ChildSlot>,
    pub proximity: Option<u32>,
    pub slop: bool,
    /// Set only by the `not` construction rule; lowering dispatches on
    /// this rather than `op` because a `not` node and an ordinary `and`
    /// node both carry `op = Must`.
    pub is_exclusion: bool,
}

impl AstNode {
    fn leaf_wrapper(op: Op, child: ChildSlot) -> AstNode {
        AstNode {
            op,
            children: vec![child],
            proximity: None,
            slop: false,
            is_exclusion: false,
        }
    }
}

/// Either a raw term string or a built node, held on the AST Builder's
/// work stack before it is wrapped into a [`ChildSlot`].
enum WorkItem {
    Term(String),
    Node(AstNode),
}

impl WorkItem {
    fn into_child_slot(self) -> ChildSlot {
        match self {
            WorkItem::Term(term) => {
                let (text, class) = TermClass::classify(term);
                ChildSlot::Term(text, class)
            }
            WorkItem::Node(node) => ChildSlot::Sub(Box::new(node)),
        }
    }
}

/// Fold a postfix token sequence into a single-rooted AST.
pub fn build_ast(postfix: Vec<PostfixToken>) -> Result<AstNode, AstError> {
    let mut stack: Vec<WorkItem> = Vec::new();

    for token in postfix {
        match token {
            PostfixToken::Term(term) => stack.push(WorkItem::Term(term)),
            PostfixToken::Op(connector) => {
                let a = stack
                    .pop()
                    .ok_or(AstError::InternalConsistency { remaining: stack.len() })?;
                let b = stack
                    .pop()
                    .ok_or(AstError::InternalConsistency { remaining: stack.len() + 1 })?;
                stack.push(WorkItem::Node(build_operator_node(connector, a, b)));
            }
        }
    }

    match stack.len() {
        1 => match stack.into_iter().next().unwrap() {
            WorkItem::Term(term) => {
                let (text, class) = TermClass::classify(term);
                Ok(AstNode {
                    op: Op::Must,
                    children: vec![ChildSlot::Term(text, class)],
                    proximity: None,
                    slop: false,
                    is_exclusion: false,
                })
            }
            WorkItem::Node(node) => Ok(node),
        },
        remaining => Err(AstError::InternalConsistency { remaining }),
    }
}

/// Build the node for a single operator token, given the two operands
/// popped off the work stack (`a` popped first, `b` popped second).
fn build_operator_node(connector: Connector, a: WorkItem, b: WorkItem) -> AstNode {
    match connector {
        Connector::And => AstNode {
            op: Op::Must,
            children: vec![a.into_child_slot(), b.into_child_slot()],
            proximity: None,
            slop: false,
            is_exclusion: false,
        },
        Connector::Or => AstNode {
            op: Op::Should,
            children: vec![a.into_child_slot(), b.into_child_slot()],
            proximity: None,
            slop: false,
            is_exclusion: false,
        },
        Connector::WithinParagraph => AstNode {
            op: Op::Must,
            children: vec![a.into_child_slot(), b.into_child_slot()],
            proximity: Some(50),
            slop: true,
            is_exclusion: false,
        },
        Connector::WithinSentence => AstNode {
            op: Op::Must,
            children: vec![a.into_child_slot(), b.into_child_slot()],
            proximity: Some(20),
            slop: true,
            is_exclusion: false,
        },
        Connector::WithinN(n) => AstNode {
            op: Op::Must,
            children: vec![a.into_child_slot(), b.into_child_slot()],
            proximity: Some(n),
            slop: true,
            is_exclusion: false,
        },
        Connector::Not => {
            // a is the left (surface) operand -> included; b is the
            // right (surface) operand -> excluded. The AST stores
            // operands in the order (exclude, include).
            let include = AstNode::leaf_wrapper(Op::Must, a.into_child_slot());
            let exclude = AstNode::leaf_wrapper(Op::MustNot, b.into_child_slot());
            AstNode {
                op: Op::Must,
                children: vec![ChildSlot::Sub(Box::new(exclude)), ChildSlot::Sub(Box::new(include))],
                proximity: None,
                slop: false,
                is_exclusion: true,
            }
        }
    }
}
