//! Lowers an AST into the backend clause tree.
//!
//! Recursively walks the AST carrying a `span_mode` flag. A node lowers
//! in span mode when its own `slop` is true or `span_mode` was already
//! true on entry; once true, every descendant lowers in span mode too,
//! since a span query can't nest an ordinary boolean clause inside it.

use serde_json::{json, Value};

use crate::ast::{AstNode, ChildSlot, Op, TermClass};

/// Sentinel slop value simulating span-AND: the target backend has no
/// native span-AND, so an absurdly large slop approximates "same
/// document, any distance".
const SPAN_AND_SENTINEL: u64 = 1_000_000;

pub struct Lowerer<'a> {
    field: &'a str,
}

impl<'a> Lowerer<'a> {
    pub fn new(field: &'a str) -> Self {
        Lowerer { field }
    }

    /// Lower a node to its clause-tree representation.
    pub fn lower(&self, node: &AstNode, span_mode: bool) -> Value {
        let span_mode = span_mode || node.slop;
        if span_mode != node.slop {
            tracing::trace!(span_mode, "span-mode contagion applied to descendant node");
        }

        if node.is_exclusion {
            return self.lower_exclusion(node, span_mode);
        }

        let clauses: Vec<Value> = node
            .children
            .iter()
            .map(|child| self.lower_child(child, span_mode))
            .collect();

        if !span_mode {
            let key = match node.op {
                Op::Must => "must",
                Op::Should => "should",
                Op::MustNot => unreachable!("MustNot only appears on not-wrapper nodes"),
            };
            return json!({ "bool": { (key): clauses } });
        }

        match node.op {
            _ if node.slop => json!({
                "span_near": {
                    "clauses": clauses,
                    "slop": node.proximity.expect("slop node always carries a proximity").to_string(),
                    "in_order": false,
                }
            }),
            Op::Must => json!({
                "span_near": {
                    "clauses": clauses,
                    "slop": SPAN_AND_SENTINEL.to_string(),
                    "in_order": false,
                }
            }),
            Op::Should => json!({
                "span_or": {
                    "clauses": clauses,
                    "in_order": false,
                }
            }),
            Op::MustNot => unreachable!("MustNot only appears on not-wrapper nodes"),
        }
    }

    /// `not` lowering: replaces the whole per-child array dispatch with
    /// one combined exclude/include value, which is then placed as the
    /// sole element of this node's own ordinary outer wrapping.
    fn lower_exclusion(&self, node: &AstNode, span_mode: bool) -> Value {
        let exclude_wrapper = match &node.children[0] {
            ChildSlot::Sub(wrapper) => wrapper,
            other => panic!("not-node's exclude slot must be a wrapper node, got {other:?}"),
        };
        let include_wrapper = match &node.children[1] {
            ChildSlot::Sub(wrapper) => wrapper,
            other => panic!("not-node's include slot must be a wrapper node, got {other:?}"),
        };

        let excluded = self.lower_child(&exclude_wrapper.children[0], span_mode);
        let included = self.lower_child(&include_wrapper.children[0], span_mode);

        let combined = if span_mode {
            json!({ "span_not": { "exclude": excluded, "include": included } })
        } else {
            json!({ "bool": { "must_not": excluded, "must": included } })
        };

        if span_mode {
            json!({
                "span_near": {
                    "clauses": [combined],
                    "slop": SPAN_AND_SENTINEL.to_string(),
                    "in_order": false,
                }
            })
        } else {
            json!({ "bool": { "must": [combined] } })
        }
    }

    fn lower_child(&self, child: &ChildSlot, span_mode: bool) -> Value {
        match child {
            ChildSlot::Term(term, class) => self.parse_term(term, *class, span_mode),
            ChildSlot::Sub(node) => self.lower(node, span_mode),
        }
    }

    /// Leaf lowering: a classified term, lowered according to the
    /// current mode and its own phrase/prefix/wildcard class.
    fn parse_term(&self, term: &str, class: TermClass, span_mode: bool) -> Value {
        if !span_mode {
            return match class {
                TermClass::Phrase => json!({ "match_phrase": { (self.field): term } }),
                TermClass::Prefix => json!({ "match_phrase_prefix": { (self.field): term } }),
                TermClass::Wildcard => json!({ "wildcard": { (self.field): term } }),
            };
        }

        if !term.contains(' ') {
            return match class {
                TermClass::Phrase => json!({ "span_term": { (self.field): term } }),
                TermClass::Prefix => {
                    json!({ "span_multi": { "match": { "prefix": { (self.field): term } } } })
                }
                TermClass::Wildcard => {
                    json!({ "span_multi": { "match": { "wildcard": { (self.field): term } } } })
                }
            };
        }

        // Multi-word phrase in span mode: an ordered span_near of one
        // span_term per word, except the trailing word, which respects
        // the phrase's own TermClass.
        let words: Vec<&str> = term.split(' ').collect();
        let (last, rest) = words.split_last().expect("split(' ') on a non-empty term yields >=1 word");
        let mut clauses: Vec<Value> = rest
            .iter()
            .map(|word| json!({ "span_term": { (self.field): word } }))
            .collect();
        clauses.push(match class {
            TermClass::Phrase => json!({ "span_term": { (self.field): last } }),
            TermClass::Prefix => {
                json!({ "span_multi": { "match": { "prefix": { (self.field): last } } } })
            }
            TermClass::Wildcard => {
                json!({ "span_multi": { "match": { "wildcard": { (self.field): last } } } })
            }
        });

        json!({
            "span_near": {
                "clauses": clauses,
                "slop": 0,
                "in_order": true,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::build_ast;
    use crate::shunt::shunt;
    use lexes_lex::lex;

    fn lowered(query: &str, field: &str) -> Value {
        let tokens = lex(query, true).unwrap();
        let postfix = shunt(tokens).unwrap();
        let ast = build_ast(postfix).unwrap();
        Lowerer::new(field).lower(&ast, false)
    }

    #[test]
    fn boolean_and_of_phrase_and_term() {
        let got = lowered(r#""breach of contract" and damages"#, "plain_text");
        assert_eq!(
            got,
            json!({
                "bool": {
                    "must": [
                        { "match_phrase": { "plain_text": "breach of contract" } },
                        { "match_phrase": { "plain_text": "damages" } },
                    ]
                }
            })
        );
    }

    #[test]
    fn boolean_or() {
        let got = lowered("cat or dog", "plain_text");
        assert_eq!(
            got,
            json!({
                "bool": {
                    "should": [
                        { "match_phrase": { "plain_text": "cat" } },
                        { "match_phrase": { "plain_text": "dog" } },
                    ]
                }
            })
        );
    }

    #[test]
    fn not_swaps_slot_roles() {
        let got = lowered("contract and not frivolous", "plain_text");
        assert_eq!(
            got,
            json!({
                "bool": {
                    "must": [
                        {
                            "bool": {
                                "must_not": { "match_phrase": { "plain_text": "frivolous" } },
                                "must": { "match_phrase": { "plain_text": "contract" } },
                            }
                        }
                    ]
                }
            })
        );
    }

    #[test]
    fn proximity_numeric_lowers_to_span_near_with_prefix() {
        let got = lowered("negligen! w/10 damages", "plain_text");
        assert_eq!(
            got,
            json!({
                "span_near": {
                    "clauses": [
                        { "span_multi": { "match": { "prefix": { "plain_text": "negligen" } } } },
                        { "span_term": { "plain_text": "damages" } },
                    ],
                    "slop": "10",
                    "in_order": false,
                }
            })
        );
    }

    #[test]
    fn within_sentence_phrase_decomposes_into_ordered_inner_span_near() {
        let got = lowered(r#""due process" w/s liberty"#, "plain_text");
        assert_eq!(
            got,
            json!({
                "span_near": {
                    "clauses": [
                        {
                            "span_near": {
                                "clauses": [
                                    { "span_term": { "plain_text": "due" } },
                                    { "span_term": { "plain_text": "process" } },
                                ],
                                "slop": 0,
                                "in_order": true,
                            }
                        },
                        { "span_term": { "plain_text": "liberty" } },
                    ],
                    "slop": "20",
                    "in_order": false,
                }
            })
        );
    }

    #[test]
    fn grouped_or_under_proximity_becomes_span_or_inside_span_near() {
        let got = lowered("(apple or pear) w/p orchard", "plain_text");
        assert_eq!(
            got,
            json!({
                "span_near": {
                    "clauses": [
                        {
                            "span_or": {
                                "clauses": [
                                    { "span_term": { "plain_text": "apple" } },
                                    { "span_term": { "plain_text": "pear" } },
                                ],
                                "in_order": false,
                            }
                        },
                        { "span_term": { "plain_text": "orchard" } },
                    ],
                    "slop": "50",
                    "in_order": false,
                }
            })
        );
    }

    #[test]
    fn wildcard_at_start_only_is_wildcard_not_prefix() {
        let got = lowered("*foo", "plain_text");
        assert_eq!(got, json!({ "bool": { "must": [{ "wildcard": { "plain_text": "*foo" } }] } }));
    }

    #[test]
    fn prefix_multi_word_phrase_in_span_mode_only_wraps_trailing_word() {
        // Only the final word of a multi-word phrase respects the
        // phrase's own TermClass; every earlier word is a plain
        // span_term regardless of where the trailing `*` sits.
        let got = lowered(r#""breach of contract*" w/10 damages"#, "plain_text");
        assert_eq!(
            got,
            json!({
                "span_near": {
                    "clauses": [
                        {
                            "span_near": {
                                "clauses": [
                                    { "span_term": { "plain_text": "breach" } },
                                    { "span_term": { "plain_text": "of" } },
                                    { "span_multi": { "match": { "prefix": { "plain_text": "contract" } } } },
                                ],
                                "slop": 0,
                                "in_order": true,
                            }
                        },
                        { "span_term": { "plain_text": "damages" } },
                    ],
                    "slop": "10",
                    "in_order": false,
                }
            })
        );
    }
}
