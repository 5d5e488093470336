//! Shunting Yard: infix [`RawToken`] sequence -> postfix [`PostfixToken`]
//! sequence.
//!
//! Scans right-to-left with an auxiliary stack, popping an aux entry to
//! output only when it binds *tighter* than the operator currently being
//! pushed. Because the scan runs back to front, the tighter operator of
//! any pair ends up closer to the postfix stream's front and folds into
//! the AST first, leaving the looser operator as the outer node - e.g.
//! `a or b and c` postfixes to `c b and a or` and folds to
//! `Or(a, And(b, c))`, the `or` at the root. A standard left-to-right
//! scan with `>=` pops gives an equivalent result, but the
//! right-to-left form is what this implementation follows.

use lexes_lex::{classify_connector, looks_like_proximity, Connector, RawToken};
use lexes_util::ShuntError;

/// A token in postfix position: either a term or a resolved connector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostfixToken {
    Term(String),
    Op(Connector),
}

/// Precedence category: larger binds looser.
pub(crate) fn category(connector: Connector) -> u8 {
    match connector {
        Connector::Or => 6,
        Connector::WithinN(_) => 5,
        Connector::WithinSentence => 4,
        Connector::WithinParagraph => 3,
        Connector::And => 2,
        Connector::Not => 1,
    }
}

/// Whether the aux stack's top operator should be popped to output
/// before `current` is pushed: true when `top` binds *tighter* than
/// `current`, i.e. has the smaller precedence category (or, within the
/// `w/n` family, the smaller `n`).
fn should_pop(top: Connector, current: Connector) -> bool {
    if let (Connector::WithinN(p), Connector::WithinN(c)) = (top, current) {
        return p < c;
    }
    category(top) < category(current)
}

/// An entry on the shunting yard's auxiliary stack.
enum AuxEntry {
    Close,
    Op(Connector),
}

/// Convert a rewritten infix token sequence into postfix.
pub fn shunt(tokens: Vec<RawToken>) -> Result<Vec<PostfixToken>, ShuntError> {
    let mut aux: Vec<AuxEntry> = Vec::new();
    let mut output: Vec<PostfixToken> = Vec::new();

    for token in tokens.into_iter().rev() {
        match token {
            RawToken::RParen => aux.push(AuxEntry::Close),
            RawToken::LParen => {
                while let Some(entry) = aux.pop() {
                    match entry {
                        AuxEntry::Close => break,
                        AuxEntry::Op(connector) => output.push(PostfixToken::Op(connector)),
                    }
                }
            }
            RawToken::Atom(atom) => {
                if let Some(connector) = classify_connector(&atom) {
                    while let Some(AuxEntry::Op(top)) = aux.last() {
                        if should_pop(*top, connector) {
                            if let Some(AuxEntry::Op(popped)) = aux.pop() {
                                output.push(PostfixToken::Op(popped));
                            }
                        } else {
                            break;
                        }
                    }
                    aux.push(AuxEntry::Op(connector));
                } else if looks_like_proximity(&atom) {
                    return Err(ShuntError::MalformedProximity { token: atom });
                } else {
                    output.push(PostfixToken::Term(atom));
                }
            }
        }
    }

    for entry in aux.into_iter().rev() {
        if let AuxEntry::Op(connector) = entry {
            output.push(PostfixToken::Op(connector));
        }
    }

    tracing::trace!(postfix_len = output.len(), "shunting yard produced postfix sequence");

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexes_lex::lex;

    fn shunt_query(q: &str) -> Vec<PostfixToken> {
        shunt(lex(q, true).unwrap()).unwrap()
    }

    #[test]
    fn simple_and() {
        let got = shunt_query("breach and damages");
        assert_eq!(
            got,
            vec![
                PostfixToken::Term("damages".into()),
                PostfixToken::Term("breach".into()),
                PostfixToken::Op(Connector::And),
            ]
        );
    }

    #[test]
    fn parens_group_before_outer_operator() {
        let got = shunt_query("(apple or pear) w/p orchard");
        assert_eq!(
            got,
            vec![
                PostfixToken::Term("orchard".into()),
                PostfixToken::Term("pear".into()),
                PostfixToken::Term("apple".into()),
                PostfixToken::Op(Connector::Or),
                PostfixToken::Op(Connector::WithinParagraph),
            ]
        );
    }

    #[test]
    fn smaller_within_n_binds_tighter_when_nested() {
        let got = shunt_query("a w/5 b w/3 c");
        assert_eq!(
            got,
            vec![
                PostfixToken::Term("c".into()),
                PostfixToken::Term("b".into()),
                PostfixToken::Op(Connector::WithinN(3)),
                PostfixToken::Term("a".into()),
                PostfixToken::Op(Connector::WithinN(5)),
            ]
        );
    }

    #[test]
    fn malformed_proximity_token_errors() {
        let tokens = lex("breach w/ten damages", true).unwrap();
        assert_eq!(
            shunt(tokens),
            Err(ShuntError::MalformedProximity { token: "w/ten".into() })
        );
    }

    #[test]
    fn zero_is_not_a_positive_integer_so_w0_is_malformed() {
        let tokens = lex("breach w/0 damages", true).unwrap();
        assert_eq!(
            shunt(tokens),
            Err(ShuntError::MalformedProximity { token: "w/0".into() })
        );
    }

    #[test]
    fn looser_connector_nests_the_tighter_one_regardless_of_surface_side() {
        // `and` (category 2) binds tighter than `or` (category 6); the
        // loosest connector must end up outermost whichever side of the
        // chain it sits on.
        let left_loose = shunt_query("a or b and c");
        assert_eq!(
            left_loose,
            vec![
                PostfixToken::Term("c".into()),
                PostfixToken::Term("b".into()),
                PostfixToken::Op(Connector::And),
                PostfixToken::Term("a".into()),
                PostfixToken::Op(Connector::Or),
            ]
        );

        let right_loose = shunt_query("a and b or c");
        assert_eq!(
            right_loose,
            vec![
                PostfixToken::Term("c".into()),
                PostfixToken::Term("b".into()),
                PostfixToken::Term("a".into()),
                PostfixToken::Op(Connector::And),
                PostfixToken::Op(Connector::Or),
            ]
        );
    }

    #[test]
    fn same_precedence_groups_left_to_right() {
        // `a and b and c` should associate as (a and b) and c.
        let got = shunt_query("a and b and c");
        // Postfix for ((a and b) and c) built left-to-right over this
        // sequence must consume `a and b` into one node before folding
        // in `c`.
        assert_eq!(
            got,
            vec![
                PostfixToken::Term("c".into()),
                PostfixToken::Term("b".into()),
                PostfixToken::Term("a".into()),
                PostfixToken::Op(Connector::And),
                PostfixToken::Op(Connector::And),
            ]
        );
    }
}
