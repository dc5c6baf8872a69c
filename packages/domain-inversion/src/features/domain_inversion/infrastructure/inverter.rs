//! Domain inversion
//!
//! Given a domain, a target field (`symbol`) and the values already known for
//! other fields, compute what is left to constrain `symbol`:
//!
//! - `Resolved(true)`: nothing (the domain is satisfied or says nothing about it)
//! - `Resolved(false)`: the domain cannot hold whatever `symbol` is
//! - `Residual(d)`: `symbol` must satisfy `d`
//!
//! Conjunctions and disjunctions treat unknown fields differently. Under AND an
//! unknown field is assumed satisfiable; under OR a clause on an unknown field
//! is ignored, and an OR that does not mention `symbol` is left for a later
//! pass until every field it references is known.

use super::evaluator::{constrained_leaf, eval_leaf};
use super::normalize::simplify;
use super::tree::{Branch, ExprTree};
use crate::config::EngineConfig;
use crate::features::domain_inversion::domain::{BoolOp, Domain, Inversion, Leaf};
use crate::shared::models::Context;
use tracing::{debug, trace};

/// Inversion engine
#[derive(Debug, Clone, Copy)]
pub struct Inverter {
    constrained_equality: bool,
}

impl Default for Inverter {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl Inverter {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            constrained_equality: config.constrained_equality,
        }
    }

    /// Invert `domain` on `symbol`
    pub fn invert(&self, domain: &Domain, symbol: &str, context: &Context) -> Inversion {
        let tree = ExprTree::parse(domain);
        if !tree.references(symbol) {
            trace!(symbol, "field not referenced, unconstrained");
            return Inversion::Resolved(true);
        }
        self.invert_tree(&tree, symbol, context)
    }

    fn invert_tree(&self, tree: &ExprTree<'_>, symbol: &str, context: &Context) -> Inversion {
        match tree.kind {
            BoolOp::And => self.invert_and(tree, symbol, context),
            BoolOp::Or => self.invert_or(tree, symbol, context),
        }
    }

    fn constrained(&self, leaf: &Leaf, boolop: BoolOp) -> bool {
        self.constrained_equality && constrained_leaf(leaf, boolop)
    }

    fn invert_and(&self, tree: &ExprTree<'_>, symbol: &str, context: &Context) -> Inversion {
        let mut result = Vec::new();

        for branch in &tree.branches {
            match branch {
                Branch::Node(nested) => match self.invert_tree(nested, symbol, context) {
                    Inversion::Resolved(true) => {}
                    Inversion::Resolved(false) => {
                        debug!(symbol, "nested group unsatisfiable, conjunction is false");
                        return Inversion::Resolved(false);
                    }
                    Inversion::Residual(residual) => result.push(residual),
                },
                Branch::Leaf(leaf) if leaf.base() == symbol => result.push(Domain::Leaf((*leaf).clone())),
                Branch::Leaf(leaf) => {
                    let satisfied = !context.contains(&leaf.field)
                        || eval_leaf(leaf, context, BoolOp::And)
                        || self.constrained(leaf, BoolOp::And);
                    if !satisfied {
                        debug!(symbol, field = %leaf.field, "clause violated by context, conjunction is false");
                        return Inversion::Resolved(false);
                    }
                }
            }
        }

        if result.is_empty() {
            Inversion::Resolved(true)
        } else {
            Inversion::Residual(simplify(&Domain::And(result)))
        }
    }

    fn invert_or(&self, tree: &ExprTree<'_>, symbol: &str, context: &Context) -> Inversion {
        if !tree.references(symbol) && !tree.variables.iter().all(|v| context.contains(v)) {
            trace!(symbol, "disjunction depends on unknown fields, deferred");
            return Inversion::Resolved(true);
        }

        let mut result = Vec::new();

        for branch in &tree.branches {
            match branch {
                Branch::Node(nested) => {
                    let inversion = self.invert_tree(nested, symbol, context);
                    if !nested.references(symbol) {
                        if inversion.is_true() {
                            debug!(symbol, "independent alternative holds, disjunction is true");
                            return Inversion::Resolved(true);
                        }
                        continue;
                    }
                    match inversion {
                        Inversion::Resolved(true) => return Inversion::Resolved(true),
                        Inversion::Resolved(false) => {}
                        Inversion::Residual(residual) => result.push(residual),
                    }
                }
                Branch::Leaf(leaf) if leaf.base() == symbol => result.push(Domain::Leaf((*leaf).clone())),
                Branch::Leaf(leaf) => {
                    if context.contains(leaf.base())
                        && (eval_leaf(leaf, context, BoolOp::Or) || self.constrained(leaf, BoolOp::Or))
                    {
                        debug!(symbol, field = %leaf.field, "alternative satisfied by context, disjunction is true");
                        return Inversion::Resolved(true);
                    }
                }
            }
        }

        if result.is_empty() {
            Inversion::Resolved(false)
        } else {
            Inversion::Residual(simplify(&Domain::Or(result)))
        }
    }
}

/// Invert with the default engine configuration
pub fn domain_inversion(domain: &Domain, symbol: &str, context: &Context) -> Inversion {
    Inverter::default().invert(domain, symbol, context)
}
