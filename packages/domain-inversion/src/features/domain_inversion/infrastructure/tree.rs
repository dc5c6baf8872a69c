//! Parse tree used by inversion
//!
//! Borrows the domain it was built from and records, for every node, the base
//! names of all fields referenced below it.

use crate::features::domain_inversion::domain::{BoolOp, Domain, Leaf};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub enum Branch<'a> {
    Leaf(&'a Leaf),
    Node(ExprTree<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprTree<'a> {
    pub kind: BoolOp,
    pub branches: Vec<Branch<'a>>,
    pub variables: BTreeSet<&'a str>,
}

impl<'a> ExprTree<'a> {
    /// Build the tree; a bare leaf is read as a one-clause conjunction
    pub fn parse(domain: &'a Domain) -> Self {
        match domain {
            Domain::Leaf(leaf) => Self::from_branches(BoolOp::And, vec![Branch::Leaf(leaf)]),
            Domain::And(children) => Self::node(BoolOp::And, children),
            Domain::Or(children) => Self::node(BoolOp::Or, children),
        }
    }

    fn node(kind: BoolOp, children: &'a [Domain]) -> Self {
        let branches = children
            .iter()
            .map(|child| match child {
                Domain::Leaf(leaf) => Branch::Leaf(leaf),
                nested => Branch::Node(Self::parse(nested)),
            })
            .collect();
        Self::from_branches(kind, branches)
    }

    fn from_branches(kind: BoolOp, branches: Vec<Branch<'a>>) -> Self {
        let mut variables = BTreeSet::new();
        for branch in &branches {
            match branch {
                Branch::Leaf(leaf) => {
                    variables.insert(leaf.base());
                }
                Branch::Node(tree) => variables.extend(tree.variables.iter().copied()),
            }
        }
        Self {
            kind,
            branches,
            variables,
        }
    }

    pub fn references(&self, symbol: &str) -> bool {
        self.variables.contains(symbol)
    }
}
