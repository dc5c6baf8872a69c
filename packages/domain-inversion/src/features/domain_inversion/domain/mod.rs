// Domain: typed domain DSL and inversion result - pure data, no evaluation

pub mod expression;
pub mod inversion;
pub mod operator;

pub use expression::{base_name, Domain, Leaf};
pub use inversion::Inversion;
pub use operator::{BoolOp, Operator};
