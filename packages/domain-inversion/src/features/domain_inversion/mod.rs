//! Domain inversion
//!
//! A domain is a boolean filter over record fields, written as nested lists:
//!
//! ```text
//! [["x", "=", 3], ["OR", ["y", ">", 5], ["z", "in", [1, 2]]]]
//! ```
//!
//! Inverting it on one field yields what that field must still satisfy once
//! the known values of the other fields are taken into account.
//!
//! ## Architecture
//!
//! ```text
//! domain_inversion
//! ├── domain/              # Typed DSL (Domain, Leaf, Operator) and Inversion
//! ├── infrastructure/
//! │   ├── operators        # Operator table
//! │   ├── evaluator        # eval_leaf / eval_domain
//! │   ├── tree             # Parse tree with referenced variables
//! │   ├── inverter         # And/Or inversion
//! │   ├── normalize        # simplify / merge / concat / unique_value
//! │   ├── localize         # Relational and reference rewrites
//! │   └── codec            # JSON DSL
//! └── application/         # DomainUseCase
//! ```
//!
//! ## Usage
//!
//! ```
//! use domain_inversion::features::domain_inversion::{domain_inversion, Domain, Inversion};
//! use domain_inversion::shared::models::Context;
//!
//! let domain = Domain::and(vec![Domain::leaf("x", "=", 3), Domain::leaf("y", ">", 5)]);
//!
//! let context = Context::new().with("y", 4);
//! assert_eq!(domain_inversion(&domain, "x", &context), Inversion::Resolved(false));
//!
//! let context = Context::new().with("y", 6);
//! assert_eq!(
//!     domain_inversion(&domain, "x", &context),
//!     Inversion::Residual(Domain::and(vec![Domain::leaf("x", "=", 3)]))
//! );
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export application layer
pub use application::{DomainUseCase, DomainUseCaseImpl};

// Domain models
pub use domain::{base_name, BoolOp, Domain, Inversion, Leaf, Operator};

pub use infrastructure::{
    concat, constrained_leaf, domain_inversion, eval_domain, eval_domains, eval_leaf,
    extract_reference_models, filter_leaf, inverse_leaf, is_leaf, locale_part, localize_domain,
    merge, prepare_reference_domain, simplify, unique_value, DslCodec, Inverter,
};
