// Infrastructure: evaluation, inversion, normalization and the JSON codec

pub mod codec;
pub mod evaluator;
pub mod inverter;
pub mod localize;
pub mod normalize;
pub mod operators;
pub mod tree;

pub use codec::{is_leaf, DslCodec};
pub use evaluator::{constrained_leaf, eval_domain, eval_domains, eval_leaf};
pub use inverter::{domain_inversion, Inverter};
pub use localize::{
    extract_reference_models, filter_leaf, inverse_leaf, locale_part, localize_domain,
    prepare_reference_domain,
};
pub use normalize::{concat, merge, simplify, unique_value};
pub use tree::{Branch, ExprTree};
