//! Domain inversion UseCase

use crate::config::{EngineConfig, Validatable};
use crate::errors::Result;
use crate::features::domain_inversion::domain::{Domain, Inversion};
use crate::features::domain_inversion::infrastructure::{eval_domain, DslCodec, Inverter};
use crate::shared::models::Context;
use tracing::debug;

/// Domain inversion UseCase Trait
pub trait DomainUseCase: Send + Sync {
    /// Residual constraint on `symbol` given the known `context`
    fn invert(&self, domain: &Domain, symbol: &str, context: &Context) -> Inversion;

    /// Evaluate `domain` against a fully-known `context`
    fn evaluate(&self, domain: &Domain, context: &Context) -> bool;

    /// Decode, invert and encode in one step
    fn invert_json(
        &self,
        domain: &serde_json::Value,
        symbol: &str,
        context: &serde_json::Value,
    ) -> Result<serde_json::Value>;
}

/// Domain inversion UseCase Implementation
#[derive(Debug, Clone)]
pub struct DomainUseCaseImpl {
    config: EngineConfig,
    codec: DslCodec,
    inverter: Inverter,
}

impl DomainUseCaseImpl {
    /// Build from a configuration, rejecting invalid ones
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            codec: DslCodec::from_config(&config),
            inverter: Inverter::new(&config),
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn codec(&self) -> &DslCodec {
        &self.codec
    }

    /// Decode a JSON domain with this engine's depth limit
    pub fn decode(&self, domain: &serde_json::Value) -> Result<Domain> {
        self.codec.decode(domain)
    }
}

impl Default for DomainUseCaseImpl {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            codec: DslCodec::from_config(&config),
            inverter: Inverter::new(&config),
            config,
        }
    }
}

impl DomainUseCase for DomainUseCaseImpl {
    fn invert(&self, domain: &Domain, symbol: &str, context: &Context) -> Inversion {
        self.inverter.invert(domain, symbol, context)
    }

    fn evaluate(&self, domain: &Domain, context: &Context) -> bool {
        eval_domain(domain, context)
    }

    fn invert_json(
        &self,
        domain: &serde_json::Value,
        symbol: &str,
        context: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        let domain = self.codec.decode(domain)?;
        let context = Context::from_json(context)?;
        let inversion = self.invert(&domain, symbol, &context);
        debug!(symbol, resolved = inversion.is_resolved(), "inverted domain");
        Ok(inversion.into())
    }
}
