use crate::{config::Config, system::Hilbert};

use super::GenericContext;

/// A context which uses the [Hilbert] proof system.
pub type Context = GenericContext<Hilbert>;

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self::from_system(config, Hilbert::default())
    }
}
