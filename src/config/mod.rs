/*!
Configuration of a context.

All configuration for a context is contained within a [Config], and each configurable value is a [ConfigOption] recording the range of values permitted.

# Example

```rust
# use prop_proof::config::{Config, ProofMode};
# use prop_proof::structures::notation::Notation;
let mut config = Config::default();

assert!(config.notation.set(Notation::Postfix));
assert!(config.premises.set(2));
config.proof_mode.value = ProofMode::Optimize;

assert_eq!(config.notation.value, Notation::Postfix);
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod proof_mode;
pub use proof_mode::ProofMode;

use crate::structures::notation::Notation;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The notation formulas are read in.
    pub notation: ConfigOption<Notation>,

    /// Stop echoing or checking axioms at the first line which fails.
    ///
    /// A proof always stops at the first line which fails.
    pub strict: ConfigOption<bool>,

    /// The number of lines at the start of a proof which are premises, rather than steps of the proof.
    pub premises: ConfigOption<usize>,

    /// Whether to verify or optimize a proof.
    pub proof_mode: ConfigOption<ProofMode>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            notation: ConfigOption {
                name: "notation",
                min: Notation::MIN,
                max: Notation::MAX,
                value: Notation::Infix,
            },

            strict: ConfigOption {
                name: "strict",
                min: false,
                max: true,
                value: false,
            },

            premises: ConfigOption {
                name: "premises",
                min: 0,
                max: usize::MAX,
                value: 0,
            },

            proof_mode: ConfigOption {
                name: "proof_mode",
                min: ProofMode::MIN,
                max: ProofMode::MAX,
                value: ProofMode::Verify,
            },
        }
    }
}
