use std::fmt;
use std::str::FromStr;

use super::engine::Engine;
use super::error::RuleError;
use super::node::Node;
use super::record::Record;

/// Rule text together with the tree compiled from it.
///
/// The text is what gets stored; the tree is rebuilt from it on load, so a
/// stored rule carries no format version of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    source: String,
    node: Node,
    engine: Engine,
}

impl Rule {
    pub(crate) fn new(source: String, node: Node, engine: Engine) -> Self {
        Self {
            source,
            node,
            engine,
        }
    }

    /// The text this rule was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn node(&self) -> &Node {
        &self.node
    }

    #[must_use]
    pub fn into_node(self) -> Node {
        self.node
    }

    /// Evaluate against a record with the options the rule was compiled with.
    ///
    /// # Errors
    ///
    /// See [`Engine::evaluate`].
    pub fn evaluate(&self, record: &Record) -> Result<bool, RuleError> {
        self.engine.evaluate(&self.node, record)
    }
}

impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Engine::default().compile(s)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
