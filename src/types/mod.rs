mod engine;
mod error;
mod literal;
mod node;
mod op;
mod record;
mod rule;
mod value;

pub use engine::{Engine, MissingField, Options};
pub use error::RuleError;
pub use literal::{Literal, Range};
pub use node::{FieldCondition, Node, NodeKind, field};
pub use op::{Comparator, LogicalOp};
pub use record::Record;
pub use rule::Rule;
pub use value::Value;
