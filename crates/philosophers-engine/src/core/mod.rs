pub use self::{board::*, cell::*, rule::*, rule_set::*};

pub(crate) mod board;
pub(crate) mod cell;
pub(crate) mod rule;
pub(crate) mod rule_set;
