//! Quiz rounds: pool selection and random unseen-question picking.

pub mod category;
pub mod selector;
