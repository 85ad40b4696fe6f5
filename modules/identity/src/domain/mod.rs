pub(crate) mod name;
pub mod resolver;
pub(crate) mod rules;
