pub(crate) mod animator;
pub(crate) mod channel;
pub(crate) mod style;
