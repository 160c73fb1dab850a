pub(crate) mod offset;
pub(crate) mod source;
