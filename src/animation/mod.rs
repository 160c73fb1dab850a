pub(crate) mod ease;
pub(crate) mod interp;
pub(crate) mod lerp;
pub(crate) mod looped;
pub(crate) mod spring;
pub(crate) mod value;
