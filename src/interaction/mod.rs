pub(crate) mod chrome;
pub(crate) mod counter;
pub(crate) mod float;
pub(crate) mod form;
pub(crate) mod pointer;
pub(crate) mod preloader;
