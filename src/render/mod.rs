pub(crate) mod cpu;
pub(crate) mod frame;
pub(crate) mod reveal;
pub(crate) mod surface;
