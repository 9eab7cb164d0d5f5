pub(crate) mod oklab;
pub(crate) mod palette;
pub(crate) mod rgba;
