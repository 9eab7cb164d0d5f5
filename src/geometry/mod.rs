pub(crate) mod flatten;
pub(crate) mod measure;
pub(crate) mod path;
