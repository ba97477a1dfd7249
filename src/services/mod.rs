pub(crate) mod scoring;
pub(crate) mod selection;
