pub(crate) mod questions;
