//! CLI command implementations.

pub(crate) mod convert;
pub(crate) mod package;

pub(crate) use convert::ConvertArgs;
pub(crate) use package::PackageArgs;
