pub(crate) mod blog;
pub(crate) mod error;
pub(crate) mod list_helper;
pub(crate) mod user;
