pub(crate) mod blog_repository;
pub(crate) mod user_repository;
