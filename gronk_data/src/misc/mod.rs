pub(crate) mod parsing;
