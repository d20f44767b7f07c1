pub(crate) mod fix_copies;
