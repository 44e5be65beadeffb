pub mod storage;
pub mod validation;
