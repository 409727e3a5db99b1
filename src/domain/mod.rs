pub mod classify;
pub mod comparison;
pub mod record;
