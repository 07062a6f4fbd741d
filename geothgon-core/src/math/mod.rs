pub mod is_zero;
