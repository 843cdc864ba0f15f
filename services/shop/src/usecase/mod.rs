pub mod account;
pub mod category;
pub mod gate;
pub mod sales;
