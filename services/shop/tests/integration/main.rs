
mod account_test;
mod gate_test;
