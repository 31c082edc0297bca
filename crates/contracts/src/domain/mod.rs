pub mod common;

pub mod a001_order;
pub mod a002_arrangement;
pub mod a003_billing;
pub mod a004_delivery;
pub mod a005_project;
