pub mod about;
pub mod home;
pub mod product_demo;
pub mod simple;
