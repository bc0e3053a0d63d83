pub mod catalog;
pub mod group;
pub mod member;
pub mod product;
