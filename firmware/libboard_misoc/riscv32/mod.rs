pub mod boot;
pub mod cache;
pub mod irq;
