pub mod brand;
pub mod device;
