//! 页面

pub mod domains;
