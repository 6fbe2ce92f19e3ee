pub mod conceal;
pub mod reveal;
pub mod session;
