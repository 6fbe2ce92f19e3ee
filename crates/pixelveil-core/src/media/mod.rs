pub mod image;
mod types;

use std::path::Path;

pub use types::Carrier;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
