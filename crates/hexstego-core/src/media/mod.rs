mod carrier;
mod layout;

use std::path::Path;

pub use carrier::Carrier;
pub use layout::PixelLayout;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
