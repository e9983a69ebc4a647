pub use self::append::append;
pub use self::insert::insert;
pub use self::read::{read, read_silent};
pub use self::replace::replace;
pub use self::write::write;

mod append;
mod insert;
mod read;
mod replace;
mod write;
