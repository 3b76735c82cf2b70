mod encoding;
mod euro;
mod version;

pub use encoding::{Encoding, Unencodable};
pub use euro::Euro;
pub use version::{UnknownVersion, Version};
