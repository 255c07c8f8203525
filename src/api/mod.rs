pub mod traits;
pub mod woot;

pub use traits::DealSource;
pub use woot::WootClient;
