//! Built-in browsers.

mod brave;
mod chrome;
mod edge;
mod firefox;
mod opera;

pub use brave::Brave;
pub use chrome::Chrome;
pub use edge::Edge;
pub use firefox::Firefox;
pub use opera::Opera;

use crate::targets::Browser;

/// Returns all built-in browsers.
pub fn all_browsers() -> Vec<Box<dyn Browser>> {
    vec![
        Box::new(Chrome),
        Box::new(Edge),
        Box::new(Firefox),
        Box::new(Opera),
        Box::new(Brave),
    ]
}
