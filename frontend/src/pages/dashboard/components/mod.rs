mod greeting;
mod shortcuts;

pub use greeting::GreetingBanner;
pub use shortcuts::ShortcutGrid;
