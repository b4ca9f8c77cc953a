mod drawing_panel;
mod home_panel;
mod library_panel;
mod navigation;
mod saved_panel;

pub use drawing_panel::drawing_panel;
pub use home_panel::home_panel;
pub use library_panel::library_panel;
pub use navigation::navigation;
pub use saved_panel::saved_panel;
