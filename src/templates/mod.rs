pub mod components;
pub mod layouts;
pub mod pages;

pub use components::Pager;
pub use layouts::desktop::desktop_layout;
