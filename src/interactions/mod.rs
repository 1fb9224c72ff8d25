//! Host-independent interaction logic. Nothing in here touches `web_sys`;
//! the page is reached only through [`page::Page`].

pub mod controller;
pub mod markup;
pub mod modal;
pub mod overlay;
pub mod page;
pub mod scroll;
pub mod year;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::PageController;
