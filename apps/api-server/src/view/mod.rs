//! HTML rendering for the scheduler page.

mod escape;
mod page;
mod timeline;

pub use page::render_index;
