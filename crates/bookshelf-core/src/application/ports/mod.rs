//! Application ports (traits) for external dependencies.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by the use case, implemented by adapters
//!   - `FindBookByTitleRepository`: title lookup
//!   - `AddBookRepository`: book persistence
//!
//! - **Driving (Input) Ports**: Called by the router, implemented by use cases
//!   - `CreateBook`

pub mod input;
pub mod output;

pub use input::CreateBook;
pub use output::{AddBookRepository, FindBookByTitleRepository};
