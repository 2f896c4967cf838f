pub mod draft;
pub mod event;
pub mod image;
pub mod store;

pub use draft::{DraftUpdate, EventDraft, TextField};
pub use event::Event;
pub use image::{ImageLoad, ImagePoll};
pub use store::Store;
