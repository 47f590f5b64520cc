pub mod modal_body;

pub use modal_body::{ModalBody, ModalBodyProps};
