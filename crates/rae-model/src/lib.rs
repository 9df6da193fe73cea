pub mod error;
pub mod form;
pub mod options;
pub mod result;
pub mod term;

pub use error::*;
pub use form::*;
pub use options::*;
pub use result::*;
pub use term::*;
