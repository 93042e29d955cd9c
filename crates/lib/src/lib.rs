pub mod cli;
pub mod grid;
pub mod input;
mod macros;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::cli::Part;
    pub use anyhow::Result;
}
