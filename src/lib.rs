pub mod domain;
pub mod error;
pub mod image;
pub mod init;
pub mod solver;
pub mod stencil;
pub mod util;
