//! Output format implementations
//!
//! Each format wraps one render strategy (or, for PDF, the print format plus
//! a conversion backend) behind the [`OutputFormat`](crate::format::OutputFormat)
//! trait.

pub mod html;
pub mod menu;
#[cfg(feature = "native-export")]
pub mod pdf;
pub mod print;

pub use html::HtmlFormat;
pub use menu::MenuFormat;
#[cfg(feature = "native-export")]
pub use pdf::{ChromePdfBackend, PageSize, PdfBackend, PdfFormat};
pub use print::PrintFormat;
