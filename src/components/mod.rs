//! UI Components
//!
//! One Leptos component per island, plus shared pieces.

mod code_input;
mod theme_toggle;
mod qr_card;
mod single_qr_generator;
mod batch_qr_generator;
mod pdf_download;

pub use code_input::CodeInput;
pub use theme_toggle::ThemeToggle;
pub use qr_card::QrCard;
pub use single_qr_generator::SingleQrGenerator;
pub use batch_qr_generator::BatchQrGenerator;
pub use pdf_download::PdfDownload;
