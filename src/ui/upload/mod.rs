// SPDX-License-Identifier: MPL-2.0
//! Image selection, preview and upload.

mod preview;
mod selection;
mod submit;
pub mod view;

pub use preview::{PreviewSource, UploadPreviewController};
pub use selection::{SelectedFile, IMAGE_EXTENSIONS};
pub use submit::{UploadSubmitController, UploadTarget};
pub use view::Message as UploadMessage;
