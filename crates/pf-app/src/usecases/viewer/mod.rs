mod pdf_viewer_session;

pub use pdf_viewer_session::PdfViewerSession;
