pub mod autolink;
pub mod code_span;
pub mod html;
pub mod link;

pub use autolink::Autolink;
pub use code_span::CodeSpan;
pub use html::RawHtml;
pub use link::{Link, LinkMatch, Reference};
