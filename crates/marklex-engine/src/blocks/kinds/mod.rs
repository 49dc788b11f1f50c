pub mod block_quote;
pub mod code;
pub mod def;
pub mod heading;
pub mod list;
pub mod paragraph;

pub use block_quote::{BlockQuote, QuoteMatch};
pub use code::{CodeFence, IndentedCode};
pub use def::Definition;
pub use heading::{Heading, ThematicBreak};
pub use list::{ItemMatch, List, ListMatch, Marker};
pub use paragraph::{Paragraph, TextLine};
