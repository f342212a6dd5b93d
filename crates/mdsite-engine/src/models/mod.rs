pub mod page;

pub use page::SourcePage;
