pub mod request;

mod filter;

pub use request::SearchRequest;
