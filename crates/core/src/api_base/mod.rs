//! Backend API base discovery

pub mod candidates;
pub mod resolver;

pub use candidates::{build_api_base_candidates, BaseOverrides, PageLocation};
pub use resolver::{join_url, ApiBaseResolver};
