pub mod export;
pub mod indexing;
pub mod links;
pub mod markdown;
pub mod page;
pub mod site_service;
