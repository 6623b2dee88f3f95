pub mod dto;
pub mod links;
pub mod routes;
pub mod routing;
pub mod types;
