pub mod dto;
pub mod error_mapper;
pub mod pages;
pub mod routes;
pub mod view;
