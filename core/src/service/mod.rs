pub mod calendar_parser;
pub mod dto;
pub mod stats_service;
