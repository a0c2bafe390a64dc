pub mod api_request;
pub mod api_response;
pub mod db;
pub mod dynamodb;
pub mod sqs;
pub mod ticket;
pub mod ticketsystem;
