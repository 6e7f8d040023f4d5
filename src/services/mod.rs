pub mod load_test_service;
pub mod payload_service;
