pub mod qr_service;
pub mod s3_service;
