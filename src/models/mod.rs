pub mod qr_model;
