pub mod hex_decoder;
