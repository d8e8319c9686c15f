pub mod number;
pub mod wasm_logger;
