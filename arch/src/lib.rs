pub mod alu;
pub mod dest;
pub mod inst;
pub mod jump;
pub mod mem;
pub mod reg;
