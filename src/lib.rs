#[macro_use]
pub mod rt;
pub mod value;
pub mod obj;
pub mod machine;
pub mod contract;
pub mod interpreter;

#[cfg(test)]
mod tests;

pub use rt::*;
pub use value::*;
pub use obj::*;
pub use machine::*;
pub use contract::*;
pub use interpreter::*;
