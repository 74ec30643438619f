mod row;
mod solidity;
mod value;

pub use row::*;
pub use solidity::*;
pub use value::*;
