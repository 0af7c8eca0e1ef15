

// Charge classes. Deducted before entering the callee body.

// function call
pub const COST_CALL: i64 = 50;
// contract call
pub const COST_CONTRACT: i64 = 100;
// extend (host) function call
pub const COST_EXTEND: i64 = 10;
// default budget of a top-level dispatch
pub const COST_DEFAULT: i64 = 10_000_000;
