/// Number of fraction digits used when displaying balances
pub const PRECISION: usize = 2;
