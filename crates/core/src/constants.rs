use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for reported metric values
pub const DECIMAL_PRECISION: u32 = 6;

/// Trading days per year assumed when annualizing daily statistics
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// Calendar days per year used for CAGR year counting
pub const DAYS_PER_YEAR: Decimal = dec!(365.25);

/// Guard value for divisions and near-zero comparisons
pub const EPSILON: Decimal = dec!(0.000000001);

/// Default annual risk-free rate
pub const DEFAULT_RISK_FREE_RATE: Decimal = Decimal::ZERO;

/// sqrt(252), used when the exact square root is unavailable
pub const SQRT_TRADING_DAYS_APPROX: Decimal = dec!(15.874507866);
