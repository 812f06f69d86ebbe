/// Location id of the central vault. Terminals use their own ids.
pub const VAULT_LOCATION_ID: &str = "VAULT";

/// Decimal precision for presented exchange rates
pub const RATE_DISPLAY_PRECISION: u32 = 4;

/// Decimal precision for presented monetary amounts
pub const AMOUNT_DISPLAY_PRECISION: u32 = 2;

/// Decimal precision at which quote prices are stored
pub const PRICE_PRECISION: u32 = 10;

/// Settings key holding the base currency code
pub const BASE_CURRENCY_KEY: &str = "base_currency";
