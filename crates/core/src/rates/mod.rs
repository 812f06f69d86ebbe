// Module declarations
pub(crate) mod rate_engine;
pub(crate) mod rates_errors;
pub(crate) mod rates_model;
pub(crate) mod rates_service;
pub(crate) mod rates_traits;

// Re-export the public interface
pub use rate_engine::{
    house_buy_rate, house_sell_rate, convert_for_house_buy, convert_for_house_sell,
    public_house_buy_rate, public_house_sell_rate, round_amount, round_rate,
};
pub use rates_errors::RateError;
pub use rates_model::{NewRate, Rate, RateHistoryEntry, RateUpdate};
pub use rates_service::RateService;
pub use rates_traits::{RateRepositoryTrait, RateServiceTrait};
