// Module declarations
pub(crate) mod settings_service;
pub(crate) mod settings_traits;

// Re-export the public interface
pub use settings_service::SettingsService;
pub use settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
