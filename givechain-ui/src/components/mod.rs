//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod nav;
pub mod wallet_button;
pub mod donation_form;
pub mod donation_table;
pub mod stats_cards;
pub mod loading;
pub mod toast;

pub use nav::Nav;
pub use wallet_button::WalletButton;
pub use donation_form::DonationForm;
pub use donation_table::DonationTable;
pub use stats_cards::StatsCards;
pub use loading::Loading;
pub use toast::Toast;
