pub use super::donation_request::Entity as DonationRequest;
pub use super::funding::Entity as Funding;
pub use super::user::Entity as User;
