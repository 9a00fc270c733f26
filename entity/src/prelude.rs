pub use super::clan::Entity as Clan;
