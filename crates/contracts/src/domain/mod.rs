pub mod counterparty;
pub mod document;
pub mod inventory;
pub mod location;
pub mod nomenklatura;
