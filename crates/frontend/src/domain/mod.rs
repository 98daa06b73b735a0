pub mod counterparty;
pub mod document;
pub mod location;
pub mod nomenklatura;
