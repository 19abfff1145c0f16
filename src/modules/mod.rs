pub mod access;
pub mod admin;
pub mod alerts;
pub mod comodato;
pub mod dashboard;
pub mod estoque;
pub mod movimentados;
