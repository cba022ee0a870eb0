pub mod chat;
pub mod goal;
pub mod roadmap;
