mod chat;
mod membership;
mod message;
mod team;
mod user;
