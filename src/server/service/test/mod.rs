mod membership;
mod task;
mod team;
mod user;
