pub mod access;
pub mod auth;

#[cfg(test)]
mod test;
