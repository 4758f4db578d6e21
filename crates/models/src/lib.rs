pub mod errors;
pub mod db;
pub mod pricing;

#[cfg(test)]
mod tests;
