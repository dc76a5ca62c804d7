pub mod errors;
pub mod db;
pub mod cheque;

#[cfg(test)]
mod tests;
