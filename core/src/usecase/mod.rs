pub mod analysis;
pub mod export;

#[cfg(test)]
mod analysis_test;
